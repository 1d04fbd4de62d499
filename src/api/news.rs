use reqwest::Method;

use super::client::FeedClient;
use super::envelope::{classify, FeedResponse};
use super::error::FetchError;
use crate::models::ArticleRecord;

pub const NEWS_ENDPOINT: &str = "/fetch_news";

pub async fn fetch_news(client: &FeedClient) -> Result<FeedResponse<Vec<ArticleRecord>>, FetchError> {
    let body = client.send(Method::GET, NEWS_ENDPOINT, None).await?;
    classify(&body, "articles")
}
