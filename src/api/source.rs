use async_trait::async_trait;

use super::client::FeedClient;
use super::envelope::FeedResponse;
use super::error::FetchError;
use super::{news, products};
use crate::models::{ArticleRecord, ProductQuery, ProductRecord};

pub type ProductsResult = Result<FeedResponse<Vec<ProductRecord>>, FetchError>;
pub type NewsResult = Result<FeedResponse<Vec<ArticleRecord>>, FetchError>;

/// Where the pipelines get their data from.
#[async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_products(&self, query: &ProductQuery) -> ProductsResult;

    async fn fetch_news(&self) -> NewsResult;
}

#[async_trait]
impl FeedSource for FeedClient {
    async fn fetch_products(&self, query: &ProductQuery) -> ProductsResult {
        products::fetch_products(self, query).await
    }

    async fn fetch_news(&self) -> NewsResult {
        news::fetch_news(self).await
    }
}
