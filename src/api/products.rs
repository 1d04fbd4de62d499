use reqwest::Method;

use super::client::FeedClient;
use super::envelope::{classify, FeedResponse};
use super::error::FetchError;
use crate::models::{ProductQuery, ProductRecord};

pub const PRODUCTS_ENDPOINT: &str = "/fetch_data";

/// POST the query form-encoded to the product endpoint.
/// The records come back in backend order.
pub async fn fetch_products(
    client: &FeedClient,
    query: &ProductQuery,
) -> Result<FeedResponse<Vec<ProductRecord>>, FetchError> {
    let fields = query.form_fields();
    let body = client.send(Method::POST, PRODUCTS_ENDPOINT, Some(&fields)).await?;
    classify(&body, "data")
}
