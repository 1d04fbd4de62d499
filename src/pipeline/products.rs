use crate::api::{FeedResponse, FeedSource, ProductsResult};
use crate::models::ProductQuery;
use crate::view::{StatusView, TableView};

use super::render::render_products;
use super::FeedState;

pub const LOADING: &str = "Loading...";
pub const TRANSPORT_FAILURE: &str = "An error occurred while fetching the data.";

pub fn begin<S: StatusView + ?Sized>(status: &mut S) -> FeedState {
    status.set_loading(LOADING);
    FeedState::Loading
}

/// Write a fetch result into the views. Errors never touch the table.
pub fn apply<T, S>(result: ProductsResult, table: &mut T, status: &mut S) -> FeedState
where
    T: TableView + ?Sized,
    S: StatusView + ?Sized,
{
    match result {
        Ok(FeedResponse::Success(products)) => {
            tracing::debug!(count = products.len(), "rendering products");
            render_products(table, &products);
            status.set_status("");
            FeedState::Rendered
        }
        Ok(FeedResponse::Failure(message)) => {
            tracing::info!(%message, "product feed reported an error");
            status.set_status(&format!("Error: {}", message));
            FeedState::ErrorDisplayed
        }
        Err(e) => {
            tracing::error!(error = %e, "product fetch failed");
            status.set_status(TRANSPORT_FAILURE);
            FeedState::ErrorDisplayed
        }
    }
}

/// One product invocation: loading, a single request, then render or report.
pub async fn load_products<F, T, S>(source: &F, query: &ProductQuery, table: &mut T, status: &mut S) -> FeedState
where
    F: FeedSource + ?Sized,
    T: TableView + ?Sized,
    S: StatusView + ?Sized,
{
    begin(status);
    let result = source.fetch_products(query).await;
    apply(result, table, status)
}
