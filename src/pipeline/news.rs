use crate::api::{FeedResponse, FeedSource, NewsResult};
use crate::view::NewsView;

use super::render::render_news;
use super::FeedState;

pub const LOADING: &str = "Loading news...";
pub const TRANSPORT_FAILURE: &str = "An error occurred while fetching news.";

pub fn begin<V: NewsView + ?Sized>(view: &mut V) -> FeedState {
    view.set_loading(LOADING);
    FeedState::Loading
}

pub fn apply<V: NewsView + ?Sized>(result: NewsResult, view: &mut V) -> FeedState {
    match result {
        Ok(FeedResponse::Success(articles)) => {
            tracing::debug!(count = articles.len(), "rendering news");
            render_news(view, &articles);
            FeedState::Rendered
        }
        Ok(FeedResponse::Failure(message)) => {
            tracing::info!(%message, "news feed reported an error");
            view.set_message(&format!("Error: {}", message));
            FeedState::ErrorDisplayed
        }
        Err(e) => {
            tracing::error!(error = %e, "news fetch failed");
            view.set_message(TRANSPORT_FAILURE);
            FeedState::ErrorDisplayed
        }
    }
}

pub async fn load_news<F, V>(source: &F, view: &mut V) -> FeedState
where
    F: FeedSource + ?Sized,
    V: NewsView + ?Sized,
{
    begin(view);
    let result = source.fetch_news().await;
    apply(result, view)
}
