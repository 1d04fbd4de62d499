use std::collections::HashMap;

use askama::Template;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::models::{AppState, ProductQuery, PRODUCT_COLUMNS};
use crate::templates::ViewerTemplate;

// Embed the default stylesheet in the binary
const DEFAULT_STYLESHEET: &str = include_str!("../../static/styles.css");

pub async fn viewer_get(State(state): State<AppState>) -> Response {
    let page = state.viewer.snapshot();
    let form = page
        .last_query
        .clone()
        .unwrap_or_else(|| ProductQuery::from_defaults(&state.defaults));
    let template = ViewerTemplate {
        page: &page,
        columns: &PRODUCT_COLUMNS,
        form: &form,
        backend_url: &state.feed_base_url,
    };
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(%e, "Failed to render viewer page");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

/// Collect the submitted inputs, start a product fetch and go straight back
/// to the page, which shows the loading state until the fetch lands.
pub async fn products_post(
    State(state): State<AppState>,
    Form(inputs): Form<HashMap<String, String>>,
) -> Redirect {
    let query = ProductQuery::collect(&inputs, &state.defaults);
    tracing::info!(page = %query.page, limit = %query.limit, language = %query.language, "product fetch requested");
    state.viewer.spawn_products(query);
    Redirect::to("/")
}

pub async fn news_post(State(state): State<AppState>) -> Redirect {
    state.viewer.spawn_news();
    Redirect::to("/")
}

pub async fn stylesheet_get(State(state): State<AppState>) -> impl IntoResponse {
    let css = state
        .custom_css
        .clone()
        .unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());
    ([(header::CONTENT_TYPE, "text/css")], css)
}
