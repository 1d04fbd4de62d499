use askama::Template;

use crate::models::{ProductColumn, ProductQuery};
use crate::pipeline::FeedState;
use crate::view::NewsNode;
use crate::view::ViewerPage;

#[derive(Template)]
#[template(path = "viewer.html")]
pub struct ViewerTemplate<'a> {
    pub page: &'a ViewerPage,
    pub columns: &'a [ProductColumn],
    pub form: &'a ProductQuery,
    pub backend_url: &'a str,
}

impl ViewerTemplate<'_> {
    /// While a feed is loading the page reloads itself to pick up the result.
    pub fn is_loading(&self) -> bool {
        self.page.products_state == FeedState::Loading || self.page.news_state == FeedState::Loading
    }

    pub fn brand(&self) -> &str {
        self.form.brand.as_deref().unwrap_or("")
    }

    pub fn product_name(&self) -> &str {
        self.form.product_name.as_deref().unwrap_or("")
    }

    pub fn category(&self) -> &str {
        self.form.category.as_deref().unwrap_or("")
    }
}
