use crate::models::QueryDefaults;
use crate::pipeline::SharedViewer;

#[derive(Clone)]
pub struct AppState {
    pub viewer: SharedViewer,
    pub defaults: QueryDefaults,
    pub feed_base_url: String,
    pub custom_css: Option<String>,
}
