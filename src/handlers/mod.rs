pub mod viewer;

pub use viewer::{news_post, products_post, stylesheet_get, viewer_get};
