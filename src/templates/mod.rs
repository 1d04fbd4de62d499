pub mod viewer_template;

pub use viewer_template::ViewerTemplate;
