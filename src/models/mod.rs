pub mod app_state;
pub mod article_record;
pub mod product_query;
pub mod product_record;

pub use app_state::AppState;
pub use article_record::{ArticleRecord, NO_DESCRIPTION};
pub use product_query::{FormInputs, InputField, ProductQuery, QueryDefaults};
pub use product_record::{ProductColumn, ProductRecord, PRODUCT_COLUMNS};
