use crate::models::{ArticleRecord, ProductRecord};
use crate::view::{NewsView, TableView};

/// Replace the table body with one row per record, in input order.
pub fn render_products<T: TableView + ?Sized>(table: &mut T, products: &[ProductRecord]) {
    table.clear_rows();
    for product in products {
        table.append_row(product.cells());
    }
}

/// Replace the container content with one card per article.
pub fn render_news<V: NewsView + ?Sized>(view: &mut V, articles: &[ArticleRecord]) {
    view.clear();
    for article in articles {
        view.append_article(article.title_text(), article.description_text());
    }
}
