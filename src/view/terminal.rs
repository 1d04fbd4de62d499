use std::time::Duration;

use comfy_table::{modifiers, presets, ContentArrangement, Table};
use indicatif::{ProgressBar, ProgressStyle};
use terminal_size::{terminal_size, Width};

use super::{NewsContainer, NewsNode, NewsView, StatusView, TableBody};
use crate::models::PRODUCT_COLUMNS;

fn start_spinner(text: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(text.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

fn stop_spinner(spinner: &mut Option<ProgressBar>) {
    if let Some(s) = spinner.take() {
        s.finish_and_clear();
    }
}

/// Status line on stderr; loading shows a spinner until the next update.
#[derive(Default)]
pub struct TerminalStatus {
    spinner: Option<ProgressBar>,
    text: String,
}

impl TerminalStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl StatusView for TerminalStatus {
    fn set_status(&mut self, text: &str) {
        stop_spinner(&mut self.spinner);
        self.text = text.to_string();
        if !text.is_empty() {
            eprintln!("{}", yansi::Paint::red(text));
        }
    }

    fn set_loading(&mut self, text: &str) {
        stop_spinner(&mut self.spinner);
        self.text = text.to_string();
        self.spinner = Some(start_spinner(text));
    }
}

impl Drop for TerminalStatus {
    fn drop(&mut self) {
        stop_spinner(&mut self.spinner);
    }
}

/// News container that shows a spinner while loading.
#[derive(Default)]
pub struct TerminalNews {
    spinner: Option<ProgressBar>,
    container: NewsContainer,
}

impl TerminalNews {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn container(&self) -> &NewsContainer {
        &self.container
    }
}

impl NewsView for TerminalNews {
    fn set_message(&mut self, text: &str) {
        stop_spinner(&mut self.spinner);
        self.container.set_message(text);
    }

    fn set_loading(&mut self, text: &str) {
        stop_spinner(&mut self.spinner);
        self.container.set_message(text);
        self.spinner = Some(start_spinner(text));
    }

    fn clear(&mut self) {
        stop_spinner(&mut self.spinner);
        NewsView::clear(&mut self.container);
    }

    fn append_article(&mut self, title: &str, description: &str) {
        self.container.append_article(title, description);
    }
}

impl Drop for TerminalNews {
    fn drop(&mut self) {
        stop_spinner(&mut self.spinner);
    }
}

/// Build the product table with all 18 columns.
pub fn product_table(body: &TableBody) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table.set_header(PRODUCT_COLUMNS.iter().map(|c| c.label));
    for row in body.rows() {
        table.add_row(row.cells.iter());
    }
    table
}

pub fn print_table(body: &TableBody) {
    if body.is_empty() {
        println!("(no products)");
        return;
    }
    println!("\n{}\n", product_table(body));
}

pub fn print_news(container: &NewsContainer) {
    for node in container.nodes() {
        match node {
            NewsNode::Message(text) => println!("{}", text),
            NewsNode::Article(card) => {
                println!("{}", yansi::Paint::new(&card.title).bold());
                println!("  {}\n", yansi::Paint::new(&card.description).dim());
            }
        }
    }
}
