use std::net::SocketAddr;
use std::process;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use nutriview::api::{self, FeedClient, FeedSource};
use nutriview::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use nutriview::models::{AppState, FormInputs, InputField, ProductQuery};
use nutriview::pipeline::{self, FeedState, SharedViewer};
use nutriview::routes::build_router;
use nutriview::view::terminal::{print_news, print_table, TerminalNews, TerminalStatus};
use nutriview::view::TableBody;

fn build_client(env_file: Option<&str>) -> FeedClient {
    config::load_env_file(env_file);
    match FeedClient::new(config::get_feed_base_url(), config::get_request_timeout()) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(%e, "Failed to create HTTP client");
            eprintln!("{}: {}", yansi::Paint::red("Failed to create HTTP client"), e);
            process::exit(1);
        }
    }
}

async fn start_server(client: FeedClient, host: &str, port: u16, stylesheet: Option<String>) {
    let mut custom_css = None;
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!("{} {}: {}", yansi::Paint::red("Failed to read custom stylesheet at"), path, e);
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", yansi::Paint::red("Invalid host/port format"), e);
            process::exit(1);
        }
    };

    let feed_base_url = client.base_url().to_string();
    let source: Arc<dyn FeedSource> = Arc::new(client);
    let state = AppState {
        viewer: SharedViewer::new(source),
        defaults: config::query_defaults(),
        feed_base_url,
        custom_css,
    };
    // News loads once when the page comes up
    state.viewer.spawn_news();

    let app = build_router(state);
    tracing::info!(%addr, "Starting Nutriview server");
    println!("{} {}", yansi::Paint::new("Web server running on").green(), yansi::Paint::new(format!("http://{}", addr)).cyan());
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", yansi::Paint::new("Server error").red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!("{}: {}\n{}", yansi::Paint::new(format!("Failed to bind to {}", addr)).red(), e, yansi::Paint::new("Please stop any process using this port, or start the server with a different --port value.").yellow());
            process::exit(1);
        }
    }
}

#[derive(Parser)]
#[command(
    name = "nutriview",
    author,
    version,
    about = "Nutriview product and news viewer",
    long_about = r#"Nutriview fetches paginated product records and news articles from a feed backend and shows them as a web page or in the terminal.

Point it at the backend with FEED_BASE_URL (or an --env-file).

Examples:
  1) Serve the viewer page:
      nutriview serve --port 8080
  2) Print one page of products:
      nutriview products --page 2 --limit 20 --language fr
  3) Print the news:
      nutriview news
"#,
    after_help = "Use `nutriview <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web viewer
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Fetch one page of products and print it as a table
    Products(ProductArgs),
    /// Fetch the news and print the articles
    News {
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
    /// Show the resolved configuration and probe the backend
    #[command(about = "Validate configuration and ensure backend connectivity.", long_about = "Print the feed backend URL and query defaults, then fetch the news feed once to confirm the backend answers with a readable envelope.")]
    CheckConfig {
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
    },
}

#[derive(Args)]
struct ProductArgs {
    /// Page number (passed through as-is)
    #[arg(long)]
    page: Option<String>,
    /// Page size (passed through as-is)
    #[arg(long)]
    limit: Option<String>,
    /// Language code, defaults to FEED_DEFAULT_LANGUAGE or "en"
    #[arg(long)]
    language: Option<String>,
    /// Only products whose brand contains this text
    #[arg(long)]
    brand: Option<String>,
    /// Only products whose name contains this text
    #[arg(long)]
    product_name: Option<String>,
    /// Only products in this category
    #[arg(long)]
    category: Option<String>,
    /// Path to .env file
    #[arg(long)]
    env_file: Option<String>,
}

impl FormInputs for ProductArgs {
    fn value(&self, field: InputField) -> Option<String> {
        match field {
            InputField::Page => self.page.clone(),
            InputField::Limit => self.limit.clone(),
            InputField::Language => self.language.clone(),
            InputField::Brand => self.brand.clone(),
            InputField::ProductName => self.product_name.clone(),
            InputField::Category => self.category.clone(),
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        api::set_silent(true);
    }

    match cli.command {
        Commands::Serve { host, port, env_file, stylesheet } => {
            let client = build_client(env_file.as_deref());
            start_server(client, &host, port, stylesheet).await;
        }
        Commands::Products(args) => {
            let client = build_client(args.env_file.as_deref());
            let query = ProductQuery::collect(&args, &config::query_defaults());
            let mut table = TableBody::default();
            let mut status = TerminalStatus::new();
            let state = pipeline::products::load_products(&client, &query, &mut table, &mut status).await;
            if state != FeedState::Rendered {
                process::exit(1);
            }
            print_table(&table);
            println!(
                "{}",
                yansi::Paint::new(format!(
                    "Page {} | {} products (limit {}, language {})",
                    query.page,
                    table.row_count(),
                    query.limit,
                    query.language
                ))
                .dim()
            );
        }
        Commands::News { env_file } => {
            let client = build_client(env_file.as_deref());
            let mut news = TerminalNews::new();
            let state = pipeline::news::load_news(&client, &mut news).await;
            print_news(news.container());
            if state != FeedState::Rendered {
                process::exit(1);
            }
        }
        Commands::CheckConfig { env_file } => {
            let client = build_client(env_file.as_deref());
            let defaults = config::query_defaults();
            println!("{} {}", yansi::Paint::new("Feed backend:").bold(), client.base_url());
            println!(
                "{} page={} limit={} language={}",
                yansi::Paint::new("Query defaults:").bold(),
                defaults.page,
                defaults.limit,
                defaults.language
            );
            match config::get_request_timeout() {
                Some(t) => println!("{} {}s", yansi::Paint::new("Request timeout:").bold(), t.as_secs()),
                None => println!("{} none", yansi::Paint::new("Request timeout:").bold()),
            }
            match client.fetch_news().await {
                Ok(api::FeedResponse::Success(articles)) => {
                    println!("{} ({} articles)", yansi::Paint::new("Backend reachable").green(), articles.len());
                }
                Ok(api::FeedResponse::Failure(message)) => {
                    println!("{}: {}", yansi::Paint::new("Backend reachable but reported an error").yellow(), message);
                }
                Err(e) => {
                    eprintln!("{}: {}", yansi::Paint::new("Backend check failed").red(), e);
                    process::exit(1);
                }
            }
        }
    }
}
