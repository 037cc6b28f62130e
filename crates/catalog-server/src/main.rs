use catalog_server::{CatalogServer, ServiceConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    eprintln!(
        r#"Catalog Server - product and category catalog with external feed enrichment

USAGE:
    catalog-server [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    HOST                Server host (default: 0.0.0.0)
    PORT                Server port (default: 8080)
    FEED_BASE_URL       External feed base URL (default: https://fakestoreapi.com)
    FEED_TIMEOUT_MS     External feed request timeout (default: 5000)
    SEED_DEMO_DATA      Create demo categories and products (default: true)
    RUST_LOG            Log level filter
    LOG_FORMAT          Set to "json" for JSON log lines

EXAMPLES:
    # Run with defaults
    catalog-server

    # Run with config file
    catalog-server --config catalog.json

    # Run on another port without demo data
    PORT=9000 SEED_DEMO_DATA=false catalog-server
"#
    );
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "catalog_server=info,catalog_feed=info,tower_http=debug".into());

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = match config_path {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            ServiceConfig::from_file(&path)?
        }
        None => {
            tracing::info!("Using default configuration");
            ServiceConfig::default()
        }
    }
    .with_env_overrides()?;
    config.validate()?;

    tracing::info!("External feed: {}", config.feed.base_url);

    let server = CatalogServer::new(config)?;
    server.seed().await?;

    tracing::info!("Starting Catalog Server");
    tracing::info!("Available endpoints:");
    tracing::info!("  GET    /api/products?refresh=true|false");
    tracing::info!("  POST   /api/products");
    tracing::info!("  GET    /api/products/{{id}}");
    tracing::info!("  PUT    /api/products/{{id}}");
    tracing::info!("  DELETE /api/products/{{id}}");
    tracing::info!("  GET    /api/products/search?name=");
    tracing::info!("  GET    /api/products/cheaper-than?price=");
    tracing::info!("  GET    /api/products/in-stock");
    tracing::info!("  GET    /api/products/by-category/{{id}}");
    tracing::info!("  POST   /api/products/sync-with-external-feed");
    tracing::info!("  GET    /api/categories");
    tracing::info!("  POST   /api/categories");
    tracing::info!("  GET    /api/categories/{{id}}");
    tracing::info!("  PUT    /api/categories/{{id}}");
    tracing::info!("  DELETE /api/categories/{{id}}");
    tracing::info!("  GET    /api/categories/by-name/{{name}}");

    server.run().await
}
