use clap::{Parser, Subcommand};
use orderdesk::cli::{self, OutputMode};
use orderdesk::connection::{self, ConnectionManager};
use orderdesk::document::{OrderRecord, Price};
use orderdesk::intent::Intent;
use orderdesk::server::{AppState, create_router};
use serde::{Deserialize, Serialize};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

const DEFAULT_URI: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE: &str = "auction";
const DEFAULT_COLLECTION: &str = "orders";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct AppConfig {
    mongo_uri: Option<String>,
    database: Option<String>,
    collection: Option<String>,
    port: Option<u16>,
    log_config: Option<PathBuf>,
}

fn load_config(cli_cfg: Option<PathBuf>) -> AppConfig {
    // Precedence: CLI > env > config files > defaults
    let mut cfg = AppConfig::default();
    let mut paths: Vec<PathBuf> = vec![];
    if let Some(p) = &cli_cfg {
        paths.push(p.clone());
    }
    if let Ok(p) = std::env::var("ORDERDESK_CONFIG") {
        paths.push(PathBuf::from(p));
    }
    if let Ok(home) = std::env::var("USERPROFILE").or_else(|_| std::env::var("HOME")) {
        let home_pb = PathBuf::from(home);
        paths.push(home_pb.join(".orderdeskrc"));
        paths.push(home_pb.join(".config").join("orderdesk.toml"));
    }
    if let Ok(cur) = std::env::current_dir() {
        paths.push(cur.join("orderdesk.toml"));
    }
    for p in paths {
        if p.exists() {
            if let Ok(s) = std::fs::read_to_string(&p) {
                if let Ok(file_cfg) = toml::from_str::<AppConfig>(&s) {
                    if cfg.mongo_uri.is_none() {
                        cfg.mongo_uri = file_cfg.mongo_uri;
                    }
                    if cfg.database.is_none() {
                        cfg.database = file_cfg.database;
                    }
                    if cfg.collection.is_none() {
                        cfg.collection = file_cfg.collection;
                    }
                    if cfg.port.is_none() {
                        cfg.port = file_cfg.port;
                    }
                    if cfg.log_config.is_none() {
                        cfg.log_config = file_cfg.log_config;
                    }
                }
            }
        }
    }
    if let Ok(s) = std::env::var("MONGO_URI") {
        cfg.mongo_uri = Some(s);
    }
    if let Ok(s) = std::env::var("ORDERDESK_DB") {
        cfg.database = Some(s);
    }
    if let Ok(s) = std::env::var("ORDERDESK_COLLECTION") {
        cfg.collection = Some(s);
    }
    if let Ok(s) = std::env::var("PORT") {
        if let Ok(port) = s.parse() {
            cfg.port = Some(port);
        }
    }
    if let Ok(s) = std::env::var("ORDERDESK_LOG_CONFIG") {
        cfg.log_config = Some(PathBuf::from(s));
    }
    cfg
}

#[derive(Parser, Debug)]
#[command(name = "orderdesk", version, about = "MongoDB order-catalog administration", long_about = None)]
struct Cli {
    /// Path to a config file (TOML). If omitted, defaults are used.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the MongoDB connection URI (takes precedence over config/env).
    #[arg(long)]
    uri: Option<String>,
    /// Database holding the order collection.
    #[arg(long)]
    database: Option<String>,
    /// Collection holding the order records.
    #[arg(long)]
    collection: Option<String>,
    /// Emit machine-readable JSON lines instead of human-readable messages.
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Insert a single order")]
    Insert {
        #[arg(long, help = "Title of the order")]
        title: String,
        #[arg(long, help = "Description of the order")]
        description: String,
        #[arg(long = "start-price", help = "Start price, numeric or free-form text")]
        start_price: Price,
        #[arg(long = "reserve-price", help = "Reserve price, numeric or free-form text")]
        reserve_price: Price,
    },
    #[command(about = "Find the first order with the given title")]
    Find {
        #[arg(help = "Title of the order to search")]
        title: String,
    },
    #[command(about = "List every order in the collection")]
    List,
    #[command(about = "Delete the first order with the given title")]
    Delete {
        #[arg(help = "Title of the order to delete")]
        title: String,
    },
    #[command(name = "delete-all", about = "Delete every order in the collection")]
    DeleteAll {
        #[arg(long, help = "Skip the interactive confirmation prompt")]
        yes: bool,
    },
    #[command(about = "Seed the collection from a JSON array file")]
    Seed {
        #[arg(help = "Path to the JSON seed file")]
        file: PathBuf,
    },
    #[command(about = "Serve the read-only order search API")]
    Serve {
        #[arg(long, help = "Port to listen on (overrides config/PORT)")]
        port: Option<u16>,
    },
}

fn confirm_delete_all() -> bool {
    print!("Are you sure you want to delete all orders from this collection? [y/N]: ");
    let _ = io::stdout().flush();
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return false;
    }
    let input = input.trim().to_lowercase();
    input == "y" || input == "yes"
}

fn build_intent(command: Commands, database: &str, collection: &str) -> Intent {
    let database = database.to_string();
    let collection = collection.to_string();
    match command {
        Commands::Insert { title, description, start_price, reserve_price } => Intent::Insert {
            database,
            collection,
            record: OrderRecord::new(title, description, start_price, reserve_price),
        },
        Commands::Find { title } => Intent::Find { database, collection, title },
        Commands::List => Intent::List { database, collection },
        Commands::Delete { title } => Intent::Delete { database, collection, title },
        Commands::DeleteAll { yes } => {
            let confirmed = yes || (io::stdin().is_terminal() && confirm_delete_all());
            Intent::DeleteAll { database, collection, confirmed }
        }
        Commands::Seed { file } => Intent::Seed { database, collection, file },
        Commands::Serve { .. } => unreachable!("serve is handled before intent dispatch"),
    }
}

async fn serve(conn: Arc<ConnectionManager>, database: String, collection: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState { conn, database, collection };
    let app = create_router(state);
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    log::info!("Server is running on port {port}");
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let cfg = load_config(cli.config.clone());

    let log_result = match &cfg.log_config {
        Some(path) => orderdesk::logger::init_path(path),
        None => orderdesk::logger::init(),
    };
    if let Err(e) = log_result {
        eprintln!("Failed to initialize logging: {e}");
    }

    let uri = cli
        .uri
        .clone()
        .or(cfg.mongo_uri.clone())
        .unwrap_or_else(|| DEFAULT_URI.to_string());
    let database = cli
        .database
        .clone()
        .or(cfg.database.clone())
        .unwrap_or_else(|| DEFAULT_DATABASE.to_string());
    let collection = cli
        .collection
        .clone()
        .or(cfg.collection.clone())
        .unwrap_or_else(|| DEFAULT_COLLECTION.to_string());
    let mode = if cli.json { OutputMode::Json } else { OutputMode::Human };

    // A failed startup ping is the one fault that terminates the whole run.
    if let Err(e) = connection::ping(&uri).await {
        log::error!("MongoDB connection error: {e}");
        eprintln!("MongoDB connection error: {e}");
        std::process::exit(1);
    }

    let conn = Arc::new(ConnectionManager::new(uri));

    let result = match cli.command {
        Commands::Serve { port } => {
            let port = port.or(cfg.port).unwrap_or(DEFAULT_PORT);
            serve(conn, database, collection, port).await
        }
        command => {
            let intent = build_intent(command, &database, &collection);
            cli::run(&conn, intent, mode).await.map_err(Into::into)
        }
    };

    if let Err(e) = result {
        log::error!("operation failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
