/// Catalog Server - genre pages of the library catalog
use catalog_core::{CatalogStore, CreateBook, GenreId};
use catalog_server::{config::ServerConfig, create_router, state::AppState};
use catalog_storage::SqliteCatalog;
use clap::{Parser, Subcommand};
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "catalog-server")]
#[command(about = "Library catalog genre server", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "CATALOG_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// List all genres
    ListGenres,
    /// File a book under an existing genre
    AddBook {
        /// Book title
        #[arg(short, long)]
        title: String,
        /// Short summary
        #[arg(short, long, default_value = "")]
        summary: String,
        /// Genre identifier
        #[arg(short, long)]
        genre: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ServerConfig::load_from(path)?,
        None => ServerConfig::load()?,
    };
    config.validate()?;

    match cli.command {
        Commands::Serve => {
            serve(&config).await?;
        }
        Commands::ListGenres => {
            list_genres(&config).await?;
        }
        Commands::AddBook {
            title,
            summary,
            genre,
        } => {
            add_book(&config, title, summary, genre).await?;
        }
    }

    Ok(())
}

async fn open_store(config: &ServerConfig) -> anyhow::Result<SqliteCatalog> {
    let pool = catalog_storage::create_pool(&config.storage.database_url).await?;
    catalog_storage::run_migrations(&pool).await?;
    Ok(SqliteCatalog::new(pool))
}

async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Catalog Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let store = Arc::new(open_store(config).await?);
    tracing::info!("Database connected");

    let app = create_router(AppState::new(store));

    let addr = config.listen_addr()?;
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn list_genres(config: &ServerConfig) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let genres = store.list_genres().await?;

    println!("Genres:");
    for genre in genres {
        println!("  {} - {}", genre.id, genre.name);
    }

    Ok(())
}

async fn add_book(
    config: &ServerConfig,
    title: String,
    summary: String,
    genre: String,
) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let book = store
        .create_book(CreateBook {
            title,
            summary,
            genre_id: GenreId::new(genre),
        })
        .await?;

    tracing::info!(book_id = %book.id, genre_id = %book.genre_id, "Created book");
    println!("{}\t{}", book.id, book.url());

    Ok(())
}
