//! Karaoke - A song lyrics album served to the local browser
//!
//! Bundled songs are merged with the ones added locally, sorted with pt-BR
//! collation and rendered as a home index or a single song page.

mod api;
mod config;
mod core;
mod db;
mod error;
mod models;
mod render;
mod stores;
mod utils;

use anyhow::Result;
use clap::Parser;
use parking_lot::Mutex;
use std::path::PathBuf;
use tracing::info;

/// Karaoke - Lyrics album
#[derive(Parser, Debug)]
#[command(name = "karaoke")]
#[command(version = "1.0.0")]
#[command(about = "A lyrics album for karaoke nights")]
struct Args {
    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 8470)]
    port: u16,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,

    /// Path to config directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to a songs.json replacing the bundled dataset
    #[arg(long)]
    dataset: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    info!("Karaoke v1.0.0 starting...");

    let paths = config::Paths::init(args.config)?;
    info!("Config directory: {:?}", paths.config_dir());

    let controller = build_controller(args.dataset)?;
    start_server(args.host, args.port, controller).await
}

/// Load configuration, the dataset and local storage into one controller
fn build_controller(dataset: Option<PathBuf>) -> Result<core::Controller> {
    use crate::config::{Paths, UserConfig};
    use crate::db::{FileStore, LocalPersistence};
    use crate::stores::SongStore;

    let config = UserConfig::load()?;
    let dataset = dataset.or_else(|| config.dataset());
    match &dataset {
        Some(path) => info!("Dataset: {:?}", path),
        None => info!("Dataset: bundled"),
    }
    let embedded = core::dataset::load_embedded(dataset.as_deref());

    let storage_path = Paths::get()?.storage_path();
    info!("Local storage: {:?}", storage_path);
    let persistence = LocalPersistence::new(FileStore::open(storage_path)?);

    let controller = core::Controller::new(
        embedded,
        persistence,
        SongStore::default(),
        config.engine_options(),
    );
    info!("Loaded {} songs", controller.store().count());

    Ok(controller)
}

async fn start_server(host: String, port: u16, controller: core::Controller) -> Result<()> {
    use actix_cors::Cors;
    use actix_web::{middleware, web, App, HttpServer};

    let controller = web::Data::new(Mutex::new(controller));

    let addr = format!("{}:{}", host, port);
    info!("Server listening on http://{}", addr);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(controller.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(api::configure)
    })
    .bind(addr)?
    .run()
    .await?;

    Ok(())
}
