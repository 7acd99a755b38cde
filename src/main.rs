//! Mi Amigo Fiel HTTP server.

use amigo_fiel::{
    adoption::{
        adapters::{memory::InMemoryAdoptionRepository, postgres::PostgresAdoptionRepository},
        ports::AdoptionRepository,
    },
    config::AppConfig,
    db,
    http::{self, AppState, Backends},
    media::{
        adapters::{filesystem::FilesystemImageStore, memory::InMemoryImageStore},
        ports::ImageStore,
    },
    post::{
        adapters::{memory::InMemoryPostRepository, postgres::PostgresPostRepository},
        ports::PostRepository,
    },
    telemetry,
};
use std::{error::Error, sync::Arc};
use tokio::net::TcpListener;
use tracing::{info, warn};

const POOL_SIZE: u32 = 8;

type Repositories = (Arc<dyn PostRepository>, Arc<dyn AdoptionRepository>);

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    telemetry::init()?;
    let config = AppConfig::from_env()?;

    let (posts, adoptions) = repositories(&config).await?;
    let backends = Backends {
        posts,
        adoptions,
        images: image_store(&config)?,
    };
    let state = AppState::new(backends, &config)?;

    let listener = TcpListener::bind(config.bind).await?;
    http::serve(listener, state).await?;
    Ok(())
}

async fn repositories(config: &AppConfig) -> Result<Repositories, Box<dyn Error>> {
    let Some(database_url) = config.database_url.as_deref() else {
        warn!("DATABASE_URL unset; listings live in memory only");
        return Ok((
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(InMemoryAdoptionRepository::new()),
        ));
    };

    let pool = db::connect(database_url, POOL_SIZE)?;
    db::apply_schema(&pool).await?;
    info!("connected to PostgreSQL");
    Ok((
        Arc::new(PostgresPostRepository::new(pool.clone())),
        Arc::new(PostgresAdoptionRepository::new(pool)),
    ))
}

fn image_store(config: &AppConfig) -> Result<Arc<dyn ImageStore>, Box<dyn Error>> {
    let Some(media_dir) = config.media_dir.as_deref() else {
        warn!("media directory unset; photos live in memory only");
        return Ok(Arc::new(InMemoryImageStore::new(config.public_url.clone())));
    };
    let store = FilesystemImageStore::open(media_dir, config.public_url.clone())?;
    info!(path = %media_dir, "serving photos from disk");
    Ok(Arc::new(store))
}
