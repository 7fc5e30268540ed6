use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use hyperfleet_config::load_core_config;
use hyperfleet_store::{InMemoryStore, PostgresStore, ResourceStore};
use uuid::Uuid;

pub async fn serve(
    bind: String,
    port: u16,
    database_url: Option<String>,
    config: PathBuf,
    auth_token: Option<String>,
    rotate_token: bool,
) -> Result<()> {
    let core_config = Arc::new(
        load_core_config(&config).with_context(|| format!("failed to load config from {}", config.display()))?,
    );

    let token_path = default_token_path();
    let token = if rotate_token {
        let t = generate_token();
        write_token(&token_path, &t)?;
        println!("Rotated token (written to {})", token_path.display());
        t
    } else if let Some(t) = auth_token {
        t
    } else if let Ok(existing) = std::fs::read_to_string(&token_path).map(|s| s.trim().to_string()) {
        if existing.is_empty() {
            let t = generate_token();
            write_token(&token_path, &t)?;
            println!("Generated new token (written to {})", token_path.display());
            t
        } else {
            println!("Reusing existing token from {}", token_path.display());
            existing
        }
    } else {
        let t = generate_token();
        write_token(&token_path, &t)?;
        println!("Generated new token (written to {})", token_path.display());
        t
    };

    let store: Arc<dyn ResourceStore> = match database_url {
        Some(url) => {
            println!("Connecting to Postgres…");
            Arc::new(PostgresStore::connect(&url).await.context("failed to connect to Postgres")?)
        }
        None => {
            println!("No --database-url given, using an in-memory store (not persisted across restarts)");
            Arc::new(InMemoryStore::new())
        }
    };

    let addr = format!("{bind}:{port}");
    println!("Starting HyperFleet API server on http://{addr}");

    let app = hyperfleet_api::build_app(store, core_config, Arc::new(token));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn generate_token() -> String {
    let a = Uuid::new_v4().to_string().replace('-', "");
    let b = Uuid::new_v4().to_string().replace('-', "");
    format!("{}{}", a, b)
}

/// Write the token to the token file with owner-only permissions.
fn write_token(path: &PathBuf, token: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, token)
        .with_context(|| format!("failed to write token to {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
            .with_context(|| format!("failed to set permissions on {}", path.display()))?;
    }

    Ok(())
}

fn default_token_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".hyperfleet").join("token")
}
