use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

pub type DatabasePool = Arc<PgPool>;

/// Open the Postgres pool backing `PgStore`. TLS follows `sslmode` in the URL.
pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<DatabasePool> {
    let target = connection_target(database_url);

    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
        .with_context(|| format!("failed to connect to Postgres at {}", target))?;

    tracing::info!(db = %target, max_connections, "Postgres pool ready");
    if !database_url.contains("sslmode=") && !is_local(&target) {
        tracing::warn!(db = %target, "Remote Postgres without sslmode; add sslmode=require");
    }

    Ok(Arc::new(pool))
}

/// `host[:port]/db` part of a connection URL, without credentials.
fn connection_target(database_url: &str) -> &str {
    let rest = database_url
        .split_once("://")
        .map_or(database_url, |(_, rest)| rest);
    let rest = rest.rsplit_once('@').map_or(rest, |(_, host)| host);
    rest.split('?').next().unwrap_or(rest)
}

fn is_local(target: &str) -> bool {
    target.starts_with("localhost") || target.starts_with("127.0.0.1")
}
