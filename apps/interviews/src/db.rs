use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tracing::info;

use crate::config::Config;

/// Creates `interview_data` for database tests. The server never migrates;
/// operators apply `migrations/` themselves.
#[cfg(test)]
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Builds the PostgreSQL pool without connecting.
/// Connections are opened on first use, so the server starts even when the
/// database is unreachable and the read path degrades instead.
pub fn create_pool(config: &Config) -> PgPool {
    let options = PgConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .database(&config.db_name)
        .username(&config.db_user)
        .password(&config.db_password);

    info!(
        "PostgreSQL pool configured for {}:{}/{} (max {} connections)",
        config.db_host, config.db_port, config.db_name, config.db_max_connections
    );

    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_lazy_with(options)
}
