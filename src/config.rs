// src/config.rs

use std::{env, sync::Arc, time::Duration};

use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::{
    db::{DiscountRepository, OverrideRepository, PgRateSource, RoomRepository},
    services::{DiscountService, PricingService, RoomService},
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 3;

// Configuração lida das variáveis de ambiente (.env é opcional)
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {raw}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let acquire_timeout_secs = match lookup("DATABASE_ACQUIRE_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("DATABASE_ACQUIRE_TIMEOUT_SECS is not a number: {raw}"))?,
            None => DEFAULT_ACQUIRE_TIMEOUT_SECS,
        };

        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout_secs),
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub room_service: RoomService,
    pub discount_service: DiscountService,
    pub pricing_service: PricingService,
}

impl AppState {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let db_pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(&config.database_url)
            .await
            .context("Failed to connect to the database")?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::from_pool(db_pool))
    }

    pub fn from_pool(db_pool: PgPool) -> Self {
        // --- Monta o gráfico de dependências ---
        let room_repo = RoomRepository::new(db_pool.clone());
        let override_repo = OverrideRepository::new(db_pool.clone());
        let discount_repo = DiscountRepository::new(db_pool.clone());

        let rate_source = PgRateSource::new(room_repo.clone(), override_repo.clone(), discount_repo.clone());

        Self {
            room_service: RoomService::new(room_repo.clone(), override_repo),
            discount_service: DiscountService::new(db_pool.clone(), discount_repo, room_repo),
            pricing_service: PricingService::new(Arc::new(rate_source)),
            db_pool,
        }
    }
}
