use std::env;

use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Amount each well-known ingredient starts with when first stocked
    pub initial_stock: i32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let port = match env::var("PORT") {
            Ok(p) => p.parse().context("PORT must be a valid port number")?,
            Err(_) => 8080,
        };

        let initial_stock = match env::var("INITIAL_STOCK") {
            Ok(s) => s
                .parse()
                .context("INITIAL_STOCK must be an integer")?,
            Err(_) => 0,
        };
        if initial_stock < 0 {
            anyhow::bail!("INITIAL_STOCK cannot be negative: {}", initial_stock);
        }

        Ok(Self {
            database_url,
            port,
            initial_stock,
        })
    }
}
