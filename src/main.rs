mod config;
mod form;
mod routes;
mod services;

use actix_web::{App, HttpServer};
use anyhow::{Context, Result};
use log::info;

use config::HostConfig;

#[actix_web::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = HostConfig::from_env()?;
    info!("🚀 SignUp form available at http://{}:{}/", cfg.host, cfg.port);

    HttpServer::new(|| App::new().configure(routes::signup::init))
        .bind((cfg.host.as_str(), cfg.port))
        .with_context(|| format!("Failed to bind {}:{}", cfg.host, cfg.port))?
        .run()
        .await
        .context("Server error")?;

    Ok(())
}
