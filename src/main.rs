/*
 * Responsibility
 * - tokio runtime entry
 * - calls app::run() (no logic here)
 */
use anyhow::Result;

mod app;
mod config;
mod error;
mod gate;
mod middleware;
mod pages;
mod services;
mod state;

#[tokio::main]
async fn main() -> Result<()> {
    app::run().await?;
    Ok(())
}
