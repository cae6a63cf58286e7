//! BingoChain front-end server.
//!
//! Serves the lottery pages, proxies the lottery REST API to the backend,
//! issues wallet sessions, and relays live game events between players
//! sitting in the same game room.
//!
//! ## Modules
//!
//! - [`relay`] — Room membership and event fan-out over WebSocket
//! - [`backend`] — HTTP client for the lottery backend API
//! - [`chain`] — Blockchain node settings and liveness probe
//! - [`auth`] — Wallet session tokens
//! - [`wallet`] — Wallet address validation
//! - [`server`] — Route table, handlers, and server lifecycle
pub mod auth;
pub mod backend;
pub mod chain;
pub mod config;
pub mod relay;
pub mod server;
pub mod wallet;

pub use config::Config;
pub use server::Context;
pub use server::Server;

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
