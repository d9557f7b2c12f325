//! Client configuration sourced from the environment.

use std::str::FromStr;

/// Runtime parameters for a visualized run. Every field has a default and
/// can be overridden through a `GRIDNAV_*` environment variable.
#[derive(Clone, Copy, Debug)]
pub struct ClientConfig {
    /// Grid width in cells (`GRIDNAV_WIDTH`).
    pub width: u32,
    /// Grid height in cells (`GRIDNAV_HEIGHT`).
    pub height: u32,
    /// Number of obstacles to scatter (`GRIDNAV_OBSTACLES`).
    pub obstacles: usize,
    /// Scatter seed; same seed, same layout (`GRIDNAV_SEED`).
    pub seed: u64,
    /// Milliseconds between moves (`GRIDNAV_TICK_MS`).
    pub tick_ms: u64,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            width: env_or("GRIDNAV_WIDTH", 10),
            height: env_or("GRIDNAV_HEIGHT", 10),
            obstacles: env_or("GRIDNAV_OBSTACLES", 20),
            seed: env_or("GRIDNAV_SEED", 0),
            tick_ms: env_or("GRIDNAV_TICK_MS", 500),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
