//! Configuration system for bomkit.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod bomkit_config;
pub mod store_config;

pub use bomkit_config::BomkitConfig;
pub use store_config::{StoreConfig, StorePaths};
