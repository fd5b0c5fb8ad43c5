pub mod config;
pub mod game;
pub mod logger;

pub use config::{EngineConfig, EngineConfigManager};
pub use game::*;
