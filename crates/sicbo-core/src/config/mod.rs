//! Configuration system for sicbo.
//! TOML-based, 3-layer resolution: overrides > env > file > defaults.

pub mod feed_config;
pub mod forecast_config;
pub mod history_config;
pub mod session_config;
pub mod sicbo_config;

pub use feed_config::FeedConfig;
pub use forecast_config::ForecastConfig;
pub use history_config::HistoryConfig;
pub use session_config::SessionConfig;
pub use sicbo_config::{ConfigOverrides, SicboConfig};
