pub mod bot_config;
pub mod loader;

pub use bot_config::{BotConfig, ChatConfig, MAX_SELECTION_ATTEMPTS, OracleConfig, SelectorConfig};
pub use loader::{DEFAULT_CONFIG_FILE, load_config, parse_config_content};
