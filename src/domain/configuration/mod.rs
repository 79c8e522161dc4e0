pub mod credential;
pub mod enhancer_config;
pub mod loader;

pub use credential::ApiKey;
pub use enhancer_config::{EnhancerConfig, GeminiApiConfig};
pub use loader::{default_config_path, load_config, parse_config_content};
