pub mod config;
pub mod paths;
pub mod settings;

pub use config::ConfigService;
pub use paths::{ensure_log_dir, get_log_dir};
pub use settings::{
    config_from_settings, ensure_settings_file, get_settings_path, load_settings,
};
