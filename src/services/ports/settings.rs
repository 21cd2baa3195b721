use serde::{Deserialize, Serialize};

/// On-disk settings document. Field values are lenient here; validation into
/// [`crate::services::ports::AlignConfig`] happens at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_tab_size")]
    pub tab_size: u8,
    #[serde(default)]
    pub separators: Vec<SeparatorRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeparatorRule {
    pub token: String,
    pub gravity: String,
}

fn default_tab_size() -> u8 {
    4
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tab_size: default_tab_size(),
            separators: vec![
                SeparatorRule {
                    token: "=".to_string(),
                    gravity: "right".to_string(),
                },
                SeparatorRule {
                    token: ":".to_string(),
                    gravity: "left".to_string(),
                },
            ],
        }
    }
}
