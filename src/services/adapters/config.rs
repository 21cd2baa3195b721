//! 配置服务：持有当前生效的对齐配置
//!
//! 提供统一的配置管理，支持运行时修改

use crate::align::separator::SeparatorSpec;
use crate::services::ports::config::AlignConfig;

pub struct ConfigService {
    align: AlignConfig,
}

impl ConfigService {
    pub fn new() -> Self {
        Self {
            align: AlignConfig::default(),
        }
    }

    pub fn with_align_config(align: AlignConfig) -> Self {
        Self { align }
    }

    pub fn align(&self) -> &AlignConfig {
        &self.align
    }

    pub fn align_mut(&mut self) -> &mut AlignConfig {
        &mut self.align
    }

    pub fn set_tab_size(&mut self, size: u8) {
        self.align.tab_size = size;
    }

    pub fn set_separators(&mut self, separators: Vec<SeparatorSpec>) {
        self.align.separators = separators;
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
