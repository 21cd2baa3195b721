//! zalign - 列对齐引擎
//!
//! 模块结构：
//! - align: 对齐核心（SeparatorSpec, Candidate, Layout, engine）
//! - models: 数据模型（TextBuffer, SelectionSet, EditOp）
//! - services: 服务层（ports 配置契约, adapters 文件加载）
//! - logging: tracing 初始化

pub mod align;
pub mod logging;
pub mod models;
pub mod services;
