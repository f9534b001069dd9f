// ==========================================
// 材料属性浏览器 - 配置层
// ==========================================
// 职责: 浏览器配置加载（JSON 文件 + 命令行覆写）
// 存储: config.json（缺省时使用内置默认值）
// ==========================================

pub mod config_manager;

// 重导出核心配置管理器
pub use config_manager::{config_keys, BrowserConfig, ConfigError, ConfigManager};
