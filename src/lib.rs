// ==========================================
// 材料属性浏览器 - 核心库
// ==========================================
// 流程: 表格加载 -> 索引构建 -> 只读查询
// 定位: 启动时一次性加载，索引在进程生命周期内不可变
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 单元格、工作表、材料实体
pub mod domain;

// 导入层 - 表格文件读取与单元格清洗
pub mod importer;

// 引擎层 - 索引构建
pub mod engine;

// 仓储层 - 只读材料索引
pub mod repository;

// API 层 - 界面边界
pub mod api;

// 配置层
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// ==========================================
// 重导出核心类型
// ==========================================

pub use api::{ApiError, ApiResult, MaterialApi, MaterialDetail};
pub use domain::{AttributeMap, AttributeSchema, LoadedSheet, RawCell};
pub use engine::MaterialIndexBuilder;
pub use importer::{load_sheets, LoadError, LoadErrorKind, LoadResult};
pub use repository::{IndexError, IndexResult, MaterialIndex};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "材料属性浏览器";
