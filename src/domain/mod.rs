// ==========================================
// 材料属性浏览器 - 领域模型层
// ==========================================
// 职责: 定义单元格值、工作表、属性表头、属性映射
// 红线: 不含文件读取逻辑,不含索引逻辑
// ==========================================

pub mod material;
pub mod types;

// 重导出核心类型
pub use material::{AttributeMap, AttributeSchema, LoadedSheet};
pub use types::RawCell;
