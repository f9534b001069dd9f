// ==========================================
// 材料属性浏览器 - 仓储层
// ==========================================
// 职责: 内存材料索引的只读查询
// ==========================================

pub mod error;
pub mod material_index;

pub use error::{IndexError, IndexResult};
pub use material_index::{CategoryTable, MaterialIndex};
