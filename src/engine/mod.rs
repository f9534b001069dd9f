// ==========================================
// 材料属性浏览器 - 引擎层
// ==========================================
// 职责: 由原始工作表构建不可变材料索引
// ==========================================

pub mod index_builder;

pub use index_builder::{BuildStats, MaterialIndexBuilder};
