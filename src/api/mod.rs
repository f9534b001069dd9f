// ==========================================
// 材料属性浏览器 - API 层
// ==========================================
// 职责: 提供界面层调用的只读接口（类别树 / 材料详情）
// ==========================================

pub mod error;
pub mod material_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use material_api::{AttributeRow, CategoryNode, MaterialApi, MaterialDetail};
