// ==========================================
// 材料属性浏览器 - 索引查询错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 查询错误可在调用处恢复（界面显示为“无内容”）
// ==========================================

use thiserror::Error;

/// 索引查询错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("未知材料类别: {0}")]
    UnknownCategory(String),

    #[error("未找到材料: {name}{}", .category.as_ref().map(|c| format!("（类别: {}）", c)).unwrap_or_default())]
    UnknownEntity {
        category: Option<String>,
        name: String,
    },
}

impl IndexError {
    pub fn unknown_entity(category: Option<&str>, name: &str) -> Self {
        IndexError::UnknownEntity {
            category: category.map(str::to_string),
            name: name.to_string(),
        }
    }
}

/// Result 类型别名
pub type IndexResult<T> = Result<T, IndexError>;
