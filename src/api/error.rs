// ==========================================
// 材料属性浏览器 - API层错误类型
// ==========================================
// 职责: 汇总加载错误与查询错误，生成用户可读的提示
// 约定: 提示只包含文件路径、错误类型、详细信息，不暴露内部状态
// ==========================================

use crate::i18n::{t, t_with_args};
use crate::importer::error::LoadError;
use crate::repository::error::IndexError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 加载失败: 会话无法启动
    #[error(transparent)]
    Load(#[from] LoadError),

    /// 查询失败: 调用方按“无内容”处理
    #[error(transparent)]
    Index(#[from] IndexError),
}

impl ApiError {
    /// 查询类错误可恢复；加载错误终止会话
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ApiError::Index(_))
    }

    /// 本地化的单条提示信息
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Load(err) => {
                let path = err.path.display().to_string();
                [
                    t("load.failed_title"),
                    t_with_args("load.file_path", &[("path", path.as_str())]),
                    t_with_args("load.error_kind", &[("kind", err.kind.as_str())]),
                    t_with_args("load.detail", &[("detail", err.detail.as_str())]),
                ]
                .join("\n")
            }
            ApiError::Index(IndexError::UnknownCategory(category)) => {
                t_with_args("browser.unknown_category", &[("category", category.as_str())])
            }
            ApiError::Index(IndexError::UnknownEntity { name, .. }) => {
                t_with_args("browser.not_found", &[("name", name.as_str())])
            }
        }
    }
}

/// API Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{set_locale, tests::LOCALE_TEST_LOCK};
    use crate::importer::error::LoadErrorKind;
    use std::path::Path;

    #[test]
    fn test_recoverable() {
        let load: ApiError = LoadError::not_found(Path::new("materials.xlsx")).into();
        let index: ApiError = IndexError::UnknownCategory("Metals".to_string()).into();
        assert!(!load.is_recoverable());
        assert!(index.is_recoverable());
    }

    #[test]
    fn test_user_message_for_load_error() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("zh-CN");

        let err: ApiError = LoadError::new(
            "data/materials.xlsx",
            LoadErrorKind::Corrupt,
            "Excel 解析失败: invalid zip",
        )
        .into();
        let msg = err.user_message();

        assert!(msg.starts_with("数据加载失败"));
        assert!(msg.contains("文件路径：data/materials.xlsx"));
        assert!(msg.contains("错误类型：corrupt"));
        assert!(msg.contains("详细信息：Excel 解析失败: invalid zip"));
    }

    #[test]
    fn test_user_message_for_lookup_error() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");

        let err: ApiError = IndexError::unknown_entity(None, "Unobtainium").into();
        assert_eq!(err.user_message(), "Material not found: Unobtainium");

        set_locale("zh-CN");
    }
}
