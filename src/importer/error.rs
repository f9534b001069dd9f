// ==========================================
// 材料属性浏览器 - 加载层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 约定: 任何加载失败都整体失败，不返回部分数据
// ==========================================

use serde::Serialize;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ==========================================
// LoadErrorKind - 加载失败类型标签
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadErrorKind {
    NotFound,
    PermissionDenied,
    UnsupportedFormat,
    Corrupt,
    NoSheets,
    Io,
}

impl LoadErrorKind {
    /// 稳定的类型标签（用于日志与界面提示）
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadErrorKind::NotFound => "not-found",
            LoadErrorKind::PermissionDenied => "permission-denied",
            LoadErrorKind::UnsupportedFormat => "unsupported-format",
            LoadErrorKind::Corrupt => "corrupt",
            LoadErrorKind::NoSheets => "no-sheets",
            LoadErrorKind::Io => "io",
        }
    }
}

impl fmt::Display for LoadErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ==========================================
// LoadError - 加载错误
// ==========================================
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("数据加载失败 [{kind}] 文件路径: {}，详细信息: {detail}", .path.display())]
pub struct LoadError {
    pub path: PathBuf,
    pub kind: LoadErrorKind,
    pub detail: String,
}

impl LoadError {
    pub fn new(path: impl Into<PathBuf>, kind: LoadErrorKind, detail: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            detail: detail.into(),
        }
    }

    pub fn not_found(path: &Path) -> Self {
        Self::new(
            path,
            LoadErrorKind::NotFound,
            format!("文件不存在: {}", path.display()),
        )
    }

    pub fn unsupported_format(path: &Path, ext: &str) -> Self {
        Self::new(
            path,
            LoadErrorKind::UnsupportedFormat,
            format!(
                "文件格式不支持: '{}'（仅支持 .xlsx/.xlsm/.xlsb/.xls/.ods/.csv）",
                ext
            ),
        )
    }

    pub fn no_sheets(path: &Path) -> Self {
        Self::new(path, LoadErrorKind::NoSheets, "工作簿中没有工作表")
    }

    pub fn corrupt(path: &Path, detail: impl Into<String>) -> Self {
        Self::new(path, LoadErrorKind::Corrupt, detail)
    }

    /// 按 io::ErrorKind 归类
    pub fn from_io(path: &Path, err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::not_found(path),
            io::ErrorKind::PermissionDenied => Self::new(
                path,
                LoadErrorKind::PermissionDenied,
                format!("无读取权限: {} ({})", path.display(), err),
            ),
            io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof => {
                Self::corrupt(path, format!("文件内容损坏: {}", err))
            }
            _ => Self::new(path, LoadErrorKind::Io, format!("文件读取失败: {}", err)),
        }
    }

    pub fn from_calamine(path: &Path, err: calamine::Error) -> Self {
        match err {
            calamine::Error::Io(e) => Self::from_io(path, &e),
            other => Self::corrupt(path, format!("Excel 解析失败: {}", other)),
        }
    }

    pub fn from_csv(path: &Path, err: csv::Error) -> Self {
        match err.kind() {
            csv::ErrorKind::Io(e) => Self::from_io(path, e),
            _ => Self::corrupt(path, format!("CSV 解析失败: {}", err)),
        }
    }
}

/// Result 类型别名
pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(LoadErrorKind::NotFound.as_str(), "not-found");
        assert_eq!(LoadErrorKind::NoSheets.to_string(), "no-sheets");
        assert_eq!(LoadErrorKind::UnsupportedFormat.as_str(), "unsupported-format");
    }

    #[test]
    fn test_not_found_detail_carries_path() {
        let err = LoadError::not_found(Path::new("missing/materials.xlsx"));
        assert_eq!(err.kind, LoadErrorKind::NotFound);
        assert!(err.detail.contains("missing/materials.xlsx"));
        assert!(err.to_string().contains("not-found"));
    }

    #[test]
    fn test_from_io_classification() {
        let path = Path::new("a.xlsx");
        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(
            LoadError::from_io(path, &denied).kind,
            LoadErrorKind::PermissionDenied
        );

        let eof = io::Error::new(io::ErrorKind::UnexpectedEof, "eof");
        assert_eq!(LoadError::from_io(path, &eof).kind, LoadErrorKind::Corrupt);

        let other = io::Error::new(io::ErrorKind::Other, "boom");
        assert_eq!(LoadError::from_io(path, &other).kind, LoadErrorKind::Io);
    }
}
