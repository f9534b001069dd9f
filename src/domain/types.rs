// ==========================================
// 材料属性浏览器 - 基础类型定义
// ==========================================
// 职责: 单元格原始值（加载层输出，不做任何强制转换）
// ==========================================

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// RawCell - 原始单元格值
// ==========================================
// 用途: 加载层按存储原样产出，清洗层统一转为字符串
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum RawCell {
    /// 空单元格（null）
    #[default]
    Empty,
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
    /// 公式错误值（如 #DIV/0!）
    Error(String),
}

impl RawCell {
    /// 是否为空单元格（null）
    ///
    /// 注意: 仅含空白的字符串不算 null，是否视为空由清洗层决定
    pub fn is_empty(&self) -> bool {
        matches!(self, RawCell::Empty)
    }
}

impl fmt::Display for RawCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawCell::Empty => Ok(()),
            RawCell::String(s) => write!(f, "{}", s),
            RawCell::Int(i) => write!(f, "{}", i),
            // f64 的 Display 输出最短可回读形式，整数值不带小数部分（160.0 -> "160"）
            RawCell::Float(v) => write!(f, "{}", v),
            RawCell::Bool(b) => write!(f, "{}", b),
            RawCell::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            RawCell::Error(code) => write!(f, "{}", code),
        }
    }
}

impl From<&str> for RawCell {
    fn from(value: &str) -> Self {
        RawCell::String(value.to_string())
    }
}

impl From<String> for RawCell {
    fn from(value: String) -> Self {
        RawCell::String(value)
    }
}

impl From<i64> for RawCell {
    fn from(value: i64) -> Self {
        RawCell::Int(value)
    }
}

impl From<f64> for RawCell {
    fn from(value: f64) -> Self {
        RawCell::Float(value)
    }
}

impl From<bool> for RawCell {
    fn from(value: bool) -> Self {
        RawCell::Bool(value)
    }
}

impl<T: Into<RawCell>> From<Option<T>> for RawCell {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(RawCell::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_display_numbers() {
        assert_eq!(RawCell::Float(1.4).to_string(), "1.4");
        assert_eq!(RawCell::Float(160.0).to_string(), "160");
        assert_eq!(RawCell::Int(-7).to_string(), "-7");
    }

    #[test]
    fn test_display_empty_and_datetime() {
        assert_eq!(RawCell::Empty.to_string(), "");
        let dt = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        assert_eq!(RawCell::DateTime(dt).to_string(), "2024-03-05 08:30:00");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(RawCell::from(None::<&str>), RawCell::Empty);
        assert_eq!(RawCell::from(Some("PVC")), RawCell::String("PVC".to_string()));
    }
}
