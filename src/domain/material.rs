// ==========================================
// 材料属性浏览器 - 材料领域模型
// ==========================================
// 职责: 工作表原始数据、属性表头、属性映射
// 红线: 不含文件读取逻辑,不含索引逻辑
// ==========================================

use crate::domain::types::RawCell;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 属性映射（属性名 -> 去空白后的字符串值），按表头顺序
pub type AttributeMap = IndexMap<String, String>;

// ==========================================
// LoadedSheet - 加载层输出的单个工作表
// ==========================================
// 用途: 加载层写入,构建层只读
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadedSheet {
    pub category: String,        // 工作表名称（材料类别）
    pub header: Vec<RawCell>,    // 第 1 行（表头）原始值
    pub rows: Vec<Vec<RawCell>>, // 第 2 行起的数据行原始值
}

impl LoadedSheet {
    pub fn new(category: impl Into<String>, header: Vec<RawCell>, rows: Vec<Vec<RawCell>>) -> Self {
        Self {
            category: category.into(),
            header,
            rows,
        }
    }

    /// 按行顺序遍历数据行
    pub fn data_rows(&self) -> impl Iterator<Item = &[RawCell]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// 数据行数（不含表头）
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

// ==========================================
// AttributeSchema - 类别属性表头
// ==========================================
// 来源: 工作表第 1 行
// 注意: A 列表头为名称列标签，不参与属性；其余列去空白并剔除空表头后，
//       按清洗后的位置与数据行第 2 列起的单元格对齐
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSchema {
    name_label: Option<String>, // A1 清洗后的值（空白为 None）
    attributes: Vec<String>,    // B1 起清洗后的属性名
}

impl AttributeSchema {
    pub fn new(name_label: Option<String>, attributes: Vec<String>) -> Self {
        Self {
            name_label,
            attributes,
        }
    }

    /// 完整表头（含名称列标签）
    pub fn names(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }

    /// 名称列标签（A1 为空时为 None）
    pub fn name_label(&self) -> Option<&str> {
        self.name_label.as_deref()
    }

    /// 属性名列表，即 AttributeMap 的键顺序
    pub fn attribute_names(&self) -> &[String] {
        &self.attributes
    }

    pub fn len(&self) -> usize {
        usize::from(self.name_label.is_some()) + self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.name_label
            .as_deref()
            .into_iter()
            .chain(self.attributes.iter().map(String::as_str))
    }
}
