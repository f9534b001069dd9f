// ==========================================
// 材料属性浏览器 - 数据清洗器
// ==========================================
// 职责: 单元格 -> 字符串 / TRIM / 表头清洗 / 名称提取
// 约定: 属性值一律为去空白后的字符串，行不足时补空字符串
// ==========================================

use crate::domain::material::{AttributeMap, AttributeSchema};
use crate::domain::types::RawCell;

pub struct DataCleaner;

impl DataCleaner {
    /// 单元格转为去空白字符串（null -> ""）
    pub fn clean_cell(&self, cell: &RawCell) -> String {
        match cell {
            RawCell::Empty => String::new(),
            RawCell::String(s) => s.trim().to_string(),
            other => other.to_string().trim().to_string(),
        }
    }

    /// 单元格转为非空字符串；null 或全空白返回 None
    pub fn normalize_null(&self, cell: Option<&RawCell>) -> Option<String> {
        cell.map(|c| self.clean_cell(c)).filter(|v| !v.is_empty())
    }

    /// 表头清洗: A 列作为名称列标签单独取出，其余列去空白、剔除 null/空白表头，保持相对顺序
    pub fn clean_header(&self, header: &[RawCell]) -> AttributeSchema {
        let name_label = self.normalize_null(header.first());
        let attributes = header
            .iter()
            .skip(1)
            .filter_map(|cell| self.normalize_null(Some(cell)))
            .collect();
        AttributeSchema::new(name_label, attributes)
    }

    /// 提取材料名称（第 1 列）；空名称返回 None，该行应被丢弃
    pub fn material_name(&self, row: &[RawCell]) -> Option<String> {
        self.normalize_null(row.first())
    }

    /// 按位置将属性名与单元格配对
    ///
    /// - 名称列（A 列）不进入属性映射，属性从第 2 列起对齐
    /// - 行短于表头: 缺失属性补 ""
    /// - 行长于表头: 多余单元格忽略
    pub fn map_attributes(&self, schema: &AttributeSchema, row: &[RawCell]) -> AttributeMap {
        schema
            .attribute_names()
            .iter()
            .enumerate()
            .map(|(offset, attr)| {
                let value = row
                    .get(offset + 1)
                    .map(|cell| self.clean_cell(cell))
                    .unwrap_or_default();
                (attr.clone(), value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[Option<&str>]) -> Vec<RawCell> {
        values.iter().map(|v| RawCell::from(*v)).collect()
    }

    #[test]
    fn test_clean_cell_basic() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.clean_cell(&RawCell::from("  PVC  ")), "PVC");
        assert_eq!(cleaner.clean_cell(&RawCell::Empty), "");
        assert_eq!(cleaner.clean_cell(&RawCell::Float(7.85)), "7.85");
        assert_eq!(cleaner.clean_cell(&RawCell::Float(160.0)), "160");
        assert_eq!(cleaner.clean_cell(&RawCell::Bool(true)), "true");
        assert_eq!(cleaner.clean_cell(&RawCell::Error("#DIV/0!".into())), "#DIV/0!");
    }

    #[test]
    fn test_normalize_null() {
        let cleaner = DataCleaner;
        assert_eq!(cleaner.normalize_null(None), None);
        assert_eq!(cleaner.normalize_null(Some(&RawCell::Empty)), None);
        assert_eq!(cleaner.normalize_null(Some(&RawCell::from("   "))), None);
        assert_eq!(
            cleaner.normalize_null(Some(&RawCell::Int(0))),
            Some("0".to_string())
        );
    }

    #[test]
    fn test_clean_header_drops_blanks() {
        let cleaner = DataCleaner;
        let header = cells(&[Some(" Name "), None, Some("Density"), Some("  "), Some("MeltPoint")]);
        let schema = cleaner.clean_header(&header);

        assert_eq!(schema.names(), &["Name", "Density", "MeltPoint"]);
        assert!(schema.len() <= header.len());
    }

    #[test]
    fn test_clean_header_blank_name_column() {
        let cleaner = DataCleaner;
        let schema = cleaner.clean_header(&cells(&[None, Some("Density"), Some("MeltPoint")]));

        assert_eq!(schema.name_label(), None);
        assert_eq!(
            schema.attribute_names(),
            &["Density".to_string(), "MeltPoint".to_string()]
        );

        let attrs = cleaner.map_attributes(&schema, &cells(&[Some("PVC"), Some("1.4"), Some("160")]));
        assert_eq!(attrs.get("Density").map(String::as_str), Some("1.4"));
        assert_eq!(attrs.get("MeltPoint").map(String::as_str), Some("160"));
    }

    #[test]
    fn test_material_name() {
        let cleaner = DataCleaner;
        assert_eq!(
            cleaner.material_name(&cells(&[Some(" PVC "), Some("1.4")])),
            Some("PVC".to_string())
        );
        assert_eq!(cleaner.material_name(&cells(&[None, Some("100")])), None);
        assert_eq!(cleaner.material_name(&cells(&[Some(""), Some("100")])), None);
        assert_eq!(cleaner.material_name(&[]), None);
    }

    #[test]
    fn test_map_attributes_ragged_and_extra() {
        let cleaner = DataCleaner;
        let schema = AttributeSchema::new(
            Some("Name".to_string()),
            vec!["Density".to_string(), "MeltPoint".to_string()],
        );

        // 行不足: 补空字符串
        let short = cleaner.map_attributes(&schema, &cells(&[Some("PVC"), Some("1.4")]));
        assert_eq!(short.get("Density").map(String::as_str), Some("1.4"));
        assert_eq!(short.get("MeltPoint").map(String::as_str), Some(""));

        // 行过长: 多余单元格忽略
        let long = cleaner.map_attributes(
            &schema,
            &cells(&[Some("PVC"), Some("1.4"), Some("160"), Some("extra")]),
        );
        assert_eq!(long.len(), 2);
        assert_eq!(
            long.keys().cloned().collect::<Vec<_>>(),
            vec!["Density".to_string(), "MeltPoint".to_string()]
        );
    }
}
