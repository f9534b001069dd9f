// ==========================================
// 材料属性浏览器 - 材料索引（只读仓储）
// ==========================================
// 结构: 类别 -> (材料名称 -> 属性映射)，另有扁平名称索引
// 红线: 构建完成后不可变；不提供更新/删除/重建操作
// ==========================================
// 扁平索引: 同名材料按类别顺序先到先得；类别内查询始终精确
// ==========================================

use crate::domain::material::{AttributeMap, AttributeSchema};
use crate::repository::error::{IndexError, IndexResult};
use indexmap::IndexMap;
use serde::Serialize;

// ==========================================
// CategoryTable - 单个类别的材料表
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryTable {
    pub(crate) schema: AttributeSchema,
    pub(crate) entities: IndexMap<String, AttributeMap>,
}

impl CategoryTable {
    pub(crate) fn new(schema: AttributeSchema) -> Self {
        Self {
            schema,
            entities: IndexMap::new(),
        }
    }

    pub fn schema(&self) -> &AttributeSchema {
        &self.schema
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

// ==========================================
// MaterialIndex - 材料索引
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MaterialIndex {
    categories: IndexMap<String, CategoryTable>,
    #[serde(skip)]
    flat: IndexMap<String, String>, // 材料名称 -> 首个包含该名称的类别
}

impl MaterialIndex {
    /// 仅供构建器使用
    pub(crate) fn new(
        categories: IndexMap<String, CategoryTable>,
        flat: IndexMap<String, String>,
    ) -> Self {
        Self { categories, flat }
    }

    /// 全部类别（按工作表顺序）
    pub fn categories(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    /// 类别下的材料名称（按插入顺序）
    pub fn entity_names(&self, category: &str) -> IndexResult<Vec<&str>> {
        self.table(category)
            .map(|table| table.entities.keys().map(String::as_str).collect())
    }

    /// 类别内精确查询属性
    pub fn attributes_of(&self, category: &str, name: &str) -> IndexResult<&AttributeMap> {
        self.categories
            .get(category)
            .and_then(|table| table.entities.get(name))
            .ok_or_else(|| IndexError::unknown_entity(Some(category), name))
    }

    /// 按名称查询属性（扁平索引，先到先得）
    pub fn find_by_name(&self, name: &str) -> IndexResult<&AttributeMap> {
        let category = self.category_of(name)?;
        self.attributes_of(category, name)
    }

    /// 扁平索引中名称所属的类别
    pub fn category_of(&self, name: &str) -> IndexResult<&str> {
        self.flat
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| IndexError::unknown_entity(None, name))
    }

    /// 类别的属性表头
    pub fn schema(&self, category: &str) -> IndexResult<&AttributeSchema> {
        self.table(category).map(CategoryTable::schema)
    }

    pub fn table(&self, category: &str) -> IndexResult<&CategoryTable> {
        self.categories
            .get(category)
            .ok_or_else(|| IndexError::UnknownCategory(category.to_string()))
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    /// 材料总数（各类别之和）
    pub fn len(&self) -> usize {
        self.categories.values().map(CategoryTable::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 按索引顺序遍历 (类别, 名称, 属性)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &AttributeMap)> + '_ {
        self.categories.iter().flat_map(|(category, table)| {
            table
                .entities
                .iter()
                .map(move |(name, attrs)| (category.as_str(), name.as_str(), attrs))
        })
    }
}
