// ==========================================
// 材料属性浏览器 - 材料 API
// ==========================================
// 职责: 界面层与材料索引之间的边界
// 1. 启动时加载一次并构建索引
// 2. 提供类别树（左侧导航）
// 3. 按名称查询属性表（右侧表格）
// 红线: 索引构建后只读，任何界面事件都不会修改索引
// ==========================================

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

use crate::api::error::ApiResult;
use crate::domain::material::AttributeMap;
use crate::engine::index_builder::MaterialIndexBuilder;
use crate::repository::material_index::MaterialIndex;

// ==========================================
// DTO
// ==========================================

/// 类别树节点（类别 + 材料名称）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNode {
    pub category: String,
    pub materials: Vec<String>,
}

/// 属性表的一行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRow {
    pub attribute: String,
    pub value: String,
}

/// 材料详情（属性按表头顺序）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialDetail {
    pub name: String,
    pub category: String,
    pub attributes: Vec<AttributeRow>,
}

impl MaterialDetail {
    fn from_map(name: &str, category: &str, attributes: &AttributeMap) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            attributes: attributes
                .iter()
                .map(|(attribute, value)| AttributeRow {
                    attribute: attribute.clone(),
                    value: value.clone(),
                })
                .collect(),
        }
    }

    /// 无属性（界面显示“无属性”，而不是错误）
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

// ==========================================
// MaterialApi - 材料 API
// ==========================================
#[derive(Debug, Clone)]
pub struct MaterialApi {
    index: Arc<MaterialIndex>,
}

impl MaterialApi {
    /// 从数据文件构建（启动时调用一次）
    ///
    /// # 返回
    /// - Ok(MaterialApi): 索引已就绪
    /// - Err(ApiError::Load): 加载失败，调用方应提示后结束会话
    pub fn build_from_source<P: AsRef<Path>>(path: P) -> ApiResult<Self> {
        let index = MaterialIndexBuilder::new().build_from_source(path)?;
        info!(
            categories = index.category_count(),
            materials = index.len(),
            "材料浏览会话就绪"
        );
        Ok(Self::from_index(index))
    }

    pub fn from_index(index: MaterialIndex) -> Self {
        Self {
            index: Arc::new(index),
        }
    }

    /// 只读索引
    pub fn index(&self) -> &MaterialIndex {
        &self.index
    }

    /// 共享索引（可跨线程并发读取）
    pub fn shared_index(&self) -> Arc<MaterialIndex> {
        Arc::clone(&self.index)
    }

    /// 类别树（类别与材料均按插入顺序）
    pub fn category_tree(&self) -> Vec<CategoryNode> {
        self.index
            .categories()
            .into_iter()
            .map(|category| CategoryNode {
                category: category.to_string(),
                materials: self
                    .index
                    .entity_names(category)
                    .unwrap_or_default()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })
            .collect()
    }

    /// 查询材料详情
    ///
    /// # 参数
    /// - name: 材料名称（原样匹配）
    /// - category: 指定类别时精确查询；否则使用扁平索引（先到先得）
    pub fn material_detail(&self, name: &str, category: Option<&str>) -> ApiResult<MaterialDetail> {
        debug!(name, category, "查询材料属性");

        let (category, attributes) = match category {
            Some(category) => (category, self.index.attributes_of(category, name)?),
            None => (
                self.index.category_of(name)?,
                self.index.find_by_name(name)?,
            ),
        };

        Ok(MaterialDetail::from_map(name, category, attributes))
    }
}
