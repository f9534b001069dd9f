// ==========================================
// 材料属性浏览器 - 材料索引构建器
// ==========================================
// 输入: 加载层产出的工作表列表（按文件原生顺序）
// 输出: MaterialIndex（类别表 + 扁平名称索引）
// ==========================================
// 规则:
// 1. 表头清洗后得到属性表头（空表头 -> 空属性映射）
// 2. 名称为空的数据行整行丢弃
// 3. 类别内同名材料: 后写覆盖
// 4. 扁平索引: 按类别顺序先到先得
// ==========================================

use crate::domain::material::LoadedSheet;
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::error::LoadResult;
use crate::importer::file_parser::{SheetLoader, UniversalLoader};
use crate::repository::material_index::{CategoryTable, MaterialIndex};
use indexmap::IndexMap;
use std::path::Path;
use tracing::{debug, info, warn};

// ==========================================
// BuildStats - 单个类别的构建统计
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub entities: usize,
    pub skipped_rows: usize,
    pub overwritten: usize,
}

// ==========================================
// MaterialIndexBuilder - 材料索引构建器
// ==========================================
pub struct MaterialIndexBuilder {
    cleaner: DataCleaner,
}

impl Default for MaterialIndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialIndexBuilder {
    pub fn new() -> Self {
        Self {
            cleaner: DataCleaner,
        }
    }

    /// 加载表格文件并构建索引（启动时调用一次）
    ///
    /// 加载失败整体返回 LoadError，不产生部分索引
    pub fn build_from_source<P: AsRef<Path>>(&self, path: P) -> LoadResult<MaterialIndex> {
        let sheets = UniversalLoader.load(path.as_ref())?;
        Ok(self.build(&sheets))
    }

    /// 构建材料索引
    ///
    /// 对已加载的工作表总是成功；参差行按补空/截断处理，不报错
    pub fn build(&self, sheets: &[LoadedSheet]) -> MaterialIndex {
        let mut categories: IndexMap<String, CategoryTable> = IndexMap::new();

        for sheet in sheets {
            let (table, stats) = self.build_category(sheet);
            debug!(
                category = %sheet.category,
                schema_width = table.schema().len(),
                entities = stats.entities,
                skipped_rows = stats.skipped_rows,
                overwritten = stats.overwritten,
                "类别构建完成"
            );

            if categories.insert(sheet.category.clone(), table).is_some() {
                warn!(category = %sheet.category, "类别名称重复，保留原位置并以后者内容替换");
            }
        }

        let flat = Self::build_flat_lookup(&categories);
        let index = MaterialIndex::new(categories, flat);
        info!(
            categories = index.category_count(),
            materials = index.len(),
            "材料索引构建完成"
        );
        index
    }

    /// 单个工作表 -> 类别材料表
    pub fn build_category(&self, sheet: &LoadedSheet) -> (CategoryTable, BuildStats) {
        let schema = self.cleaner.clean_header(&sheet.header);
        let mut table = CategoryTable::new(schema);
        let mut stats = BuildStats::default();

        for row in sheet.data_rows() {
            let Some(name) = self.cleaner.material_name(row) else {
                stats.skipped_rows += 1;
                continue;
            };

            let attributes = self.cleaner.map_attributes(&table.schema, row);
            if table.entities.insert(name, attributes).is_some() {
                stats.overwritten += 1;
            }
        }

        stats.entities = table.entities.len();
        (table, stats)
    }

    /// 扁平名称索引: 名称首次出现的类别胜出
    fn build_flat_lookup(categories: &IndexMap<String, CategoryTable>) -> IndexMap<String, String> {
        let mut flat: IndexMap<String, String> = IndexMap::new();
        for (category, table) in categories {
            for name in table.entities.keys() {
                flat.entry(name.clone()).or_insert_with(|| category.clone());
            }
        }
        flat
    }
}
