// ==========================================
// 材料属性浏览器 - 导入层
// ==========================================
// 职责: 表格文件读取（原始单元格）+ 单元格清洗
// 支持: Excel, CSV
// ==========================================

pub mod data_cleaner;
pub mod error;
pub mod file_parser;

// 重导出核心类型
pub use data_cleaner::DataCleaner;
pub use error::{LoadError, LoadErrorKind, LoadResult};
pub use file_parser::{load_sheets, CsvLoader, ExcelLoader, SheetLoader, UniversalLoader};
