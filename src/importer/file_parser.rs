// ==========================================
// 材料属性浏览器 - 表格加载器实现
// ==========================================
// 职责: 打开表格文件，按原生顺序枚举工作表，
//       产出 (类别, 表头行, 数据行) 原始单元格
// 支持: Excel (.xlsx/.xlsm/.xlsb/.xls/.ods) / CSV (.csv)
// 约定: 只读打开；文件句柄在函数返回时释放；任何失败整体失败
// ==========================================

use crate::domain::material::LoadedSheet;
use crate::domain::types::RawCell;
use crate::importer::error::{LoadError, LoadResult};
use calamine::{Data, Ods, Range, Reader, Sheets, Xls, Xlsb, Xlsx};
use csv::ReaderBuilder;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use tracing::{debug, info, warn};

// ==========================================
// SheetLoader Trait
// ==========================================
// 实现者: ExcelLoader, CsvLoader, UniversalLoader
pub trait SheetLoader: Send + Sync {
    /// 加载文件中的全部工作表
    ///
    /// # 返回
    /// - Ok(Vec<LoadedSheet>): 按文件原生顺序排列，空工作表已跳过
    /// - Err(LoadError): 文件不存在、无权限、格式不支持或损坏、无工作表
    fn load(&self, path: &Path) -> LoadResult<Vec<LoadedSheet>>;
}

/// 小写扩展名（无扩展名时为空串）
fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn open_read_only(path: &Path) -> LoadResult<File> {
    File::open(path).map_err(|e| LoadError::from_io(path, &e))
}

// ==========================================
// Excel Loader 实现
// ==========================================
pub struct ExcelLoader;

impl ExcelLoader {
    pub const EXTENSIONS: &'static [&'static str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

    fn open_workbook(path: &Path, ext: &str) -> LoadResult<Sheets<BufReader<File>>> {
        if !Self::EXTENSIONS.contains(&ext) {
            return Err(LoadError::unsupported_format(path, ext));
        }

        let reader = BufReader::new(open_read_only(path)?);
        let workbook = match ext {
            "xlsx" | "xlsm" => Xlsx::new(reader).map(Sheets::Xlsx).map_err(calamine::Error::from),
            "xlsb" => Xlsb::new(reader).map(Sheets::Xlsb).map_err(calamine::Error::from),
            "xls" => Xls::new(reader).map(Sheets::Xls).map_err(calamine::Error::from),
            _ => Ods::new(reader).map(Sheets::Ods).map_err(calamine::Error::from),
        };

        workbook.map_err(|e| LoadError::from_calamine(path, e))
    }

    /// 按绝对坐标展开工作表：第 1 行为表头，A 列为第 1 列
    ///
    /// calamine 的已用区域可能不从 A1 开始，前导空行/空列补 Empty
    fn range_to_rows(range: &Range<Data>) -> Vec<Vec<RawCell>> {
        let Some((last_row, last_col)) = range.end() else {
            return Vec::new();
        };

        (0..=last_row)
            .map(|row| {
                (0..=last_col)
                    .map(|col| {
                        range
                            .get_value((row, col))
                            .map(cell_from_data)
                            .unwrap_or(RawCell::Empty)
                    })
                    .collect()
            })
            .collect()
    }
}

/// calamine 单元格 -> 原始值（不做字符串化）
pub fn cell_from_data(data: &Data) -> RawCell {
    match data {
        Data::Empty => RawCell::Empty,
        Data::String(s) => RawCell::String(s.clone()),
        Data::Int(i) => RawCell::Int(*i),
        Data::Float(f) => RawCell::Float(*f),
        Data::Bool(b) => RawCell::Bool(*b),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(RawCell::DateTime)
            .unwrap_or(RawCell::Float(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => RawCell::String(s.clone()),
        Data::Error(e) => RawCell::Error(e.to_string()),
    }
}

impl SheetLoader for ExcelLoader {
    fn load(&self, path: &Path) -> LoadResult<Vec<LoadedSheet>> {
        let ext = extension_of(path);
        let mut workbook = Self::open_workbook(path, &ext)?;

        let sheet_names = workbook.sheet_names().to_vec();
        if sheet_names.is_empty() {
            return Err(LoadError::no_sheets(path));
        }

        let mut sheets = Vec::with_capacity(sheet_names.len());
        for sheet_name in sheet_names {
            let range = workbook
                .worksheet_range(&sheet_name)
                .map_err(|e| LoadError::from_calamine(path, e))?;

            let mut rows = Self::range_to_rows(&range).into_iter();
            let Some(header) = rows.next() else {
                warn!(sheet = %sheet_name, "工作表无数据行，已跳过");
                continue;
            };

            let data_rows: Vec<Vec<RawCell>> = rows.collect();
            debug!(
                sheet = %sheet_name,
                header_width = header.len(),
                data_rows = data_rows.len(),
                "工作表读取完成"
            );
            sheets.push(LoadedSheet::new(sheet_name, header, data_rows));
        }

        Ok(sheets)
    }
}

// ==========================================
// CSV Loader 实现
// ==========================================
// 整个文件视为一个工作表，类别名取文件名（不含扩展名）
pub struct CsvLoader;

impl CsvLoader {
    fn category_of(path: &Path) -> String {
        path.file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

impl SheetLoader for CsvLoader {
    fn load(&self, path: &Path) -> LoadResult<Vec<LoadedSheet>> {
        let ext = extension_of(path);
        if ext != "csv" {
            return Err(LoadError::unsupported_format(path, &ext));
        }

        let file = open_read_only(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| LoadError::from_csv(path, e))?;
            let row: Vec<RawCell> = record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        RawCell::Empty
                    } else {
                        RawCell::String(field.to_string())
                    }
                })
                .collect();
            rows.push(row);
        }

        let category = Self::category_of(path);
        let mut rows = rows.into_iter();
        let Some(header) = rows.next() else {
            warn!(sheet = %category, "CSV 文件无数据行，已跳过");
            return Ok(Vec::new());
        };

        let data_rows: Vec<Vec<RawCell>> = rows.collect();
        debug!(
            sheet = %category,
            header_width = header.len(),
            data_rows = data_rows.len(),
            "CSV 读取完成"
        );
        Ok(vec![LoadedSheet::new(category, header, data_rows)])
    }
}

// ==========================================
// 通用加载器（根据扩展名自动选择）
// ==========================================
pub struct UniversalLoader;

impl SheetLoader for UniversalLoader {
    fn load(&self, path: &Path) -> LoadResult<Vec<LoadedSheet>> {
        info!(path = %path.display(), "开始加载材料数据");

        // 检查文件可访问（不存在 / 无权限 由 io 错误区分）
        if let Err(e) = fs::metadata(path) {
            let err = LoadError::from_io(path, &e);
            warn!(path = %path.display(), kind = %err.kind, "加载失败");
            return Err(err);
        }

        let ext = extension_of(path);
        let result = match ext.as_str() {
            "csv" => CsvLoader.load(path),
            e if ExcelLoader::EXTENSIONS.contains(&e) => ExcelLoader.load(path),
            _ => Err(LoadError::unsupported_format(path, &ext)),
        };

        match &result {
            Ok(sheets) => info!(path = %path.display(), sheets = sheets.len(), "材料数据加载完成"),
            Err(err) => warn!(path = %path.display(), kind = %err.kind, detail = %err.detail, "加载失败"),
        }
        result
    }
}

/// 加载表格文件（按扩展名选择加载器）
pub fn load_sheets<P: AsRef<Path>>(path: P) -> LoadResult<Vec<LoadedSheet>> {
    UniversalLoader.load(path.as_ref())
}
