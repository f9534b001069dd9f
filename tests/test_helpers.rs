// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 生成真实的 .xlsx / .csv 测试夹具（写入临时目录）
// ==========================================

#![allow(dead_code)]

use rust_xlsxwriter::Workbook;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// 夹具单元格
#[derive(Debug, Clone, Copy)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

pub use Cell::{Blank, Number, Text};

/// 夹具工作表: (名称, 行列表)，行 0 为第 1 行
pub type SheetSpec<'a> = (&'a str, Vec<Vec<Cell<'a>>>);

/// 文本行的简写
pub fn text_row<'a>(values: &[&'a str]) -> Vec<Cell<'a>> {
    values.iter().map(|v| Text(*v)).collect()
}

/// 创建临时目录
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("创建临时目录失败")
}

/// 写入多工作表 Excel 文件
///
/// # 返回
/// - PathBuf: 文件路径（位于 dir 内）
pub fn write_workbook(dir: &Path, file_name: &str, sheets: &[SheetSpec<'_>]) -> Result<PathBuf, Box<dyn Error>> {
    let path = dir.join(file_name);
    let mut workbook = Workbook::new();

    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name)?;

        for (row_idx, row) in rows.iter().enumerate() {
            for (col_idx, cell) in row.iter().enumerate() {
                let (r, c) = (u32::try_from(row_idx)?, u16::try_from(col_idx)?);
                match cell {
                    Text(s) => {
                        worksheet.write_string(r, c, *s)?;
                    }
                    Number(n) => {
                        worksheet.write_number(r, c, *n)?;
                    }
                    Blank => {}
                }
            }
        }
    }

    workbook.save(&path)?;
    Ok(path)
}

/// 写入 CSV 文件
pub fn write_csv(dir: &Path, file_name: &str, content: &str) -> Result<PathBuf, Box<dyn Error>> {
    let path = dir.join(file_name);
    fs::write(&path, content)?;
    Ok(path)
}

/// 标准测试工作簿: Polymers / Metals / Ceramics(仅表头) / Empty(无数据)
pub fn standard_workbook(dir: &Path) -> PathBuf {
    let sheets: Vec<SheetSpec<'_>> = vec![
        (
            "Polymers",
            vec![
                text_row(&["Name", "Density", "MeltPoint"]),
                vec![Text("PVC"), Number(1.4), Number(160.0)],
                vec![Text("PE"), Text("0.95"), Text(" 130 ")],
            ],
        ),
        (
            "Metals",
            vec![
                text_row(&["Name", "Density"]),
                vec![Text("Steel"), Text("7.85"), Text("")],
                vec![Blank, Number(100.0)],
                vec![Text("PE"), Text("9.99")],
            ],
        ),
        ("Ceramics", vec![text_row(&["Name", "Hardness"])]),
        ("Empty", vec![]),
    ];

    write_workbook(dir, "materials.xlsx", &sheets).expect("写入测试工作簿失败")
}
