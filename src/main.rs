// ==========================================
// 材料属性浏览器 - 命令行入口
// ==========================================
// 启动: 读取配置 -> 加载数据文件并构建索引（一次）
// 浏览: 无 --find 时输出类别树；有 --find 时输出属性表
// ==========================================

use anyhow::Context;
use clap::Parser;
use material_browser::api::{CategoryNode, MaterialApi, MaterialDetail};
use material_browser::config::ConfigManager;
use material_browser::i18n::{self, t, t_with_args};
use material_browser::logging;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "material-browser", version, about = material_browser::APP_NAME)]
struct Cli {
    /// 材料数据文件（.xlsx/.xls/.ods/.csv），默认 materials.xlsx
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// 配置文件（JSON），默认 <config_dir>/material-browser/config.json
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 按名称查询材料属性
    #[arg(long)]
    find: Option<String>,

    /// 限定查询类别（与 --find 一起使用）
    #[arg(long, requires = "find")]
    category: Option<String>,

    /// 以 JSON 输出
    #[arg(long)]
    json: bool,

    /// 界面语言（zh-CN / en）
    #[arg(long)]
    locale: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let manager = match &cli.config {
        Some(path) => ConfigManager::load(path),
        None => ConfigManager::load_default(),
    }
    .context("无法读取配置")?
    .with_overrides(cli.file.clone(), cli.locale.clone());
    let config = manager.config();

    // 初始化日志系统
    logging::init(&config.log_filter);
    let locale = i18n::set_locale(&config.locale);

    tracing::info!("{} v{}", t("common.app_title"), material_browser::VERSION);
    tracing::debug!(requested = %config.locale, applied = locale, "界面语言");
    tracing::info!("使用数据文件: {}", config.source_path.display());

    let api = match MaterialApi::build_from_source(&config.source_path) {
        Ok(api) => api,
        Err(err) => {
            eprintln!("{}", err.user_message());
            std::process::exit(1);
        }
    };

    match cli.find.as_deref() {
        None => print_tree(&api.category_tree(), cli.json)?,
        Some(name) => match api.material_detail(name, cli.category.as_deref()) {
            Ok(detail) => print_detail(&detail, cli.json)?,
            Err(err) => eprintln!("{}", err.user_message()),
        },
    }

    Ok(())
}

fn print_tree(tree: &[CategoryNode], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(tree)?);
        return Ok(());
    }

    println!("{}", t("browser.category_heading"));
    for node in tree {
        println!("{}", node.category);
        for material in &node.materials {
            println!("  {}", material);
        }
    }

    let categories = tree.len().to_string();
    let materials = tree
        .iter()
        .map(|node| node.materials.len())
        .sum::<usize>()
        .to_string();
    println!(
        "{}",
        t_with_args(
            "browser.summary",
            &[("categories", categories.as_str()), ("materials", materials.as_str())],
        )
    );
    Ok(())
}

fn print_detail(detail: &MaterialDetail, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(detail)?);
        return Ok(());
    }

    println!("{} / {}", detail.category, detail.name);
    if detail.is_empty() {
        println!("{}", t("browser.no_attributes"));
        return Ok(());
    }

    let width = detail
        .attributes
        .iter()
        .map(|row| row.attribute.chars().count())
        .chain(std::iter::once(t("browser.attribute_heading").chars().count()))
        .max()
        .unwrap_or(0);

    println!(
        "{:<width$}  {}",
        t("browser.attribute_heading"),
        t("browser.value_heading"),
        width = width
    );
    for row in &detail.attributes {
        println!("{:<width$}  {}", row.attribute, row.value, width = width);
    }
    Ok(())
}
