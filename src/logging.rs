// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 过滤器优先级: RUST_LOG > 配置文件 log_filter > "info"
// 输出: stderr（stdout 保留给浏览结果）
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

const FALLBACK_FILTER: &str = "info";

/// 解析日志过滤器
///
/// 空白或无法解析的过滤器视为未设置，继续使用下一优先级
pub fn resolve_filter(env_value: Option<&str>, config_filter: &str) -> EnvFilter {
    env_value
        .into_iter()
        .chain(std::iter::once(config_filter))
        .map(str::trim)
        .filter(|directives| !directives.is_empty())
        .find_map(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(FALLBACK_FILTER))
}

/// 初始化日志系统
///
/// # 示例
/// ```no_run
/// use material_browser::logging;
/// logging::init("material_browser=debug");
/// ```
pub fn init(config_filter: &str) {
    let env_value = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = resolve_filter(env_value.as_deref(), config_filter);

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// 测试用: 输出本 crate 的 debug 日志（加载/构建过程）
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("material_browser=debug"))
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_value_wins_over_config() {
        let filter = resolve_filter(Some("material_browser=trace"), "warn");
        assert!(filter.to_string().contains("material_browser=trace"));
    }

    #[test]
    fn test_config_filter_used_without_env() {
        let filter = resolve_filter(None, "material_browser::engine=debug");
        assert!(filter.to_string().contains("material_browser::engine=debug"));

        let filter = resolve_filter(Some("   "), "material_browser=warn");
        assert!(filter.to_string().contains("material_browser=warn"));
    }

    #[test]
    fn test_invalid_filters_fall_back_to_info() {
        let filter = resolve_filter(Some("material_browser=loud"), "material_browser=verbose");
        let rendered = filter.to_string();
        assert!(!rendered.contains("loud") && !rendered.contains("verbose"));
        assert!(rendered.contains(FALLBACK_FILTER));
    }
}
