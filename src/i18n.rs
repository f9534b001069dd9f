// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库，词条位于 locales/*.yml
// 支持中文（默认）和英文；未知语言回退到中文
// 范围: 仅界面提示文本；属性名与属性值原样透传
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

pub const DEFAULT_LOCALE: &str = "zh-CN";

pub const SUPPORTED_LOCALES: &[&str] = &["zh-CN", "en"];

/// 将配置/命令行中的语言代码映射到已支持的语言
///
/// 先做大小写不敏感的完整匹配，再按语言前缀匹配（"en-US" -> "en"，"zh" -> "zh-CN"）
pub fn resolve_locale(requested: &str) -> &'static str {
    let requested = requested.trim();
    let language = requested.split(['-', '_']).next().unwrap_or("");

    SUPPORTED_LOCALES
        .iter()
        .copied()
        .find(|locale| locale.eq_ignore_ascii_case(requested))
        .or_else(|| {
            SUPPORTED_LOCALES.iter().copied().find(|locale| {
                !language.is_empty()
                    && locale
                        .split('-')
                        .next()
                        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(language))
            })
        })
        .unwrap_or(DEFAULT_LOCALE)
}

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言，返回实际生效的语言代码
pub fn set_locale(requested: &str) -> &'static str {
    let locale = resolve_locale(requested);
    rust_i18n::set_locale(locale);
    locale
}

/// 翻译消息（无参数）
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息，替换 %{name} 占位符
///
/// # 示例
/// ```no_run
/// use material_browser::i18n::t_with_args;
/// let msg = t_with_args("browser.not_found", &[("name", "PVC")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(t(key), |message, (name, value)| {
        message.replace(&format!("%{{{}}}", name), value)
    })
}
