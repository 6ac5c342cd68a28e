use super::browser;

pub const SUPPORTED_LOCALES: &[&str] = &["en", "ja"];
pub const DEFAULT_LOCALE: &str = "en";

/// Maps a BCP 47 language tag such as `ja-JP` onto a bundled catalog.
pub fn resolve_locale(tag: &str) -> &'static str {
    let primary = tag
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    SUPPORTED_LOCALES
        .iter()
        .copied()
        .find(|locale| *locale == primary)
        .unwrap_or(DEFAULT_LOCALE)
}

pub fn apply_browser_locale() {
    let tag = browser::navigator()
        .ok()
        .and_then(|nav| nav.language())
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string());
    let locale = resolve_locale(&tag);
    rust_i18n::set_locale(locale);
    log::debug!("Using locale {} (browser reported {})", locale, tag);
}
