pub mod color;
mod config;
pub mod context;
pub mod css;
pub mod error;
pub mod framework;
pub mod logging;
pub mod storage;
pub mod theme;
pub mod tokens;
pub use config::{BuildMode, BUILD_ID};
pub use context::ThemeContext;
pub use error::{AppError, AppResult};

/// Output of one resolve/apply cycle against the on-disk settings store.
#[derive(Debug, Clone)]
pub struct RenderedTheme {
    /// `<style>` markup holding the theme variables.
    pub stylesheet: String,
    /// Component library overrides as pretty JSON.
    pub framework_theme: String,
}

/// Entrypoint used by higher-level integrations and CLI bindings.
pub fn run() -> AppResult<RenderedTheme> {
    logging::init();
    let mode = BuildMode::from_env();
    tracing::info!(build_id = BUILD_ID, ?mode, "resolving InferaFlow theme");

    let store = storage::FileStore::with_default_path()?;
    tracing::debug!(path = %store.path().display(), "using settings store");
    let resolver = theme::SettingsResolver::new(mode, BUILD_ID);
    let mut context = ThemeContext::new(resolver, store, css::HtmlDocument::new());
    context.apply()?;
    context.cache_settings()?;

    let framework_theme = serde_json::to_string_pretty(&context.framework_theme()?)?;
    tracing::info!(
        dark = context.is_dark_mode(),
        scheme = ?context.settings().theme_scheme,
        "theme applied"
    );
    Ok(RenderedTheme {
        stylesheet: context.host().head_markup(),
        framework_theme,
    })
}
