use crate::color::{to_channels, HsvPaletteDeriver, PaletteDeriver};
use crate::css::{StyleHost, ThemeStyleSheet};
use crate::error::AppResult;
use crate::framework::{map_to_framework_theme, FrameworkThemeOverride};
use crate::storage::{SettingsStore, THEME_SETTINGS_KEY};
use crate::theme::{
    LayoutMode, SettingsResolver, ThemeColorKey, ThemeColorSet, ThemeScheme, ThemeSetting,
    ThemeSettingPatch,
};
use crate::tokens::{build_tokens, DarkThemeTokens, ThemeTokens};

/// One session's theme state: the effective settings, where they persist,
/// and the document they are applied to.
pub struct ThemeContext<S, H, D = HsvPaletteDeriver>
where
    S: SettingsStore,
    H: StyleHost,
    D: PaletteDeriver,
{
    resolver: SettingsResolver,
    store: S,
    stylesheet: ThemeStyleSheet<H>,
    deriver: D,
    settings: ThemeSetting,
    prefers_dark: bool,
}

impl<S, H> ThemeContext<S, H>
where
    S: SettingsStore,
    H: StyleHost,
{
    pub fn new(resolver: SettingsResolver, store: S, host: H) -> Self {
        Self::with_deriver(resolver, store, host, HsvPaletteDeriver)
    }
}

impl<S, H, D> ThemeContext<S, H, D>
where
    S: SettingsStore,
    H: StyleHost,
    D: PaletteDeriver,
{
    /// Resolves settings against `store` and attaches the theme style element.
    /// Nothing is rendered until [`Self::apply`].
    pub fn with_deriver(resolver: SettingsResolver, mut store: S, host: H, deriver: D) -> Self {
        let settings = resolver.resolve(&mut store);
        Self {
            resolver,
            store,
            stylesheet: ThemeStyleSheet::attach(host),
            deriver,
            settings,
            prefers_dark: false,
        }
    }

    pub fn settings(&self) -> &ThemeSetting {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn host(&self) -> &H {
        self.stylesheet.host()
    }

    /// Operating system preference, consulted when the scheme is `auto`.
    pub fn set_prefers_dark(&mut self, prefers_dark: bool) {
        self.prefers_dark = prefers_dark;
        self.refresh_dark_mode();
    }

    pub fn is_dark_mode(&self) -> bool {
        match self.settings.theme_scheme {
            ThemeScheme::Light => false,
            ThemeScheme::Dark => true,
            ThemeScheme::Auto => self.prefers_dark,
        }
    }

    pub fn theme_colors(&self) -> ThemeColorSet {
        ThemeColorSet::from_settings(&self.settings)
    }

    /// Rebuilds the tokens and pushes everything to the document.
    pub fn apply(&mut self) -> AppResult<()> {
        self.emit_tokens()?;
        self.refresh_dark_mode();
        self.refresh_auxiliary_modes();
        Ok(())
    }

    pub fn framework_theme(&self) -> AppResult<FrameworkThemeOverride> {
        let theme = map_to_framework_theme(
            &self.deriver,
            &self.theme_colors(),
            self.settings.recommend_color,
        )?;
        Ok(theme)
    }

    pub fn set_theme_scheme(&mut self, scheme: ThemeScheme) {
        self.settings.theme_scheme = scheme;
        self.refresh_dark_mode();
    }

    pub fn toggle_theme_scheme(&mut self) {
        self.set_theme_scheme(self.settings.theme_scheme.next());
    }

    pub fn set_grayscale(&mut self, enabled: bool) {
        self.settings.grayscale = enabled;
        self.refresh_auxiliary_modes();
    }

    pub fn set_colour_weakness(&mut self, enabled: bool) {
        self.settings.colour_weakness = enabled;
        self.refresh_auxiliary_modes();
    }

    pub fn set_layout_mode(&mut self, mode: LayoutMode) {
        self.settings.layout.mode = mode;
    }

    /// `primary` writes `themeColor`; other keys write `otherColor`.
    pub fn update_theme_color(&mut self, key: ThemeColorKey, color: &str) -> AppResult<()> {
        to_channels(color)?;
        let slot = match key {
            ThemeColorKey::Primary => &mut self.settings.theme_color,
            ThemeColorKey::Info => &mut self.settings.other_color.info,
            ThemeColorKey::Success => &mut self.settings.other_color.success,
            ThemeColorKey::Warning => &mut self.settings.other_color.warning,
            ThemeColorKey::Error => &mut self.settings.other_color.error,
        };
        color.clone_into(slot);
        self.emit_tokens()
    }

    /// Merges `patch` and reapplies. A patch whose colors do not build leaves
    /// the current settings in place.
    pub fn update_setting(&mut self, patch: &ThemeSettingPatch) -> AppResult<()> {
        let candidate = patch.merged_onto(&self.settings);
        let (tokens, dark_tokens) = self.tokens_for(&candidate)?;
        self.settings = candidate;
        self.stylesheet.emit(&tokens, &dark_tokens);
        self.refresh_dark_mode();
        self.refresh_auxiliary_modes();
        Ok(())
    }

    /// Persists the full settings for the next launch. Development builds
    /// never cache.
    pub fn cache_settings(&mut self) -> AppResult<()> {
        if !self.resolver.mode().caches_settings() {
            return Ok(());
        }
        let serialized = serde_json::to_string(&self.settings)?;
        self.store.set(THEME_SETTINGS_KEY, &serialized)?;
        tracing::debug!("theme settings cached");
        Ok(())
    }

    /// Drops the persisted patch and re-resolves from scratch.
    pub fn reset(&mut self) -> AppResult<()> {
        self.store.remove(THEME_SETTINGS_KEY)?;
        self.settings = self.resolver.resolve(&mut self.store);
        tracing::info!("theme settings reset");
        self.apply()
    }

    fn tokens_for(&self, settings: &ThemeSetting) -> AppResult<(ThemeTokens, DarkThemeTokens)> {
        let tokens = build_tokens(
            &self.deriver,
            &ThemeColorSet::from_settings(settings),
            &settings.tokens,
            settings.recommend_color,
        )?;
        Ok(tokens)
    }

    fn emit_tokens(&mut self) -> AppResult<()> {
        let (tokens, dark_tokens) = self.tokens_for(&self.settings)?;
        self.stylesheet.emit(&tokens, &dark_tokens);
        Ok(())
    }

    fn refresh_dark_mode(&mut self) {
        let dark = self.is_dark_mode();
        self.stylesheet.set_dark_mode(dark);
    }

    fn refresh_auxiliary_modes(&mut self) {
        self.stylesheet
            .set_auxiliary_color_modes(self.settings.grayscale, self.settings.colour_weakness);
    }
}
