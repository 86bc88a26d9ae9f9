use crate::color::to_channels;
use crate::config::BuildMode;
use crate::storage::{SettingsStore, OVERRIDE_THEME_FLAG_KEY, THEME_SETTINGS_KEY};

use super::patch::ThemeSettingPatch;
use super::settings::{default_theme_settings, override_theme_settings, ThemeSetting};

/// Produces the effective settings from shipped defaults, the deployment
/// override patch and whatever the user saved last time.
#[derive(Debug, Clone)]
pub struct SettingsResolver {
    defaults: ThemeSetting,
    override_patch: ThemeSettingPatch,
    build_id: String,
    mode: BuildMode,
}

impl SettingsResolver {
    pub fn new(mode: BuildMode, build_id: impl Into<String>) -> Self {
        Self {
            defaults: default_theme_settings(),
            override_patch: override_theme_settings(),
            build_id: build_id.into(),
            mode,
        }
    }

    pub fn with_defaults(mut self, defaults: ThemeSetting) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_override(mut self, patch: ThemeSettingPatch) -> Self {
        self.override_patch = patch;
        self
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    pub fn defaults(&self) -> &ThemeSetting {
        &self.defaults
    }

    /// Resolution order, lowest precedence first: defaults, persisted user
    /// patch, deployment override. The override only applies while the
    /// persisted flag differs from this build's id, and the flag is then set,
    /// so user edits made after the first launch of a build survive reloads.
    pub fn resolve<S: SettingsStore + ?Sized>(&self, store: &mut S) -> ThemeSetting {
        if !self.mode.caches_settings() {
            tracing::debug!("development mode; using shipped theme settings");
            return self.defaults.clone();
        }

        let mut settings = load_settings_patch(store).merged_onto(&self.defaults);

        let flag = store.get(OVERRIDE_THEME_FLAG_KEY);
        if flag.as_deref() == Some(self.build_id.as_str()) {
            return settings;
        }

        tracing::info!(
            previous = flag.as_deref().unwrap_or("<none>"),
            build_id = %self.build_id,
            "applying deployment theme overrides"
        );
        self.override_patch.apply_to(&mut settings);
        if let Err(err) = store.set(OVERRIDE_THEME_FLAG_KEY, &self.build_id) {
            tracing::warn!(?err, "failed to persist theme override flag");
        }
        settings
    }
}

/// Reads the persisted settings patch. Absent or malformed data is an empty
/// patch, and semantic colors that do not parse are dropped; theming must
/// never block a render.
pub fn load_settings_patch<S: SettingsStore + ?Sized>(store: &S) -> ThemeSettingPatch {
    let Some(raw) = store.get(THEME_SETTINGS_KEY) else {
        return ThemeSettingPatch::default();
    };
    let mut patch = serde_json::from_str(&raw).unwrap_or_else(|err| {
        tracing::warn!(?err, "ignoring malformed persisted theme settings");
        ThemeSettingPatch::default()
    });
    drop_invalid_colors(&mut patch);
    patch
}

// Token color overrides are not checked here; the emitter skips those.
fn drop_invalid_colors(patch: &mut ThemeSettingPatch) {
    let mut slots = vec![("themeColor", &mut patch.theme_color)];
    if let Some(other) = patch.other_color.as_mut() {
        slots.extend([
            ("otherColor.info", &mut other.info),
            ("otherColor.success", &mut other.success),
            ("otherColor.warning", &mut other.warning),
            ("otherColor.error", &mut other.error),
        ]);
    }
    for (field, slot) in slots {
        if let Some(Err(err)) = slot.as_deref().map(to_channels) {
            tracing::warn!(field, %err, "dropping invalid persisted theme color");
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::theme::patch::{OtherColorPatch, SiderPatch};
    use crate::theme::settings::ThemeScheme;

    fn override_patch() -> ThemeSettingPatch {
        ThemeSettingPatch {
            theme_scheme: Some(ThemeScheme::Light),
            sider: Some(SiderPatch {
                width: Some(220),
                ..SiderPatch::default()
            }),
            ..ThemeSettingPatch::default()
        }
    }

    fn production(build_id: &str) -> SettingsResolver {
        SettingsResolver::new(BuildMode::Production, build_id).with_override(override_patch())
    }

    #[test]
    fn development_mode_returns_defaults_and_leaves_store_alone() {
        let resolver = SettingsResolver::new(BuildMode::Development, "b1")
            .with_override(override_patch());
        let mut store =
            MemoryStore::new().with_entry(THEME_SETTINGS_KEY, r#"{"grayscale":true}"#);

        let settings = resolver.resolve(&mut store);
        assert_eq!(&settings, resolver.defaults());
        assert_eq!(store.get(OVERRIDE_THEME_FLAG_KEY), None);
    }

    #[test]
    fn fresh_build_applies_override_and_sets_flag() {
        let mut store = MemoryStore::new().with_entry(OVERRIDE_THEME_FLAG_KEY, "b0");

        let settings = production("b1").resolve(&mut store);
        assert_eq!(settings.theme_scheme, ThemeScheme::Light);
        assert_eq!(settings.sider.width, 220);
        assert_eq!(settings.sider.collapsed_width, 64);
        assert_eq!(store.get(OVERRIDE_THEME_FLAG_KEY).as_deref(), Some("b1"));
    }

    #[test]
    fn override_applies_only_once_per_build() {
        let resolver = production("b1");
        let mut store = MemoryStore::new().with_entry(OVERRIDE_THEME_FLAG_KEY, "b0");

        let mut settings = resolver.resolve(&mut store);
        assert_eq!(settings.theme_scheme, ThemeScheme::Light);

        settings.theme_scheme = ThemeScheme::Dark;
        let serialized = serde_json::to_string(&settings).unwrap();
        store.set(THEME_SETTINGS_KEY, &serialized).unwrap();

        let reloaded = resolver.resolve(&mut store);
        assert_eq!(reloaded.theme_scheme, ThemeScheme::Dark);
        assert_eq!(reloaded.sider.width, 220);
    }

    #[test]
    fn override_wins_over_persisted_user_patch() {
        let mut store = MemoryStore::new().with_entry(
            THEME_SETTINGS_KEY,
            r#"{"themeScheme":"auto","grayscale":true}"#,
        );

        let settings = production("b2").resolve(&mut store);
        assert_eq!(settings.theme_scheme, ThemeScheme::Light);
        assert!(settings.grayscale);
    }

    #[test]
    fn persisted_patch_merges_onto_defaults() {
        let mut store = MemoryStore::new()
            .with_entry(OVERRIDE_THEME_FLAG_KEY, "b1")
            .with_entry(
                THEME_SETTINGS_KEY,
                r##"{"otherColor":{"success":"#22c55e"},"tab":{"visible":true}}"##,
            );

        let settings = production("b1").resolve(&mut store);
        assert_eq!(settings.other_color.success, "#22c55e");
        assert_eq!(settings.other_color.error, "#ff3366");
        assert!(settings.tab.visible);
        assert_eq!(settings.tab.height, 44);
        assert_eq!(settings.theme_scheme, ThemeScheme::Dark);
    }

    #[test]
    fn malformed_persisted_patch_is_treated_as_empty() {
        let mut store = MemoryStore::new()
            .with_entry(OVERRIDE_THEME_FLAG_KEY, "b1")
            .with_entry(THEME_SETTINGS_KEY, "{ not json");

        let resolver = production("b1");
        assert_eq!(&resolver.resolve(&mut store), resolver.defaults());
    }

    #[test]
    fn wrongly_typed_persisted_patch_is_treated_as_empty() {
        let store = MemoryStore::new().with_entry(THEME_SETTINGS_KEY, r#"{"sider":{"width":"wide"}}"#);
        assert!(load_settings_patch(&store).is_empty());
    }

    #[test]
    fn invalid_persisted_colors_are_dropped() {
        let store = MemoryStore::new().with_entry(
            THEME_SETTINGS_KEY,
            r##"{"themeColor":"not-a-color","grayscale":true,"otherColor":{"error":"#zzz","success":"#22c55e"}}"##,
        );
        let patch = load_settings_patch(&store);
        assert_eq!(patch.theme_color, None);
        assert_eq!(patch.grayscale, Some(true));
        let other = patch.other_color.expect("other color patch");
        assert_eq!(other.error, None);
        assert_eq!(other.success.as_deref(), Some("#22c55e"));
    }

    #[test]
    fn invalid_persisted_primary_falls_back_to_default() {
        let mut store = MemoryStore::new()
            .with_entry(OVERRIDE_THEME_FLAG_KEY, "b1")
            .with_entry(THEME_SETTINGS_KEY, r#"{"themeColor":"not-a-color"}"#);

        let resolver = production("b1");
        assert_eq!(&resolver.resolve(&mut store), resolver.defaults());
    }

    #[test]
    fn absent_persisted_patch_is_treated_as_empty() {
        assert!(load_settings_patch(&MemoryStore::new()).is_empty());
    }

    #[test]
    fn empty_override_still_records_the_build() {
        let resolver = SettingsResolver::new(BuildMode::Production, "b3").with_override(
            ThemeSettingPatch {
                other_color: Some(OtherColorPatch::default()),
                ..ThemeSettingPatch::default()
            },
        );
        let mut store = MemoryStore::new();
        let settings = resolver.resolve(&mut store);
        assert_eq!(&settings, resolver.defaults());
        assert_eq!(store.get(OVERRIDE_THEME_FLAG_KEY).as_deref(), Some("b3"));
    }
}
