mod patch;
mod resolver;
mod settings;

pub use patch::{
    BaseTokenPatch, BreadcrumbPatch, FooterPatch, HeaderPatch, LayoutPatch, MultilingualPatch,
    OtherColorPatch, PagePatch, SiderPatch, TabPatch, ThemeSettingPatch, TokensPatch,
    WatermarkPatch,
};
pub use resolver::{load_settings_patch, SettingsResolver};
pub use settings::{
    default_theme_settings, override_theme_settings, BaseToken, BreadcrumbSetting, FooterSetting,
    HeaderSetting, LayoutMode, LayoutSetting, MultilingualSetting, OtherColor, PageAnimateMode,
    PageSetting, ResetCacheStrategy, ScrollMode, SiderSetting, TabMode, TabSetting, ThemeScheme,
    ThemeSetting, ThemeSettingTokens, WatermarkSetting,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThemeColorKey {
    Primary,
    Info,
    Success,
    Warning,
    Error,
}

impl ThemeColorKey {
    pub const ALL: [Self; 5] = [
        Self::Primary,
        Self::Info,
        Self::Success,
        Self::Warning,
        Self::Error,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// One base color per semantic key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColorSet {
    pub primary: String,
    pub info: String,
    pub success: String,
    pub warning: String,
    pub error: String,
}

impl ThemeColorSet {
    /// `info` tracks `themeColor` while `isInfoFollowPrimary` is set.
    pub fn from_settings(settings: &ThemeSetting) -> Self {
        let info = if settings.is_info_follow_primary {
            &settings.theme_color
        } else {
            &settings.other_color.info
        };
        Self {
            primary: settings.theme_color.clone(),
            info: info.clone(),
            success: settings.other_color.success.clone(),
            warning: settings.other_color.warning.clone(),
            error: settings.other_color.error.clone(),
        }
    }

    pub fn get(&self, key: ThemeColorKey) -> &str {
        match key {
            ThemeColorKey::Primary => &self.primary,
            ThemeColorKey::Info => &self.info,
            ThemeColorKey::Success => &self.success,
            ThemeColorKey::Warning => &self.warning,
            ThemeColorKey::Error => &self.error,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ThemeColorKey, &str)> + '_ {
        ThemeColorKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }
}
