use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::patch::ThemeSettingPatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeScheme {
    Light,
    #[default]
    Dark,
    Auto,
}

impl ThemeScheme {
    /// Cycle used by the header toggle: light, dark, auto, light.
    pub const fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Auto,
            Self::Auto => Self::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResetCacheStrategy {
    #[default]
    Close,
    Refresh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    #[default]
    Vertical,
    Horizontal,
    VerticalMix,
    HorizontalMix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScrollMode {
    Wrapper,
    #[default]
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PageAnimateMode {
    Fade,
    #[default]
    FadeSlide,
    FadeBottom,
    FadeScale,
    ZoomFade,
    ZoomOut,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TabMode {
    #[default]
    Chrome,
    Button,
}

/// Non-primary semantic colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherColor {
    pub info: String,
    pub success: String,
    pub warning: String,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSetting {
    pub mode: LayoutMode,
    pub scroll_mode: ScrollMode,
    pub reverse_horizontal_mix: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSetting {
    pub animate: bool,
    pub animate_mode: PageAnimateMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbSetting {
    pub visible: bool,
    pub show_icon: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultilingualSetting {
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderSetting {
    pub height: u32,
    pub breadcrumb: BreadcrumbSetting,
    pub multilingual: MultilingualSetting,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSetting {
    pub visible: bool,
    pub cache: bool,
    pub height: u32,
    pub mode: TabMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiderSetting {
    pub inverted: bool,
    pub width: u32,
    pub collapsed_width: u32,
    pub mix_width: u32,
    pub mix_collapsed_width: u32,
    pub mix_child_menu_width: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterSetting {
    pub visible: bool,
    pub fixed: bool,
    pub height: u32,
    pub right: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatermarkSetting {
    pub visible: bool,
    pub text: String,
}

/// Raw CSS values keyed by token name, grouped by category.
///
/// Names missing from the CSS variable schema never reach the stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseToken {
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
    #[serde(default)]
    pub box_shadow: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSettingTokens {
    pub light: BaseToken,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<BaseToken>,
}

/// Everything the dashboard reads to theme itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSetting {
    pub theme_scheme: ThemeScheme,
    pub grayscale: bool,
    pub colour_weakness: bool,
    pub recommend_color: bool,
    pub theme_color: String,
    pub other_color: OtherColor,
    pub is_info_follow_primary: bool,
    pub reset_cache_strategy: ResetCacheStrategy,
    pub layout: LayoutSetting,
    pub page: PageSetting,
    pub header: HeaderSetting,
    pub tab: TabSetting,
    pub fixed_header_and_tab: bool,
    pub sider: SiderSetting,
    pub footer: FooterSetting,
    pub watermark: WatermarkSetting,
    pub tokens: ThemeSettingTokens,
}

impl Default for ThemeSetting {
    fn default() -> Self {
        default_theme_settings()
    }
}

fn token_map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
        .collect()
}

/// Settings shipped with the build.
pub fn default_theme_settings() -> ThemeSetting {
    ThemeSetting {
        theme_scheme: ThemeScheme::Dark,
        grayscale: false,
        colour_weakness: false,
        recommend_color: false,
        theme_color: "#00d4ff".to_string(),
        other_color: OtherColor {
            info: "#00d4ff".to_string(),
            success: "#00ff88".to_string(),
            warning: "#ffaa00".to_string(),
            error: "#ff3366".to_string(),
        },
        is_info_follow_primary: true,
        reset_cache_strategy: ResetCacheStrategy::Close,
        layout: LayoutSetting {
            mode: LayoutMode::Vertical,
            scroll_mode: ScrollMode::Content,
            reverse_horizontal_mix: false,
        },
        page: PageSetting {
            animate: true,
            animate_mode: PageAnimateMode::FadeSlide,
        },
        header: HeaderSetting {
            height: 56,
            breadcrumb: BreadcrumbSetting {
                visible: false,
                show_icon: true,
            },
            multilingual: MultilingualSetting { visible: false },
        },
        tab: TabSetting {
            visible: false,
            cache: true,
            height: 44,
            mode: TabMode::Chrome,
        },
        fixed_header_and_tab: true,
        sider: SiderSetting {
            inverted: false,
            width: 200,
            collapsed_width: 64,
            mix_width: 90,
            mix_collapsed_width: 64,
            mix_child_menu_width: 200,
        },
        footer: FooterSetting {
            visible: false,
            fixed: false,
            height: 48,
            right: true,
        },
        watermark: WatermarkSetting {
            visible: false,
            text: "InferaFlow".to_string(),
        },
        tokens: ThemeSettingTokens {
            light: BaseToken {
                colors: token_map(&[
                    ("container", "rgb(17, 24, 39)"),
                    ("layout", "rgb(10, 14, 26)"),
                    ("inverted", "rgb(0, 212, 255)"),
                    ("base-text", "rgb(226, 232, 240)"),
                ]),
                box_shadow: token_map(&[
                    ("header", "0 1px 2px rgba(0, 0, 0, 0.3)"),
                    ("sider", "2px 0 8px 0 rgba(0, 0, 0, 0.3)"),
                    ("tab", "0 1px 2px rgba(0, 0, 0, 0.3)"),
                ]),
            },
            dark: Some(BaseToken {
                colors: token_map(&[
                    ("container", "rgb(17, 24, 39)"),
                    ("layout", "rgb(10, 14, 26)"),
                    ("base-text", "rgb(226, 232, 240)"),
                ]),
                box_shadow: token_map(&[
                    ("header", "0 1px 2px rgba(0, 0, 0, 0.5)"),
                    ("sider", "2px 0 8px 0 rgba(0, 0, 0, 0.5)"),
                    ("tab", "0 1px 2px rgba(0, 0, 0, 0.5)"),
                ]),
            }),
        },
    }
}

/// Patch applied once per build on top of cached user settings.
///
/// Add fields here when a release must force a setting onto existing users.
pub fn override_theme_settings() -> ThemeSettingPatch {
    ThemeSettingPatch::default()
}
