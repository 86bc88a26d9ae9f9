//! Partial settings and the recursive merge that layers them.
//!
//! Every field is optional. Applying a patch overwrites the scalars it sets,
//! recurses into nested sections, and merges token maps key by key, so a
//! patch never removes anything from its target.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::settings::{
    BaseToken, BreadcrumbSetting, FooterSetting, HeaderSetting, LayoutMode, LayoutSetting,
    MultilingualSetting, OtherColor, PageAnimateMode, PageSetting, ResetCacheStrategy,
    ScrollMode, SiderSetting, TabMode, TabSetting, ThemeScheme, ThemeSetting,
    ThemeSettingTokens, WatermarkSetting,
};

fn assign<T: Clone>(slot: &mut T, value: Option<&T>) {
    if let Some(value) = value {
        slot.clone_from(value);
    }
}

fn merge_map(target: &mut BTreeMap<String, String>, patch: Option<&BTreeMap<String, String>>) {
    if let Some(patch) = patch {
        for (name, value) in patch {
            target.insert(name.clone(), value.clone());
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherColorPatch {
    pub info: Option<String>,
    pub success: Option<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
}

impl OtherColorPatch {
    fn apply_to(&self, target: &mut OtherColor) {
        assign(&mut target.info, self.info.as_ref());
        assign(&mut target.success, self.success.as_ref());
        assign(&mut target.warning, self.warning.as_ref());
        assign(&mut target.error, self.error.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPatch {
    pub mode: Option<LayoutMode>,
    pub scroll_mode: Option<ScrollMode>,
    pub reverse_horizontal_mix: Option<bool>,
}

impl LayoutPatch {
    fn apply_to(&self, target: &mut LayoutSetting) {
        assign(&mut target.mode, self.mode.as_ref());
        assign(&mut target.scroll_mode, self.scroll_mode.as_ref());
        assign(
            &mut target.reverse_horizontal_mix,
            self.reverse_horizontal_mix.as_ref(),
        );
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagePatch {
    pub animate: Option<bool>,
    pub animate_mode: Option<PageAnimateMode>,
}

impl PagePatch {
    fn apply_to(&self, target: &mut PageSetting) {
        assign(&mut target.animate, self.animate.as_ref());
        assign(&mut target.animate_mode, self.animate_mode.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbPatch {
    pub visible: Option<bool>,
    pub show_icon: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultilingualPatch {
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderPatch {
    pub height: Option<u32>,
    pub breadcrumb: Option<BreadcrumbPatch>,
    pub multilingual: Option<MultilingualPatch>,
}

impl HeaderPatch {
    fn apply_to(&self, target: &mut HeaderSetting) {
        assign(&mut target.height, self.height.as_ref());
        if let Some(breadcrumb) = &self.breadcrumb {
            let BreadcrumbSetting { visible, show_icon } = &mut target.breadcrumb;
            assign(visible, breadcrumb.visible.as_ref());
            assign(show_icon, breadcrumb.show_icon.as_ref());
        }
        if let Some(multilingual) = &self.multilingual {
            let MultilingualSetting { visible } = &mut target.multilingual;
            assign(visible, multilingual.visible.as_ref());
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabPatch {
    pub visible: Option<bool>,
    pub cache: Option<bool>,
    pub height: Option<u32>,
    pub mode: Option<TabMode>,
}

impl TabPatch {
    fn apply_to(&self, target: &mut TabSetting) {
        assign(&mut target.visible, self.visible.as_ref());
        assign(&mut target.cache, self.cache.as_ref());
        assign(&mut target.height, self.height.as_ref());
        assign(&mut target.mode, self.mode.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiderPatch {
    pub inverted: Option<bool>,
    pub width: Option<u32>,
    pub collapsed_width: Option<u32>,
    pub mix_width: Option<u32>,
    pub mix_collapsed_width: Option<u32>,
    pub mix_child_menu_width: Option<u32>,
}

impl SiderPatch {
    fn apply_to(&self, target: &mut SiderSetting) {
        assign(&mut target.inverted, self.inverted.as_ref());
        assign(&mut target.width, self.width.as_ref());
        assign(&mut target.collapsed_width, self.collapsed_width.as_ref());
        assign(&mut target.mix_width, self.mix_width.as_ref());
        assign(
            &mut target.mix_collapsed_width,
            self.mix_collapsed_width.as_ref(),
        );
        assign(
            &mut target.mix_child_menu_width,
            self.mix_child_menu_width.as_ref(),
        );
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterPatch {
    pub visible: Option<bool>,
    pub fixed: Option<bool>,
    pub height: Option<u32>,
    pub right: Option<bool>,
}

impl FooterPatch {
    fn apply_to(&self, target: &mut FooterSetting) {
        assign(&mut target.visible, self.visible.as_ref());
        assign(&mut target.fixed, self.fixed.as_ref());
        assign(&mut target.height, self.height.as_ref());
        assign(&mut target.right, self.right.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatermarkPatch {
    pub visible: Option<bool>,
    pub text: Option<String>,
}

impl WatermarkPatch {
    fn apply_to(&self, target: &mut WatermarkSetting) {
        assign(&mut target.visible, self.visible.as_ref());
        assign(&mut target.text, self.text.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseTokenPatch {
    pub colors: Option<BTreeMap<String, String>>,
    pub box_shadow: Option<BTreeMap<String, String>>,
}

impl BaseTokenPatch {
    fn apply_to(&self, target: &mut BaseToken) {
        merge_map(&mut target.colors, self.colors.as_ref());
        merge_map(&mut target.box_shadow, self.box_shadow.as_ref());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokensPatch {
    pub light: Option<BaseTokenPatch>,
    pub dark: Option<BaseTokenPatch>,
}

impl TokensPatch {
    fn apply_to(&self, target: &mut ThemeSettingTokens) {
        if let Some(light) = &self.light {
            light.apply_to(&mut target.light);
        }
        if let Some(dark) = &self.dark {
            dark.apply_to(target.dark.get_or_insert_with(BaseToken::default));
        }
    }
}

/// A partial [`ThemeSetting`], read from the persisted store or shipped as a
/// deployment override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSettingPatch {
    pub theme_scheme: Option<ThemeScheme>,
    pub grayscale: Option<bool>,
    pub colour_weakness: Option<bool>,
    pub recommend_color: Option<bool>,
    pub theme_color: Option<String>,
    pub other_color: Option<OtherColorPatch>,
    pub is_info_follow_primary: Option<bool>,
    pub reset_cache_strategy: Option<ResetCacheStrategy>,
    pub layout: Option<LayoutPatch>,
    pub page: Option<PagePatch>,
    pub header: Option<HeaderPatch>,
    pub tab: Option<TabPatch>,
    pub fixed_header_and_tab: Option<bool>,
    pub sider: Option<SiderPatch>,
    pub footer: Option<FooterPatch>,
    pub watermark: Option<WatermarkPatch>,
    pub tokens: Option<TokensPatch>,
}

impl ThemeSettingPatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Layers this patch onto `target`; values set here win.
    pub fn apply_to(&self, target: &mut ThemeSetting) {
        assign(&mut target.theme_scheme, self.theme_scheme.as_ref());
        assign(&mut target.grayscale, self.grayscale.as_ref());
        assign(&mut target.colour_weakness, self.colour_weakness.as_ref());
        assign(&mut target.recommend_color, self.recommend_color.as_ref());
        assign(&mut target.theme_color, self.theme_color.as_ref());
        if let Some(other_color) = &self.other_color {
            other_color.apply_to(&mut target.other_color);
        }
        assign(
            &mut target.is_info_follow_primary,
            self.is_info_follow_primary.as_ref(),
        );
        assign(
            &mut target.reset_cache_strategy,
            self.reset_cache_strategy.as_ref(),
        );
        if let Some(layout) = &self.layout {
            layout.apply_to(&mut target.layout);
        }
        if let Some(page) = &self.page {
            page.apply_to(&mut target.page);
        }
        if let Some(header) = &self.header {
            header.apply_to(&mut target.header);
        }
        if let Some(tab) = &self.tab {
            tab.apply_to(&mut target.tab);
        }
        assign(
            &mut target.fixed_header_and_tab,
            self.fixed_header_and_tab.as_ref(),
        );
        if let Some(sider) = &self.sider {
            sider.apply_to(&mut target.sider);
        }
        if let Some(footer) = &self.footer {
            footer.apply_to(&mut target.footer);
        }
        if let Some(watermark) = &self.watermark {
            watermark.apply_to(&mut target.watermark);
        }
        if let Some(tokens) = &self.tokens {
            tokens.apply_to(&mut target.tokens);
        }
    }

    pub fn merged_onto(&self, base: &ThemeSetting) -> ThemeSetting {
        let mut merged = base.clone();
        self.apply_to(&mut merged);
        merged
    }
}
