//! Color overrides for the UI component library's theming API.

mod constants;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::color::{with_alpha, ColorResult, PaletteDeriver};
use crate::theme::ThemeColorSet;

use constants::{COMMON_CONSTANTS, COMPONENT_CONSTANTS};

const HOVER_SHADE: u16 = 500;
const PRESSED_SHADE: u16 = 700;
const ACTIVE_ALPHA: f64 = 0.1;

/// Interaction state a semantic color is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScene {
    Base,
    Suppl,
    Hover,
    Pressed,
    Active,
}

impl ColorScene {
    pub const ALL: [Self; 5] = [
        Self::Base,
        Self::Suppl,
        Self::Hover,
        Self::Pressed,
        Self::Active,
    ];

    /// Suffix after `<key>Color` in the override key.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Base => "",
            Self::Suppl => "Suppl",
            Self::Hover => "Hover",
            Self::Pressed => "Pressed",
            Self::Active => "Active",
        }
    }

    pub fn transform<D: PaletteDeriver + ?Sized>(
        self,
        deriver: &D,
        color: &str,
        recommended: bool,
    ) -> ColorResult<String> {
        match self {
            Self::Base | Self::Suppl => Ok(color.to_string()),
            Self::Hover => deriver.color_at_shade(color, HOVER_SHADE, recommended),
            Self::Pressed => deriver.color_at_shade(color, PRESSED_SHADE, recommended),
            Self::Active => with_alpha(color, ACTIVE_ALPHA),
        }
    }
}

/// Serializes to the override object the component library consumes:
/// `common` plus one object per component name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrameworkThemeOverride {
    pub common: BTreeMap<String, String>,
    #[serde(flatten)]
    pub components: BTreeMap<String, BTreeMap<String, String>>,
}

impl FrameworkThemeOverride {
    pub fn component(&self, name: &str) -> Option<&BTreeMap<String, String>> {
        self.components.get(name)
    }
}

/// `<key>Color<Scene>` for every semantic key and scene.
pub fn framework_theme_colors<D: PaletteDeriver + ?Sized>(
    deriver: &D,
    colors: &ThemeColorSet,
    recommended: bool,
) -> ColorResult<BTreeMap<String, String>> {
    let mut scene_colors = BTreeMap::new();
    for (key, color) in colors.iter() {
        for scene in ColorScene::ALL {
            let name = format!("{}Color{}", key.as_str(), scene.suffix());
            scene_colors.insert(name, scene.transform(deriver, color, recommended)?);
        }
    }
    Ok(scene_colors)
}

pub fn map_to_framework_theme<D: PaletteDeriver + ?Sized>(
    deriver: &D,
    colors: &ThemeColorSet,
    recommended: bool,
) -> ColorResult<FrameworkThemeOverride> {
    let mut common = framework_theme_colors(deriver, colors, recommended)?;
    common.extend(
        COMMON_CONSTANTS
            .iter()
            .map(|(name, value)| ((*name).to_string(), (*value).to_string())),
    );

    let mut components: BTreeMap<String, BTreeMap<String, String>> = COMPONENT_CONSTANTS
        .iter()
        .map(|(component, entries)| {
            let entries = entries
                .iter()
                .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
                .collect();
            ((*component).to_string(), entries)
        })
        .collect();
    components
        .entry("LoadingBar".to_string())
        .or_default()
        .insert("colorLoading".to_string(), colors.primary.clone());

    Ok(FrameworkThemeOverride { common, components })
}
