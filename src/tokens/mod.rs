use std::collections::BTreeMap;

use crate::color::{ColorResult, PaletteDeriver};
use crate::theme::{ThemeColorKey, ThemeColorSet, ThemeSettingTokens};

/// Shade that stands in for a semantic color outside palette-aware contexts.
pub const CANONICAL_SHADE: u16 = 500;

/// Token carrying the progress-bar color.
const NPROGRESS_TOKEN: &str = "nprogress";

/// Resolved CSS values for one color mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeTokens {
    pub colors: BTreeMap<String, String>,
    pub box_shadow: BTreeMap<String, String>,
}

pub type DarkThemeTokens = ThemeTokens;

/// `key` plus `key-<shade>` entries for every semantic color.
pub fn palette_color_tokens<D: PaletteDeriver + ?Sized>(
    deriver: &D,
    colors: &ThemeColorSet,
    recommended: bool,
) -> ColorResult<BTreeMap<String, String>> {
    let mut tokens = BTreeMap::new();
    for (key, color) in colors.iter() {
        let palette = deriver.derive_palette(color, recommended)?;
        if let Some(base) = palette.get(&CANONICAL_SHADE) {
            tokens.insert(key.as_str().to_string(), base.clone());
        }
        for (shade, hex) in palette {
            tokens.insert(format!("{}-{shade}", key.as_str()), hex);
        }
    }
    Ok(tokens)
}

/// Builds the light and dark token sets.
///
/// Precedence, lowest first: derived palette, light overrides. Dark mode
/// starts from the finished light set and layers the dark overrides on top,
/// so anything dark mode does not redefine matches light mode.
pub fn build_tokens<D: PaletteDeriver + ?Sized>(
    deriver: &D,
    colors: &ThemeColorSet,
    tokens: &ThemeSettingTokens,
    recommended: bool,
) -> ColorResult<(ThemeTokens, DarkThemeTokens)> {
    let mut light_colors = palette_color_tokens(deriver, colors, recommended)?;
    let primary_token = ThemeColorKey::Primary.as_str();
    if let Some(primary) = light_colors.get(primary_token).cloned() {
        light_colors.insert(NPROGRESS_TOKEN.to_string(), primary);
    }
    extend_cloned(&mut light_colors, &tokens.light.colors);

    let light = ThemeTokens {
        colors: light_colors,
        box_shadow: tokens.light.box_shadow.clone(),
    };

    let mut dark = light.clone();
    if let Some(dark_overrides) = &tokens.dark {
        extend_cloned(&mut dark.colors, &dark_overrides.colors);
        extend_cloned(&mut dark.box_shadow, &dark_overrides.box_shadow);
    }

    tracing::debug!(
        colors = light.colors.len(),
        box_shadows = light.box_shadow.len(),
        "built theme tokens"
    );
    Ok((light, dark))
}

fn extend_cloned(target: &mut BTreeMap<String, String>, source: &BTreeMap<String, String>) {
    target.extend(
        source
            .iter()
            .map(|(name, value)| (name.clone(), value.clone())),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{ColorError, HsvPaletteDeriver, SHADES};
    use crate::theme::{default_theme_settings, BaseToken};

    fn default_inputs() -> (ThemeColorSet, ThemeSettingTokens) {
        let settings = default_theme_settings();
        (ThemeColorSet::from_settings(&settings), settings.tokens)
    }

    #[test]
    fn palette_tokens_include_every_shade_and_the_base_key() {
        let (colors, _) = default_inputs();
        let tokens = palette_color_tokens(&HsvPaletteDeriver, &colors, false).unwrap();

        for key in ThemeColorKey::ALL {
            assert!(tokens.contains_key(key.as_str()));
            for shade in SHADES {
                assert!(tokens.contains_key(&format!("{}-{shade}", key.as_str())));
            }
        }
        assert_eq!(tokens.len(), ThemeColorKey::ALL.len() * (SHADES.len() + 1));
    }

    #[test]
    fn base_key_uses_the_canonical_shade() {
        let (colors, tokens) = default_inputs();
        let (light, _) = build_tokens(&HsvPaletteDeriver, &colors, &tokens, false).unwrap();
        assert_eq!(light.colors["primary"], light.colors["primary-500"]);
        assert_eq!(light.colors["success"], "#00ff88");
        assert_eq!(light.colors["nprogress"], light.colors["primary"]);
    }

    #[test]
    fn explicit_light_override_beats_derived_value() {
        let (colors, mut tokens) = default_inputs();
        tokens
            .light
            .colors
            .insert("primary-300".to_string(), "#123456".to_string());
        tokens
            .light
            .colors
            .insert("error".to_string(), "rgb(200, 0, 0)".to_string());

        let (light, dark) = build_tokens(&HsvPaletteDeriver, &colors, &tokens, false).unwrap();
        assert_eq!(light.colors["primary-300"], "#123456");
        assert_eq!(light.colors["error"], "rgb(200, 0, 0)");
        assert_eq!(dark.colors["primary-300"], "#123456");
    }

    #[test]
    fn dark_tokens_inherit_light_values_without_override() {
        let (colors, tokens) = default_inputs();
        let (light, dark) = build_tokens(&HsvPaletteDeriver, &colors, &tokens, false).unwrap();

        assert_eq!(dark.colors["inverted"], light.colors["inverted"]);
        assert_eq!(dark.colors["warning-700"], light.colors["warning-700"]);
    }

    #[test]
    fn dark_overrides_layer_over_light() {
        let (colors, mut tokens) = default_inputs();
        let dark_overrides = tokens.dark.get_or_insert_with(BaseToken::default);
        dark_overrides
            .colors
            .insert("container".to_string(), "rgb(0, 0, 0)".to_string());

        let (light, dark) = build_tokens(&HsvPaletteDeriver, &colors, &tokens, false).unwrap();
        assert_eq!(light.colors["container"], "rgb(17, 24, 39)");
        assert_eq!(dark.colors["container"], "rgb(0, 0, 0)");
        assert_eq!(light.box_shadow["sider"], "2px 0 8px 0 rgba(0, 0, 0, 0.3)");
        assert_eq!(dark.box_shadow["sider"], "2px 0 8px 0 rgba(0, 0, 0, 0.5)");
    }

    #[test]
    fn missing_dark_block_mirrors_light() {
        let (colors, mut tokens) = default_inputs();
        tokens.dark = None;
        let (light, dark) = build_tokens(&HsvPaletteDeriver, &colors, &tokens, false).unwrap();
        assert_eq!(light, dark);
    }

    #[test]
    fn invalid_base_color_fails_the_build() {
        let (mut colors, tokens) = default_inputs();
        colors.warning = "orange-ish".to_string();
        let err = build_tokens(&HsvPaletteDeriver, &colors, &tokens, false).unwrap_err();
        assert_eq!(err, ColorError::Invalid("orange-ish".to_string()));
    }
}
