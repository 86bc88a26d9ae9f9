//! Token sets to CSS custom properties, injected through one style element.
//!
//! Color tokens are emitted as bare `r g b` channel triplets so consumer CSS
//! can composite them with `rgb(var(--primary-color) / 0.5)`. Other
//! categories are emitted verbatim.

mod host;
mod schema;

pub use host::{HtmlDocument, StyleElement, StyleHost, StyleNode};
pub use schema::{css_var_name, theme_vars, ThemeVar, TokenCategory};

use std::fmt::Write as _;

use crate::color::to_channels;
use crate::tokens::ThemeTokens;

/// Id of the single style element holding the theme variables.
pub const STYLE_ELEMENT_ID: &str = "theme-vars";
/// Root element class that activates the dark-scoped variables.
pub const DARK_CLASS: &str = "dark";

const GRAYSCALE_FILTER: &str = "grayscale(100%)";
const COLOUR_WEAKNESS_FILTER: &str = "invert(80%)";

/// `(property, value)` pairs for every schema entry the token set fills.
///
/// Tokens without a schema entry are never visited; schema entries without a
/// token, or with a color that does not parse, are left undefined.
pub fn css_var_declarations(tokens: &ThemeTokens) -> Vec<(String, String)> {
    let mut declarations = Vec::with_capacity(theme_vars().len());
    for var in theme_vars() {
        let value = match var.category {
            TokenCategory::Colors => tokens.colors.get(&var.token),
            TokenCategory::BoxShadow => tokens.box_shadow.get(&var.token),
        };
        let Some(value) = value else {
            continue;
        };

        let css_value = match var.category {
            TokenCategory::Colors => match to_channels(value) {
                Ok(rgb) => rgb.to_channel_triplet(),
                Err(err) => {
                    tracing::warn!(
                        token = %var.token,
                        %err,
                        "skipping color token that is not a valid color"
                    );
                    continue;
                }
            },
            TokenCategory::BoxShadow => value.clone(),
        };
        declarations.push((var.property_name(), css_value));
    }
    declarations
}

fn render_rule(selector: &str, declarations: &[(String, String)]) -> String {
    let mut rule = format!("{selector} {{\n");
    for (name, value) in declarations {
        let _ = writeln!(rule, "  {name}: {value};");
    }
    rule.push_str("}\n");
    rule
}

/// Root rule for light tokens followed by the dark-class rule.
pub fn render_theme_css(tokens: &ThemeTokens, dark_tokens: &ThemeTokens) -> String {
    let mut css = render_rule(":root", &css_var_declarations(tokens));
    css.push_str(&render_rule(
        &format!("html.{DARK_CLASS}"),
        &css_var_declarations(dark_tokens),
    ));
    css
}

/// Space separated CSS filter for the accessibility color modes.
pub fn auxiliary_filter(grayscale: bool, colour_weakness: bool) -> String {
    [
        grayscale.then_some(GRAYSCALE_FILTER),
        colour_weakness.then_some(COLOUR_WEAKNESS_FILTER),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ")
}

/// Owns the host document and the handle of the theme style element.
///
/// The element is located or created once, in [`ThemeStyleSheet::attach`];
/// every emission overwrites its text, so repeated emissions never add nodes.
pub struct ThemeStyleSheet<H: StyleHost> {
    host: H,
    handle: H::StyleHandle,
}

impl<H: StyleHost> ThemeStyleSheet<H> {
    pub fn attach(mut host: H) -> Self {
        let handle = host.find_or_create_style(STYLE_ELEMENT_ID);
        Self { host, handle }
    }

    pub fn emit(&mut self, tokens: &ThemeTokens, dark_tokens: &ThemeTokens) {
        let css = render_theme_css(tokens, dark_tokens);
        self.host.set_style_text(&self.handle, &css);
        tracing::debug!(bytes = css.len(), "theme variables injected");
    }

    pub fn set_dark_mode(&mut self, enabled: bool) {
        self.host.set_root_class(DARK_CLASS, enabled);
    }

    pub fn set_auxiliary_color_modes(&mut self, grayscale: bool, colour_weakness: bool) {
        self.host
            .set_root_filter(&auxiliary_filter(grayscale, colour_weakness));
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn to_map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn tokens(colors: &[(&str, &str)], shadows: &[(&str, &str)]) -> ThemeTokens {
        ThemeTokens {
            colors: to_map(colors),
            box_shadow: to_map(shadows),
        }
    }

    #[test]
    fn color_tokens_emit_channel_triplets() {
        let light = tokens(&[("primary", "#00d4ff")], &[]);
        let declarations = css_var_declarations(&light);
        assert_eq!(
            declarations,
            vec![("--primary-color".to_string(), "0 212 255".to_string())]
        );
    }

    #[test]
    fn rgb_function_tokens_decompose_too() {
        let light = tokens(&[("container", "rgb(17, 24, 39)")], &[]);
        let css = render_theme_css(&light, &light);
        assert!(css.contains("--container-bg-color: 17 24 39;"));
    }

    #[test]
    fn shadow_tokens_emit_raw_values() {
        let light = tokens(&[], &[("header", "0 1px 2px rgba(0, 0, 0, 0.3)")]);
        let declarations = css_var_declarations(&light);
        assert_eq!(
            declarations,
            vec![(
                "--header-box-shadow".to_string(),
                "0 1px 2px rgba(0, 0, 0, 0.3)".to_string()
            )]
        );
    }

    #[test]
    fn tokens_without_schema_entry_are_dropped() {
        let light = tokens(&[("sparkle", "#ffffff"), ("info", "#00d4ff")], &[("modal", "none")]);
        let css = render_theme_css(&light, &light);
        assert!(!css.contains("sparkle"));
        assert!(!css.contains("modal"));
        assert!(css.contains("--info-color: 0 212 255;"));
    }

    #[test]
    fn invalid_color_tokens_leave_the_variable_undefined() {
        let light = tokens(&[("primary", "not-a-color"), ("error", "#ff3366")], &[]);
        let declarations = css_var_declarations(&light);
        assert_eq!(
            declarations,
            vec![("--error-color".to_string(), "255 51 102".to_string())]
        );
    }

    #[test]
    fn css_contains_root_and_dark_rules() {
        let light = tokens(&[("layout", "rgb(10, 14, 26)")], &[]);
        let dark = tokens(&[("layout", "#000000")], &[]);
        assert_eq!(
            render_theme_css(&light, &dark),
            ":root {\n  --layout-bg-color: 10 14 26;\n}\nhtml.dark {\n  --layout-bg-color: 0 0 0;\n}\n"
        );
    }

    #[test]
    fn emission_is_idempotent() {
        let light = tokens(&[("primary", "#00d4ff")], &[("tab", "none")]);
        let mut sheet = ThemeStyleSheet::attach(HtmlDocument::new());

        sheet.emit(&light, &light);
        let first = sheet.host().style_elements().to_vec();
        sheet.emit(&light, &light);

        assert_eq!(sheet.host().style_elements().len(), 1);
        assert_eq!(sheet.host().style_elements(), first.as_slice());
    }

    #[test]
    fn attach_reuses_an_existing_element() {
        let mut document = HtmlDocument::new();
        let node = document.find_or_create_style(STYLE_ELEMENT_ID);
        document.set_style_text(&node, "stale");

        let mut sheet = ThemeStyleSheet::attach(document);
        sheet.emit(&ThemeTokens::default(), &ThemeTokens::default());
        let document = sheet.into_host();
        assert_eq!(document.style_elements().len(), 1);
        assert_eq!(
            document.style_by_id(STYLE_ELEMENT_ID).map(|e| e.text.as_str()),
            Some(":root {\n}\nhtml.dark {\n}\n")
        );
    }

    #[test]
    fn auxiliary_filter_joins_active_modes() {
        assert_eq!(auxiliary_filter(false, false), "");
        assert_eq!(auxiliary_filter(true, false), "grayscale(100%)");
        assert_eq!(auxiliary_filter(false, true), "invert(80%)");
        assert_eq!(auxiliary_filter(true, true), "grayscale(100%) invert(80%)");
    }

    #[test]
    fn dark_mode_toggles_the_root_class() {
        let mut sheet = ThemeStyleSheet::attach(HtmlDocument::new());
        sheet.set_dark_mode(true);
        assert!(sheet.host().has_root_class(DARK_CLASS));
        sheet.set_auxiliary_color_modes(true, false);
        assert_eq!(sheet.host().root_filter(), "grayscale(100%)");
        sheet.set_dark_mode(false);
        assert!(!sheet.host().has_root_class(DARK_CLASS));
    }
}
