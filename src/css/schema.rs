use std::sync::OnceLock;

use crate::color::SHADES;
use crate::theme::ThemeColorKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenCategory {
    Colors,
    BoxShadow,
}

impl TokenCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Colors => "colors",
            Self::BoxShadow => "boxShadow",
        }
    }
}

/// One wired token: where its value lives and the CSS reference consumers use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeVar {
    pub category: TokenCategory,
    pub token: String,
    /// Reference as written in utility CSS, e.g. `rgb(var(--primary-color))`.
    pub reference: String,
}

impl ThemeVar {
    fn color(token: impl Into<String>, property: &str) -> Self {
        Self {
            category: TokenCategory::Colors,
            token: token.into(),
            reference: format!("rgb(var(--{property}))"),
        }
    }

    fn box_shadow(token: &str) -> Self {
        Self {
            category: TokenCategory::BoxShadow,
            token: token.to_string(),
            reference: format!("var(--{token}-box-shadow)"),
        }
    }

    /// Custom property name behind [`Self::reference`].
    pub fn property_name(&self) -> String {
        css_var_name(&self.reference, self.category)
    }
}

/// Strips one `var(` wrapper, and for colors one `rgb(` wrapper, each with a
/// single closing paren, leaving the bare `--name`.
pub fn css_var_name(reference: &str, category: TokenCategory) -> String {
    let name = strip_wrapper(reference, "var(");
    match category {
        TokenCategory::Colors => strip_wrapper(&name, "rgb("),
        TokenCategory::BoxShadow => name,
    }
}

fn strip_wrapper(value: &str, prefix: &str) -> String {
    value.replacen(prefix, "", 1).replacen(')', "", 1)
}

/// Every token the stylesheet knows about, in emission order.
pub fn theme_vars() -> &'static [ThemeVar] {
    static VARS: OnceLock<Vec<ThemeVar>> = OnceLock::new();
    VARS.get_or_init(build_theme_vars)
}

fn build_theme_vars() -> Vec<ThemeVar> {
    let mut vars = Vec::new();
    for key in ThemeColorKey::ALL {
        let name = key.as_str();
        vars.push(ThemeVar::color(name, &format!("{name}-color")));
        for shade in SHADES {
            vars.push(ThemeVar::color(
                format!("{name}-{shade}"),
                &format!("{name}-{shade}-color"),
            ));
        }
    }
    vars.push(ThemeVar::color("nprogress", "nprogress-color"));
    vars.push(ThemeVar::color("container", "container-bg-color"));
    vars.push(ThemeVar::color("layout", "layout-bg-color"));
    vars.push(ThemeVar::color("inverted", "inverted-bg-color"));
    vars.push(ThemeVar::color("base-text", "base-text-color"));

    for token in ["header", "sider", "tab"] {
        vars.push(ThemeVar::box_shadow(token));
    }
    vars
}
