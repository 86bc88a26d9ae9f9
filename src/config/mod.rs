use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ConfigPathError {
    MissingHomeDirectory,
}

pub(crate) const APP_DIR: &str = "inferaflow";

const BUILD_MODE_ENV: &str = "INFERAFLOW_THEME_MODE";

/// Identifies the build for one-time override invalidation.
pub const BUILD_ID: &str = match option_env!("INFERAFLOW_BUILD_ID") {
    Some(id) => id,
    None => env!("CARGO_PKG_VERSION"),
};

/// Development builds read the shipped defaults directly and never cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    /// `INFERAFLOW_THEME_MODE` wins; otherwise debug builds are development.
    pub fn from_env() -> Self {
        let raw = std::env::var(BUILD_MODE_ENV).ok();
        Self::from_env_value(raw.as_deref())
    }

    fn from_env_value(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("development") => Self::Development,
            Some(value) if value.eq_ignore_ascii_case("production") => Self::Production,
            Some(value) => {
                tracing::warn!(
                    env = BUILD_MODE_ENV,
                    value,
                    "unknown build mode; expected development or production"
                );
                Self::compiled_default()
            }
            None => Self::compiled_default(),
        }
    }

    const fn compiled_default() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }

    pub const fn caches_settings(self) -> bool {
        matches!(self, Self::Production)
    }
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf, ConfigPathError> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigPathError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}
