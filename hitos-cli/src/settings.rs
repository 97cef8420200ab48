use std::path::Path;
use std::str::FromStr;

use hitos::view::{SortKey, DEFAULT_PAGE_SIZE};
use hitos::{ProjectInfo, RiskThresholds, SettingsError};
use serde::Deserialize;
use strum::{Display, EnumString};

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Settings {
    pub project: ProjectInfo,
    pub risk: RiskThresholds,
    pub view: ViewSettings,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ViewSettings {
    pub page_size: usize,
    pub sort: SortKey,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            sort: SortKey::default(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.project.validate()?;
        self.risk.validate()
    }
}

/// Layers `base.yaml`, then `<environment>.yaml`, then `HITOS_*` environment
/// variables (`HITOS_RISK__HIGH_MAX=25`). Both files are optional.
pub fn read_config(config_directory: &Path) -> Result<Settings, config::ConfigError> {
    let environment = Environment::from_str(
        std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .as_str(),
    )
    .map_err(|err| config::ConfigError::Message(format!("invalid APP_ENVIRONMENT: {err}")))?;
    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .add_source(config::File::from(config_directory.join("base.yaml")).required(false))
        .add_source(
            config::File::from(config_directory.join(environment_filename)).required(false),
        )
        .add_source(
            config::Environment::with_prefix("HITOS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Display, Debug, EnumString)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parses_case_insensitively() {
        assert!(matches!(
            Environment::from_str("PRODUCTION"),
            Ok(Environment::Production)
        ));
        assert_eq!(Environment::Local.to_string(), "local");
        assert!(Environment::from_str("staging").is_err());
    }

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert_eq!(settings.validate(), Ok(()));
        assert_eq!(settings.view.page_size, 20);
        assert_eq!(settings.view.sort, SortKey::Number);
    }

    #[test]
    fn reads_shipped_config_files() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("config");
        let settings = read_config(&dir).unwrap();
        assert_eq!(settings.project.tower, "13B");
        assert_eq!(settings.risk, RiskThresholds::default());
        assert_eq!(settings.validate(), Ok(()));
    }

    #[test]
    fn missing_directory_falls_back_to_defaults() {
        let settings = read_config(Path::new("/nonexistent/hitos-config")).unwrap();
        assert_eq!(settings.project.duration_months, 13);
    }
}
