//! Explorer configuration.
//!
//! One immutable value holding the generator registry, the curve registry,
//! and the settings defaults. It is constructed explicitly at startup and
//! injected into the state store and renderer — there is no module-level
//! singleton to mutate.

use crate::curves::{standard_curves, CurveType};
use crate::datasets::{standard_generators, DatasetGenerator};

pub const PLAY_ANIMATIONS: &str = "Play animations";
pub const SHOW_DATA_POINTS: &str = "Show data points";

/// The value carried by one setting.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl SettingValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// A named, independently toggleable setting.
#[derive(Debug, Clone, PartialEq)]
pub struct Setting {
    pub name: String,
    pub value: SettingValue,
}

impl Setting {
    pub fn bool(name: impl Into<String>, default: bool) -> Self {
        Self {
            name: name.into(),
            value: SettingValue::Bool(default),
        }
    }
}

/// Immutable registries plus settings defaults.
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    pub generators: Vec<DatasetGenerator>,
    pub curves: Vec<CurveType>,
    pub settings: Vec<Setting>,
}

impl ExplorerConfig {
    /// The standard configuration: three generators, eighteen curves, two
    /// boolean settings.
    pub fn standard() -> Self {
        Self {
            generators: standard_generators(),
            curves: standard_curves(),
            settings: vec![
                Setting::bool(PLAY_ANIMATIONS, true),
                Setting::bool(SHOW_DATA_POINTS, true),
            ],
        }
    }

    pub fn generator_index(&self, name: &str) -> Option<usize> {
        self.generators.iter().position(|g| g.name == name)
    }

    pub fn curve_index(&self, name: &str) -> Option<usize> {
        self.curves
            .iter()
            .position(|c| c.name().eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_config_defaults() {
        let config = ExplorerConfig::standard();
        assert_eq!(config.generators.len(), 3);
        assert_eq!(config.curves.len(), 18);
        assert_eq!(
            config.settings[0].value,
            SettingValue::Bool(true),
        );
        assert_eq!(config.settings[0].name, PLAY_ANIMATIONS);
    }

    #[test]
    fn lookup_by_name() {
        let config = ExplorerConfig::standard();
        assert_eq!(config.generator_index("Rings"), Some(2));
        assert_eq!(config.curve_index("linear"), Some(10));
        assert_eq!(config.curve_index("nope"), None);
    }
}
