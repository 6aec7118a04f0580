use nivaran_atoms::labels::{AnimalVocabulary, DetectionRequest, DEFAULT_ANIMAL_LABELS};
use std::env;
use thiserror::Error;

pub const DEFAULT_IMAGES_BUCKET: &str = "nivaran-animal-images2";
pub const DEFAULT_CASES_TABLE: &str = "nivaran-cases-table";
pub const DEFAULT_NGOS_TABLE: &str = "ngos-table";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a valid number, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} is out of range: {message}")]
    OutOfRange { name: &'static str, message: String },

    #[error("ANIMAL_LABELS must name at least one label")]
    EmptyVocabulary,
}

/// Lambda configuration, read once per cold start.
#[derive(Debug, Clone)]
pub struct Config {
    pub images_bucket: String,
    pub cases_table: String,
    pub ngos_table: String,
    pub animal_labels: AnimalVocabulary,
    pub detection: DetectionRequest,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`Config::from_env`] but reads variables through `lookup`.
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let animal_labels = match var("ANIMAL_LABELS") {
            Some(csv) => AnimalVocabulary::from_csv(&csv),
            None => AnimalVocabulary::new(DEFAULT_ANIMAL_LABELS),
        };
        if animal_labels.is_empty() {
            return Err(ConfigError::EmptyVocabulary);
        }

        let defaults = DetectionRequest::default();

        let max_labels = match var("MAX_LABELS") {
            Some(raw) => parse_number::<i32>("MAX_LABELS", &raw)?,
            None => defaults.max_labels,
        };
        if max_labels < 1 {
            return Err(ConfigError::OutOfRange {
                name: "MAX_LABELS",
                message: format!("must be at least 1, got {}", max_labels),
            });
        }

        let min_confidence = match var("MIN_CONFIDENCE") {
            Some(raw) => parse_number::<f32>("MIN_CONFIDENCE", &raw)?,
            None => defaults.min_confidence,
        };
        if !(0.0..=100.0).contains(&min_confidence) {
            return Err(ConfigError::OutOfRange {
                name: "MIN_CONFIDENCE",
                message: format!("must be between 0 and 100, got {}", min_confidence),
            });
        }

        Ok(Self {
            images_bucket: var("IMAGES_BUCKET").unwrap_or_else(|| DEFAULT_IMAGES_BUCKET.to_string()),
            cases_table: var("CASES_TABLE").unwrap_or_else(|| DEFAULT_CASES_TABLE.to_string()),
            ngos_table: var("NGOS_TABLE").unwrap_or_else(|| DEFAULT_NGOS_TABLE.to_string()),
            animal_labels,
            detection: DetectionRequest {
                max_labels,
                min_confidence,
            },
        })
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        name,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.images_bucket, "nivaran-animal-images2");
        assert_eq!(config.cases_table, "nivaran-cases-table");
        assert_eq!(config.ngos_table, "ngos-table");
        assert_eq!(config.detection, DetectionRequest::default());
        assert_eq!(config.animal_labels, AnimalVocabulary::default());
        assert!(config.animal_labels.contains("cow"));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("IMAGES_BUCKET", "staging-images"),
            ("CASES_TABLE", "NivaranCases"),
            ("NGOS_TABLE", "staging-ngos"),
            ("ANIMAL_LABELS", "cat,dog,animal,mammal,bird"),
            ("MAX_LABELS", "5"),
            ("MIN_CONFIDENCE", "90.5"),
        ])
        .unwrap();

        assert_eq!(config.images_bucket, "staging-images");
        assert_eq!(config.cases_table, "NivaranCases");
        assert_eq!(config.ngos_table, "staging-ngos");
        assert_eq!(config.animal_labels.len(), 5);
        assert!(!config.animal_labels.contains("cow"));
        assert_eq!(config.detection.max_labels, 5);
        assert_eq!(config.detection.min_confidence, 90.5);
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = config_from(&[("CASES_TABLE", "  "), ("MAX_LABELS", "")]).unwrap();
        assert_eq!(config.cases_table, "nivaran-cases-table");
        assert_eq!(config.detection.max_labels, 10);
    }

    #[test]
    fn test_invalid_numbers() {
        assert_eq!(
            config_from(&[("MAX_LABELS", "ten")]).unwrap_err(),
            ConfigError::InvalidNumber {
                name: "MAX_LABELS",
                value: "ten".to_string()
            }
        );
        assert!(matches!(
            config_from(&[("MIN_CONFIDENCE", "150")]),
            Err(ConfigError::OutOfRange { name: "MIN_CONFIDENCE", .. })
        ));
        assert!(matches!(
            config_from(&[("MAX_LABELS", "0")]),
            Err(ConfigError::OutOfRange { name: "MAX_LABELS", .. })
        ));
    }

    #[test]
    fn test_empty_vocabulary_is_rejected() {
        assert_eq!(
            config_from(&[("ANIMAL_LABELS", ", ,")]).unwrap_err(),
            ConfigError::EmptyVocabulary
        );
    }
}
