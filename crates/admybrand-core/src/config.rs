use crate::calculator::CalculatorInput;
use serde::{Deserialize, Serialize};

/// Everything about the page that is not fixed copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LandingConfig {
    #[serde(default)]
    pub brand: BrandConfig,
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub header: HeaderConfig,
    #[serde(default)]
    pub calculator: CalculatorConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandConfig {
    pub name: String,
    pub monogram: String,
    pub product: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: "ADmyBRAND".to_string(),
            monogram: "A".to_string(),
            product: "ADmyBRAND AI Suite".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub video_id: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            video_id: "ZK-rNEhJIDs".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    pub theme_storage_key: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: "theme".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub initial: CalculatorInput,
}

impl CalculatorConfig {
    /// Starting slider positions, clamped and snapped into the slider ranges.
    pub fn input(&self) -> CalculatorInput {
        CalculatorInput::new(self.initial.team_size, self.initial.monthly_words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config: LandingConfig =
            serde_json::from_str(r#"{"demo": {"video_id": "abc123"}}"#).unwrap();

        assert_eq!(config.demo.video_id, "abc123");
        assert_eq!(config.brand.name, "ADmyBRAND");
        assert_eq!(config.header.theme_storage_key, "theme");
        assert_eq!(config.calculator.initial, CalculatorInput::default());
    }

    #[test]
    fn partial_brand_section() {
        let config: LandingConfig =
            serde_json::from_str(r#"{"brand": {"name": "Acme"}}"#).unwrap();

        assert_eq!(config.brand.name, "Acme");
        assert_eq!(config.brand.monogram, "A");
    }

    #[test]
    fn empty_sections_keep_defaults() {
        let config: LandingConfig =
            serde_json::from_str(r#"{"demo": {}, "header": {}, "brand": {"name": "Acme"}}"#)
                .unwrap();

        assert_eq!(config.demo, DemoConfig::default());
        assert_eq!(config.header.theme_storage_key, "theme");
        assert_eq!(config.brand.name, "Acme");
    }

    #[test]
    fn partial_calculator_input() {
        let config: LandingConfig =
            serde_json::from_str(r#"{"calculator": {"initial": {"team_size": 10}}}"#).unwrap();

        assert_eq!(config.calculator.initial.team_size, 10);
        assert_eq!(config.calculator.initial.monthly_words, 10_000);
    }

    #[test]
    fn calculator_input_is_clamped_on_load() {
        let config: LandingConfig = serde_json::from_str(
            r#"{"calculator": {"initial": {"team_size": 0, "monthly_words": 999999}}}"#,
        )
        .unwrap();
        assert_eq!(config.calculator.initial.team_size, 0);
        assert_eq!(
            config.calculator.input(),
            CalculatorInput { team_size: 1, monthly_words: 200_000 }
        );

        let off_step = CalculatorConfig {
            initial: CalculatorInput { team_size: 250, monthly_words: 12_345 },
        };
        assert_eq!(
            off_step.input(),
            CalculatorInput { team_size: 100, monthly_words: 10_000 }
        );
    }

    #[test]
    fn empty_document_is_default() {
        let config: LandingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LandingConfig::default());
    }
}
