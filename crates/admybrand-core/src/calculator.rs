use serde::{Deserialize, Serialize};

use crate::error::{LandingError, Result};
use crate::plan::{recommend, Plan};

/// Bounds and step of a range slider, mirroring its `min`/`max`/`step` attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
}

pub const TEAM_SIZE_RANGE: SliderRange = SliderRange {
    min: 1,
    max: 100,
    step: 1,
};

pub const MONTHLY_WORDS_RANGE: SliderRange = SliderRange {
    min: 5_000,
    max: 200_000,
    step: 5_000,
};

impl SliderRange {
    /// Clamps into `[min, max]` and snaps down onto the step grid anchored at `min`.
    pub fn clamp(&self, value: u32) -> u32 {
        let value = value.clamp(self.min, self.max);
        let step = self.step.max(1);
        self.min + (value - self.min) / step * step
    }

    /// Parses the string value of an `<input type="range">`.
    pub fn parse(&self, raw: &str) -> Result<u32> {
        let trimmed = raw.trim();
        let n: i64 = trimmed
            .parse()
            .map_err(|_| LandingError::InvalidNumber(trimmed.to_string()))?;
        let bounded = n.clamp(i64::from(self.min), i64::from(self.max)) as u32;
        Ok(self.clamp(bounded))
    }

    /// Position of `value` along the track, in percent.
    pub fn fill_percent(&self, value: u32) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        let value = value.clamp(self.min, self.max);
        f64::from(value - self.min) / f64::from(self.max - self.min) * 100.0
    }

    pub fn values(&self) -> impl Iterator<Item = u32> {
        (self.min..=self.max).step_by(self.step.max(1) as usize)
    }
}

/// Inline style painting the filled part of a slider track.
pub fn track_gradient(percent: f64) -> String {
    format!(
        "background: linear-gradient(to right, hsl(var(--primary)) 0%, hsl(var(--primary)) {p:.2}%, hsl(var(--muted)) {p:.2}%, hsl(var(--muted)) 100%)",
        p = percent.clamp(0.0, 100.0)
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorInput {
    pub team_size: u32,
    pub monthly_words: u32,
}

impl Default for CalculatorInput {
    fn default() -> Self {
        Self {
            team_size: 5,
            monthly_words: 10_000,
        }
    }
}

impl CalculatorInput {
    pub fn new(team_size: u32, monthly_words: u32) -> Self {
        Self {
            team_size: TEAM_SIZE_RANGE.clamp(team_size),
            monthly_words: MONTHLY_WORDS_RANGE.clamp(monthly_words),
        }
    }

    pub fn set_team_size(&mut self, team_size: u32) {
        self.team_size = TEAM_SIZE_RANGE.clamp(team_size);
    }

    pub fn set_monthly_words(&mut self, monthly_words: u32) {
        self.monthly_words = MONTHLY_WORDS_RANGE.clamp(monthly_words);
    }

    pub fn recommendation(&self) -> Plan {
        recommend(self.team_size, self.monthly_words)
    }

    pub fn team_size_display(&self) -> String {
        match self.team_size {
            1 => "1 user".to_string(),
            n => format!("{} users", n),
        }
    }

    pub fn monthly_words_display(&self) -> String {
        format!("{:.0}K words", f64::from(self.monthly_words) / 1000.0)
    }

    pub fn team_fill_percent(&self) -> f64 {
        TEAM_SIZE_RANGE.fill_percent(self.team_size)
    }

    pub fn words_fill_percent(&self) -> f64 {
        MONTHLY_WORDS_RANGE.fill_percent(self.monthly_words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{PlanTier, STARTER};

    #[test]
    fn test_clamp_snaps_to_step() {
        assert_eq!(MONTHLY_WORDS_RANGE.clamp(0), 5_000);
        assert_eq!(MONTHLY_WORDS_RANGE.clamp(12_499), 10_000);
        assert_eq!(MONTHLY_WORDS_RANGE.clamp(15_000), 15_000);
        assert_eq!(MONTHLY_WORDS_RANGE.clamp(999_999), 200_000);
        assert_eq!(TEAM_SIZE_RANGE.clamp(0), 1);
        assert_eq!(TEAM_SIZE_RANGE.clamp(101), 100);
        assert_eq!(TEAM_SIZE_RANGE.clamp(42), 42);
    }

    #[test]
    fn test_parse() {
        assert_eq!(TEAM_SIZE_RANGE.parse(" 17 "), Ok(17));
        assert_eq!(TEAM_SIZE_RANGE.parse("-3"), Ok(1));
        assert_eq!(MONTHLY_WORDS_RANGE.parse("250000"), Ok(200_000));
        assert_eq!(
            TEAM_SIZE_RANGE.parse("ten"),
            Err(LandingError::InvalidNumber("ten".to_string()))
        );
        assert!(MONTHLY_WORDS_RANGE.parse("").is_err());
    }

    #[test]
    fn test_fill_percent() {
        assert_eq!(MONTHLY_WORDS_RANGE.fill_percent(5_000), 0.0);
        assert_eq!(MONTHLY_WORDS_RANGE.fill_percent(200_000), 100.0);
        assert_eq!(TEAM_SIZE_RANGE.fill_percent(1), 0.0);
        assert!((MONTHLY_WORDS_RANGE.fill_percent(102_500) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_track_gradient() {
        let css = track_gradient(25.0);
        assert!(css.contains("hsl(var(--primary)) 25.00%"));
        assert!(css.contains("hsl(var(--muted)) 25.00%"));
        assert!(track_gradient(140.0).contains("100.00%, hsl(var(--muted)) 100.00%"));
    }

    #[test]
    fn test_values_cover_range() {
        let words: Vec<u32> = MONTHLY_WORDS_RANGE.values().collect();
        assert_eq!(words.len(), 40);
        assert_eq!(words.first(), Some(&5_000));
        assert_eq!(words.last(), Some(&200_000));
        assert_eq!(TEAM_SIZE_RANGE.values().count(), 100);
    }

    #[test]
    fn test_input_defaults_and_setters() {
        let mut input = CalculatorInput::default();
        assert_eq!(input.recommendation(), STARTER);
        assert_eq!(input.team_size_display(), "5 users");
        assert_eq!(input.monthly_words_display(), "10K words");

        input.set_team_size(1);
        assert_eq!(input.team_size_display(), "1 user");

        input.set_monthly_words(80_000);
        assert_eq!(input.recommendation().tier, PlanTier::Enterprise);

        input.set_team_size(500);
        assert_eq!(input.team_size, 100);
    }

    #[test]
    fn test_new_clamps() {
        let input = CalculatorInput::new(0, 7_777);
        assert_eq!(input, CalculatorInput { team_size: 1, monthly_words: 5_000 });
    }
}
