//! Pricing tiers and the plan recommendation rule.

use serde::{Deserialize, Serialize};

/// Upper bounds (inclusive) for the Starter tier.
pub const STARTER_MAX_TEAM: u32 = 5;
pub const STARTER_MAX_WORDS: u32 = 15_000;

/// Upper bounds (inclusive) for the Professional tier.
pub const PROFESSIONAL_MAX_TEAM: u32 = 25;
pub const PROFESSIONAL_MAX_WORDS: u32 = 75_000;

/// Pricing tiers, ordered from cheapest to most expensive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    #[default]
    Starter,
    Professional,
    Enterprise,
}

impl PlanTier {
    /// Highlights shown next to the calculator for this tier.
    pub fn features(&self) -> &'static [&'static str] {
        match self {
            PlanTier::Starter => &["Basic analytics & reporting"],
            PlanTier::Professional => &["Advanced analytics & insights", "Multi-channel automation"],
            PlanTier::Enterprise => &["Custom AI model training", "Dedicated account manager"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub tier: PlanTier,
    pub name: &'static str,
    pub monthly_price_usd: u32,
    pub label: &'static str,
}

impl Plan {
    pub fn price_display(&self) -> String {
        format!("${}", self.monthly_price_usd)
    }
}

pub const STARTER: Plan = Plan {
    tier: PlanTier::Starter,
    name: "Starter",
    monthly_price_usd: 49,
    label: "Starter Plan",
};

pub const PROFESSIONAL: Plan = Plan {
    tier: PlanTier::Professional,
    name: "Professional",
    monthly_price_usd: 149,
    label: "Professional Plan",
};

pub const ENTERPRISE: Plan = Plan {
    tier: PlanTier::Enterprise,
    name: "Enterprise",
    monthly_price_usd: 399,
    label: "Enterprise Plan",
};

/// Recommends a plan for a team size and monthly AI word volume.
///
/// Rules are checked in order and the first match wins. Inputs are not
/// validated; slider values are clamped before they reach this function.
pub fn recommend(team_size: u32, monthly_words: u32) -> Plan {
    if team_size <= STARTER_MAX_TEAM && monthly_words <= STARTER_MAX_WORDS {
        return STARTER;
    }
    if team_size <= PROFESSIONAL_MAX_TEAM && monthly_words <= PROFESSIONAL_MAX_WORDS {
        return PROFESSIONAL;
    }
    ENTERPRISE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{MONTHLY_WORDS_RANGE, TEAM_SIZE_RANGE};

    #[test]
    fn test_boundaries() {
        assert_eq!(recommend(5, 15_000), STARTER);
        assert_eq!(recommend(5, 15_001), PROFESSIONAL);
        assert_eq!(recommend(6, 15_000), PROFESSIONAL);
        assert_eq!(recommend(25, 75_000), PROFESSIONAL);
        assert_eq!(recommend(25, 75_001), ENTERPRISE);
        assert_eq!(recommend(26, 1), ENTERPRISE);
        assert_eq!(recommend(1, 200_000), ENTERPRISE);
    }

    #[test]
    fn test_prices() {
        assert_eq!(recommend(1, 5_000).monthly_price_usd, 49);
        assert_eq!(recommend(10, 50_000).monthly_price_usd, 149);
        assert_eq!(recommend(100, 200_000).monthly_price_usd, 399);
        assert_eq!(PROFESSIONAL.price_display(), "$149");
        assert_eq!(ENTERPRISE.label, "Enterprise Plan");
    }

    #[test]
    fn test_starter_region() {
        for team in 1..=5 {
            for words in (5_000..=15_000).step_by(500) {
                assert_eq!(recommend(team, words), STARTER, "({team}, {words})");
            }
        }
    }

    #[test]
    fn test_professional_region() {
        for team in 1..=25 {
            for words in (15_001..=75_000).step_by(1_999) {
                assert_eq!(recommend(team, words), PROFESSIONAL, "({team}, {words})");
            }
        }
        for team in 6..=25 {
            assert_eq!(recommend(team, 5_000), PROFESSIONAL);
            assert_eq!(recommend(team, 75_000), PROFESSIONAL);
        }
    }

    #[test]
    fn test_enterprise_region() {
        for team in 26..=100 {
            assert_eq!(recommend(team, 1), ENTERPRISE);
            assert_eq!(recommend(team, 200_000), ENTERPRISE);
        }
        for team in 1..=100 {
            assert_eq!(recommend(team, 75_001), ENTERPRISE);
            assert_eq!(recommend(team, 200_000), ENTERPRISE);
        }
    }

    #[test]
    fn test_idempotent() {
        for (team, words) in [(1, 5_000), (5, 15_000), (25, 75_000), (70, 120_000)] {
            assert_eq!(recommend(team, words), recommend(team, words));
        }
    }

    #[test]
    fn test_monotonic_in_each_input() {
        for team in TEAM_SIZE_RANGE.min..=TEAM_SIZE_RANGE.max {
            let tiers: Vec<PlanTier> = MONTHLY_WORDS_RANGE
                .values()
                .map(|words| recommend(team, words).tier)
                .collect();
            assert!(tiers.windows(2).all(|w| w[0] <= w[1]), "team {team}");
        }
        for words in MONTHLY_WORDS_RANGE.values() {
            let tiers: Vec<PlanTier> = (TEAM_SIZE_RANGE.min..=TEAM_SIZE_RANGE.max)
                .map(|team| recommend(team, words).tier)
                .collect();
            assert!(tiers.windows(2).all(|w| w[0] <= w[1]), "words {words}");
        }
    }

    #[test]
    fn test_matches_disjunctive_form() {
        // Professional as "not Starter, team <= 25, words <= 75k" with the
        // (team > 5 || words > 15k) guard spelled out.
        for team in 1..=100u32 {
            for words in (0..=200_000u32).step_by(2_500) {
                let starter = team <= 5 && words <= 15_000;
                let professional = !starter
                    && (team > 5 || words > 15_000)
                    && team <= 25
                    && words <= 75_000;
                let expected = if starter {
                    STARTER
                } else if professional {
                    PROFESSIONAL
                } else {
                    ENTERPRISE
                };
                assert_eq!(recommend(team, words), expected, "({team}, {words})");
            }
        }
    }

    #[test]
    fn test_tier_features() {
        assert_eq!(PlanTier::Starter.features().len(), 1);
        assert!(PlanTier::Enterprise
            .features()
            .contains(&"Dedicated account manager"));
        assert!(PlanTier::Starter < PlanTier::Professional);
        assert!(PlanTier::Professional < PlanTier::Enterprise);
        assert_eq!(PROFESSIONAL.tier, PlanTier::Professional);
    }
}
