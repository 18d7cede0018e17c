use crate::card::Rarity;
use crate::distribution::Distribution;

/// Target mint ratios for the scarcer tiers, relative to the blue
/// baseline count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastTargets {
    pub silver_ratio: f64,
    pub gold_ratio: f64,
}

impl ForecastTargets {
    /// Catalog defaults: silver at half the blue count, gold at a sixth
    pub const DEFAULT: ForecastTargets = ForecastTargets {
        silver_ratio: 0.5,
        gold_ratio: 1.0 / 6.0,
    };
}

impl Default for ForecastTargets {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Recommended ink for the next mint, with a human-readable rationale
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub recommended: Rarity,
    pub rationale: String,
}

pub fn calculate_forecast(distribution: &Distribution) -> Forecast {
    forecast_with_targets(distribution, ForecastTargets::DEFAULT)
}

/// Deficit heuristic. Silver and gold each have a target count derived
/// from the blue baseline; whichever sits furthest below its target is
/// recommended. With no deficit anywhere, blue replenishes the baseline.
/// Pure: the same distribution always yields the same forecast.
pub fn forecast_with_targets(distribution: &Distribution, targets: ForecastTargets) -> Forecast {
    if distribution.total == 0 {
        return Forecast {
            recommended: Rarity::Blue,
            rationale: "No annotations have been minted yet. Blue is the standard edition \
                        and establishes the baseline the scarcer tiers are sized against."
                .to_string(),
        };
    }

    let blue = distribution.blue.count as f64;
    let silver_target = blue * targets.silver_ratio;
    let gold_target = blue * targets.gold_ratio;
    let silver_deficit = silver_target - distribution.silver.count as f64;
    let gold_deficit = gold_target - distribution.gold.count as f64;

    if silver_deficit <= 0.0 && gold_deficit <= 0.0 {
        return Forecast {
            recommended: Rarity::Blue,
            rationale: format!(
                "Silver ({}) and gold ({}) are both at or above their targets. \
                 Blue is the baseline tier; minting blue ink keeps the ratios anchored.",
                distribution.silver.count, distribution.gold.count
            ),
        };
    }

    // Larger positive deficit wins; an exact tie goes to silver.
    let (tier, target, ratio) = if gold_deficit > silver_deficit {
        (Rarity::Gold, gold_target, targets.gold_ratio)
    } else {
        (Rarity::Silver, silver_target, targets.silver_ratio)
    };
    let share = distribution.get(tier);

    Forecast {
        recommended: tier,
        rationale: format!(
            "{name} annotations are underrepresented at {pct:.1}% ({count} cards). \
             Target: {ratio_pct} of the blue baseline ({target} cards). \
             Minting {key} ink closes the largest deficit.",
            name = tier.display_name(),
            pct = share.percentage,
            count = share.count,
            ratio_pct = ratio_percent(ratio),
            target = trim_count(target),
            key = tier.key(),
        ),
    }
}

/// "50%" for whole ratios, "16.7%" otherwise
fn ratio_percent(ratio: f64) -> String {
    let pct = ratio * 100.0;
    if (pct - pct.round()).abs() < 1e-9 {
        format!("{pct:.0}%")
    } else {
        format!("{pct:.1}%")
    }
}

fn trim_count(count: f64) -> String {
    if (count - count.round()).abs() < 1e-9 {
        format!("{count:.0}")
    } else {
        format!("{count:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::RarityCounts;

    fn dist(blue: usize, silver: usize, gold: usize) -> Distribution {
        Distribution::from_counts(RarityCounts { blue, silver, gold })
    }

    #[test]
    fn test_empty_collection_recommends_the_standard_edition() {
        let forecast = calculate_forecast(&dist(0, 0, 0));
        assert_eq!(forecast.recommended, Rarity::Blue);
        assert!(forecast.rationale.contains("standard edition"));
    }

    #[test]
    fn test_silver_below_target_is_recommended() {
        // Silver target: 50% of 10 = 5, actual 2 (deficit 3).
        // Gold target: 10/6 = 1.67, actual 2 (no deficit).
        let forecast = calculate_forecast(&dist(10, 2, 2));
        assert_eq!(forecast.recommended, Rarity::Silver);
        assert!(forecast.rationale.contains("Silver"));
    }

    #[test]
    fn test_gold_below_target_is_recommended() {
        // Silver target 5, actual 6 (no deficit); gold target 1.67, actual 0.
        let forecast = calculate_forecast(&dist(10, 6, 0));
        assert_eq!(forecast.recommended, Rarity::Gold);
        assert!(forecast.rationale.contains("Gold"));
    }

    #[test]
    fn test_both_tiers_at_target_replenish_blue() {
        // Silver target 10, actual 11; gold target 3.33, actual 4.
        let forecast = calculate_forecast(&dist(20, 11, 4));
        assert_eq!(forecast.recommended, Rarity::Blue);
        assert!(forecast.rationale.contains("Blue") || forecast.rationale.contains("blue"));
    }

    #[test]
    fn test_larger_deficit_wins() {
        // Only blue minted: silver deficit 5 beats gold deficit 1.67.
        let forecast = calculate_forecast(&dist(10, 0, 0));
        assert_eq!(forecast.recommended, Rarity::Silver);
    }

    #[test]
    fn test_well_balanced_collection_stays_on_blue() {
        // Silver target 25 vs 26, gold target 8.33 vs 9 - both covered.
        let forecast = calculate_forecast(&dist(50, 26, 9));
        assert_eq!(forecast.recommended, Rarity::Blue);
    }

    #[test]
    fn test_rationale_names_the_target() {
        let forecast = calculate_forecast(&dist(10, 2, 2));
        assert!(forecast.rationale.contains("underrepresented"));
        assert!(forecast.rationale.contains("Target"));
        assert!(forecast.rationale.contains("50%"));
    }

    #[test]
    fn test_gold_rationale_carries_fractional_target_percent() {
        let forecast = calculate_forecast(&dist(10, 6, 0));
        assert!(forecast.rationale.contains("16.7%"));
    }

    #[test]
    fn test_forecast_is_idempotent() {
        let distribution = dist(7, 2, 1);
        let first = calculate_forecast(&distribution);
        let second = calculate_forecast(&distribution);
        assert_eq!(first, second);
    }

    #[test]
    fn test_targets_are_overridable() {
        // With 60%/40% targets the same counts flip: silver target 6
        // (deficit 4) still beats gold target 4 (deficit 2)...
        let wide = ForecastTargets {
            silver_ratio: 0.6,
            gold_ratio: 0.4,
        };
        let forecast = forecast_with_targets(&dist(10, 2, 2), wide);
        assert_eq!(forecast.recommended, Rarity::Silver);
        assert!(forecast.rationale.contains("60%"));

        // ...but a covered silver tier hands the deficit to gold.
        let forecast = forecast_with_targets(&dist(10, 6, 0), wide);
        assert_eq!(forecast.recommended, Rarity::Gold);
        assert!(forecast.rationale.contains("40%"));
    }

    #[test]
    fn test_exact_deficit_tie_prefers_silver() {
        let even = ForecastTargets {
            silver_ratio: 0.5,
            gold_ratio: 0.5,
        };
        // Both targets 5, both actuals 2: identical deficits.
        let forecast = forecast_with_targets(&dist(10, 2, 2), even);
        assert_eq!(forecast.recommended, Rarity::Silver);
    }

    #[test]
    fn test_scarcer_tiers_without_a_baseline_replenish_blue() {
        // No blue mints: both targets collapse to zero, so silver and
        // gold are trivially covered and blue is rebuilt first.
        let forecast = calculate_forecast(&dist(0, 5, 1));
        assert_eq!(forecast.recommended, Rarity::Blue);
    }
}
