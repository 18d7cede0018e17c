use crate::card::{Card, Rarity};
use crate::stats::{rarity_counts, RarityCounts};

/// Count and percentage share of one tier
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TierShare {
    pub count: usize,
    pub percentage: f64,
}

/// How the minted cards split across the three ink tiers. `total` is the
/// sum of the bucket counts, not the number of physical cards: a
/// multi-rarity card lands in several buckets and an unrecognized tier in
/// none.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Distribution {
    pub blue: TierShare,
    pub silver: TierShare,
    pub gold: TierShare,
    pub total: usize,
}

impl Distribution {
    pub fn get(&self, tier: Rarity) -> TierShare {
        match tier {
            Rarity::Blue => self.blue,
            Rarity::Silver => self.silver,
            Rarity::Gold => self.gold,
        }
    }

    pub fn counts(&self) -> RarityCounts {
        RarityCounts {
            blue: self.blue.count,
            silver: self.silver.count,
            gold: self.gold.count,
        }
    }

    /// Largest bucket count, used to scale chart bars
    pub fn max_count(&self) -> usize {
        self.counts().max()
    }

    pub fn from_counts(counts: RarityCounts) -> Distribution {
        let total = counts.total();
        Distribution {
            blue: TierShare {
                count: counts.blue,
                percentage: percentage(counts.blue, total),
            },
            silver: TierShare {
                count: counts.silver,
                percentage: percentage(counts.silver, total),
            },
            gold: TierShare {
                count: counts.gold,
                percentage: percentage(counts.gold, total),
            },
            total,
        }
    }
}

/// Share of `count` in `total` with exactly one decimal digit, rounding
/// half up at the tenths. Shares are rounded independently, so the three
/// tiers need not sum to 100.0.
fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    ((count as f64 / total as f64) * 1000.0).round() / 10.0
}

pub fn calculate_distribution(cards: &[Card]) -> Distribution {
    Distribution::from_counts(rarity_counts(cards))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::RarityField;

    fn card(rarity: &str) -> Card {
        serde_json::from_str(&format!(r#"{{"rarity": "{rarity}"}}"#)).unwrap()
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let dist = calculate_distribution(&[]);
        assert_eq!(dist, Distribution::default());
        assert_eq!(dist.blue.count, 0);
        assert_eq!(dist.blue.percentage, 0.0);
        assert_eq!(dist.total, 0);
    }

    #[test]
    fn test_counts_and_total() {
        let cards = vec![card("blue"), card("blue"), card("silver")];
        let dist = calculate_distribution(&cards);
        assert_eq!(dist.blue.count, 2);
        assert_eq!(dist.silver.count, 1);
        assert_eq!(dist.gold.count, 0);
        assert_eq!(dist.total, 3);
    }

    #[test]
    fn test_one_decimal_rounding() {
        // 2/3 = 66.66..% rounds to 66.7, 1/3 = 33.33..% to 33.3; the two do
        // not sum back to 100.0.
        let cards = vec![card("blue"), card("blue"), card("silver")];
        let dist = calculate_distribution(&cards);
        assert_eq!(dist.blue.percentage, 66.7);
        assert_eq!(dist.silver.percentage, 33.3);
    }

    #[test]
    fn test_even_split_percentages() {
        let cards = vec![card("blue"), card("blue"), card("silver"), card("gold")];
        let dist = calculate_distribution(&cards);
        assert_eq!(dist.blue.percentage, 50.0);
        assert_eq!(dist.silver.percentage, 25.0);
        assert_eq!(dist.gold.percentage, 25.0);
    }

    #[test]
    fn test_multi_rarity_card_raises_total_above_card_count() {
        let mut multi = card("blue");
        multi.rarity = Some(RarityField::Multi(vec![
            "gold".to_string(),
            "silver".to_string(),
        ]));
        let cards = vec![multi, card("blue")];
        let dist = calculate_distribution(&cards);
        // 2 physical cards, 3 recognized tiers.
        assert_eq!(dist.total, 3);
        assert_eq!(dist.gold.count, 1);
        assert_eq!(dist.silver.count, 1);
        assert_eq!(dist.blue.count, 1);
    }

    #[test]
    fn test_single_tier_collection_reads_one_hundred_percent() {
        let cards = vec![card("gold"), card("gold"), card("gold")];
        let dist = calculate_distribution(&cards);
        assert_eq!(dist.gold.count, 3);
        assert_eq!(dist.gold.percentage, 100.0);
        assert_eq!(dist.blue.count, 0);
        assert_eq!(dist.silver.count, 0);
    }

    #[test]
    fn test_invalid_and_missing_rarities_are_excluded() {
        let cards = vec![card("blue"), card("invalid"), card("silver")];
        let dist = calculate_distribution(&cards);
        assert_eq!(dist.blue.count, 1);
        assert_eq!(dist.silver.count, 1);
        assert_eq!(dist.total, 2);
    }

    #[test]
    fn test_counts_match_rarity_counts_total() {
        let cards = vec![card("blue"), card("gold"), card("mystery"), card("gold")];
        let dist = calculate_distribution(&cards);
        assert_eq!(rarity_counts(&cards).total(), dist.total);
    }
}
