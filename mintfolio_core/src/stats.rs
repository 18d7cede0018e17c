use std::collections::HashSet;

use crate::card::{Card, Rarity};

/// Card counts per annotation ink tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RarityCounts {
    pub blue: usize,
    pub silver: usize,
    pub gold: usize,
}

impl RarityCounts {
    pub fn get(&self, tier: Rarity) -> usize {
        match tier {
            Rarity::Blue => self.blue,
            Rarity::Silver => self.silver,
            Rarity::Gold => self.gold,
        }
    }

    fn bump(&mut self, tier: Rarity) {
        match tier {
            Rarity::Blue => self.blue += 1,
            Rarity::Silver => self.silver += 1,
            Rarity::Gold => self.gold += 1,
        }
    }

    /// Sum over the three tiers. A multi-rarity card contributes more than
    /// once, so this can exceed the number of physical cards.
    pub fn total(&self) -> usize {
        self.blue + self.silver + self.gold
    }

    pub fn max(&self) -> usize {
        self.blue.max(self.silver).max(self.gold)
    }
}

/// Collection-level statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    pub total: usize,
    pub blue: usize,
    pub silver: usize,
    pub gold: usize,
    pub unique_subjects: usize,
}

/// Number of physical cards. Every catalog entry is one card.
pub fn total_cards(cards: &[Card]) -> usize {
    cards.len()
}

/// Count cards per tier. Each recognized tier on a card increments its
/// bucket once; unrecognized or missing tiers count nowhere.
pub fn rarity_counts(cards: &[Card]) -> RarityCounts {
    let mut counts = RarityCounts::default();
    for card in cards {
        for tier in card.rarities() {
            counts.bump(tier);
        }
    }
    counts
}

/// Totals, per-tier counts, and the number of distinct photographed
/// subjects (a front/back pair or multi-edition group counts once).
pub fn statistics(cards: &[Card]) -> Statistics {
    let counts = rarity_counts(cards);
    let subjects: HashSet<&str> = cards.iter().map(Card::subject_name).collect();

    Statistics {
        total: total_cards(cards),
        blue: counts.blue,
        silver: counts.silver,
        gold: counts.gold,
        unique_subjects: subjects.len(),
    }
}
