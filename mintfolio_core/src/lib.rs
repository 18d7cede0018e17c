pub mod anim;
pub mod card;
pub mod catalog;
pub mod distribution;
pub mod forecast;
pub mod format;
pub mod gallery;
pub mod stats;

pub use card::{image_url, Availability, Card, Rarity, RarityField};
pub use catalog::{Catalog, CatalogError};
pub use distribution::{calculate_distribution, Distribution, TierShare};
pub use forecast::{calculate_forecast, forecast_with_targets, Forecast, ForecastTargets};
pub use format::{format_card, FormattedCard};
pub use gallery::{pair_cards, PhotoGroup};
pub use stats::{rarity_counts, statistics, total_cards, RarityCounts, Statistics};
