use std::fmt;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Title suffix that marks the back-image entry of a photo pair in
/// first-generation catalogs. Current catalogs carry explicit
/// `frontImage`/`backImage` fields instead.
pub const BACK_TITLE_SUFFIX: &str = " (Back)";

/// Annotation ink tier of a minted card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Blue,
    Silver,
    Gold,
}

impl Rarity {
    pub const ALL: [Rarity; 3] = [Rarity::Blue, Rarity::Silver, Rarity::Gold];

    /// Lowercase key as it appears in catalog documents
    pub fn key(&self) -> &'static str {
        match self {
            Rarity::Blue => "blue",
            Rarity::Silver => "silver",
            Rarity::Gold => "gold",
        }
    }

    /// Capitalized name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            Rarity::Blue => "Blue",
            Rarity::Silver => "Silver",
            Rarity::Gold => "Gold",
        }
    }

    /// Parse a catalog rarity value. Anything outside the three canonical
    /// tiers is `None` and stays out of every count.
    pub fn parse(value: &str) -> Option<Rarity> {
        match value {
            "blue" => Some(Rarity::Blue),
            "silver" => Some(Rarity::Silver),
            "gold" => Some(Rarity::Gold),
            _ => None,
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Rarity field as written in the catalog: a single tier, or a list of
/// tiers when one physical card carries several (first-generation schema).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RarityField {
    Single(String),
    Multi(Vec<String>),
}

impl RarityField {
    /// Raw tier tokens in document order
    pub fn tokens(&self) -> Vec<&str> {
        match self {
            RarityField::Single(value) => vec![value.as_str()],
            RarityField::Multi(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// Recognized tiers, with unrecognized tokens dropped
    pub fn tiers(&self) -> Vec<Rarity> {
        self.tokens().into_iter().filter_map(Rarity::parse).collect()
    }
}

/// Collection status of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Availability {
    Available,
    Collected,
    #[default]
    Unknown,
}

impl Availability {
    pub fn key(&self) -> &'static str {
        match self {
            Availability::Available => "available",
            Availability::Collected => "collected",
            Availability::Unknown => "unknown",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Availability::Available => "Available",
            Availability::Collected => "Collected",
            Availability::Unknown => "Unknown",
        }
    }

    /// Absent and unrecognized source values both read as `Unknown`
    pub fn parse(value: &str) -> Availability {
        match value {
            "available" => Availability::Available,
            "collected" => Availability::Collected,
            _ => Availability::Unknown,
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl Serialize for Availability {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for Availability {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.as_deref().map(Availability::parse).unwrap_or_default())
    }
}

/// One physical card. Fields cover both catalog generations: current
/// documents use `subject` + `frontImage`/`backImage`, older ones a single
/// `title` (back entries suffixed) + `imageHash`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(default, deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<RarityField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub front_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub back_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_height: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Card {
    /// Display name of the photographed subject: the `subject` field, or
    /// the title with any back suffix stripped.
    pub fn subject_name(&self) -> &str {
        if let Some(subject) = &self.subject {
            return subject;
        }
        match &self.title {
            Some(title) => title.strip_suffix(BACK_TITLE_SUFFIX).unwrap_or(title),
            None => "",
        }
    }

    /// Whether this entry is the back image of a photo pair (old schema)
    pub fn is_back(&self) -> bool {
        self.title
            .as_deref()
            .is_some_and(|title| title.ends_with(BACK_TITLE_SUFFIX.trim_start()))
    }

    /// Recognized rarity tiers of this card; empty when the field is
    /// missing or carries only unrecognized values
    pub fn rarities(&self) -> Vec<Rarity> {
        self.rarity.as_ref().map(RarityField::tiers).unwrap_or_default()
    }

    /// Front photo reference, falling back to the single-image field
    pub fn front_image(&self) -> Option<&str> {
        self.front_image.as_deref().or(self.image_hash.as_deref())
    }

    pub fn back_image(&self) -> Option<&str> {
        self.back_image.as_deref()
    }
}

/// Relative URL of a photo asset
pub fn image_url(hash: &str) -> String {
    format!("images/{hash}.jpg")
}

// Old catalogs wrote numeric ids; current ones use strings like "card-001".
fn id_from_string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(match Option::<Id>::deserialize(deserializer)? {
        Some(Id::Text(text)) => text,
        Some(Id::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_parse_recognizes_canonical_tiers() {
        assert_eq!(Rarity::parse("blue"), Some(Rarity::Blue));
        assert_eq!(Rarity::parse("silver"), Some(Rarity::Silver));
        assert_eq!(Rarity::parse("gold"), Some(Rarity::Gold));
        assert_eq!(Rarity::parse("platinum"), None);
        assert_eq!(Rarity::parse("Blue"), None);
    }

    #[test]
    fn test_rarity_field_drops_unrecognized_tokens() {
        let field = RarityField::Multi(vec![
            "gold".to_string(),
            "platinum".to_string(),
            "silver".to_string(),
        ]);
        assert_eq!(field.tiers(), vec![Rarity::Gold, Rarity::Silver]);
    }

    #[test]
    fn test_availability_defaults_to_unknown() {
        assert_eq!(Availability::parse("available"), Availability::Available);
        assert_eq!(Availability::parse("collected"), Availability::Collected);
        assert_eq!(Availability::parse("on loan"), Availability::Unknown);
        assert_eq!(Availability::default(), Availability::Unknown);
    }

    #[test]
    fn test_card_deserializes_current_schema() {
        let card: Card = serde_json::from_str(
            r#"{
                "id": "card-001",
                "subject": "Harbor Lanterns",
                "rarity": "blue",
                "edition": "1/2",
                "availability": "available",
                "frontImage": "a1f0", "backImage": "a1f1",
                "location": "Pier 7", "blockHeight": 812400
            }"#,
        )
        .unwrap();
        assert_eq!(card.subject_name(), "Harbor Lanterns");
        assert_eq!(card.rarities(), vec![Rarity::Blue]);
        assert_eq!(card.front_image(), Some("a1f0"));
        assert_eq!(card.back_image(), Some("a1f1"));
        assert_eq!(card.availability, Availability::Available);
        assert!(!card.is_back());
    }

    #[test]
    fn test_card_deserializes_old_schema() {
        let card: Card = serde_json::from_str(
            r#"{
                "id": 3,
                "title": "Harbor Lanterns (Back)",
                "rarity": ["blue", "silver"],
                "edition": "1/2 each",
                "imageHash": "b2c4"
            }"#,
        )
        .unwrap();
        assert_eq!(card.id, "3");
        assert!(card.is_back());
        assert_eq!(card.subject_name(), "Harbor Lanterns");
        assert_eq!(card.rarities(), vec![Rarity::Blue, Rarity::Silver]);
        assert_eq!(card.front_image(), Some("b2c4"));
        assert_eq!(card.availability, Availability::Unknown);
    }

    #[test]
    fn test_card_tolerates_sparse_records() {
        let card: Card = serde_json::from_str(r#"{"rarity": "obsidian"}"#).unwrap();
        assert_eq!(card.id, "");
        assert_eq!(card.subject_name(), "");
        assert!(card.rarities().is_empty());
        assert_eq!(card.front_image(), None);
    }

    #[test]
    fn test_image_url_shape() {
        assert_eq!(image_url("a1f0"), "images/a1f0.jpg");
    }
}
