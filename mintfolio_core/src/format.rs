use crate::card::{Availability, Card};

/// Display-ready projection of a card: capitalized labels, defaults filled
/// in, and the old-schema back marker resolved. Pure, no I/O.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedCard {
    pub id: String,
    pub subject: String,
    pub rarity_display: String,
    pub edition: String,
    pub availability: Availability,
    pub availability_display: String,
    pub front_image: Option<String>,
    pub back_image: Option<String>,
    pub is_back: bool,
    pub location: Option<String>,
    pub block_height: Option<u64>,
}

/// Capitalize the first letter only, leaving the rest untouched
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn format_card(card: &Card) -> FormattedCard {
    // Capitalize each source token so unrecognized tiers still display;
    // a multi-tier card reads "Blue & Silver".
    let rarity_display = card
        .rarity
        .as_ref()
        .map(|field| {
            field
                .tokens()
                .iter()
                .map(|token| capitalize_first(token))
                .collect::<Vec<_>>()
                .join(" & ")
        })
        .unwrap_or_default();

    FormattedCard {
        id: card.id.clone(),
        subject: card.subject_name().to_string(),
        rarity_display,
        edition: card.edition.clone().unwrap_or_default(),
        availability: card.availability,
        availability_display: card.availability.display_name().to_string(),
        front_image: card.front_image().map(String::from),
        back_image: card.back_image().map(String::from),
        is_back: card.is_back(),
        location: card.location.clone(),
        block_height: card.block_height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats_current_schema_card() {
        let card: Card = serde_json::from_str(
            r#"{
                "id": "card-001",
                "subject": "Test Card",
                "location": "Test Location",
                "blockHeight": 800000,
                "rarity": "blue",
                "edition": "1/100",
                "frontImage": "hash-front",
                "backImage": "hash-back",
                "availability": "available"
            }"#,
        )
        .unwrap();
        let formatted = format_card(&card);

        assert_eq!(formatted.subject, "Test Card");
        assert_eq!(formatted.rarity_display, "Blue");
        assert_eq!(formatted.availability, Availability::Available);
        assert_eq!(formatted.availability_display, "Available");
        assert_eq!(formatted.edition, "1/100");
        assert_eq!(formatted.front_image.as_deref(), Some("hash-front"));
        assert_eq!(formatted.block_height, Some(800000));
        assert!(!formatted.is_back);
    }

    #[test]
    fn test_missing_availability_reads_unknown() {
        let card: Card =
            serde_json::from_str(r#"{"subject": "X", "rarity": "silver"}"#).unwrap();
        let formatted = format_card(&card);
        assert_eq!(formatted.availability, Availability::Unknown);
        assert_eq!(formatted.availability_display, "Unknown");
    }

    #[test]
    fn test_multi_rarity_joins_capitalized_tokens() {
        let card: Card =
            serde_json::from_str(r#"{"subject": "X", "rarity": ["silver", "gold"]}"#).unwrap();
        assert_eq!(format_card(&card).rarity_display, "Silver & Gold");
    }

    #[test]
    fn test_capitalizes_first_letter_only() {
        assert_eq!(capitalize_first("collected"), "Collected");
        assert_eq!(capitalize_first("gOLD"), "GOLD");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_back_title_strips_suffix_and_flags() {
        let card: Card = serde_json::from_str(
            r#"{"id": 7, "title": "Pier Lights (Back)", "imageHash": "h1"}"#,
        )
        .unwrap();
        let formatted = format_card(&card);
        assert!(formatted.is_back);
        assert_eq!(formatted.subject, "Pier Lights");
        assert_eq!(formatted.front_image.as_deref(), Some("h1"));
    }
}
