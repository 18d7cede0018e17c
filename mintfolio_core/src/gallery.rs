use std::collections::HashMap;

use crate::card::Card;

/// One photographed subject with every card edition printed from it.
/// `back_image` is `None` when no back photo resolves; such groups render
/// as static cards with no flip interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoGroup {
    pub front_image: String,
    pub back_image: Option<String>,
    pub subject: String,
    pub cards: Vec<Card>,
}

impl PhotoGroup {
    /// Whether the group has a distinct back photo to flip to
    pub fn has_back(&self) -> bool {
        self.back_image
            .as_deref()
            .is_some_and(|back| back != self.front_image)
    }

    /// Caption describing the editions sharing this photo: the subject and
    /// edition for a lone card, otherwise a "blue 1/2, silver 2/2" list.
    pub fn caption(&self) -> String {
        if let [card] = self.cards.as_slice() {
            return format!("{} {}", self.subject, card.edition.as_deref().unwrap_or(""))
                .trim_end()
                .to_string();
        }
        self.cards
            .iter()
            .map(|card| {
                let tiers = card
                    .rarity
                    .as_ref()
                    .map(|field| field.tokens().join(" & "))
                    .unwrap_or_default();
                format!("{} {}", tiers, card.edition.as_deref().unwrap_or(""))
                    .trim()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Group cards sharing a photo, preserving first-seen order of photos.
///
/// Current catalogs key groups by `frontImage`. Old catalogs instead mark
/// back photos with a title suffix; those entries do not form groups of
/// their own - each donates its image hash as the back of the group whose
/// subject matches its stripped title. Cards with no image reference at
/// all are left out of the gallery.
pub fn pair_cards(cards: &[Card]) -> Vec<PhotoGroup> {
    let mut groups: Vec<PhotoGroup> = Vec::new();
    let mut index_by_photo: HashMap<String, usize> = HashMap::new();

    for card in cards.iter().filter(|card| !card.is_back()) {
        let Some(front) = card.front_image() else {
            continue;
        };
        let index = match index_by_photo.get(front) {
            Some(&index) => index,
            None => {
                groups.push(PhotoGroup {
                    front_image: front.to_string(),
                    back_image: None,
                    subject: card.subject_name().to_string(),
                    cards: Vec::new(),
                });
                index_by_photo.insert(front.to_string(), groups.len() - 1);
                groups.len() - 1
            }
        };
        if groups[index].back_image.is_none() {
            groups[index].back_image = card.back_image().map(String::from);
        }
        groups[index].cards.push(card.clone());
    }

    // Back-photo entries pair with their front by shared subject.
    for back in cards.iter().filter(|card| card.is_back()) {
        if let Some(group) = groups
            .iter_mut()
            .find(|group| group.subject == back.subject_name())
        {
            if group.back_image.is_none() {
                group.back_image = back.front_image().map(String::from);
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(json: &str) -> Card {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_editions_sharing_a_photo_form_one_group() {
        let cards = vec![
            card(r#"{"id": "card-001", "subject": "Cedar Ridge", "rarity": "blue",
                     "edition": "1/2", "frontImage": "f0", "backImage": "b0"}"#),
            card(r#"{"id": "card-002", "subject": "Cedar Ridge", "rarity": "silver",
                     "edition": "2/2", "frontImage": "f0", "backImage": "b0"}"#),
            card(r#"{"id": "card-003", "subject": "Pier Lights", "rarity": "gold",
                     "edition": "1/1", "frontImage": "f1", "backImage": "b1"}"#),
        ];
        let groups = pair_cards(&cards);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].subject, "Cedar Ridge");
        assert_eq!(groups[0].cards.len(), 2);
        assert_eq!(groups[0].back_image.as_deref(), Some("b0"));
        assert_eq!(groups[1].subject, "Pier Lights");
        assert_eq!(groups[1].cards.len(), 1);
    }

    #[test]
    fn test_first_seen_order_is_preserved() {
        let cards = vec![
            card(r#"{"subject": "C", "frontImage": "f2", "backImage": "b2"}"#),
            card(r#"{"subject": "A", "frontImage": "f0", "backImage": "b0"}"#),
            card(r#"{"subject": "B", "frontImage": "f1", "backImage": "b1"}"#),
            card(r#"{"subject": "A", "frontImage": "f0", "backImage": "b0"}"#),
        ];
        let groups = pair_cards(&cards);
        let subjects: Vec<&str> = groups.iter().map(|group| group.subject.as_str()).collect();
        assert_eq!(subjects, vec!["C", "A", "B"]);
        assert_eq!(groups[1].cards.len(), 2);
    }

    #[test]
    fn test_old_schema_back_entry_supplies_the_back_image() {
        let cards = vec![
            card(r#"{"id": 1, "title": "Harbor Lanterns", "rarity": "blue",
                     "edition": "1/1", "imageHash": "h-front"}"#),
            card(r#"{"id": 2, "title": "Harbor Lanterns (Back)", "imageHash": "h-back"}"#),
            card(r#"{"id": 3, "title": "Night Market", "rarity": "silver",
                     "edition": "1/1", "imageHash": "h-solo"}"#),
        ];
        let groups = pair_cards(&cards);

        // The back entry joins its front group instead of forming its own.
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].subject, "Harbor Lanterns");
        assert_eq!(groups[0].cards.len(), 1);
        assert_eq!(groups[0].back_image.as_deref(), Some("h-back"));
        assert!(groups[0].has_back());

        // The singleton has no back counterpart and renders static.
        assert_eq!(groups[1].subject, "Night Market");
        assert_eq!(groups[1].back_image, None);
        assert!(!groups[1].has_back());
    }

    #[test]
    fn test_back_equal_to_front_means_no_flip() {
        let cards = vec![card(
            r#"{"subject": "Flat", "frontImage": "same", "backImage": "same"}"#,
        )];
        let groups = pair_cards(&cards);
        assert_eq!(groups.len(), 1);
        assert!(!groups[0].has_back());
    }

    #[test]
    fn test_cards_without_any_image_are_skipped() {
        let cards = vec![
            card(r#"{"subject": "Ghost", "rarity": "blue"}"#),
            card(r#"{"subject": "Real", "frontImage": "f0"}"#),
        ];
        let groups = pair_cards(&cards);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].subject, "Real");
    }

    #[test]
    fn test_captions() {
        let solo = pair_cards(&[card(
            r#"{"subject": "Cedar Ridge", "rarity": "gold", "edition": "1/1",
                "frontImage": "f0"}"#,
        )]);
        assert_eq!(solo[0].caption(), "Cedar Ridge 1/1");

        let pair = pair_cards(&[
            card(r#"{"subject": "Cedar Ridge", "rarity": "blue", "edition": "1/2",
                     "frontImage": "f0"}"#),
            card(r#"{"subject": "Cedar Ridge", "rarity": "silver", "edition": "2/2",
                     "frontImage": "f0"}"#),
        ]);
        assert_eq!(pair[0].caption(), "blue 1/2, silver 2/2");
    }
}
