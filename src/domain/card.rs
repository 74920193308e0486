//! Card records as served by the backend.
//!
//! Cards are read-only: they are decoded from the endpoint's JSON array and
//! replaced wholesale on every accepted page response. Only the fields the
//! grid needs are modelled; everything else in the payload is ignored.

use serde::Deserialize;

/// A single searchable card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Card {
    /// Backend identifier, when the endpoint provides one.
    #[serde(default)]
    pub id: Option<i64>,

    /// Card name; the field the search filter matches against.
    pub name: String,

    /// Free-form card text.
    #[serde(default)]
    pub desc: String,

    /// Artwork variants, first entry is the one displayed.
    #[serde(default)]
    pub card_images: Vec<CardImage>,
}

/// One artwork variant of a card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CardImage {
    #[serde(default)]
    pub id: Option<i64>,

    /// Full resolution artwork.
    #[serde(default)]
    pub image_url: Option<String>,

    /// Thumbnail used by the picture column.
    pub image_url_small: String,
}

impl Card {
    /// URL of the small artwork of the first image, if the card has any.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardsearch::domain::{Card, CardImage};
    ///
    /// let card = Card {
    ///     id: None,
    ///     name: "Cyber Dragon".to_string(),
    ///     desc: String::new(),
    ///     card_images: vec![CardImage {
    ///         id: None,
    ///         image_url: None,
    ///         image_url_small: "https://img/small/1.jpg".to_string(),
    ///     }],
    /// };
    /// assert_eq!(card.thumbnail_url(), Some("https://img/small/1.jpg"));
    /// ```
    #[must_use]
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.card_images
            .first()
            .map(|image| image.image_url_small.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_minimal_shape_and_ignores_extra_fields() {
        let json = r#"{
            "id": 70095154,
            "name": "Cyber Dragon",
            "type": "Effect Monster",
            "desc": "If only your opponent controls a monster...",
            "atk": 2100,
            "card_images": [
                {"id": 70095154, "image_url": "https://x/big.jpg", "image_url_small": "https://x/small.jpg"},
                {"id": 1, "image_url_small": "https://x/alt.jpg"}
            ]
        }"#;

        let card: Card = serde_json::from_str(json).unwrap();

        assert_eq!(card.id, Some(70_095_154));
        assert_eq!(card.name, "Cyber Dragon");
        assert_eq!(card.card_images.len(), 2);
        assert_eq!(card.thumbnail_url(), Some("https://x/small.jpg"));
    }

    #[test]
    fn missing_description_and_images_default_to_empty() {
        let card: Card = serde_json::from_str(r#"{"name": "Blank"}"#).unwrap();

        assert!(card.desc.is_empty());
        assert!(card.card_images.is_empty());
        assert_eq!(card.thumbnail_url(), None);
    }

    #[test]
    fn name_is_required() {
        let result: std::result::Result<Card, _> = serde_json::from_str(r#"{"desc": "x"}"#);
        assert!(result.is_err());
    }
}
