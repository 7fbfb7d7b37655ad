//! Deck composition.

use crate::script::DeckScript;
use crate::slide::Slide;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// An ordered, non-empty sequence of slides.
///
/// Slide order is navigation order. A deck deserializes through
/// [`DeckScript`], so every block is validated on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DeckScript")]
pub struct Deck {
    /// Talk title, if the script names one.
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,

    /// Slides in presentation order.
    slides: Vec<Slide>,
}

impl Deck {
    /// Compose slides into a deck, keeping the given order.
    ///
    /// Fails with [`Error::EmptyDeck`] when `slides` is empty.
    pub fn compose(slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            return Err(Error::EmptyDeck);
        }

        log::debug!("Composed deck with {} slides", slides.len());
        Ok(Self {
            title: None,
            slides,
        })
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Number of slides. Always at least one.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Get a slide by 0-based position.
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slide> {
        self.slides.iter()
    }

    /// Serialize to the slide script JSON shape.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialize(e.to_string()))
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Slide;
    type IntoIter = std::slice::Iter<'a, Slide>;

    fn into_iter(self) -> Self::IntoIter {
        self.slides.iter()
    }
}

impl TryFrom<DeckScript> for Deck {
    type Error = Error;

    fn try_from(script: DeckScript) -> Result<Self> {
        script.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{BlockKind, ContentBlock, FeatureRow, TitleBanner};

    fn numbered_slides(count: usize) -> Vec<Slide> {
        (0..count)
            .map(|i| Slide::single(TitleBanner::new(format!("Slide {}", i), "")))
            .collect()
    }

    #[test]
    fn test_empty_deck_is_rejected() {
        assert!(matches!(Deck::compose(Vec::new()), Err(Error::EmptyDeck)));
    }

    #[test]
    fn test_compose_preserves_order() {
        for count in [1, 2, 5, 17] {
            let slides = numbered_slides(count);
            let deck = Deck::compose(slides.clone()).unwrap();
            assert_eq!(deck.slides(), slides.as_slice());
            assert_eq!(deck.len(), count);
        }
    }

    #[test]
    fn test_two_slide_scenario() {
        let slides = vec![
            Slide::single(TitleBanner::new("auto", "Streamline releases")),
            Slide::single(FeatureRow::new("Keep Your Workflow", "...", "wrench").unwrap()),
        ];
        let deck = Deck::compose(slides).unwrap();

        assert_eq!(deck.len(), 2);
        let first = deck.get(0).unwrap();
        assert_eq!(first.blocks().len(), 1);
        assert_eq!(first.blocks()[0].kind(), BlockKind::TitleBanner);
        match &first.blocks()[0] {
            ContentBlock::TitleBanner(banner) => assert_eq!(banner.title(), "auto"),
            other => panic!("unexpected block: {other:?}"),
        }
    }

    #[test]
    fn test_composing_twice_is_deterministic() {
        let a = Deck::compose(numbered_slides(3)).unwrap().with_title("auto");
        let b = Deck::compose(numbered_slides(3)).unwrap().with_title("auto");
        assert_eq!(a, b);
        assert_eq!(a.title(), Some("auto"));
    }

    #[test]
    fn test_to_json_pretty_reads_back() {
        let deck = Deck::compose(numbered_slides(2)).unwrap().with_title("auto");
        let json = deck.to_json_pretty().unwrap();
        assert!(json.contains('\n'));

        let rebuilt: Deck = serde_json::from_str(&json).unwrap();
        assert_eq!(rebuilt, deck);
    }

    #[test]
    fn test_serialize_error_message() {
        let err = Error::Serialize("key must be a string".to_string());
        assert_eq!(
            err.to_string(),
            "Deck serialization error: key must be a string"
        );
        assert!(!matches!(err, Error::ScriptParse(_)));
    }

    #[test]
    fn test_iteration_matches_slides() {
        let deck = Deck::compose(numbered_slides(3)).unwrap();
        let titles: Vec<String> = deck
            .iter()
            .map(|s| s.blocks()[0].plain_text())
            .collect();
        assert_eq!(titles, vec!["Slide 0", "Slide 1", "Slide 2"]);
        assert_eq!((&deck).into_iter().count(), 3);
    }
}
