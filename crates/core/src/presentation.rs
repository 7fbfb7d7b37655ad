//! The presentation root: turns a slide script into a fresh deck.

use crate::deck::Deck;
use crate::script::DeckScript;
use crate::Result;
use std::path::Path;

/// Talks bundled with the crate, by name.
pub const BUILTIN_TALKS: &[(&str, &str)] = &[
    ("auto", include_str!("../talks/auto.json")),
    ("kotlin-tooling", include_str!("../talks/kotlin-tooling.json")),
];

/// Look up the script source of a bundled talk.
pub fn builtin_talk(name: &str) -> Option<&'static str> {
    BUILTIN_TALKS
        .iter()
        .find(|(talk, _)| talk.eq_ignore_ascii_case(name))
        .map(|(_, source)| *source)
}

/// Names of the bundled talks.
pub fn builtin_talk_names() -> Vec<&'static str> {
    BUILTIN_TALKS.iter().map(|(name, _)| *name).collect()
}

/// Entry point handing a finished deck to the renderer.
///
/// Holds the script, never a built deck: every call to [`present`]
/// builds an independent deck.
///
/// [`present`]: PresentationRoot::present
#[derive(Debug, Clone)]
pub struct PresentationRoot {
    script: DeckScript,
}

impl PresentationRoot {
    pub fn new(script: DeckScript) -> Self {
        Self { script }
    }

    /// Parse a script from JSON text.
    pub fn from_json(source: &str) -> Result<Self> {
        DeckScript::from_json(source).map(Self::new)
    }

    /// Read a script file.
    pub fn from_path(path: &Path) -> Result<Self> {
        DeckScript::from_path(path).map(Self::new)
    }

    /// Use a bundled talk. Returns `None` for unknown names.
    pub fn builtin(name: &str) -> Option<Result<Self>> {
        builtin_talk(name).map(Self::from_json)
    }

    pub fn script(&self) -> &DeckScript {
        &self.script
    }

    /// Build the deck.
    pub fn present(&self) -> Result<Deck> {
        let deck = self.script.build()?;
        log::debug!(
            "Presenting {} ({} slides)",
            deck.title().unwrap_or("untitled deck"),
            deck.len()
        );
        Ok(deck)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{BlockKind, ContentBlock};
    use crate::variant::{Background, Color};

    #[test]
    fn test_every_builtin_talk_builds() {
        for (name, _) in BUILTIN_TALKS {
            let root = PresentationRoot::builtin(name).unwrap().unwrap();
            let deck = root.present().unwrap();
            assert!(deck.len() > 1, "{} should have several slides", name);
        }
    }

    #[test]
    fn test_builtin_lookup() {
        assert!(builtin_talk("AUTO").is_some());
        assert!(builtin_talk("keynote").is_none());
        assert!(PresentationRoot::builtin("keynote").is_none());
        assert_eq!(builtin_talk_names(), vec!["auto", "kotlin-tooling"]);
    }

    #[test]
    fn test_auto_talk_opens_with_title_banner() {
        let deck = PresentationRoot::builtin("auto")
            .unwrap()
            .unwrap()
            .present()
            .unwrap();

        let first = deck.get(0).unwrap();
        assert_eq!(first.blocks().len(), 1);
        match &first.blocks()[0] {
            ContentBlock::TitleBanner(banner) => {
                assert_eq!(banner.title(), "auto");
                assert_eq!(banner.subtitle().plain_text(), "Streamline releases");
            }
            other => panic!("unexpected block: {other:?}"),
        }
        assert_eq!(first.background(), Some(Background::Accent(Color::Indigo)));
    }

    #[test]
    fn test_kotlin_talk_structure() {
        let deck = PresentationRoot::builtin("kotlin-tooling")
            .unwrap()
            .unwrap()
            .present()
            .unwrap();

        assert_eq!(deck.len(), 15);
        assert_eq!(deck.title(), Some("Kotlin tooling"));

        let steps: Vec<u32> = deck
            .iter()
            .flat_map(|s| s.blocks())
            .filter_map(|b| match b {
                ContentBlock::StepIllustration(step) => Some(step.number()),
                _ => None,
            })
            .collect();
        assert_eq!(steps, vec![1, 2, 3, 4]);

        let features = deck.get(2).unwrap().blocks();
        assert_eq!(
            features.iter().filter(|b| b.kind() == BlockKind::FeatureRow).count(),
            3
        );
    }

    #[test]
    fn test_each_present_call_builds_equal_independent_decks() {
        let root = PresentationRoot::builtin("kotlin-tooling").unwrap().unwrap();
        let a = root.present().unwrap();
        let b = root.present().unwrap();
        assert_eq!(a, b);
        assert!(!std::ptr::eq(a.slides().as_ptr(), b.slides().as_ptr()));
    }

    #[test]
    fn test_builtin_talks_round_trip() {
        for (name, source) in BUILTIN_TALKS {
            let deck = PresentationRoot::from_json(source).unwrap().present().unwrap();
            let json = deck.to_json_pretty().unwrap();
            let rebuilt = PresentationRoot::from_json(&json).unwrap().present().unwrap();
            assert_eq!(rebuilt, deck, "{} should survive a round trip", name);
        }
    }
}
