//! Content blocks, slide assembly and deck composition for slide-based talks.
//!
//! A talk is described as data (a [`DeckScript`]) and built into a [`Deck`]:
//! an ordered list of [`Slide`]s, each made of [`ContentBlock`]s. The deck is
//! handed to an external renderer, which owns navigation and layout.

pub mod block;
pub mod content;
pub mod deck;
pub mod error;
pub mod outline;
pub mod presentation;
pub mod script;
pub mod slide;
pub mod text;
pub mod variant;

pub use block::{
    BlockKind, ColorLabel, ContentBlock, EmphasizedText, FeatureRow, Heading, Hyperlink, Image,
    Paragraph, QaBlock, StepIllustration, TitleBanner,
};
pub use content::Inline;
pub use deck::Deck;
pub use error::{Error, Result};
pub use outline::OutlineFormatter;
pub use presentation::{builtin_talk, builtin_talk_names, PresentationRoot, BUILTIN_TALKS};
pub use script::DeckScript;
pub use slide::Slide;
pub use variant::{Background, Color, ColorStyle, Size};
