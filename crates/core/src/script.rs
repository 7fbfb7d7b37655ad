//! Slide scripts: the JSON description of a talk.
//!
//! A script mirrors the serialized form of a [`Deck`], except that variants
//! are plain strings. Building a script runs every value through the block
//! constructors, so an unknown color is reported as
//! [`Error::InvalidVariant`] rather than as a parse error.
//!
//! ```json
//! {
//!   "title": "auto",
//!   "slides": [
//!     { "background": "indigo",
//!       "blocks": [{ "kind": "title_banner", "title": "auto", "subtitle": "Streamline releases" }] }
//!   ]
//! }
//! ```

use crate::block::{
    ColorLabel, ContentBlock, EmphasizedText, FeatureRow, Heading, Hyperlink, Image, Paragraph,
    QaBlock, StepIllustration, TitleBanner,
};
use crate::content::Inline;
use crate::deck::Deck;
use crate::slide::Slide;
use crate::variant::{Background, Size};
use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// A whole talk.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeckScript {
    #[serde(default)]
    pub title: Option<String>,

    pub slides: Vec<SlideScript>,
}

/// One slide of a script.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SlideScript {
    #[serde(default)]
    pub background: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,

    pub blocks: Vec<BlockScript>,
}

/// One block descriptor, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockScript {
    TitleBanner {
        title: String,
        #[serde(default)]
        subtitle: InlineScript,
    },
    FeatureRow {
        title: String,
        description: String,
        icon: String,
    },
    Hyperlink {
        #[serde(default)]
        text: Option<InlineScript>,
        #[serde(default)]
        href: Option<String>,
        #[serde(default)]
        color: Option<String>,
    },
    EmphasizedText {
        content: InlineScript,
        #[serde(default)]
        color: Option<String>,
        #[serde(default)]
        style: Option<String>,
    },
    StepIllustration {
        number: u32,
        label: InlineScript,
        image: String,
    },
    ColorLabel {
        text: String,
        color: String,
        #[serde(default)]
        size: Option<String>,
    },
    QaBlock {
        question: InlineScript,
        answer: InlineScript,
    },
    Heading {
        text: InlineScript,
        #[serde(default)]
        level: Option<u8>,
    },
    Paragraph {
        content: InlineScript,
    },
    Image {
        src: String,
        #[serde(default)]
        alt: Option<String>,
    },
}

/// Inline content descriptor: a string, an array, or a nested block object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum InlineScript {
    Text(String),
    Sequence(Vec<InlineScript>),
    Block(Box<BlockScript>),
}

impl Default for InlineScript {
    fn default() -> Self {
        InlineScript::Text(String::new())
    }
}

impl DeckScript {
    /// Parse a script from JSON text.
    pub fn from_json(source: &str) -> Result<Self> {
        serde_json::from_str(source).map_err(|e| Error::ScriptParse(e.to_string()))
    }

    /// Read and parse a script file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        log::debug!("Loaded slide script {}", path.display());
        Self::from_json(&source)
    }

    /// Build the deck this script describes.
    pub fn build(&self) -> Result<Deck> {
        let slides = self
            .slides
            .iter()
            .map(SlideScript::build)
            .collect::<Result<Vec<_>>>()?;

        let deck = Deck::compose(slides)?;
        Ok(match &self.title {
            Some(title) => deck.with_title(title.clone()),
            None => deck,
        })
    }
}

impl SlideScript {
    pub fn build(&self) -> Result<Slide> {
        let blocks = self
            .blocks
            .iter()
            .map(BlockScript::build)
            .collect::<Result<Vec<_>>>()?;
        let background = self
            .background
            .as_deref()
            .map(str::parse::<Background>)
            .transpose()?;

        let slide = Slide::assemble(blocks, background)?;
        Ok(match &self.notes {
            Some(notes) => slide.with_notes(notes.clone()),
            None => slide,
        })
    }
}

impl BlockScript {
    pub fn build(&self) -> Result<ContentBlock> {
        let block: ContentBlock = match self {
            BlockScript::TitleBanner { title, subtitle } => {
                TitleBanner::new(title.clone(), subtitle.build()?).into()
            }
            BlockScript::FeatureRow {
                title,
                description,
                icon,
            } => FeatureRow::new(title.clone(), description.clone(), icon.clone())?.into(),
            BlockScript::Hyperlink { text, href, color } => {
                let text = text.as_ref().map(InlineScript::build).transpose()?;
                let link = Hyperlink::new(text, href.clone())?;
                let link = match color {
                    Some(color) => link.with_color_name(color)?,
                    None => link,
                };
                link.into()
            }
            BlockScript::EmphasizedText {
                content,
                color,
                style,
            } => {
                let emphasis = EmphasizedText::new(content.build()?)
                    .with_style(style.clone().unwrap_or_default());
                let emphasis = match color {
                    Some(color) => emphasis.with_color_name(color)?,
                    None => emphasis,
                };
                emphasis.into()
            }
            BlockScript::StepIllustration {
                number,
                label,
                image,
            } => StepIllustration::new(*number, label.build()?, image.clone())?.into(),
            BlockScript::ColorLabel { text, color, size } => {
                let size = size
                    .as_deref()
                    .map(str::parse::<Size>)
                    .transpose()?
                    .unwrap_or_default();
                ColorLabel::from_variants(text.clone(), color.parse()?, size).into()
            }
            BlockScript::QaBlock { question, answer } => {
                QaBlock::new(question.build()?, answer.build()?).into()
            }
            BlockScript::Heading { text, level } => {
                Heading::new(text.build()?, level.unwrap_or(Heading::DEFAULT_LEVEL))?.into()
            }
            BlockScript::Paragraph { content } => Paragraph::new(content.build()?).into(),
            BlockScript::Image { src, alt } => {
                Image::new(src.clone(), alt.clone().unwrap_or_default())?.into()
            }
        };
        Ok(block)
    }
}

impl InlineScript {
    pub fn build(&self) -> Result<Inline> {
        Ok(match self {
            InlineScript::Text(text) => Inline::Text(text.clone()),
            InlineScript::Sequence(parts) => Inline::Sequence(
                parts
                    .iter()
                    .map(InlineScript::build)
                    .collect::<Result<Vec<_>>>()?,
            ),
            InlineScript::Block(block) => Inline::Block(Box::new(block.build()?)),
        })
    }
}
