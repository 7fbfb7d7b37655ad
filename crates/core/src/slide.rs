//! Slide assembly.

use crate::block::ContentBlock;
use crate::variant::Background;
use crate::{Error, Result};
use serde::Serialize;

/// One navigable unit of a deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    /// Background hint for the renderer.
    #[serde(skip_serializing_if = "Option::is_none")]
    background: Option<Background>,

    /// Presenter notes, never shown on the slide itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,

    /// Top-level blocks in display order. Never empty.
    blocks: Vec<ContentBlock>,
}

impl Slide {
    /// Assemble a slide from its blocks.
    ///
    /// Fails with [`Error::EmptySlide`] when `blocks` is empty.
    pub fn assemble(blocks: Vec<ContentBlock>, background: Option<Background>) -> Result<Self> {
        if blocks.is_empty() {
            return Err(Error::EmptySlide);
        }

        Ok(Self {
            background,
            notes: None,
            blocks,
        })
    }

    /// Assemble a slide holding a single block.
    pub fn single(block: impl Into<ContentBlock>) -> Self {
        Self {
            background: None,
            notes: None,
            blocks: vec![block.into()],
        }
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.background = Some(background);
        self
    }

    /// Attach presenter notes. Blank notes are dropped.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = if notes.trim().is_empty() {
            None
        } else {
            Some(notes)
        };
        self
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    pub fn background(&self) -> Option<Background> {
        self.background
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}
