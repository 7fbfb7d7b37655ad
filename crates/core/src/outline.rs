//! Plain-text deck outline.
//!
//! Renders each slide as a few lines of text, with slides separated by a
//! blank line. Useful for speaker prep and for checking a script in a
//! terminal without the renderer.

use crate::block::ContentBlock;
use crate::deck::Deck;
use crate::slide::Slide;
use crate::text::collapse_whitespace;

/// Formatter for the plain-text outline.
#[derive(Debug, Clone)]
pub struct OutlineFormatter {
    /// Prefix each slide with its 1-based position.
    numbered: bool,
    /// Append presenter notes under each slide.
    include_notes: bool,
}

impl Default for OutlineFormatter {
    fn default() -> Self {
        Self {
            numbered: true,
            include_notes: false,
        }
    }
}

impl OutlineFormatter {
    /// Create a formatter with numbering on and notes off.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_numbers(mut self, numbered: bool) -> Self {
        self.numbered = numbered;
        self
    }

    pub fn with_notes(mut self, include_notes: bool) -> Self {
        self.include_notes = include_notes;
        self
    }

    /// Format a deck as outline text.
    ///
    /// # Example output
    /// ```text
    /// 1. auto
    /// Streamline releases
    ///
    /// 2. - Keep Your Workflow: Use the tools you already have
    /// ```
    pub fn format(&self, deck: &Deck) -> String {
        let mut sections = Vec::with_capacity(deck.len());
        if let Some(title) = deck.title() {
            sections.push(format!("# {}", title));
        }

        for slide in outline_slides(deck) {
            sections.push(self.format_slide(&slide));
        }

        sections.join("\n\n")
    }

    /// Format and add a trailing newline.
    pub fn format_with_newline(&self, deck: &Deck) -> String {
        format!("{}\n", self.format(deck))
    }

    fn format_slide(&self, slide: &OutlineSlide) -> String {
        let mut lines = slide.lines.clone();

        if self.numbered {
            match lines.first_mut() {
                Some(first) => *first = format!("{}. {}", slide.number, first),
                None => lines.push(format!("{}.", slide.number)),
            }
        }

        if self.include_notes {
            if let Some(notes) = &slide.notes {
                lines.push(format!("Notes: {}", collapse_whitespace(notes)));
            }
        }

        lines.join("\n")
    }
}

/// A slide reduced to outline lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineSlide {
    /// 1-based position in the deck.
    pub number: usize,

    /// One or more lines per block, in block order.
    pub lines: Vec<String>,

    /// Presenter notes, if any.
    pub notes: Option<String>,
}

impl OutlineSlide {
    pub fn from_slide(number: usize, slide: &Slide) -> Self {
        Self {
            number,
            lines: slide.blocks().iter().flat_map(block_lines).collect(),
            notes: slide.notes().map(str::to_string),
        }
    }
}

/// Reduce every slide of a deck to outline lines.
pub fn outline_slides(deck: &Deck) -> Vec<OutlineSlide> {
    deck.iter()
        .enumerate()
        .map(|(idx, slide)| OutlineSlide::from_slide(idx + 1, slide))
        .collect()
}

/// Outline lines for a single top-level block.
pub fn block_lines(block: &ContentBlock) -> Vec<String> {
    match block {
        ContentBlock::TitleBanner(banner) => {
            let mut lines = vec![collapse_whitespace(banner.title())];
            if !banner.subtitle().is_empty() {
                lines.push(banner.subtitle().plain_text());
            }
            lines
        }
        ContentBlock::FeatureRow(feature) => vec![format!(
            "- {}: {}",
            collapse_whitespace(feature.title()),
            collapse_whitespace(feature.description())
        )],
        ContentBlock::Hyperlink(link) => match link.href() {
            Some(href) if link.text().plain_text() != href => {
                vec![format!("{} <{}>", link.text().plain_text(), href)]
            }
            _ => vec![link.text().plain_text()],
        },
        ContentBlock::StepIllustration(step) => vec![
            format!("Step {}: {}", step.number(), step.label().plain_text()),
            format!("[image: {}]", step.image()),
        ],
        ContentBlock::ColorLabel(label) => vec![format!("[{}]", label.text())],
        ContentBlock::QaBlock(qa) => vec![
            format!("Q: {}", qa.question().plain_text()),
            format!("A: {}", qa.answer().plain_text()),
        ],
        ContentBlock::Image(image) => {
            if image.alt().is_empty() {
                vec![format!("[image: {}]", image.src())]
            } else {
                vec![format!("[image: {} ({})]", image.src(), image.alt())]
            }
        }
        ContentBlock::EmphasizedText(_) | ContentBlock::Heading(_) | ContentBlock::Paragraph(_) => {
            vec![block.plain_text()]
        }
    }
}
