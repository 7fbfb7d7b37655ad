//! Inline content: plain text, a nested block, or a mixed sequence of both.

use crate::block::ContentBlock;
use serde::Serialize;

/// Content that can appear inside a block parameter.
///
/// Serializes untagged: text as a JSON string, a nested block as an object,
/// a sequence as an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Inline {
    /// Plain text.
    Text(String),
    /// A nested content block, e.g. a label inside a step caption.
    Block(Box<ContentBlock>),
    /// Mixed text and blocks in reading order.
    Sequence(Vec<Inline>),
}

impl Default for Inline {
    fn default() -> Self {
        Inline::Text(String::new())
    }
}

impl Inline {
    /// Create a plain text inline.
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text(text.into())
    }

    /// Create a sequence from anything convertible to inline content.
    pub fn seq<I, T>(parts: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Inline>,
    {
        Inline::Sequence(parts.into_iter().map(Into::into).collect())
    }

    /// True when there is nothing to display.
    ///
    /// Whitespace-only text counts as empty; a nested block never does.
    pub fn is_empty(&self) -> bool {
        match self {
            Inline::Text(text) => text.trim().is_empty(),
            Inline::Block(_) => false,
            Inline::Sequence(parts) => parts.iter().all(Inline::is_empty),
        }
    }

    /// Flatten to display text with whitespace collapsed.
    pub fn plain_text(&self) -> String {
        crate::text::flatten_inline(self)
    }

    /// Iterate over the blocks nested directly or inside sequences.
    pub fn nested_blocks(&self) -> Vec<&ContentBlock> {
        let mut blocks = Vec::new();
        collect_blocks(self, &mut blocks);
        blocks
    }
}

fn collect_blocks<'a>(inline: &'a Inline, out: &mut Vec<&'a ContentBlock>) {
    match inline {
        Inline::Text(_) => {}
        Inline::Block(block) => out.push(block),
        Inline::Sequence(parts) => {
            for part in parts {
                collect_blocks(part, out);
            }
        }
    }
}

impl From<&str> for Inline {
    fn from(text: &str) -> Self {
        Inline::Text(text.to_string())
    }
}

impl From<String> for Inline {
    fn from(text: String) -> Self {
        Inline::Text(text)
    }
}

impl From<ContentBlock> for Inline {
    fn from(block: ContentBlock) -> Self {
        Inline::Block(Box::new(block))
    }
}

impl From<Vec<Inline>> for Inline {
    fn from(parts: Vec<Inline>) -> Self {
        Inline::Sequence(parts)
    }
}
