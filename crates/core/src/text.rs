//! Plain-text flattening of inline content.
//!
//! Sequences are concatenated as written (authors carry their own spacing),
//! then whitespace runs are collapsed and the result trimmed.

use crate::block::ContentBlock;
use crate::content::Inline;
use regex::Regex;
use std::sync::LazyLock;

/// Regex to collapse whitespace runs, including line breaks from source scripts.
static WHITESPACE_COLLAPSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Collapse whitespace runs to single spaces and trim.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_COLLAPSE_REGEX
        .replace_all(text, " ")
        .trim()
        .to_string()
}

/// Flatten inline content to a single display line.
pub fn flatten_inline(inline: &Inline) -> String {
    let mut raw = String::new();
    push_inline(&mut raw, inline);
    collapse_whitespace(&raw)
}

/// Flatten a whole block to a single display line.
pub fn flatten_block(block: &ContentBlock) -> String {
    let mut raw = String::new();
    push_block(&mut raw, block);
    collapse_whitespace(&raw)
}

fn push_inline(out: &mut String, inline: &Inline) {
    match inline {
        Inline::Text(text) => out.push_str(text),
        Inline::Block(block) => push_block(out, block),
        Inline::Sequence(parts) => {
            for part in parts {
                push_inline(out, part);
            }
        }
    }
}

fn push_block(out: &mut String, block: &ContentBlock) {
    match block {
        // Inline-level blocks contribute only their visible text so they
        // read naturally inside a sentence.
        ContentBlock::Hyperlink(link) => push_inline(out, link.text()),
        ContentBlock::EmphasizedText(emphasis) => push_inline(out, emphasis.content()),
        ContentBlock::ColorLabel(label) => out.push_str(label.text()),
        ContentBlock::Heading(heading) => push_inline(out, heading.text()),
        ContentBlock::Paragraph(paragraph) => push_inline(out, paragraph.content()),

        ContentBlock::TitleBanner(banner) => {
            out.push_str(banner.title());
            if !banner.subtitle().is_empty() {
                out.push(' ');
                push_inline(out, banner.subtitle());
            }
        }
        ContentBlock::FeatureRow(feature) => {
            out.push_str(feature.title());
            out.push_str(": ");
            out.push_str(feature.description());
        }
        ContentBlock::StepIllustration(step) => push_inline(out, step.label()),
        ContentBlock::QaBlock(qa) => {
            push_inline(out, qa.question());
            out.push(' ');
            push_inline(out, qa.answer());
        }
        ContentBlock::Image(image) => {
            if image.alt().is_empty() {
                out.push_str(image.src());
            } else {
                out.push_str(image.alt());
            }
        }
    }
}
