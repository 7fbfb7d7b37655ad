//! The content block library.
//!
//! Every constructor is a pure value constructor: the result depends only on
//! its arguments, and validation happens here rather than at render time.
//! Blocks are immutable once built; copies are made with `Clone`.

use crate::content::Inline;
use crate::variant::{Color, Size};
use crate::{Error, Result};
use serde::Serialize;
use std::fmt;

/// A reusable, parameterized unit of slide content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentBlock {
    TitleBanner(TitleBanner),
    FeatureRow(FeatureRow),
    Hyperlink(Hyperlink),
    EmphasizedText(EmphasizedText),
    StepIllustration(StepIllustration),
    ColorLabel(ColorLabel),
    QaBlock(QaBlock),
    Heading(Heading),
    Paragraph(Paragraph),
    Image(Image),
}

/// The kind tag of a content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    TitleBanner,
    FeatureRow,
    Hyperlink,
    EmphasizedText,
    StepIllustration,
    ColorLabel,
    QaBlock,
    Heading,
    Paragraph,
    Image,
}

impl BlockKind {
    /// The tag used in slide scripts.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::TitleBanner => "title_banner",
            BlockKind::FeatureRow => "feature_row",
            BlockKind::Hyperlink => "hyperlink",
            BlockKind::EmphasizedText => "emphasized_text",
            BlockKind::StepIllustration => "step_illustration",
            BlockKind::ColorLabel => "color_label",
            BlockKind::QaBlock => "qa_block",
            BlockKind::Heading => "heading",
            BlockKind::Paragraph => "paragraph",
            BlockKind::Image => "image",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ContentBlock {
    pub fn kind(&self) -> BlockKind {
        match self {
            ContentBlock::TitleBanner(_) => BlockKind::TitleBanner,
            ContentBlock::FeatureRow(_) => BlockKind::FeatureRow,
            ContentBlock::Hyperlink(_) => BlockKind::Hyperlink,
            ContentBlock::EmphasizedText(_) => BlockKind::EmphasizedText,
            ContentBlock::StepIllustration(_) => BlockKind::StepIllustration,
            ContentBlock::ColorLabel(_) => BlockKind::ColorLabel,
            ContentBlock::QaBlock(_) => BlockKind::QaBlock,
            ContentBlock::Heading(_) => BlockKind::Heading,
            ContentBlock::Paragraph(_) => BlockKind::Paragraph,
            ContentBlock::Image(_) => BlockKind::Image,
        }
    }

    /// Flatten this block to display text.
    pub fn plain_text(&self) -> String {
        crate::text::flatten_block(self)
    }
}

macro_rules! impl_block_conversions {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for ContentBlock {
                fn from(block: $variant) -> Self {
                    ContentBlock::$variant(block)
                }
            }

            impl From<$variant> for Inline {
                fn from(block: $variant) -> Self {
                    Inline::Block(Box::new(ContentBlock::$variant(block)))
                }
            }
        )*
    };
}

impl_block_conversions!(
    TitleBanner,
    FeatureRow,
    Hyperlink,
    EmphasizedText,
    StepIllustration,
    ColorLabel,
    QaBlock,
    Heading,
    Paragraph,
    Image,
);

/// Reject empty or whitespace-only references.
fn require_reference(value: String, field: &'static str) -> Result<String> {
    if value.trim().is_empty() {
        return Err(Error::InvalidReference(field));
    }
    Ok(value)
}

/// Large centered title with a subtitle line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleBanner {
    title: String,
    subtitle: Inline,
}

impl TitleBanner {
    /// Create a banner. The subtitle may be empty.
    pub fn new(title: impl Into<String>, subtitle: impl Into<Inline>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &Inline {
        &self.subtitle
    }
}

/// An icon paired with a title and a description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureRow {
    title: String,
    description: String,
    icon: String,
}

impl FeatureRow {
    /// Create a feature row.
    ///
    /// `icon` is an opaque identifier for the icon renderer; it only has to
    /// be non-empty.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            title: title.into(),
            description: description.into(),
            icon: require_reference(icon.into(), "feature icon")?,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }
}

/// Link-styled text, optionally pointing somewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hyperlink {
    text: Inline,
    #[serde(skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    color: Color,
}

impl Hyperlink {
    /// Create a blue link.
    ///
    /// A present but empty `href` is rejected. Missing or empty text falls
    /// back to the URL itself. Text without an `href` makes an inert link
    /// that is styled like a link but goes nowhere.
    pub fn new(text: Option<Inline>, href: Option<String>) -> Result<Self> {
        let href = href
            .map(|h| require_reference(h, "hyperlink href"))
            .transpose()?;

        let text = match (text.filter(|t| !t.is_empty()), &href) {
            (Some(text), _) => text,
            (None, Some(url)) => Inline::Text(url.clone()),
            (None, None) => return Err(Error::InvalidReference("hyperlink text")),
        };

        if href.is_none() {
            log::debug!("Inert hyperlink: {}", text.plain_text());
        }

        Ok(Self {
            text,
            href,
            color: Color::Blue,
        })
    }

    /// Link whose text is the URL.
    pub fn to(url: impl Into<String>) -> Result<Self> {
        Self::new(None, Some(url.into()))
    }

    /// Link with display text.
    pub fn labeled(text: impl Into<Inline>, url: impl Into<String>) -> Result<Self> {
        Self::new(Some(text.into()), Some(url.into()))
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Change the color from a color name.
    pub fn with_color_name(self, color: &str) -> Result<Self> {
        Ok(self.with_color(color.parse()?))
    }

    pub fn text(&self) -> &Inline {
        &self.text
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// True when the link has no destination.
    pub fn is_inert(&self) -> bool {
        self.href.is_none()
    }

    pub fn classes(&self) -> String {
        format!("{} font-semibold underline", self.color.style().text)
    }
}

/// Inline content highlighted with an emphasis color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmphasizedText {
    content: Inline,
    color: Color,
    #[serde(skip_serializing_if = "String::is_empty")]
    style: String,
}

impl EmphasizedText {
    /// Emphasize content in the default purple.
    pub fn new(content: impl Into<Inline>) -> Self {
        Self {
            content: content.into(),
            color: Color::Purple,
            style: String::new(),
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Change the color from a color name.
    pub fn with_color_name(self, color: &str) -> Result<Self> {
        Ok(self.with_color(color.parse()?))
    }

    /// Attach an extra style tag passed through to the renderer untouched.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into().trim().to_string();
        self
    }

    pub fn content(&self) -> &Inline {
        &self.content
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn classes(&self) -> String {
        let base = format!("{} font-semibold", self.color.style().emphasis);
        if self.style.is_empty() {
            base
        } else {
            format!("{} {}", base, self.style)
        }
    }
}

/// A numbered step: a caption above a screenshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepIllustration {
    number: u32,
    label: Inline,
    image: String,
}

impl StepIllustration {
    /// Create a step.
    ///
    /// `number` is informational. Navigation order comes from the slide's
    /// position in the deck, never from this number.
    pub fn new(number: u32, label: impl Into<Inline>, image: impl Into<String>) -> Result<Self> {
        Ok(Self {
            number,
            label: label.into(),
            image: require_reference(image.into(), "step image")?,
        })
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn label(&self) -> &Inline {
        &self.label
    }

    pub fn image(&self) -> &str {
        &self.image
    }
}

/// A colored pill, e.g. a GitHub label name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorLabel {
    text: String,
    color: Color,
    size: Size,
}

impl ColorLabel {
    /// Create an `xl` label from a color name.
    pub fn new(text: impl Into<String>, color: &str) -> Result<Self> {
        Ok(Self::from_variants(text, color.parse()?, Size::default()))
    }

    /// Create a label from already-validated variants.
    pub fn from_variants(text: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            text: text.into(),
            color,
            size,
        }
    }

    /// Change the size from a size name.
    pub fn with_size(mut self, size: &str) -> Result<Self> {
        self.size = size.parse()?;
        Ok(self)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn classes(&self) -> String {
        format!(
            "{} text-white px-2 py-1 rounded font-semibold {} align-middle",
            self.color.style().background,
            self.size.text_class()
        )
    }
}

/// A question with its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QaBlock {
    question: Inline,
    answer: Inline,
}

impl QaBlock {
    pub fn new(question: impl Into<Inline>, answer: impl Into<Inline>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }

    pub fn question(&self) -> &Inline {
        &self.question
    }

    pub fn answer(&self) -> &Inline {
        &self.answer
    }
}

/// Headline text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    text: Inline,
    level: u8,
}

impl Heading {
    /// Level used when a script does not name one.
    pub const DEFAULT_LEVEL: u8 = 2;

    /// Create a heading. Levels run from 1 to 6.
    pub fn new(text: impl Into<Inline>, level: u8) -> Result<Self> {
        if !(1..=6).contains(&level) {
            return Err(Error::invalid_variant("heading level", level.to_string()));
        }
        Ok(Self {
            text: text.into(),
            level,
        })
    }

    pub fn text(&self) -> &Inline {
        &self.text
    }

    pub fn level(&self) -> u8 {
        self.level
    }
}

/// A paragraph of prose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    content: Inline,
}

impl Paragraph {
    pub fn new(content: impl Into<Inline>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &Inline {
        &self.content
    }
}

/// A standalone image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    src: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    alt: String,
}

impl Image {
    /// Create an image. `src` is an opaque path resolved by the asset loader.
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Result<Self> {
        Ok(Self {
            src: require_reference(src.into(), "image src")?,
            alt: alt.into(),
        })
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn alt(&self) -> &str {
        &self.alt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_parameters_give_equal_blocks() {
        let a = ColorLabel::new("label", "blue").unwrap();
        let b = ColorLabel::new("label", "blue").unwrap();
        assert_eq!(a, b);

        let a = FeatureRow::new("Keep Your Workflow", "...", "wrench").unwrap();
        let b = FeatureRow::new("Keep Your Workflow", "...", "wrench").unwrap();
        assert_eq!(ContentBlock::from(a), ContentBlock::from(b));
    }

    #[test]
    fn test_color_label_rejects_unknown_color() {
        assert!(matches!(
            ColorLabel::new("label", "chartreuse"),
            Err(Error::InvalidVariant { kind: "color", .. })
        ));
    }

    #[test]
    fn test_color_label_size() {
        let label = ColorLabel::new("skip-release", "purple").unwrap();
        assert_eq!(label.size(), Size::Xl);

        let label = label.with_size("sm").unwrap();
        assert_eq!(label.size(), Size::Sm);
        assert_eq!(
            label.classes(),
            "bg-purple-600 text-white px-2 py-1 rounded font-semibold text-sm align-middle"
        );

        assert!(ColorLabel::new("x", "blue").unwrap().with_size("huge").is_err());
    }

    #[test]
    fn test_hyperlink_rejects_empty_href() {
        assert!(matches!(
            Hyperlink::new(Some("Hooks".into()), Some(String::new())),
            Err(Error::InvalidReference("hyperlink href"))
        ));
    }

    #[test]
    fn test_hyperlink_text_defaults_to_url() {
        let link = Hyperlink::to("https://intuit.github.io/hooks").unwrap();
        assert_eq!(
            link.text(),
            &Inline::text("https://intuit.github.io/hooks")
        );
        assert_eq!(link.color(), Color::Blue);
        assert_eq!(link.classes(), "text-blue-600 font-semibold underline");
    }

    #[test]
    fn test_hyperlink_without_href_is_inert() {
        let link = Hyperlink::new(Some("https://github.com/intuit/auto".into()), None).unwrap();
        assert!(link.is_inert());
        assert_eq!(link.href(), None);

        assert!(matches!(
            Hyperlink::new(None, None),
            Err(Error::InvalidReference("hyperlink text"))
        ));
    }

    #[test]
    fn test_color_names_are_validated() {
        let link = Hyperlink::to("https://intuit.github.io/auto")
            .unwrap()
            .with_color_name("Green")
            .unwrap();
        assert_eq!(link.color(), Color::Green);

        let emphasis = EmphasizedText::new("auto").with_color_name("red").unwrap();
        assert_eq!(emphasis.color(), Color::Red);

        assert!(matches!(
            Hyperlink::to("https://intuit.github.io/auto")
                .unwrap()
                .with_color_name("chartreuse"),
            Err(Error::InvalidVariant { kind: "color", .. })
        ));
        assert!(matches!(
            EmphasizedText::new("auto").with_color_name("mauve"),
            Err(Error::InvalidVariant { kind: "color", .. })
        ));
    }

    #[test]
    fn test_emphasis_classes() {
        let plain = EmphasizedText::new("auto");
        assert_eq!(plain.classes(), "text-purple-500 font-semibold");

        let styled = EmphasizedText::new("fit any workflow")
            .with_color(Color::Red)
            .with_style(" block ");
        assert_eq!(styled.style(), "block");
        assert_eq!(styled.classes(), "text-red-500 font-semibold block");
    }

    #[test]
    fn test_references_must_not_be_empty() {
        assert!(matches!(
            FeatureRow::new("Docs", "API docs", ""),
            Err(Error::InvalidReference("feature icon"))
        ));
        assert!(matches!(
            StepIllustration::new(1, "Open a Pull Request", "  "),
            Err(Error::InvalidReference("step image"))
        ));
        assert!(matches!(
            Image::new("", "logos"),
            Err(Error::InvalidReference("image src"))
        ));
    }

    #[test]
    fn test_step_number_is_kept_verbatim() {
        let step = StepIllustration::new(7, "Hit that merge button", "merge.png").unwrap();
        assert_eq!(step.number(), 7);
        assert_eq!(step.image(), "merge.png");
    }

    #[test]
    fn test_heading_level_range() {
        assert!(Heading::new("What does the workflow look like?", 2).is_ok());
        assert!(matches!(
            Heading::new("Too deep", 7),
            Err(Error::InvalidVariant {
                kind: "heading level",
                ..
            })
        ));
        assert!(Heading::new("Zero", 0).is_err());
    }

    #[test]
    fn test_clones_are_independent_values() {
        let answer = Inline::seq(vec![
            Inline::text("Many of "),
            EmphasizedText::new("auto").into(),
            Inline::text("'s features are plugins"),
        ]);
        let first = QaBlock::new("Hooks?", answer.clone());
        let mut second_answer = answer;
        if let Inline::Sequence(parts) = &mut second_answer {
            parts.push(Inline::text("!"));
        }
        let second = QaBlock::new("Hooks?", second_answer);

        assert_ne!(first, second);
        assert_eq!(first.answer().plain_text(), "Many of auto's features are plugins");
    }

    #[test]
    fn test_serialized_shape() {
        let block = ContentBlock::from(TitleBanner::new("auto", "Streamline releases"));
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["kind"], "title_banner");
        assert_eq!(json["title"], "auto");
        assert_eq!(json["subtitle"], "Streamline releases");

        let block = ContentBlock::from(QaBlock::new("Q", "A"));
        assert_eq!(serde_json::to_value(&block).unwrap()["kind"], "qa_block");
    }
}
