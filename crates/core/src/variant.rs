//! Closed styling variants and their style descriptors.
//!
//! Each variant maps to a fixed set of utility classes through an explicit
//! table, so an unknown variant is rejected when it is parsed instead of
//! producing a malformed class name.

use crate::{Error, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Color variants shared by labels, links and emphasized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Yellow,
    Purple,
    Red,
    Green,
    Indigo,
}

/// Concrete classes for one color variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorStyle {
    /// Foreground class used for links and highlighted text.
    pub text: &'static str,
    /// Fill class used for pills and banners.
    pub background: &'static str,
    /// Lighter foreground used for emphasis.
    pub emphasis: &'static str,
}

impl Color {
    /// Every color, in declaration order.
    pub const ALL: [Color; 6] = [
        Color::Blue,
        Color::Yellow,
        Color::Purple,
        Color::Red,
        Color::Green,
        Color::Indigo,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Red => "red",
            Color::Green => "green",
            Color::Indigo => "indigo",
        }
    }

    /// Resolve the style descriptor for this color.
    pub fn style(self) -> ColorStyle {
        match self {
            Color::Blue => ColorStyle {
                text: "text-blue-600",
                background: "bg-blue-600",
                emphasis: "text-blue-500",
            },
            Color::Yellow => ColorStyle {
                text: "text-yellow-600",
                background: "bg-yellow-600",
                emphasis: "text-yellow-500",
            },
            Color::Purple => ColorStyle {
                text: "text-purple-600",
                background: "bg-purple-600",
                emphasis: "text-purple-500",
            },
            Color::Red => ColorStyle {
                text: "text-red-600",
                background: "bg-red-600",
                emphasis: "text-red-500",
            },
            Color::Green => ColorStyle {
                text: "text-green-600",
                background: "bg-green-600",
                emphasis: "text-green-500",
            },
            Color::Indigo => ColorStyle {
                text: "text-indigo-600",
                background: "bg-indigo-600",
                emphasis: "text-indigo-500",
            },
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_lowercase();
        Color::ALL
            .into_iter()
            .find(|c| c.as_str() == lowered)
            .ok_or_else(|| Error::invalid_variant("color", s))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text size variants for color labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Sm,
    Md,
    Lg,
    #[default]
    Xl,
}

impl Size {
    pub fn as_str(self) -> &'static str {
        match self {
            Size::Sm => "sm",
            Size::Md => "md",
            Size::Lg => "lg",
            Size::Xl => "xl",
        }
    }

    /// Text size class for this variant.
    pub fn text_class(self) -> &'static str {
        match self {
            Size::Sm => "text-sm",
            Size::Md => "text-base",
            Size::Lg => "text-lg",
            Size::Xl => "text-xl",
        }
    }
}

impl FromStr for Size {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "sm" => Ok(Size::Sm),
            "md" => Ok(Size::Md),
            "lg" => Ok(Size::Lg),
            "xl" => Ok(Size::Xl),
            _ => Err(Error::invalid_variant("size", s)),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Slide background hint passed through to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Background {
    White,
    Black,
    /// A full-bleed accent fill, e.g. an indigo title slide.
    Accent(Color),
}

impl Background {
    pub fn as_str(self) -> &'static str {
        match self {
            Background::White => "white",
            Background::Black => "black",
            Background::Accent(color) => color.as_str(),
        }
    }

    /// Fill class for this background.
    pub fn class(self) -> &'static str {
        match self {
            Background::White => "bg-white",
            Background::Black => "bg-black",
            Background::Accent(color) => color.style().background,
        }
    }
}

impl FromStr for Background {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "white" => Ok(Background::White),
            "black" => Ok(Background::Black),
            other => other
                .parse::<Color>()
                .map(Background::Accent)
                .map_err(|_| Error::invalid_variant("background", s)),
        }
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Background {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
