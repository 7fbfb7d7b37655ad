//! WASM wrapper that hands built decks to a JavaScript renderer.
//!
//! The host renderer (pagination, transitions, keyboard navigation) lives in
//! JavaScript; this crate only builds and validates the deck it displays.

use deck_core::{builtin_talk, builtin_talk_names, Deck, OutlineFormatter, PresentationRoot};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// A built deck plus a few facts the renderer wants up front.
#[derive(Debug, Serialize)]
pub struct DeckResult {
    /// Talk title, if the script names one.
    pub title: Option<String>,
    /// Number of slides in the deck.
    pub slide_count: usize,
    /// The deck itself, in slide script shape.
    pub deck: Deck,
}

/// Result of formatting a deck as a plain-text outline.
#[derive(Debug, Serialize, Deserialize)]
pub struct OutlineResult {
    /// The outline text.
    pub text: String,
    /// Number of slides outlined.
    pub slide_count: usize,
}

/// Build a deck from slide script JSON.
///
/// # Returns
/// A JavaScript object with the deck, or throws with the construction error.
#[wasm_bindgen]
pub fn build_deck(script_json: &str) -> Result<JsValue, JsValue> {
    let result = build_deck_impl(script_json).map_err(|e| JsValue::from_str(&e))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Build one of the bundled talks.
#[wasm_bindgen]
pub fn builtin_deck(name: &str) -> Result<JsValue, JsValue> {
    let source = builtin_talk(name)
        .ok_or_else(|| JsValue::from_str(&format!("Unknown talk: {}", name)))?;
    build_deck(source)
}

/// Names of the bundled talks.
#[wasm_bindgen]
pub fn talk_names() -> js_sys::Array {
    builtin_talk_names()
        .into_iter()
        .map(JsValue::from_str)
        .collect()
}

/// Format slide script JSON as a plain-text outline.
#[wasm_bindgen]
pub fn format_outline(
    script_json: &str,
    include_notes: bool,
    numbered: bool,
) -> Result<JsValue, JsValue> {
    let result = format_outline_impl(script_json, include_notes, numbered)
        .map_err(|e| JsValue::from_str(&e))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn present(script_json: &str) -> Result<Deck, String> {
    PresentationRoot::from_json(script_json)
        .and_then(|root| root.present())
        .map_err(|e| e.to_string())
}

fn build_deck_impl(script_json: &str) -> Result<DeckResult, String> {
    let deck = present(script_json)?;

    Ok(DeckResult {
        title: deck.title().map(str::to_string),
        slide_count: deck.len(),
        deck,
    })
}

fn format_outline_impl(
    script_json: &str,
    include_notes: bool,
    numbered: bool,
) -> Result<OutlineResult, String> {
    let deck = present(script_json)?;
    let formatter = OutlineFormatter::new()
        .with_notes(include_notes)
        .with_numbers(numbered);

    Ok(OutlineResult {
        text: formatter.format_with_newline(&deck),
        slide_count: deck.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SLIDES: &str = r#"{ "slides": [
        { "blocks": [ { "kind": "title_banner", "title": "auto", "subtitle": "Streamline releases" } ] },
        { "notes": "features", "blocks": [
            { "kind": "feature_row", "title": "Keep Your Workflow", "description": "...", "icon": "wrench" }
        ] }
    ] }"#;

    #[test]
    fn test_build_deck() {
        let result = build_deck_impl(TWO_SLIDES).unwrap();

        assert_eq!(result.slide_count, 2);
        assert_eq!(result.title, None);
        assert_eq!(result.deck.len(), 2);
    }

    #[test]
    fn test_build_deck_reports_construction_errors() {
        let err = build_deck_impl(r#"{ "slides": [] }"#).unwrap_err();
        assert_eq!(err, "A deck needs at least one slide");

        let err = build_deck_impl(
            r#"{ "slides": [ { "blocks": [ { "kind": "color_label", "text": "x", "color": "chartreuse" } ] } ] }"#,
        )
        .unwrap_err();
        assert!(err.contains("chartreuse"));
    }

    #[test]
    fn test_format_outline() {
        let result = format_outline_impl(TWO_SLIDES, true, true).unwrap();

        assert_eq!(result.slide_count, 2);
        assert_eq!(
            result.text,
            "1. auto\nStreamline releases\n\n2. - Keep Your Workflow: ...\nNotes: features\n"
        );
    }

    #[test]
    fn test_format_outline_without_numbers() {
        let result = format_outline_impl(TWO_SLIDES, false, false).unwrap();
        assert!(result.text.starts_with("auto\n"));
        assert!(!result.text.contains("Notes:"));
    }
}
