/// Output records for the extracted deck.
use serde::Serialize;

/// The full extraction result for one presentation.
///
/// Serializes to the JSON shape emitted on stdout:
///
/// ```json
/// {"file_name": "...", "slide_count": 2, "slides": [...]}
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Deck {
    /// Base file name of the input path (directory-stripped)
    pub file_name: String,
    /// Number of slides; always equals `slides.len()`
    pub slide_count: usize,
    /// Per-slide records in document order
    pub slides: Vec<Slide>,
}

/// Extracted content of a single slide.
#[derive(Debug, Clone, Serialize)]
pub struct Slide {
    /// 1-based position in the presentation
    pub index: usize,
    /// Best-guess title; serialized as `null` when absent
    pub title: Option<String>,
    /// Non-empty text lines from all text-bearing shapes, in shape order
    pub text: Vec<String>,
    /// Non-empty speaker-note lines; the key is omitted entirely when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
}
