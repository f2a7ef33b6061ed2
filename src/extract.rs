/// Text extraction over the typed slide model.
///
/// Three pure per-slide extractors plus the deck assembler. Extraction never
/// fails at the slide level: a slide with no usable text yields a `null`
/// title and an empty text sequence.
use crate::error::Result;
use crate::model::{Deck, Slide};
use crate::pptx::{Package, SlideDoc};
use std::path::Path;

/// Best-guess title for a slide.
///
/// The first title-role placeholder whose trimmed text is non-empty wins.
/// Failing that, the first text-bearing shape with non-empty trimmed text
/// contributes only its first line. This first-line fallback is a heuristic
/// that downstream consumers rely on; it is preserved exactly.
pub fn slide_title(slide: &SlideDoc) -> Option<String> {
    for shape in slide.shapes() {
        if shape.is_title_placeholder()
            && let Some(frame) = &shape.text_frame
        {
            let text = frame.text();
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }

    // Fallback: first line of the first shape with non-empty text
    for shape in slide.shapes() {
        if let Some(frame) = &shape.text_frame {
            let text = frame.text();
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return trimmed.lines().next().map(str::to_string);
            }
        }
    }

    None
}

/// All non-empty text lines on a slide.
///
/// One entry per non-empty paragraph, ordered by shape order then paragraph
/// order. Title placeholders are text-bearing shapes and contribute here
/// like any other.
pub fn slide_text(slide: &SlideDoc) -> Vec<String> {
    let mut lines = Vec::new();
    for shape in slide.shapes() {
        if let Some(frame) = &shape.text_frame {
            for para in &frame.paragraphs {
                let text = para.text();
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    lines.push(trimmed.to_string());
                }
            }
        }
    }
    lines
}

/// Non-empty speaker-note lines for a slide.
///
/// A notes page that exists but trims down to nothing collapses to `None`,
/// so "present but blank" and "absent" are indistinguishable downstream.
pub fn slide_notes(slide: &SlideDoc) -> Option<Vec<String>> {
    let frame = slide.notes()?;
    let text = frame.text();
    let lines: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if lines.is_empty() { None } else { Some(lines) }
}

/// Open the presentation at `path` and extract the full deck record.
///
/// Opening a corrupt or non-presentation file fails the whole run; once the
/// package is loaded, no per-slide condition can.
///
/// # Examples
///
/// ```rust,no_run
/// let deck = pptx2json::extract_deck("presentation.pptx")?;
/// assert_eq!(deck.slide_count, deck.slides.len());
/// # Ok::<(), pptx2json::Error>(())
/// ```
pub fn extract_deck<P: AsRef<Path>>(path: P) -> Result<Deck> {
    let path = path.as_ref();
    let package = Package::open(path)?;

    let mut slides = Vec::with_capacity(package.slide_count());
    for (i, slide) in package.slides().iter().enumerate() {
        slides.push(Slide {
            index: i + 1,
            title: slide_title(slide),
            text: slide_text(slide),
            notes: slide_notes(slide),
        });
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    Ok(Deck {
        file_name,
        slide_count: slides.len(),
        slides,
    })
}
