//! pptx2json - extract text content from PowerPoint presentations as JSON.
//!
//! This crate opens a `.pptx` package, walks its slides in presentation
//! order, and projects titles, body text, and speaker notes into a plain
//! serializable record structure.
//!
//! # Example
//!
//! ```rust,no_run
//! let deck = pptx2json::extract_deck("presentation.pptx")?;
//!
//! println!("{} has {} slides", deck.file_name, deck.slide_count);
//! for slide in &deck.slides {
//!     println!("{}: {}", slide.index, slide.title.as_deref().unwrap_or("(untitled)"));
//! }
//! # Ok::<(), pptx2json::Error>(())
//! ```
//!
//! The companion binary serializes the deck to stdout as a single JSON
//! object and maps failures to exit codes (0 success, 1 extraction error,
//! 2 input file missing).

pub mod error;
pub mod extract;
pub mod model;
pub mod pptx;

pub use error::{Error, Result};
pub use extract::extract_deck;
pub use model::{Deck, Slide};
