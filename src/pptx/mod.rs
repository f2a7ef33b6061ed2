//! PowerPoint (.pptx) loading support.
//!
//! A .pptx file is an OPC package: a ZIP archive of XML parts tied together
//! by relationship files. This module loads one into a typed, immutable
//! slide model in a single pass:
//!
//! - `package`: the loader. Opens the container, resolves the ordered slide
//!   parts through the package and presentation relationships, and parses
//!   each slide and its optional notes slide.
//! - `rels`: OPC relationship parsing and target resolution.
//! - `shapes`: the closed shape model (`Placeholder`/`TextBox`/`Other`) with
//!   text frames, paragraphs, and runs.
//!
//! # Example
//!
//! ```rust,no_run
//! use pptx2json::pptx::Package;
//!
//! let pkg = Package::open("presentation.pptx")?;
//! for slide in pkg.slides() {
//!     println!("{} shapes", slide.shapes().len());
//! }
//! # Ok::<(), pptx2json::Error>(())
//! ```

pub mod package;
pub mod rels;
pub mod shapes;

pub use package::{Package, SlideDoc};
pub use shapes::{Paragraph, PlaceholderRole, Shape, ShapeKind, TextFrame};
