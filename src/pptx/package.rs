/// Package loading for PowerPoint presentations.
///
/// `Package` is the loader: it opens the OPC (ZIP) container, follows the
/// package relationships to the presentation part, resolves the ordered
/// slide parts, and parses each slide and its optional notes slide into the
/// typed shape model in one pass. After `open` returns, no file handle is
/// held and extraction is pure in-memory work.
use crate::error::{Error, Result};
use crate::pptx::rels::{self, Relationship};
use crate::pptx::shapes::{self, PlaceholderRole, Shape, ShapeKind, TextFrame};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// Part name of the package-level relationships.
const PACKAGE_RELS: &str = "_rels/.rels";

/// A loaded slide: its top-level shapes plus the text frame of its notes
/// page, when one exists and is readable.
#[derive(Debug, Clone)]
pub struct SlideDoc {
    shapes: Vec<Shape>,
    notes: Option<TextFrame>,
}

impl SlideDoc {
    pub(crate) fn new(shapes: Vec<Shape>, notes: Option<TextFrame>) -> Self {
        Self { shapes, notes }
    }

    /// The slide's top-level shapes in document order.
    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// The notes text frame, if the slide has a readable notes page.
    #[inline]
    pub fn notes(&self) -> Option<&TextFrame> {
        self.notes.as_ref()
    }
}

/// A PowerPoint (.pptx) package.
///
/// # Examples
///
/// ```rust,no_run
/// use pptx2json::pptx::Package;
///
/// let pkg = Package::open("presentation.pptx")?;
/// println!("{} slides", pkg.slide_count());
/// # Ok::<(), pptx2json::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Package {
    slides: Vec<SlideDoc>,
}

impl Package {
    /// Open a .pptx package from a file path.
    ///
    /// Fails if the file cannot be read, is not a ZIP archive, or lacks the
    /// presentation part.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Open a .pptx package from a reader.
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive =
            ZipArchive::new(reader).map_err(|e| Error::InvalidPackage(e.to_string()))?;

        // Package rels point at the main presentation part.
        let package_rels = rels::parse_relationships(&read_part(&mut archive, PACKAGE_RELS)?)?;
        let pres_name = package_rels
            .iter()
            .find(|rel| rel.rel_type == rels::RT_OFFICE_DOCUMENT)
            .map(|rel| rels::resolve_target("", &rel.target))
            .ok_or_else(|| Error::PartNotFound("officeDocument relationship".to_string()))?;

        let pres_xml = read_part(&mut archive, &pres_name)?;
        let slide_rids = slide_rids(&pres_xml)?;
        let pres_rels = read_rels(&mut archive, &pres_name)?;
        let base_dir = rels::base_dir_of(&pres_name);

        let mut slides = Vec::with_capacity(slide_rids.len());
        for rid in slide_rids {
            let rel = pres_rels
                .iter()
                .find(|rel| rel.id == rid && rel.rel_type == rels::RT_SLIDE)
                .ok_or_else(|| Error::PartNotFound(format!("slide part for {rid}")))?;
            let slide_name = rels::resolve_target(base_dir, &rel.target);

            let slide_xml = read_part(&mut archive, &slide_name)?;
            let shapes = shapes::parse_shapes(&slide_xml)?;
            let notes = load_notes(&mut archive, &slide_name);

            slides.push(SlideDoc::new(shapes, notes));
        }

        Ok(Self { slides })
    }

    /// The slides in presentation order.
    #[inline]
    pub fn slides(&self) -> &[SlideDoc] {
        &self.slides
    }

    /// The number of slides.
    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

/// Read a required part out of the archive.
fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<Vec<u8>> {
    let mut file = archive
        .by_name(name)
        .map_err(|_| Error::PartNotFound(name.to_string()))?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;
    Ok(data)
}

/// Read and parse a part's `.rels`, treating a missing rels part as empty.
fn read_rels<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    part_name: &str,
) -> Result<Vec<Relationship>> {
    let rels_name = rels::rels_part_for(part_name);
    match read_part(archive, &rels_name) {
        Ok(data) => rels::parse_relationships(&data),
        Err(Error::PartNotFound(_)) => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

/// Extract the ordered slide relationship IDs from `<p:sldIdLst>`.
fn slide_rids(pres_xml: &[u8]) -> Result<Vec<String>> {
    let mut reader = Reader::from_reader(pres_xml);
    reader.config_mut().trim_text(true);

    let mut rids = Vec::new();
    let mut in_id_list = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"sldIdLst" => in_id_list = true,
                b"sldId" if in_id_list => {
                    for attr in e.attributes().flatten() {
                        // The slide reference is the r:id attribute; the plain
                        // id attribute is the numeric slide identifier.
                        if attr.key.as_ref() == b"r:id"
                            || (attr.key.local_name().as_ref() == b"id"
                                && attr.value.starts_with(b"rId"))
                        {
                            let rid = std::str::from_utf8(&attr.value)
                                .map_err(|e| Error::Xml(e.to_string()))?;
                            rids.push(rid.to_string());
                            break;
                        }
                    }
                },
                _ => {},
            },
            Ok(Event::End(e)) => {
                if e.local_name().as_ref() == b"sldIdLst" {
                    in_id_list = false;
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e.to_string())),
            _ => {},
        }
    }

    Ok(rids)
}

/// Load the notes text frame for a slide, if any.
///
/// Every failure along the way (no rels part, no notesSlide relationship,
/// missing or malformed notes part, no body placeholder) means "no notes";
/// none of them can fail the slide or the run.
fn load_notes<R: Read + Seek>(archive: &mut ZipArchive<R>, slide_name: &str) -> Option<TextFrame> {
    let notes_rel = match read_rels(archive, slide_name) {
        Ok(slide_rels) => slide_rels
            .into_iter()
            .find(|rel| rel.rel_type == rels::RT_NOTES_SLIDE)?,
        Err(e) => {
            tracing::debug!("{slide_name}: unreadable rels, skipping notes: {e}");
            return None;
        },
    };

    let notes_name = rels::resolve_target(rels::base_dir_of(slide_name), &notes_rel.target);
    let notes_xml = match read_part(archive, &notes_name) {
        Ok(data) => data,
        Err(e) => {
            tracing::debug!("{slide_name}: notes part missing: {e}");
            return None;
        },
    };

    let shapes = match shapes::parse_shapes(&notes_xml) {
        Ok(shapes) => shapes,
        Err(e) => {
            tracing::debug!("{notes_name}: malformed notes slide: {e}");
            return None;
        },
    };

    // The notes text lives in the notes slide's body placeholder.
    shapes
        .into_iter()
        .find(|shape| {
            matches!(shape.kind, ShapeKind::Placeholder(PlaceholderRole::Body))
                && shape.text_frame.is_some()
        })
        .and_then(|shape| shape.text_frame)
}
