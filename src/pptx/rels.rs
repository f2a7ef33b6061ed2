/// Relationship parsing for OPC packages.
///
/// Every part in an OPC package may carry a `.rels` part listing typed,
/// id-keyed references to other parts. Slide ordering and notes lookup both
/// go through these.
use crate::error::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::Event;

/// Relationship type URI for a slide part.
pub const RT_SLIDE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";

/// Relationship type URI for a notes slide part.
pub const RT_NOTES_SLIDE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/notesSlide";

/// Relationship type URI for the main document part.
pub const RT_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";

/// A single internal relationship from a source part to a target part.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Relationship ID (e.g., "rId1", "rId2")
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target reference, relative to the source part's base directory
    pub target: String,
}

/// Parse the relationships in a `.rels` part.
///
/// External relationships (e.g. hyperlinks) are skipped; only internal
/// part-to-part references are returned, in document order.
pub fn parse_relationships(xml: &[u8]) -> Result<Vec<Relationship>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut rels = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if e.local_name().as_ref() == b"Relationship" {
                    let mut id = None;
                    let mut rel_type = None;
                    let mut target = None;
                    let mut external = false;

                    for attr in e.attributes().flatten() {
                        let value = String::from_utf8_lossy(&attr.value).into_owned();
                        match attr.key.as_ref() {
                            b"Id" => id = Some(value),
                            b"Type" => rel_type = Some(value),
                            b"Target" => target = Some(value),
                            b"TargetMode" => external = value == "External",
                            _ => {},
                        }
                    }

                    if !external
                        && let (Some(id), Some(rel_type), Some(target)) = (id, rel_type, target)
                    {
                        rels.push(Relationship {
                            id,
                            rel_type,
                            target,
                        });
                    }
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e.to_string())),
            _ => {},
        }
    }

    Ok(rels)
}

/// Resolve a relationship target against the base directory of its source
/// part, yielding an absolute part name without a leading slash (the form
/// used for ZIP entry lookup).
///
/// Handles the relative forms that occur in practice: plain relative targets
/// ("slides/slide1.xml"), parent references ("../notesSlides/notesSlide1.xml"),
/// and package-absolute targets ("/ppt/slides/slide1.xml").
pub fn resolve_target(base_dir: &str, target: &str) -> String {
    if let Some(absolute) = target.strip_prefix('/') {
        return absolute.to_string();
    }

    let mut segments: Vec<&str> = base_dir.split('/').filter(|s| !s.is_empty()).collect();
    for segment in target.split('/') {
        match segment {
            "" | "." => {},
            ".." => {
                segments.pop();
            },
            other => segments.push(other),
        }
    }
    segments.join("/")
}

/// Compute the `.rels` part name for a given part.
///
/// For "ppt/presentation.xml" this is "ppt/_rels/presentation.xml.rels".
pub fn rels_part_for(part_name: &str) -> String {
    match part_name.rsplit_once('/') {
        Some((dir, file)) => format!("{}/_rels/{}.rels", dir, file),
        None => format!("_rels/{}.rels", part_name),
    }
}

/// The directory a part's relative relationship targets resolve against.
pub fn base_dir_of(part_name: &str) -> &str {
    match part_name.rsplit_once('/') {
        Some((dir, _)) => dir,
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_relationships() {
        let xml = br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide1.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink" Target="https://example.com/" TargetMode="External"/>
</Relationships>"#;

        let rels = parse_relationships(xml).unwrap();
        assert_eq!(rels.len(), 1);
        assert_eq!(rels[0].id, "rId1");
        assert_eq!(rels[0].rel_type, RT_SLIDE);
        assert_eq!(rels[0].target, "slides/slide1.xml");
    }

    #[test]
    fn test_resolve_target() {
        assert_eq!(
            resolve_target("ppt", "slides/slide1.xml"),
            "ppt/slides/slide1.xml"
        );
        assert_eq!(
            resolve_target("ppt/slides", "../notesSlides/notesSlide1.xml"),
            "ppt/notesSlides/notesSlide1.xml"
        );
        assert_eq!(
            resolve_target("ppt/slides", "/ppt/media/image1.png"),
            "ppt/media/image1.png"
        );
        assert_eq!(resolve_target("", "ppt/presentation.xml"), "ppt/presentation.xml");
    }

    #[test]
    fn test_rels_part_for() {
        assert_eq!(
            rels_part_for("ppt/presentation.xml"),
            "ppt/_rels/presentation.xml.rels"
        );
        assert_eq!(
            rels_part_for("ppt/slides/slide3.xml"),
            "ppt/slides/_rels/slide3.xml.rels"
        );
    }

    #[test]
    fn test_base_dir_of() {
        assert_eq!(base_dir_of("ppt/slides/slide1.xml"), "ppt/slides");
        assert_eq!(base_dir_of("presentation.xml"), "");
    }
}
