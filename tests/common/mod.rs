//! Fixture builder: writes minimal but well-formed .pptx packages with the
//! `zip` crate so tests exercise the real container path.
#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::Path;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub const XMLNS: &str = r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships""#;

/// One slide of a fixture deck.
#[derive(Default)]
pub struct SlideFixture {
    /// Inner XML of the slide's `<p:spTree>`
    pub sp_tree: String,
    /// Paragraph texts of the notes slide's body placeholder, if any
    pub notes: Option<Vec<String>>,
}

impl SlideFixture {
    pub fn new(sp_tree: impl Into<String>) -> Self {
        Self {
            sp_tree: sp_tree.into(),
            notes: None,
        }
    }

    pub fn with_notes(mut self, paragraphs: &[&str]) -> Self {
        self.notes = Some(paragraphs.iter().map(|p| p.to_string()).collect());
        self
    }
}

/// A `<p:sp>` with an optional placeholder type and one run per paragraph.
pub fn shape_xml(ph_type: Option<&str>, paragraphs: &[&str]) -> String {
    let ph = match ph_type {
        Some(ty) => format!(r#"<p:ph type="{ty}"/>"#),
        None => String::new(),
    };
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<a:p><a:r><a:t>{p}</a:t></a:r></a:p>"))
        .collect();
    format!(
        "<p:sp><p:nvSpPr><p:cNvPr id=\"2\" name=\"Shape\"/><p:cNvSpPr/><p:nvPr>{ph}</p:nvPr></p:nvSpPr><p:spPr/><p:txBody><a:bodyPr/>{body}</p:txBody></p:sp>"
    )
}

fn slide_xml(sp_tree: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld {XMLNS}><p:cSld><p:spTree>{sp_tree}</p:spTree></p:cSld></p:sld>"#
    )
}

fn notes_xml(paragraphs: &[String]) -> String {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<a:p><a:r><a:t>{p}</a:t></a:r></a:p>"))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:notes {XMLNS}><p:cSld><p:spTree><p:sp><p:nvSpPr><p:cNvPr id="3" name="Notes Placeholder"/><p:cNvSpPr/><p:nvPr><p:ph type="body" idx="1"/></p:nvPr></p:nvSpPr><p:spPr/><p:txBody><a:bodyPr/>{body}</p:txBody></p:sp></p:spTree></p:cSld></p:notes>"#
    )
}

/// Write a complete .pptx at `path`. Slide order in the deck follows the
/// order of `slides`.
pub fn write_pptx(path: &Path, slides: &[SlideFixture]) {
    let file = File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    let mut add = |name: &str, content: &str| {
        zip.start_file(name, options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    };

    add(
        "[Content_Types].xml",
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
</Types>"#,
    );

    add(
        "_rels/.rels",
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>
</Relationships>"#,
    );

    let sld_ids: String = (1..=slides.len())
        .map(|n| format!(r#"<p:sldId id="{}" r:id="rId{n}"/>"#, 255 + n))
        .collect();
    add(
        "ppt/presentation.xml",
        &format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation {XMLNS}><p:sldIdLst>{sld_ids}</p:sldIdLst></p:presentation>"#
        ),
    );

    let pres_rels: String = (1..=slides.len())
        .map(|n| {
            format!(
                r#"<Relationship Id="rId{n}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide" Target="slides/slide{n}.xml"/>"#
            )
        })
        .collect();
    add(
        "ppt/_rels/presentation.xml.rels",
        &format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">{pres_rels}</Relationships>"#
        ),
    );

    for (i, slide) in slides.iter().enumerate() {
        let n = i + 1;
        add(&format!("ppt/slides/slide{n}.xml"), &slide_xml(&slide.sp_tree));

        if let Some(paragraphs) = &slide.notes {
            add(
                &format!("ppt/slides/_rels/slide{n}.xml.rels"),
                &format!(
                    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/notesSlide" Target="../notesSlides/notesSlide{n}.xml"/></Relationships>"#
                ),
            );
            add(
                &format!("ppt/notesSlides/notesSlide{n}.xml"),
                &notes_xml(paragraphs),
            );
        }
    }

    zip.finish().unwrap();
}
