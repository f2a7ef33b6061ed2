/// Typed shape model for slide parts.
///
/// A slide's `<p:spTree>` is parsed once into a closed set of shape kinds;
/// the extractors pattern-match over the result instead of probing the XML
/// for capabilities. Absence of a placeholder role, a text frame, or note
/// content is an `Option`, never a caught fault.
use crate::error::{Error, Result};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Structural role of a placeholder shape, from the `type` attribute of
/// `<p:ph>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderRole {
    /// A title placeholder (`type="title"`)
    Title,
    /// A centered title placeholder (`type="ctrTitle"`)
    CenteredTitle,
    /// A body placeholder (`type="body"`, or no `type` attribute)
    Body,
    /// Any other role (subtitle, footer, slide number, ...)
    Other,
}

impl PlaceholderRole {
    /// Whether this role makes the shape a title for extraction purposes.
    ///
    /// Only the two title variants count; subtitles and every other role
    /// do not.
    #[inline]
    pub fn is_title(self) -> bool {
        matches!(self, PlaceholderRole::Title | PlaceholderRole::CenteredTitle)
    }

    fn from_attr(value: &[u8]) -> Self {
        match value {
            b"title" => PlaceholderRole::Title,
            b"ctrTitle" => PlaceholderRole::CenteredTitle,
            b"body" => PlaceholderRole::Body,
            _ => PlaceholderRole::Other,
        }
    }
}

/// Shape kind, determined once when the slide is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// A placeholder shape with a structural role
    Placeholder(PlaceholderRole),
    /// A non-placeholder shape carrying a text frame
    TextBox,
    /// Anything else (pictures, graphic frames, groups, connectors)
    Other,
}

/// A top-level shape on a slide.
#[derive(Debug, Clone)]
pub struct Shape {
    /// What kind of shape this is
    pub kind: ShapeKind,
    /// The shape's text frame, if it has one
    pub text_frame: Option<TextFrame>,
}

impl Shape {
    /// Whether this shape is a title placeholder.
    #[inline]
    pub fn is_title_placeholder(&self) -> bool {
        matches!(self.kind, ShapeKind::Placeholder(role) if role.is_title())
    }
}

/// A text frame: the ordered paragraphs of a `<p:txBody>`.
#[derive(Debug, Clone, Default)]
pub struct TextFrame {
    /// Paragraphs in document order
    pub paragraphs: Vec<Paragraph>,
}

impl TextFrame {
    /// Plain text of the whole frame: paragraph texts joined by newlines.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for (i, para) in self.paragraphs.iter().enumerate() {
            if i > 0 {
                text.push('\n');
            }
            text.push_str(&para.text());
        }
        text
    }
}

/// A paragraph: the ordered runs of an `<a:p>`.
///
/// Only `<a:r>` run text is collected; line breaks and fields are not runs
/// and contribute nothing, matching run-level concatenation semantics.
#[derive(Debug, Clone, Default)]
pub struct Paragraph {
    /// Text content of each `<a:r><a:t>` in order
    pub runs: Vec<String>,
}

impl Paragraph {
    /// Plain text of the paragraph: runs concatenated in order, untrimmed.
    pub fn text(&self) -> String {
        self.runs.concat()
    }
}

/// Shape under construction during the parse.
#[derive(Default)]
struct PendingShape {
    role: Option<PlaceholderRole>,
    paragraphs: Option<Vec<Paragraph>>,
}

impl PendingShape {
    fn finish(self) -> Shape {
        let kind = match (self.role, &self.paragraphs) {
            (Some(role), _) => ShapeKind::Placeholder(role),
            (None, Some(_)) => ShapeKind::TextBox,
            (None, None) => ShapeKind::Other,
        };
        Shape {
            kind,
            text_frame: self.paragraphs.map(|paragraphs| TextFrame { paragraphs }),
        }
    }
}

#[inline]
fn parent_is(stack: &[Vec<u8>], name: &[u8]) -> bool {
    stack.last().is_some_and(|top| top.as_slice() == name)
}

fn placeholder_role(e: &BytesStart) -> PlaceholderRole {
    // A malformed attribute never aborts the slide; the shape just keeps
    // the default role.
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == b"type" {
            return PlaceholderRole::from_attr(&attr.value);
        }
    }
    // No type attribute means a body placeholder
    PlaceholderRole::Body
}

/// Parse the top-level shapes of a slide (or notes slide) part.
///
/// Shapes are returned in their native document order. Only direct children
/// of `<p:spTree>` become shapes: text inside grouped shapes or table cells
/// is not slide body text. Run text is taken from `<a:t>` elements whose
/// parent is `<a:r>`, so `<a:br/>` and field codes are skipped.
pub fn parse_shapes(xml: &[u8]) -> Result<Vec<Shape>> {
    let mut reader = Reader::from_reader(xml);

    let mut shapes = Vec::new();
    // Local-name element stack; run text must keep interior whitespace, so
    // text trimming stays off.
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut current: Option<PendingShape> = None;
    let mut para: Option<Vec<String>> = None;
    let mut run: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = e.local_name().as_ref().to_vec();
                match name.as_slice() {
                    b"sp" if parent_is(&stack, b"spTree") => {
                        current = Some(PendingShape::default());
                    },
                    b"pic" | b"graphicFrame" | b"grpSp" | b"cxnSp"
                        if parent_is(&stack, b"spTree") =>
                    {
                        shapes.push(Shape {
                            kind: ShapeKind::Other,
                            text_frame: None,
                        });
                    },
                    b"ph" if parent_is(&stack, b"nvPr") => {
                        if let Some(shape) = current.as_mut()
                            && shape.role.is_none()
                        {
                            shape.role = Some(placeholder_role(&e));
                        }
                    },
                    b"txBody" if parent_is(&stack, b"sp") => {
                        if let Some(shape) = current.as_mut()
                            && shape.paragraphs.is_none()
                        {
                            shape.paragraphs = Some(Vec::new());
                        }
                    },
                    b"p" if parent_is(&stack, b"txBody") => {
                        if current.as_ref().is_some_and(|s| s.paragraphs.is_some()) {
                            para = Some(Vec::new());
                        }
                    },
                    b"t" if parent_is(&stack, b"r") && para.is_some() => {
                        run = Some(String::new());
                    },
                    _ => {},
                }
                stack.push(name);
            },
            Ok(Event::Empty(e)) => {
                let name = e.local_name().as_ref().to_vec();
                match name.as_slice() {
                    b"pic" | b"graphicFrame" | b"grpSp" | b"cxnSp"
                        if parent_is(&stack, b"spTree") =>
                    {
                        shapes.push(Shape {
                            kind: ShapeKind::Other,
                            text_frame: None,
                        });
                    },
                    b"ph" if parent_is(&stack, b"nvPr") => {
                        if let Some(shape) = current.as_mut()
                            && shape.role.is_none()
                        {
                            shape.role = Some(placeholder_role(&e));
                        }
                    },
                    b"p" if parent_is(&stack, b"txBody") => {
                        if let Some(shape) = current.as_mut()
                            && let Some(paragraphs) = shape.paragraphs.as_mut()
                        {
                            paragraphs.push(Paragraph::default());
                        }
                    },
                    b"t" if parent_is(&stack, b"r") => {
                        if let Some(runs) = para.as_mut() {
                            runs.push(String::new());
                        }
                    },
                    _ => {},
                }
            },
            Ok(Event::Text(e)) => {
                if let Some(buf) = run.as_mut() {
                    let text = e.unescape().map_err(|err| Error::Xml(err.to_string()))?;
                    buf.push_str(&text);
                }
            },
            Ok(Event::CData(e)) => {
                if let Some(buf) = run.as_mut() {
                    let text = std::str::from_utf8(e.as_ref())
                        .map_err(|err| Error::Xml(err.to_string()))?;
                    buf.push_str(text);
                }
            },
            Ok(Event::End(e)) => {
                let name = e.local_name().as_ref().to_vec();
                stack.pop();
                match name.as_slice() {
                    b"t" => {
                        if let Some(text) = run.take()
                            && let Some(runs) = para.as_mut()
                        {
                            runs.push(text);
                        }
                    },
                    b"p" => {
                        if let Some(runs) = para.take()
                            && let Some(shape) = current.as_mut()
                            && let Some(paragraphs) = shape.paragraphs.as_mut()
                        {
                            paragraphs.push(Paragraph { runs });
                        }
                    },
                    b"sp" if parent_is(&stack, b"spTree") => {
                        if let Some(pending) = current.take() {
                            shapes.push(pending.finish());
                        }
                    },
                    _ => {},
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e.to_string())),
            _ => {},
        }
    }

    Ok(shapes)
}
