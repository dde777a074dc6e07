use super::{encode_win_ansi, BuiltinFont, Margins, Pt, Rect};
use crate::colour::Colour;
use pdf_writer::{Content, Name, Str};
use std::collections::BTreeSet;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpanFont {
    pub font: BuiltinFont,
    pub size: Pt,
}

/// A run of text placed with its baseline origin at `coords`.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

/// An image from the document's image list, stretched to fill `position`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ImageLayout {
    pub image_index: usize,
    pub position: Rect,
}

#[derive(Clone, Debug)]
pub enum PageContent {
    Span(SpanLayout),
    Image(ImageLayout),
    /// an already encoded content stream fragment
    Raw(Vec<u8>),
}

#[derive(Clone, Debug)]
pub struct Page {
    pub media_box: Rect,
    pub content_box: Rect,
    pub contents: Vec<PageContent>,
}

impl Page {
    pub fn new(size: (Pt, Pt), margins: Option<Margins>) -> Page {
        let media_box = Rect {
            x1: Pt(0.0),
            y1: Pt(0.0),
            x2: size.0,
            y2: size.1,
        };
        let content_box = margins.unwrap_or_default().content_box(size);
        Page {
            media_box,
            content_box,
            contents: Vec::default(),
        }
    }

    pub fn size(&self) -> (Pt, Pt) {
        (self.media_box.width(), self.media_box.height())
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(PageContent::Span(span));
    }

    pub fn add_image(&mut self, image: ImageLayout) {
        self.contents.push(PageContent::Image(image));
    }

    /// Append raw drawing operations (rules, shapes) to the page.
    pub fn add_content(&mut self, content: Content) {
        self.contents.push(PageContent::Raw(content.finish()));
    }

    pub fn spans(&self) -> impl Iterator<Item = &SpanLayout> {
        self.contents.iter().filter_map(|c| match c {
            PageContent::Span(span) => Some(span),
            _ => None,
        })
    }

    pub fn images(&self) -> impl Iterator<Item = &ImageLayout> {
        self.contents.iter().filter_map(|c| match c {
            PageContent::Image(image) => Some(image),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    pub(crate) fn fonts_used(&self) -> BTreeSet<BuiltinFont> {
        self.spans().map(|span| span.font.font).collect()
    }

    pub(crate) fn images_used(&self) -> BTreeSet<usize> {
        self.images().map(|image| image.image_index).collect()
    }

    /// Encode the page's content stream, in insertion order.
    pub(crate) fn render(&self) -> Vec<u8> {
        let mut stream = Vec::new();
        for item in self.contents.iter() {
            let encoded = match item {
                PageContent::Span(span) => {
                    let (r, g, b) = span.colour.components();
                    let mut content = Content::new();
                    content
                        .begin_text()
                        .set_fill_rgb(r, g, b)
                        .set_font(
                            Name(span.font.font.resource_name().as_bytes()),
                            *span.font.size,
                        )
                        .next_line(*span.coords.0, *span.coords.1)
                        .show(Str(&encode_win_ansi(&span.text)))
                        .end_text();
                    content.finish()
                }
                PageContent::Image(image) => {
                    let name = image_resource_name(image.image_index);
                    let mut content = Content::new();
                    content
                        .save_state()
                        .transform([
                            *image.position.width(),
                            0.0,
                            0.0,
                            *image.position.height(),
                            *image.position.x1,
                            *image.position.y1,
                        ])
                        .x_object(Name(name.as_bytes()))
                        .restore_state();
                    content.finish()
                }
                PageContent::Raw(raw) => raw.clone(),
            };
            if !stream.is_empty() {
                stream.push(b'\n');
            }
            stream.extend_from_slice(&encoded);
        }
        stream
    }
}

pub(crate) fn image_resource_name(index: usize) -> String {
    format!("Im{}", index + 1)
}
