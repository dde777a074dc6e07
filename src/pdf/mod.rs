//! A small PDF document model.
//!
//! Pages are built from positioned text spans, images and raw drawing operations,
//! then serialised with `pdf-writer`. Text uses the standard Helvetica family, so no
//! font program is embedded. On top of the page model, [`FlowRenderer`] paginates a
//! sequence of [`Flowable`] blocks.

mod document;
mod error;
mod flow;
mod fonts;
mod image;
mod info;
mod layout;
pub mod markup;
mod page;
mod rect;
mod style;
mod units;

pub use document::Document;
pub use error::{PdfError, PdfResult};
pub use flow::{
    Cell, FlowRenderer, Flowable, HorizontalRule, NoDecoration, OutlineLevel, PageDecoration,
    Paragraph, Table, VerticalAlignment,
};
pub use fonts::{encode_win_ansi, win_ansi_code, BuiltinFont};
pub use image::Image;
pub use info::{Bookmark, Info};
pub use layout::{width_of_text, wrap_fragments, Fragment, Margins, TextLine};
pub use page::{ImageLayout, Page, PageContent, SpanFont, SpanLayout};
pub(crate) use page::image_resource_name;
pub use rect::Rect;
pub use style::{Alignment, ParagraphStyle, ParagraphStyleBuilder, ParagraphStyleBuilderError};
pub use units::{pagesize, Mm, Pt};
