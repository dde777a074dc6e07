//! The in-memory document and its serialisation.
//!
//! Pages, images and bookmarks are collected first and only turned into PDF objects
//! by [`Document::write`]. Object numbers are allocated in a fixed order (catalog,
//! page tree, info, fonts, images, pages, outline) and nothing time- or
//! randomness-dependent is written, so the output is a pure function of the content.

use super::{image_resource_name, Bookmark, BuiltinFont, Image, Info, Page, PdfResult, Pt};
use pdf_writer::types::PageMode;
use pdf_writer::{Filter, Finish, Name, Pdf, Ref, TextStr};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io::Write;
use std::path::{Path, PathBuf};

const COMPRESSION_LEVEL: u8 = 6;

#[derive(Debug, Default)]
pub struct Document {
    pub pages: Vec<Page>,
    pub images: Vec<Image>,
    image_paths: HashMap<PathBuf, usize>,
    info: Option<Info>,
    bookmarks: Vec<Bookmark>,
}

impl Document {
    /// Appends a page and returns its index.
    pub fn add_page(&mut self, page: Page) -> usize {
        self.pages.push(page);
        self.pages.len() - 1
    }

    pub fn add_image(&mut self, image: Image) -> usize {
        self.images.push(image);
        self.images.len() - 1
    }

    /// Loads an image from disk, reusing the earlier copy if the same path was
    /// already loaded.
    pub fn add_image_from_disk<P: AsRef<Path>>(&mut self, path: P) -> PdfResult<usize> {
        let path = path.as_ref();
        if let Some(&index) = self.image_paths.get(path) {
            return Ok(index);
        }
        let index = self.add_image(Image::new_from_disk(path)?);
        self.image_paths.insert(path.to_path_buf(), index);
        Ok(index)
    }

    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Adds a bookmark pointing at `top` on page `page_index`.
    ///
    /// With no parent the bookmark is top-level; otherwise `parent` is the index
    /// of a top-level bookmark, as returned by an earlier call. Returns the index of
    /// the new top-level bookmark, or of its parent.
    pub fn add_bookmark<S: Into<String>>(
        &mut self,
        parent: Option<usize>,
        title: S,
        page_index: usize,
        top: Pt,
    ) -> usize {
        let bookmark = Bookmark {
            title: title.into(),
            page_index,
            top,
            children: Vec::new(),
        };
        match parent.and_then(|p| self.bookmarks.get_mut(p).map(|b| (p, b))) {
            Some((index, parent)) => {
                parent.children.push(bookmark);
                index
            }
            None => {
                self.bookmarks.push(bookmark);
                self.bookmarks.len() - 1
            }
        }
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn write<W: Write>(&self, out: &mut W) -> PdfResult<()> {
        out.write_all(&self.to_bytes())?;
        out.flush()?;
        Ok(())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut alloc = Ref::new(1);
        let catalog_id = alloc.bump();
        let page_tree_id = alloc.bump();
        let info_id = self.info.as_ref().map(|_| alloc.bump());

        let fonts_used: BTreeSet<BuiltinFont> =
            self.pages.iter().flat_map(|page| page.fonts_used()).collect();
        let font_ids: BTreeMap<BuiltinFont, Ref> = fonts_used
            .into_iter()
            .map(|font| (font, alloc.bump()))
            .collect();

        let mut image_ids: Vec<(Ref, Option<Ref>)> = Vec::with_capacity(self.images.len());
        for image in self.images.iter() {
            let image_id = alloc.bump();
            let mask_id = image.alpha.is_some().then(|| alloc.bump());
            image_ids.push((image_id, mask_id));
        }

        let page_ids: Vec<(Ref, Ref)> = self
            .pages
            .iter()
            .map(|_| (alloc.bump(), alloc.bump()))
            .collect();

        let outline_id = (!self.bookmarks.is_empty()).then(|| alloc.bump());

        let mut pdf = Pdf::new();

        let mut catalog = pdf.catalog(catalog_id);
        catalog.pages(page_tree_id);
        if let Some(outline_id) = outline_id {
            catalog.outlines(outline_id);
            catalog.page_mode(PageMode::UseOutlines);
        }
        catalog.finish();

        pdf.pages(page_tree_id)
            .kids(page_ids.iter().map(|(page_id, _)| *page_id))
            .count(page_ids.len() as i32);

        if let (Some(info), Some(info_id)) = (&self.info, info_id) {
            let mut doc_info = pdf.document_info(info_id);
            if let Some(title) = &info.title {
                doc_info.title(TextStr(title));
            }
            if let Some(author) = &info.author {
                doc_info.author(TextStr(author));
            }
            if let Some(subject) = &info.subject {
                doc_info.subject(TextStr(subject));
            }
            if let Some(keywords) = &info.keywords {
                doc_info.keywords(TextStr(keywords));
            }
            if let Some(creator) = &info.creator {
                doc_info.creator(TextStr(creator));
            }
            doc_info.finish();
        }

        for (font, id) in font_ids.iter() {
            pdf.type1_font(*id)
                .base_font(Name(font.base_font().as_bytes()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        for (image, (image_id, mask_id)) in self.images.iter().zip(image_ids.iter()) {
            let mut xobject = pdf.image_xobject(*image_id, &image.rgb);
            xobject.filter(Filter::FlateDecode);
            xobject.width(image.width as i32);
            xobject.height(image.height as i32);
            xobject.color_space_name(Name(b"DeviceRGB"));
            xobject.bits_per_component(8);
            if let Some(mask_id) = mask_id {
                xobject.s_mask(*mask_id);
            }
            xobject.finish();

            if let (Some(alpha), Some(mask_id)) = (&image.alpha, mask_id) {
                let mut mask = pdf.image_xobject(*mask_id, alpha);
                mask.filter(Filter::FlateDecode);
                mask.width(image.width as i32);
                mask.height(image.height as i32);
                mask.color_space_name(Name(b"DeviceGray"));
                mask.bits_per_component(8);
                mask.finish();
            }
        }

        for (page, (page_id, content_id)) in self.pages.iter().zip(page_ids.iter()) {
            let mut page_writer = pdf.page(*page_id);
            page_writer
                .media_box(page.media_box.into())
                .parent(page_tree_id)
                .contents(*content_id);
            let mut resources = page_writer.resources();
            let mut fonts = resources.fonts();
            for font in page.fonts_used() {
                fonts.pair(Name(font.resource_name().as_bytes()), font_ids[&font]);
            }
            fonts.finish();
            let mut x_objects = resources.x_objects();
            for index in page.images_used() {
                let name = image_resource_name(index);
                x_objects.pair(Name(name.as_bytes()), image_ids[index].0);
            }
            x_objects.finish();
            resources.finish();
            page_writer.finish();

            let stream =
                miniz_oxide::deflate::compress_to_vec_zlib(&page.render(), COMPRESSION_LEVEL);
            pdf.stream(*content_id, &stream).filter(Filter::FlateDecode);
        }

        if let Some(outline_id) = outline_id {
            self.write_outline(&mut pdf, &mut alloc, outline_id, &page_ids);
        }

        pdf.finish()
    }

    fn write_outline(
        &self,
        pdf: &mut Pdf,
        alloc: &mut Ref,
        outline_id: Ref,
        page_ids: &[(Ref, Ref)],
    ) {
        // allocate every item up front so siblings can point at each other
        let top_ids: Vec<Ref> = self.bookmarks.iter().map(|_| alloc.bump()).collect();
        let child_ids: Vec<Vec<Ref>> = self
            .bookmarks
            .iter()
            .map(|b| b.children.iter().map(|_| alloc.bump()).collect())
            .collect();

        let total: usize = self.bookmarks.iter().map(|b| 1 + b.children.len()).sum();
        let mut outline = pdf.outline(outline_id);
        if let (Some(first), Some(last)) = (top_ids.first(), top_ids.last()) {
            outline.first(*first).last(*last);
        }
        outline.count(total as i32);
        outline.finish();

        for (i, bookmark) in self.bookmarks.iter().enumerate() {
            write_outline_item(
                pdf,
                bookmark,
                &top_ids,
                i,
                outline_id,
                &child_ids[i],
                page_ids,
            );
            for (j, child) in bookmark.children.iter().enumerate() {
                write_outline_item(pdf, child, &child_ids[i], j, top_ids[i], &[], page_ids);
            }
        }
    }
}

fn write_outline_item(
    pdf: &mut Pdf,
    bookmark: &Bookmark,
    siblings: &[Ref],
    index: usize,
    parent: Ref,
    children: &[Ref],
    page_ids: &[(Ref, Ref)],
) {
    let mut item = pdf.outline_item(siblings[index]);
    item.title(TextStr(&bookmark.title)).parent(parent);
    if index > 0 {
        item.prev(siblings[index - 1]);
    }
    if let Some(next) = siblings.get(index + 1) {
        item.next(*next);
    }
    if let (Some(first), Some(last)) = (children.first(), children.last()) {
        item.first(*first).last(*last);
        item.count(children.len() as i32);
    }
    if let Some((page_id, _)) = page_ids.get(bookmark.page_index) {
        item.dest().page(*page_id).xyz(0.0, *bookmark.top, None);
    }
    item.finish();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::Colour;
    use crate::pdf::{pagesize, SpanFont, SpanLayout};

    fn page_with_text(text: &str) -> Page {
        let mut page = Page::new(pagesize::A4, None);
        page.add_span(SpanLayout {
            text: text.to_string(),
            font: SpanFont {
                font: BuiltinFont::Helvetica,
                size: Pt(10.0),
            },
            colour: Colour::BLACK,
            coords: (Pt(72.0), Pt(720.0)),
        });
        page
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn can_write_document() {
        let mut doc = Document::default();
        doc.add_page(page_with_text("hello"));
        doc.add_page(page_with_text("world"));
        let mut info = Info::default();
        info.title("Test").author("GradTensor");
        doc.set_info(info);

        let bytes = doc.to_bytes();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(contains(&bytes, b"/Count 2"));
        assert!(contains(&bytes, b"/BaseFont /Helvetica"));
        assert!(contains(&bytes, b"/Encoding /WinAnsiEncoding"));
        assert!(contains(&bytes, b"/Author (GradTensor)"));
        assert!(!contains(&bytes, b"/CreationDate"));
        assert!(!contains(&bytes, b"/Outlines"));
    }

    #[test]
    fn output_is_deterministic() {
        let build = || {
            let mut doc = Document::default();
            doc.add_page(page_with_text("same"));
            doc.add_bookmark(None, "Section", 0, Pt(800.0));
            doc.to_bytes()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn can_nest_bookmarks() {
        let mut doc = Document::default();
        doc.add_page(page_with_text("one"));
        let section = doc.add_bookmark(None, "WEEKLY CURRICULUM", 0, Pt(800.0));
        let parent = doc.add_bookmark(Some(section), "WEEK 1", 0, Pt(700.0));
        assert_eq!(parent, section);
        doc.add_bookmark(None, "DEPLOYED PROJECTS", 0, Pt(400.0));

        assert_eq!(doc.bookmarks().len(), 2);
        assert_eq!(doc.bookmarks()[0].children.len(), 1);

        let bytes = doc.to_bytes();
        assert!(contains(&bytes, b"/Outlines"));
        assert!(contains(&bytes, b"/PageMode /UseOutlines"));
        assert!(contains(&bytes, b"(WEEKLY CURRICULUM)"));
    }

    #[test]
    fn images_from_the_same_path_are_shared() {
        let dir = tempfile::tempdir().expect("can create temp dir");
        let path = dir.path().join("logo.png");
        image::RgbaImage::from_pixel(2, 2, image::Rgba([1, 2, 3, 128]))
            .save(&path)
            .expect("can save png");

        let mut doc = Document::default();
        let a = doc.add_image_from_disk(&path).expect("can load image");
        let b = doc.add_image_from_disk(&path).expect("can load image");
        assert_eq!(a, b);
        assert_eq!(doc.images.len(), 1);

        let bytes = doc.to_bytes();
        assert!(contains(&bytes, b"/SMask"));
    }
}
