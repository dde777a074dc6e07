//! The six-week course syllabus, rendered as an A4 PDF.
//!
//! The curriculum is turned into a flat list of blocks by [`assemble`], laid out by
//! the flow renderer with [`SyllabusDecoration`] on every page, and serialised in
//! memory. The output file is only created once the whole document has been built.

mod blocks;
mod config;
mod curriculum;
mod decoration;
mod styles;

pub use blocks::{
    assemble, HeaderAssets, AUDIENCE_HEADER, CURRICULUM_HEADER, DIFFERENTIATORS_HEADER,
    PROJECTS_HEADER,
};
pub use config::{RenderStats, SyllabusConfig};
pub use curriculum::{Differentiator, MetaRow, Project, ProjectsSummary, Syllabus, Week};
pub use decoration::{SyllabusDecoration, FOOTER_TEXT};
pub use styles::{StyleName, StyleSheet};

use crate::pdf::{pagesize, Document, FlowRenderer, Info, Margins, Mm};
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use std::io::Write;

/// A4 with 18mm top and bottom, 20mm side margins.
pub fn page_layout() -> FlowRenderer {
    FlowRenderer::new(
        pagesize::A4,
        Margins::trbl(Mm(18.0), Mm(20.0), Mm(18.0), Mm(20.0)),
    )
}

impl SyllabusConfig {
    /// The curriculum to render: the configured file, or the built-in course.
    pub fn curriculum(&self) -> Result<Syllabus> {
        match &self.curriculum {
            Some(path) => Syllabus::load(path),
            None => Ok(Syllabus::default()),
        }
    }

    pub fn render(&self, progress: &ProgressBar) -> Result<RenderStats> {
        let syllabus = self.curriculum()?;
        let header = HeaderAssets::discover(&self.logo, &self.wordmark);
        let bytes = build(&syllabus, &header, progress)?;

        if let Some(parent) = self.outfile.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        let file =
            std::fs::File::create(&self.outfile).with_context(|| "Failed to create output file")?;
        let mut file = std::io::BufWriter::new(file);
        file.write_all(&bytes.pdf)
            .and_then(|_| file.flush())
            .with_context(|| format!("Failed to write {}", self.outfile.display()))?;

        log::info!(
            "wrote syllabus {} ({} pages)",
            self.outfile.display(),
            bytes.page_count
        );
        Ok(RenderStats {
            page_count: bytes.page_count,
            file_size: bytes.pdf.len() as u64,
        })
    }
}

struct BuiltPdf {
    pdf: Vec<u8>,
    page_count: usize,
}

fn build(syllabus: &Syllabus, header: &HeaderAssets, progress: &ProgressBar) -> Result<BuiltPdf> {
    let styles = StyleSheet::new()?;
    let layout = page_layout();
    let blocks = assemble(syllabus, &styles, header);

    let mut doc = Document::default();
    let mut info = Info::default();
    info.title(syllabus.title.as_str())
        .author("GradTensor")
        .subject(syllabus.subtitle.as_str())
        .keywords("AI engineering, LLMs, RAG, agents, syllabus")
        .creator(concat!("gradtensor-assets v", env!("CARGO_PKG_VERSION")));
    doc.set_info(info);

    let page_count = layout
        .build(&mut doc, blocks, &SyllabusDecoration, progress)
        .with_context(|| "Failed to lay out syllabus")?;
    progress.finish_and_clear();

    Ok(BuiltPdf {
        pdf: doc.to_bytes(),
        page_count,
    })
}
