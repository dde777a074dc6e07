use super::Pt;

/// An axis-aligned rectangle in PDF user space (origin at the bottom-left).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x1: Pt,
    pub y1: Pt,
    pub x2: Pt,
    pub y2: Pt,
}

impl Rect {
    pub fn width(&self) -> Pt {
        self.x2 - self.x1
    }

    pub fn height(&self) -> Pt {
        self.y2 - self.y1
    }
}

impl From<Rect> for pdf_writer::Rect {
    fn from(rect: Rect) -> Self {
        pdf_writer::Rect::new(*rect.x1, *rect.y1, *rect.x2, *rect.y2)
    }
}
