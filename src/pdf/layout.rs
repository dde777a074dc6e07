//! Text measurement and line breaking.

use super::{BuiltinFont, Pt, Rect};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    pub fn trbl<T: Into<Pt>, R: Into<Pt>, B: Into<Pt>, L: Into<Pt>>(
        top: T,
        right: R,
        bottom: B,
        left: L,
    ) -> Margins {
        Margins {
            top: top.into(),
            right: right.into(),
            bottom: bottom.into(),
            left: left.into(),
        }
    }

    pub fn all<T: Into<Pt>>(value: T) -> Margins {
        let value = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// The area left inside a page of the given size.
    pub fn content_box(&self, (width, height): (Pt, Pt)) -> Rect {
        Rect {
            x1: self.left,
            y1: self.bottom,
            x2: width - self.right,
            y2: height - self.top,
        }
    }
}

/// A piece of text set in a single font.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    pub text: String,
    pub font: BuiltinFont,
}

impl Fragment {
    pub fn new<S: Into<String>>(text: S, font: BuiltinFont) -> Fragment {
        Fragment {
            text: text.into(),
            font,
        }
    }
}

/// One line of a wrapped paragraph.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextLine {
    pub fragments: Vec<Fragment>,
    pub width: Pt,
}

impl TextLine {
    fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    fn push(&mut self, text: &str, font: BuiltinFont, size: Pt) {
        self.width += font.width_of_text(text, size);
        match self.fragments.last_mut() {
            Some(last) if last.font == font => last.text.push_str(text),
            _ => self.fragments.push(Fragment::new(text, font)),
        }
    }

    pub fn text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }
}

enum Token {
    /// an unbreakable word, possibly spanning several fonts
    Word(Vec<Fragment>),
    Space(BuiltinFont),
    Break,
}

fn tokenize(fragments: &[Fragment]) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();
    for fragment in fragments {
        for c in fragment.text.chars() {
            if c == '\n' {
                tokens.push(Token::Break);
            } else if c.is_whitespace() && c != '\u{a0}' {
                if !matches!(tokens.last(), Some(Token::Space(_))) {
                    tokens.push(Token::Space(fragment.font));
                }
            } else {
                match tokens.last_mut() {
                    Some(Token::Word(pieces)) => match pieces.last_mut() {
                        Some(piece) if piece.font == fragment.font => piece.text.push(c),
                        _ => pieces.push(Fragment::new(c, fragment.font)),
                    },
                    _ => tokens.push(Token::Word(vec![Fragment::new(c, fragment.font)])),
                }
            }
        }
    }
    tokens
}

/// Greedily break styled text into lines no wider than `max_width`.
///
/// Runs of whitespace collapse to a single space, whitespace at the start or end of
/// a line is dropped and `\n` forces a break. A word wider than `max_width` gets a
/// line of its own and overflows it.
pub fn wrap_fragments(fragments: &[Fragment], size: Pt, max_width: Pt) -> Vec<TextLine> {
    let mut lines: Vec<TextLine> = Vec::new();
    let mut current = TextLine::default();
    let mut pending_space: Option<BuiltinFont> = None;

    for token in tokenize(fragments) {
        match token {
            Token::Break => {
                lines.push(std::mem::take(&mut current));
                pending_space = None;
            }
            Token::Space(font) => {
                if !current.is_empty() {
                    pending_space = Some(font);
                }
            }
            Token::Word(pieces) => {
                let word_width = pieces
                    .iter()
                    .fold(Pt(0.0), |w, p| w + p.font.width_of_text(&p.text, size));
                let space_width = pending_space
                    .map(|font| font.width_of_text(" ", size))
                    .unwrap_or_default();

                if !current.is_empty() && current.width + space_width + word_width > max_width {
                    lines.push(std::mem::take(&mut current));
                    pending_space = None;
                }
                if let Some(font) = pending_space.take() {
                    current.push(" ", font, size);
                }
                for piece in pieces {
                    current.push(&piece.text, piece.font, size);
                }
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Measure a single unwrapped line of text.
pub fn width_of_text(text: &str, font: BuiltinFont, size: Pt) -> Pt {
    font.width_of_text(text, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regular(text: &str) -> Fragment {
        Fragment::new(text, BuiltinFont::Helvetica)
    }

    #[test]
    fn can_compute_content_box() {
        let margins = Margins::trbl(Pt(10.0), Pt(20.0), Pt(30.0), Pt(40.0));
        let content = margins.content_box((Pt(200.0), Pt(300.0)));
        assert_eq!(content.x1, Pt(40.0));
        assert_eq!(content.x2, Pt(180.0));
        assert_eq!(content.y1, Pt(30.0));
        assert_eq!(content.y2, Pt(290.0));
        assert_eq!(Margins::all(Pt(5.0)).left, Pt(5.0));
    }

    #[test]
    fn can_wrap_words() {
        // "aaaa" is 4 * 556 / 1000 * 10 = 22.24pt, a space is 2.78pt
        let text = [regular("aaaa aaaa aaaa")];
        let lines = wrap_fragments(&text, Pt(10.0), Pt(50.0));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "aaaa aaaa");
        assert_eq!(lines[1].text(), "aaaa");
        assert!((lines[0].width.0 - 47.26).abs() < 0.001);
    }

    #[test]
    fn can_collapse_whitespace() {
        let text = [regular("  one \t  two  ")];
        let lines = wrap_fragments(&text, Pt(10.0), Pt(500.0));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text(), "one two");
    }

    #[test]
    fn can_force_breaks() {
        let text = [regular("one\ntwo")];
        let lines = wrap_fragments(&text, Pt(10.0), Pt(500.0));
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].text(), "two");
    }

    #[test]
    fn overlong_words_get_their_own_line() {
        let text = [regular("a wwwwwwwwwwwwwwwwwwww b")];
        let lines = wrap_fragments(&text, Pt(10.0), Pt(30.0));
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].text(), "wwwwwwwwwwwwwwwwwwww");
        assert!(lines[1].width > Pt(30.0));
    }

    #[test]
    fn styled_runs_stay_glued_without_whitespace() {
        let text = [
            Fragment::new("Dura", BuiltinFont::HelveticaBold),
            regular("tion 6"),
        ];
        let lines = wrap_fragments(&text, Pt(10.0), Pt(500.0));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].fragments.len(), 2);
        assert_eq!(lines[0].fragments[0].text, "Dura");
        assert_eq!(lines[0].fragments[1].text, "tion 6");
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(wrap_fragments(&[regular("   ")], Pt(10.0), Pt(100.0)).is_empty());
    }
}
