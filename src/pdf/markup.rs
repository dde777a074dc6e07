//! Inline paragraph markup.
//!
//! Paragraph text may carry a small subset of HTML-like markup:
//!
//! - `<b>`/`<strong>` and `<i>`/`<em>` switch to the bold and oblique faces
//! - `<br/>` forces a line break
//! - entities such as `&amp;` are decoded
//!
//! Unknown tags are dropped, and an unterminated `<` is kept as literal text. Plain
//! strings should go through [`escape`] before they are treated as markup.

/// A run of text sharing one set of inline styles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

/// Escape plain text so that it survives [`parse`] unchanged.
pub fn escape(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// Split markup into styled runs. Adjacent runs with the same styles are merged.
pub fn parse(markup: &str) -> Vec<TextRun> {
    let mut runs: Vec<TextRun> = Vec::new();
    let mut bold_depth = 0usize;
    let mut italic_depth = 0usize;
    let mut rest = markup;

    fn push(runs: &mut Vec<TextRun>, raw: &str, bold: bool, italic: bool) {
        if raw.is_empty() {
            return;
        }
        let text = html_escape::decode_html_entities(raw);
        match runs.last_mut() {
            Some(last) if last.bold == bold && last.italic == italic => last.text.push_str(&text),
            _ => runs.push(TextRun {
                text: text.into_owned(),
                bold,
                italic,
            }),
        }
    }

    while let Some(open) = rest.find('<') {
        push(&mut runs, &rest[..open], bold_depth > 0, italic_depth > 0);

        let after = &rest[open + 1..];
        let Some(close) = after.find('>') else {
            // no closing bracket, keep the remainder as text
            push(&mut runs, &rest[open..], bold_depth > 0, italic_depth > 0);
            rest = "";
            break;
        };

        let tag = after[..close].trim().to_ascii_lowercase();
        match tag.trim_end_matches('/').trim() {
            "b" | "strong" => bold_depth += 1,
            "/b" | "/strong" => bold_depth = bold_depth.saturating_sub(1),
            "i" | "em" => italic_depth += 1,
            "/i" | "/em" => italic_depth = italic_depth.saturating_sub(1),
            "br" => push(&mut runs, "\n", bold_depth > 0, italic_depth > 0),
            _ => {}
        }
        rest = &after[close + 1..];
    }
    push(&mut runs, rest, bold_depth > 0, italic_depth > 0);

    runs
}
