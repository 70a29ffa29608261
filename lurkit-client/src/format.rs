//! Markup insertion for the composer toolbar.
//!
//! Each rule is a pure transform from the selected text to its marked-up
//! replacement; [`splice`] applies one to a buffer at a selection range. Only
//! insertion is implemented here, parsing/preview is out of scope.

/// Stand-in for the selection when nothing is selected, so the produced
/// markup is never empty.
pub const PLACEHOLDER: &str = "text";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    Bold,
    Italic,
    Strikethrough,
    Code,
    Superscript,
    Link,
    BulletedList,
    Quote,
    Table,
    Image,
}

impl Format {
    /// Toolbar order.
    pub const ALL: [Format; 10] = [
        Format::Bold,
        Format::Italic,
        Format::Strikethrough,
        Format::Code,
        Format::Superscript,
        Format::Link,
        Format::BulletedList,
        Format::Quote,
        Format::Table,
        Format::Image,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Format::Bold => "Bold",
            Format::Italic => "Italic",
            Format::Strikethrough => "Strikethrough",
            Format::Code => "Code",
            Format::Superscript => "Superscript",
            Format::Link => "Link",
            Format::BulletedList => "Bulleted List",
            Format::Quote => "Quote",
            Format::Table => "Table",
            Format::Image => "Image",
        }
    }

    /// Transform the selected text into its marked-up replacement.
    pub fn apply(&self, text: &str) -> String {
        match self {
            Format::Bold => format!("**{text}**"),
            Format::Italic => format!("*{text}*"),
            Format::Strikethrough => format!("~~{text}~~"),
            Format::Code => format!("`{text}`"),
            Format::Superscript => format!("^({text})"),
            Format::Link => format!("[{text}](url)"),
            Format::BulletedList => format!("* {text}"),
            Format::Quote => format!("> {text}"),
            Format::Table => String::from("Header 1 | Header 2\n---|---\nCell 1 | Cell 2"),
            Format::Image => format!("![{text}](url)"),
        }
    }
}

/// Replace the byte range `[start, end)` of `buffer` with the formatted
/// selection ([`PLACEHOLDER`] when the range is empty) and return the new
/// buffer together with the byte index just past the insertion, where the
/// caret collapses to.
///
/// `start` and `end` must lie on char boundaries, `start <= end <= len`.
pub fn splice(buffer: &str, start: usize, end: usize, format: Format) -> (String, usize) {
    let selected = &buffer[start..end];
    let inserted = match selected.is_empty() {
        true => format.apply(PLACEHOLDER),
        false => format.apply(selected),
    };
    let caret = start + inserted.len();
    let mut out = String::with_capacity(buffer.len() - selected.len() + inserted.len());
    out.push_str(&buffer[..start]);
    out.push_str(&inserted);
    out.push_str(&buffer[end..]);
    (out, caret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transforms_are_exact() {
        assert_eq!(Format::Bold.apply("x"), "**x**");
        assert_eq!(Format::Italic.apply("x"), "*x*");
        assert_eq!(Format::Strikethrough.apply("x"), "~~x~~");
        assert_eq!(Format::Code.apply("x"), "`x`");
        assert_eq!(Format::Superscript.apply("x"), "^(x)");
        assert_eq!(Format::Link.apply("x"), "[x](url)");
        assert_eq!(Format::BulletedList.apply("x"), "* x");
        assert_eq!(Format::Quote.apply("x"), "> x");
        assert_eq!(Format::Image.apply("x"), "![x](url)");
    }

    #[test]
    fn table_ignores_selection() {
        let expected = "Header 1 | Header 2\n---|---\nCell 1 | Cell 2";
        assert_eq!(Format::Table.apply("whatever"), expected);
        assert_eq!(Format::Table.apply(""), expected);
    }

    #[test]
    fn empty_selection_uses_placeholder() {
        assert_eq!(Format::Bold.apply(PLACEHOLDER), "**text**");
        let (out, caret) = splice("", 0, 0, Format::Bold);
        assert_eq!(out, "**text**");
        assert_eq!(caret, 8);
    }

    #[test]
    fn splice_replaces_exactly_the_selection() {
        // buffer "abselcd", selection covers "sel"
        let (out, caret) = splice("abselcd", 2, 5, Format::Link);
        assert_eq!(out, "ab[sel](url)cd");
        assert_eq!(caret, 2 + "[sel](url)".len());
    }

    #[test]
    fn splice_with_collapsed_caret_inserts_in_place() {
        let (out, caret) = splice("abcd", 2, 2, Format::Italic);
        assert_eq!(out, "ab*text*cd");
        assert_eq!(caret, 2 + "*text*".len());
    }

    #[test]
    fn splice_handles_multibyte_content() {
        let buffer = "héllo wörld";
        let start = buffer.find('w').unwrap();
        let end = buffer.len();
        let (out, caret) = splice(buffer, start, end, Format::Bold);
        assert_eq!(out, "héllo **wörld**");
        assert_eq!(caret, out.len());
    }

    #[test]
    fn toolbar_catalogue_is_complete() {
        assert_eq!(Format::ALL.len(), 10);
        for f in Format::ALL {
            assert!(!f.label().is_empty());
        }
    }
}
