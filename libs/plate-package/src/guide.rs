//! # Guide Sheet
//!
//! HTML cross-reference between printed plates and the text they carry.
//! Each plate gets one `<table class="plate">` with one row per line, so
//! the sheet stays machine-parseable whatever the styling.

use std::fmt::Write;

use braille_cell::{to_unicode, BrailleCell};
use braille_layout::Plate;

const STYLE: &str = "\
body { font-family: \"Noto Sans JP\", sans-serif; padding: 20px; color: #333; }
h2 { border-bottom: 2px solid #007AFF; margin-top: 30px; }
.page-braille { font-size: 1.5em; color: #555; }
.plate-block { page-break-inside: avoid; margin-bottom: 40px; }
table.plate { width: 100%; border-collapse: collapse; }
th, td { border: 1px solid #ddd; padding: 8px; vertical-align: top; }
.cell { display: inline-block; text-align: center; margin: 2px; padding: 2px; border: 1px solid #eee; }
.glyph { font-size: 20px; }
.char { font-size: 12px; }";

/// Renders the guide sheet for `plates`.
///
/// # Examples
/// ```
/// use braille_cell::BrailleCell;
/// use braille_layout::Plate;
/// use plate_package::render_guide;
///
/// let plate = Plate { number: 1, lines: vec![vec![BrailleCell::new([true; 6], "め")]] };
/// let html = render_guide(&[plate]);
/// assert_eq!(html.matches("<table class=\"plate\"").count(), 1);
/// assert!(html.contains("⠿"));
/// ```
pub fn render_guide<C: AsRef<BrailleCell>>(plates: &[Plate<C>]) -> String {
    let mut body = String::new();
    for plate in plates {
        write_plate(&mut body, plate);
    }
    format!(
        "<!DOCTYPE html>\n<html><head><meta charset=\"UTF-8\">\n<title>Tenji Plate Guide</title>\n<style>\n{STYLE}\n</style>\n</head><body>\n<h1>Tenji Plate Guide</h1>\n{body}</body></html>\n"
    )
}

fn write_plate<C: AsRef<BrailleCell>>(out: &mut String, plate: &Plate<C>) {
    let page = to_unicode(&plate.page_number_cells());
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "<div class=\"plate-block\" id=\"plate-{n:02}\">\n<h2>Plate {n:02} <span class=\"page-braille\">({page})</span></h2>",
        n = plate.number
    );
    let _ = writeln!(
        out,
        "<table class=\"plate\" data-plate=\"{}\">\n<tr><th>Line</th><th>Content</th></tr>",
        plate.number
    );
    for (index, line) in plate.lines.iter().enumerate() {
        let _ = write!(out, "<tr><td class=\"line\">L{}</td><td>", index + 1);
        for cell in line {
            let cell = cell.as_ref();
            let _ = write!(
                out,
                "<div class=\"cell\"><div class=\"glyph\">{}</div><div class=\"char\">{}</div></div>",
                cell.glyph(),
                escape_html(&cell.display)
            );
        }
        out.push_str("</td></tr>\n");
    }
    out.push_str("</table>\n</div>\n");
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use braille_cell::DotPattern;

    fn plate(number: usize, lines: Vec<Vec<BrailleCell>>) -> Plate<BrailleCell> {
        Plate { number, lines }
    }

    #[test]
    fn test_one_table_per_plate() {
        let a = BrailleCell::from_pattern(DotPattern::from_dot_numbers(&[1]), "あ");
        let plates = vec![
            plate(1, vec![vec![a.clone()], vec![a.clone(), a.clone()]]),
            plate(2, vec![vec![a]]),
        ];
        let html = render_guide(&plates);
        assert_eq!(html.matches("<table class=\"plate\"").count(), 2);
        assert_eq!(html.matches("<td class=\"line\">").count(), 3);
        assert!(html.contains("Plate 02"));
        assert!(html.contains("(⠼⠃)"));
    }

    #[test]
    fn test_cells_show_glyph_and_char() {
        let cell = BrailleCell::from_pattern(DotPattern::from_dot_numbers(&[1, 2, 4]), "か");
        let html = render_guide(&[plate(1, vec![vec![cell]])]);
        assert!(html.contains("<div class=\"glyph\">⠋</div><div class=\"char\">か</div>"));
    }

    #[test]
    fn test_display_text_is_escaped() {
        let cell = BrailleCell::new([false; 6], "<b>&");
        let html = render_guide(&[plate(1, vec![vec![cell]])]);
        assert!(html.contains("&lt;b&gt;&amp;"));
        assert!(!html.contains("<b>&"));
    }

    #[test]
    fn test_empty_guide_is_valid_document() {
        let html = render_guide::<BrailleCell>(&[]);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a'b\"c"), "a&#39;b&quot;c");
        assert_eq!(escape_html("日本"), "日本");
    }
}
