const PDF_MARKER: &str = "PDF:";
const SECOND_LINE_MAX: usize = 100;

/// How many leading lines a list view may treat as metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaLines {
    One,
    Two,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub lines: Vec<String>,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PdfSplit<'a> {
    pub content_lines: Vec<&'a str>,
    pub pdf: Option<String>,
}

/// Peel venue/date lines off the top of an item body.
///
/// Blank lines are dropped before selection, and the content is rebuilt from
/// the remaining non-blank lines. The second line only counts as metadata for
/// `MetaLines::Two` and only while it is shorter than 100 characters, so a
/// short opening paragraph can still be mistaken for a date line.
pub fn extract_metadata(raw: &str, max: MetaLines) -> Metadata {
    let lines: Vec<&str> = raw.lines().filter(|l| !l.trim().is_empty()).collect();
    let mut metadata = Vec::new();
    let mut body_start = 0;

    if let Some(first) = lines.first() {
        metadata.push(strip_emphasis(first));
        body_start = 1;
    }
    if max == MetaLines::Two {
        if let Some(second) = lines.get(1) {
            if second.trim().chars().count() < SECOND_LINE_MAX {
                metadata.push(strip_emphasis(second));
                body_start = 2;
            }
        }
    }

    Metadata {
        lines: metadata,
        content: lines[body_start..].join("\n"),
    }
}

/// Pull `PDF:` directive lines out of a body. The last directive wins.
pub fn extract_pdf<'a>(lines: &[&'a str]) -> PdfSplit<'a> {
    let mut split = PdfSplit::default();
    for &line in lines {
        match line.trim().strip_prefix(PDF_MARKER) {
            Some(url) => split.pdf = Some(url.trim().to_string()),
            None => split.content_lines.push(line),
        }
    }
    split
}

/// `extract_pdf` over a raw body, returning the rejoined content.
pub fn split_pdf(raw: &str) -> (String, Option<String>) {
    let lines: Vec<&str> = raw.lines().collect();
    let split = extract_pdf(&lines);
    (split.content_lines.join("\n"), split.pdf)
}

fn strip_emphasis(line: &str) -> String {
    line.replace(['*', '_'], "")
}
