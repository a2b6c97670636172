use std::sync::LazyLock;

use regex::Regex;

static TITLE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#\s+.+\n").unwrap());
static H2_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^##\s+(.+)$").unwrap());
static H3_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^###\s+(.+)$").unwrap());

/// One heading-delimited division: the heading text and everything up to the
/// next heading of the same level, both trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitDocument {
    pub intro: String,
    pub sections: Vec<Section>,
}

enum State<'a> {
    BeforeFirstHeading,
    InSectionBody { title: String, body: Vec<&'a str> },
}

/// Split a whole document on `## ` headings.
///
/// A leading `# Title` line is dropped. Text before the first heading becomes
/// the intro, with `---` rules removed.
pub fn split_sections(markdown: &str) -> SplitDocument {
    let text = strip_title_line(markdown);
    let (lead, sections) = split_on(&text, &H2_RE);
    SplitDocument {
        intro: lead.replace("---", "").trim().to_string(),
        sections,
    }
}

/// Split a section body on `### ` headings. Text before the first one is dropped.
pub fn split_subsections(body: &str) -> Vec<Section> {
    split_on(body, &H3_RE).1
}

/// Remove the document's own `# Title` line if the text opens with one.
pub fn strip_title_line(markdown: &str) -> String {
    TITLE_LINE_RE.replace(markdown, "").into_owned()
}

/// Single linear pass: every line matching `heading` closes the open section
/// and starts a new one. Returns the text before the first heading and the
/// sections in encounter order.
fn split_on(text: &str, heading: &Regex) -> (String, Vec<Section>) {
    let mut lead: Vec<&str> = Vec::new();
    let mut sections = Vec::new();
    let mut state = State::BeforeFirstHeading;

    for line in text.lines() {
        if let Some(caps) = heading.captures(line) {
            if let State::InSectionBody { title, body } = state {
                sections.push(close_section(title, &body));
            }
            state = State::InSectionBody {
                title: caps[1].trim().to_string(),
                body: Vec::new(),
            };
            continue;
        }
        match &mut state {
            State::BeforeFirstHeading => lead.push(line),
            State::InSectionBody { body, .. } => body.push(line),
        }
    }

    if let State::InSectionBody { title, body } = state {
        sections.push(close_section(title, &body));
    }

    (lead.join("\n"), sections)
}

fn close_section(title: String, body: &[&str]) -> Section {
    Section {
        title,
        body: body.join("\n").trim().to_string(),
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(sections: &[Section]) -> Vec<&str> {
        sections.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn intro_and_sections() {
        let md = "# Projects\n\nSome intro.\n\n---\n\n## First\n\nBody one.\n\n## Second\nBody two.\n";
        let doc = split_sections(md);
        assert_eq!(doc.intro, "Some intro.");
        assert_eq!(titles(&doc.sections), ["First", "Second"]);
        assert_eq!(doc.sections[0].body, "Body one.");
        assert_eq!(doc.sections[1].body, "Body two.");
    }

    #[test]
    fn no_headings_is_all_intro() {
        let doc = split_sections("# Title\nJust text\nand more");
        assert!(doc.sections.is_empty());
        assert_eq!(doc.intro, "Just text\nand more");
    }

    #[test]
    fn empty_document() {
        let doc = split_sections("");
        assert_eq!(doc, SplitDocument::default());
    }

    #[test]
    fn level_three_is_not_a_split_point() {
        let doc = split_sections("## Top\n### Nested\ntext");
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].body, "### Nested\ntext");
    }

    #[test]
    fn heading_must_start_the_line() {
        let doc = split_sections("intro\n  ## not a heading\n##also not\n## Real");
        assert_eq!(titles(&doc.sections), ["Real"]);
        assert_eq!(doc.intro, "intro\n  ## not a heading\n##also not");
    }

    #[test]
    fn blank_heading_gives_empty_title() {
        let doc = split_sections("##  \nbody");
        assert_eq!(doc.sections.len(), 1);
        assert_eq!(doc.sections[0].title, "");
        assert_eq!(doc.sections[0].body, "body");
    }

    #[test]
    fn heading_text_is_trimmed() {
        let doc = split_sections("##   Spaced Title   \nx");
        assert_eq!(doc.sections[0].title, "Spaced Title");
    }

    #[test]
    fn title_line_only_stripped_at_start() {
        let doc = split_sections("intro\n# Not the title\n## A\nx");
        assert_eq!(doc.intro, "intro\n# Not the title");

        // A title with no trailing newline is left in place.
        assert_eq!(strip_title_line("# Lonely"), "# Lonely");
        assert_eq!(strip_title_line("# Doc\nrest"), "rest");
    }

    #[test]
    fn rules_removed_from_intro_only() {
        let doc = split_sections("a --- b\n## S\nbefore\n---\nafter");
        assert_eq!(doc.intro, "a  b");
        assert_eq!(doc.sections[0].body, "before\n---\nafter");
    }

    #[test]
    fn empty_section_body() {
        let doc = split_sections("## A\n## B\n\n\n");
        assert_eq!(titles(&doc.sections), ["A", "B"]);
        assert!(doc.sections.iter().all(|s| s.body.is_empty()));
    }

    #[test]
    fn crlf_input() {
        let doc = split_sections("# T\r\nintro\r\n## One\r\nbody\r\n");
        assert_eq!(doc.intro, "intro");
        assert_eq!(doc.sections[0].title, "One");
        assert_eq!(doc.sections[0].body, "body");
    }

    #[test]
    fn rejoined_sections_split_the_same() {
        let md = "# Doc\nintro line\n\n## Alpha\n\nalpha body\n\n### inner\nmore\n\n## Beta\nbeta body\n";
        let doc = split_sections(md);
        let rebuilt = doc
            .sections
            .iter()
            .map(|s| format!("## {}\n{}", s.title, s.body))
            .collect::<Vec<_>>()
            .join("\n");
        let again = split_sections(&format!("{}\n{}", doc.intro, rebuilt));
        assert_eq!(again, doc);
    }

    #[test]
    fn subsections() {
        let body = "Category blurb.\n\n### One\nfirst\n\n### Two\n\nsecond\n";
        let items = split_subsections(body);
        assert_eq!(titles(&items), ["One", "Two"]);
        assert_eq!(items[0].body, "first");
        assert_eq!(items[1].body, "second");
    }

    #[test]
    fn subsections_none() {
        assert!(split_subsections("no items here\n#### too deep").is_empty());
        assert!(split_subsections("").is_empty());
    }

    #[test]
    fn fixture_projects() {
        let md = std::fs::read_to_string("tests/fixtures/projects.md").unwrap();
        let doc = split_sections(&md);
        assert_eq!(
            titles(&doc.sections),
            ["Social Network Simulation", "Automatic Lamp Post Circuit", "C++ & Stuff!!"]
        );
        assert!(!doc.intro.contains("---"));
    }
}
