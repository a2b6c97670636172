use super::{find_by_slug, summarize_entry};
use crate::parser::meta::split_pdf;
use crate::parser::sections::split_sections;
use crate::parser::text::slugify;
use crate::records::{EntrySummary, ListPage, ProjectDetail};

/// Every `## ` section is a project card with one metadata line.
pub fn list(markdown: &str) -> ListPage<EntrySummary> {
    let doc = split_sections(markdown);
    ListPage {
        items: doc.sections.iter().map(summarize_entry).collect(),
        intro: doc.intro,
    }
}

/// Full body of the project whose slug matches. Metadata lines are left in the
/// content; only `PDF:` directives are pulled out.
pub fn detail(markdown: &str, slug: &str) -> Option<ProjectDetail> {
    let doc = split_sections(markdown);
    let section = find_by_slug(&doc.sections, slug)?;
    let (content, pdf) = split_pdf(&section.body);
    Some(ProjectDetail {
        title: section.title.clone(),
        slug: slugify(&section.title),
        content,
        pdf,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> String {
        std::fs::read_to_string("tests/fixtures/projects.md").unwrap()
    }

    #[test]
    fn list_fixture() {
        let page = list(&fixture());
        assert_eq!(
            page.intro,
            "A selection of engineering projects from coursework and independent study."
        );
        let slugs: Vec<&str> = page.items.iter().map(|i| i.slug.as_str()).collect();
        assert_eq!(
            slugs,
            ["social-network-simulation", "automatic-lamp-post-circuit", "c-stuff"]
        );
    }

    #[test]
    fn list_metadata_and_preview() {
        let page = list(&fixture());

        let sim = &page.items[0];
        assert_eq!(sim.metadata, "2024 · Python, NumPy, Matplotlib");
        assert!(sim.preview.starts_with("Developed a Python-based simulation framework"));
        assert!(sim.preview.contains("See the repository for details."));
        assert!(sim.preview.ends_with("..."));
        assert_eq!(sim.preview.chars().count(), 183);

        let lamp = &page.items[1];
        assert_eq!(lamp.metadata, "2023 · Embedded C++, Arduino");
        assert_eq!(
            lamp.preview,
            "Designed an energy-efficient adaptive lighting system using infrared sensors and analog comparators."
        );
    }

    #[test]
    fn list_single_line_body_is_all_metadata() {
        let page = list(&fixture());
        let stuff = &page.items[2];
        assert_eq!(stuff.title, "C++ & Stuff!!");
        assert_eq!(stuff.metadata, "Notes on templates.");
        assert_eq!(stuff.preview, "");
    }

    #[test]
    fn list_without_sections() {
        let page = list("# Projects\n\nNothing here yet.");
        assert!(page.items.is_empty());
        assert_eq!(page.intro, "Nothing here yet.");
    }

    #[test]
    fn detail_keeps_metadata_and_drops_pdf() {
        let d = detail(&fixture(), "social-network-simulation").unwrap();
        assert_eq!(d.title, "Social Network Simulation");
        assert!(d.content.starts_with("*2024 · Python, NumPy, Matplotlib*"));
        assert!(d.content.contains("### Results"));
        assert!(!d.content.contains("PDF:"));
        assert_eq!(d.pdf.as_deref(), Some("/reports/network-sim.pdf"));
    }

    #[test]
    fn detail_without_pdf() {
        let d = detail(&fixture(), "automatic-lamp-post-circuit").unwrap();
        assert!(d.pdf.is_none());
        assert!(d.content.ends_with("![Circuit board](/img/lamp.jpg)"));
    }

    #[test]
    fn detail_not_found() {
        assert!(detail(&fixture(), "no-such-project").is_none());
        assert!(detail("", "anything").is_none());
    }
}
