pub mod projects;
pub mod publications;
pub mod zen;

use super::meta::{extract_metadata, MetaLines};
use super::sections::Section;
use super::text::{preview_default, slugify};
use crate::records::EntrySummary;

/// Card for a section that is itself an item (Projects, Zen).
fn summarize_entry(section: &Section) -> EntrySummary {
    let meta = extract_metadata(&section.body, MetaLines::One);
    EntrySummary {
        title: section.title.clone(),
        slug: slugify(&section.title),
        metadata: meta.lines.into_iter().next().unwrap_or_default(),
        preview: preview_default(&meta.content),
    }
}

/// First item whose title slugifies to `slug`.
fn find_by_slug<'a>(items: &'a [Section], slug: &str) -> Option<&'a Section> {
    items.iter().find(|s| slugify(&s.title) == slug)
}

// ── Tests ──
