use super::{find_by_slug, summarize_entry};
use crate::parser::sections::split_sections;
use crate::parser::text::slugify;
use crate::records::{EntrySummary, ListPage, ZenDetail};

pub fn list(markdown: &str) -> ListPage<EntrySummary> {
    let doc = split_sections(markdown);
    ListPage {
        items: doc.sections.iter().map(summarize_entry).collect(),
        intro: doc.intro,
    }
}

/// Zen posts have no attachments: the body is returned untouched.
pub fn detail(markdown: &str, slug: &str) -> Option<ZenDetail> {
    let doc = split_sections(markdown);
    let section = find_by_slug(&doc.sections, slug)?;
    Some(ZenDetail {
        title: section.title.clone(),
        slug: slugify(&section.title),
        content: section.body.clone(),
    })
}
