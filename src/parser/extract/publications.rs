use crate::parser::meta::{extract_metadata, split_pdf, MetaLines};
use crate::parser::sections::{split_sections, split_subsections, Section};
use crate::parser::text::{preview_default, slugify};
use crate::records::{ListPage, PublicationDetail, PublicationSummary};

/// `## ` sections are categories, `### ` items inside them are publications.
/// Items come out flattened in document order, tagged with their category.
pub fn list(markdown: &str) -> ListPage<PublicationSummary> {
    let doc = split_sections(markdown);
    let items = doc
        .sections
        .iter()
        .flat_map(|category| {
            split_subsections(&category.body)
                .into_iter()
                .map(move |item| summarize(category, &item))
        })
        .collect();
    ListPage {
        intro: doc.intro,
        items,
    }
}

pub fn detail(markdown: &str, slug: &str) -> Option<PublicationDetail> {
    let doc = split_sections(markdown);
    let (category, item) = doc.sections.iter().find_map(|category| {
        split_subsections(&category.body)
            .into_iter()
            .find(|item| slugify(&item.title) == slug)
            .map(|item| (category, item))
    })?;
    let (content, pdf) = split_pdf(&item.body);
    Some(PublicationDetail {
        slug: slugify(&item.title),
        title: item.title,
        category: category.title.clone(),
        content,
        pdf,
    })
}

fn summarize(category: &Section, item: &Section) -> PublicationSummary {
    let meta = extract_metadata(&item.body, MetaLines::Two);
    PublicationSummary {
        title: item.title.clone(),
        slug: slugify(&item.title),
        category: category.title.clone(),
        metadata: meta.lines,
        preview: preview_default(&meta.content),
    }
}
