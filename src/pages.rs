//! Page loaders: one document fetch, then a pure parse.
//!
//! A failed fetch is logged and swallowed here. List pages come back empty,
//! detail pages come back as `None`, the same as an unknown slug.

use std::sync::Arc;

use tracing::warn;

use crate::document::Document;
use crate::parser::{projects, publications, zen};
use crate::records::{EntrySummary, ListPage, ProjectDetail, PublicationDetail, PublicationSummary, ZenDetail};
use crate::source::Library;

async fn fetch_or_warn(lib: &Library, doc: Document) -> Option<Arc<str>> {
    match lib.load(doc).await {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("Error fetching {} markdown: {:#}", doc, e);
            None
        }
    }
}

pub async fn cv(lib: &Library) -> Option<Arc<str>> {
    fetch_or_warn(lib, Document::Cv).await
}

pub async fn project_list(lib: &Library) -> ListPage<EntrySummary> {
    fetch_or_warn(lib, Document::Projects)
        .await
        .map(|md| projects::list(&md))
        .unwrap_or_default()
}

pub async fn project(lib: &Library, slug: &str) -> Option<ProjectDetail> {
    let md = fetch_or_warn(lib, Document::Projects).await?;
    projects::detail(&md, slug)
}

pub async fn publication_list(lib: &Library) -> ListPage<PublicationSummary> {
    fetch_or_warn(lib, Document::Publications)
        .await
        .map(|md| publications::list(&md))
        .unwrap_or_default()
}

pub async fn publication(lib: &Library, slug: &str) -> Option<PublicationDetail> {
    let md = fetch_or_warn(lib, Document::Publications).await?;
    publications::detail(&md, slug)
}

pub async fn zen_list(lib: &Library) -> ListPage<EntrySummary> {
    fetch_or_warn(lib, Document::Zen)
        .await
        .map(|md| zen::list(&md))
        .unwrap_or_default()
}

pub async fn zen_post(lib: &Library, slug: &str) -> Option<ZenDetail> {
    let md = fetch_or_warn(lib, Document::Zen).await?;
    zen::detail(&md, slug)
}
