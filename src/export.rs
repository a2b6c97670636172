use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing::{info, warn};

use crate::document::Collection;
use crate::pages;
use crate::sitemap::unique_slugs;
use crate::source::Library;

pub struct ExportStats {
    pub lists: usize,
    pub details: usize,
    pub missing: usize,
}

/// Pre-render every list and detail record as JSON under `out`:
/// `<collection>.json` plus `<collection>/<slug>.json`, and `cv.md` as-is.
pub async fn export_all(lib: &Library, out: &Path) -> Result<ExportStats> {
    let projects = pages::project_list(lib).await;
    let publications = pages::publication_list(lib).await;
    let zen = pages::zen_list(lib).await;

    write_json(&out.join("projects.json"), &projects)?;
    write_json(&out.join("publications.json"), &publications)?;
    write_json(&out.join("zen.json"), &zen)?;

    if let Some(cv) = pages::cv(lib).await {
        write_file(&out.join("cv.md"), cv.as_bytes())?;
    }

    let project_slugs = unique_slugs(&projects.items);
    let publication_slugs = unique_slugs(&publications.items);
    let zen_slugs = unique_slugs(&zen.items);
    let total = project_slugs.len() + publication_slugs.len() + zen_slugs.len();

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );

    let mut stats = ExportStats {
        lists: 3,
        details: 0,
        missing: 0,
    };

    for slug in project_slugs {
        pb.set_message(slug.to_string());
        let detail = pages::project(lib, slug).await;
        record(&mut stats, out, Collection::Projects, slug, detail.as_ref())?;
        pb.inc(1);
    }
    for slug in publication_slugs {
        pb.set_message(slug.to_string());
        let detail = pages::publication(lib, slug).await;
        record(&mut stats, out, Collection::Publications, slug, detail.as_ref())?;
        pb.inc(1);
    }
    for slug in zen_slugs {
        pb.set_message(slug.to_string());
        let detail = pages::zen_post(lib, slug).await;
        record(&mut stats, out, Collection::Zen, slug, detail.as_ref())?;
        pb.inc(1);
    }

    pb.finish_and_clear();
    info!(
        "Exported {} lists and {} detail records to {}",
        stats.lists,
        stats.details,
        out.display()
    );
    Ok(stats)
}

fn record<T: Serialize>(
    stats: &mut ExportStats,
    out: &Path,
    collection: Collection,
    slug: &str,
    detail: Option<&T>,
) -> Result<()> {
    match detail {
        Some(detail) => {
            let path = out.join(collection.name()).join(format!("{}.json", slug));
            write_json(&path, detail)?;
            stats.details += 1;
        }
        None => {
            warn!("{} listed but not found: {}", collection, collection.item_route(slug));
            stats.missing += 1;
        }
    }
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_vec_pretty(value)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    write_file(path, &json)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}
