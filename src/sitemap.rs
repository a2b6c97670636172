use std::collections::HashSet;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tracing::info;

use crate::document::Collection;
use crate::pages;
use crate::records::Summary;
use crate::source::Library;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Every route the site serves: static pages, collection roots, one per item.
pub async fn collect_routes(lib: &Library) -> Vec<String> {
    let mut routes = vec!["/".to_string(), "/cv".to_string()];
    for collection in Collection::ALL {
        routes.push(collection.route());
        let slugs: Vec<String> = match collection {
            Collection::Projects => owned_slugs(&pages::project_list(lib).await.items),
            Collection::Publications => owned_slugs(&pages::publication_list(lib).await.items),
            Collection::Zen => owned_slugs(&pages::zen_list(lib).await.items),
        };
        routes.extend(slugs.iter().map(|s| collection.item_route(s)));
    }
    info!("Collected {} routes", routes.len());
    routes
}

/// Slugs in document order, first occurrence only, skipping empty ones.
/// Duplicates would all resolve to the first item anyway.
pub fn unique_slugs<T: Summary>(items: &[T]) -> Vec<&str> {
    let mut seen = HashSet::new();
    items
        .iter()
        .map(Summary::slug)
        .filter(|slug| !slug.is_empty() && seen.insert(*slug))
        .collect()
}

fn owned_slugs<T: Summary>(items: &[T]) -> Vec<String> {
    unique_slugs(items).into_iter().map(str::to_string).collect()
}

/// Render a `urlset` document. With `hash_routes`, routes are placed behind
/// `#` the way a hash-routed single page app expects.
pub fn render(base_url: &str, routes: &[String], lastmod: NaiveDate, hash_routes: bool) -> Result<String> {
    let base = base_url.trim_end_matches('/');
    let lastmod = lastmod.format("%Y-%m-%d").to_string();

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    writer.write_event(Event::Start(urlset))?;

    for route in routes {
        let loc = if hash_routes {
            format!("{}/#{}", base, route)
        } else {
            format!("{}{}", base, route)
        };
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        write_text_element(&mut writer, "loc", &loc)?;
        write_text_element(&mut writer, "lastmod", &lastmod)?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;
    String::from_utf8(writer.into_inner()).context("Sitemap is not valid UTF-8")
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
