mod document;
mod export;
mod pages;
mod parser;
mod records;
mod sitemap;
mod source;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use document::Collection;
use records::{Detail, ListPage, Summary};
use source::{Library, Source};

#[derive(Parser)]
#[command(name = "folio", about = "Parse portfolio markdown into list and detail records")]
struct Cli {
    /// Base URL of the site (documents under <url>/data/) or a local data directory
    #[arg(long, global = true, env = "FOLIO_SOURCE", default_value = "data")]
    source: String,

    /// HTTP fetch timeout in seconds
    #[arg(long, global = true, env = "FOLIO_TIMEOUT", default_value_t = 10)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the CV document
    Cv,
    /// List items of a collection with metadata and preview
    List {
        collection: Collection,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show one item by slug
    Show {
        collection: Collection,
        slug: String,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Generate sitemap.xml for every route
    Sitemap {
        /// Public base URL, e.g. https://example.github.io/home
        #[arg(long)]
        base_url: String,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Emit /#/route locations for a hash-routed site
        #[arg(long)]
        hash: bool,
    },
    /// Write every list and detail record as JSON
    Export {
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let source = Source::from_location(&cli.source, Duration::from_secs(cli.timeout))?;
    let lib = Library::new(source);
    info!("Reading documents from {}", lib.source());

    let result = match cli.command {
        Commands::Cv => {
            match pages::cv(&lib).await {
                Some(text) => println!("{}", text),
                None => println!("CV could not be loaded."),
            }
            Ok(())
        }
        Commands::List { collection, json } => match collection {
            Collection::Projects => print_list(collection, &pages::project_list(&lib).await, json),
            Collection::Publications => {
                print_list(collection, &pages::publication_list(&lib).await, json)
            }
            Collection::Zen => print_list(collection, &pages::zen_list(&lib).await, json),
        },
        Commands::Show { collection, slug, json } => match collection {
            Collection::Projects => {
                print_detail(collection, pages::project(&lib, &slug).await.as_ref(), json)
            }
            Collection::Publications => {
                print_detail(collection, pages::publication(&lib, &slug).await.as_ref(), json)
            }
            Collection::Zen => {
                print_detail(collection, pages::zen_post(&lib, &slug).await.as_ref(), json)
            }
        },
        Commands::Sitemap { base_url, out, hash } => {
            let routes = sitemap::collect_routes(&lib).await;
            let today = chrono::Local::now().date_naive();
            let xml = sitemap::render(&base_url, &routes, today, hash)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, xml)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote {} routes to {}", routes.len(), path.display());
                }
                None => println!("{}", xml),
            }
            Ok(())
        }
        Commands::Export { out } => {
            let stats = export::export_all(&lib, &out).await?;
            println!(
                "Exported {} lists, {} detail records ({} missing) to {}",
                stats.lists,
                stats.details,
                stats.missing,
                out.display()
            );
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn print_list<T: Summary + Serialize>(collection: Collection, page: &ListPage<T>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(page)?);
        return Ok(());
    }

    if !page.intro.is_empty() {
        println!("{}\n", page.intro);
    }
    if page.items.is_empty() {
        println!("{}", collection.empty_list());
        return Ok(());
    }

    for (i, item) in page.items.iter().enumerate() {
        println!("{:>3}. {}", i + 1, item.title());
        for meta in item.metadata() {
            println!("     {}", meta);
        }
        if !item.preview().is_empty() {
            println!("     {}", item.preview());
        }
        println!("     -> {}", collection.item_route(item.slug()));
    }

    println!("\n{} items | route: {}/<slug>", page.items.len(), collection.route());
    Ok(())
}

fn print_detail<T: Detail + Serialize>(collection: Collection, detail: Option<&T>, json: bool) -> Result<()> {
    let Some(detail) = detail else {
        println!("{}", collection.not_found());
        println!("Back to {}", collection.route());
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(detail)?);
        return Ok(());
    }

    if let Some(category) = detail.category() {
        println!("[{}]", category);
    }
    println!("{}\n", detail.title());
    println!("{}", detail.content());
    if let Some(pdf) = detail.pdf() {
        println!("\nPDF: {}", pdf);
    }
    Ok(())
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}
