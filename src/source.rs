use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::debug;

use crate::document::Document;

/// Where the markdown documents are read from.
pub enum Source {
    /// A deployed site: documents live under `<base>/data/`.
    Http { client: reqwest::Client, base: String },
    /// A local directory holding `cv.md`, `projects.md`, ...
    Dir(PathBuf),
}

impl Source {
    pub fn from_location(location: &str, timeout: Duration) -> Result<Self> {
        if location.starts_with("http://") || location.starts_with("https://") {
            let client = reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .context("Failed to build HTTP client")?;
            Ok(Source::Http {
                client,
                base: location.trim_end_matches('/').to_string(),
            })
        } else {
            Ok(Source::Dir(PathBuf::from(location)))
        }
    }

    pub async fn fetch(&self, doc: Document) -> Result<String> {
        match self {
            Source::Http { client, base } => {
                let url = format!("{}/data/{}", base, doc.file_name());
                let start = Instant::now();
                let text = client
                    .get(&url)
                    .send()
                    .await
                    .with_context(|| format!("Failed to fetch {}", url))?
                    .error_for_status()
                    .with_context(|| format!("Bad response for {}", url))?
                    .text()
                    .await
                    .with_context(|| format!("Failed to read body of {}", url))?;
                debug!(
                    "Fetched {} ({} bytes) in {}ms",
                    url,
                    text.len(),
                    start.elapsed().as_millis()
                );
                Ok(text)
            }
            Source::Dir(dir) => {
                let path = dir.join(doc.file_name());
                tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))
            }
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Http { base, .. } => write!(f, "{}/data", base),
            Source::Dir(dir) => write!(f, "{}", dir.display()),
        }
    }
}

/// A source plus an in-memory cache keyed by document.
///
/// The cache lives as long as the process; failed fetches are not cached.
pub struct Library {
    source: Source,
    cache: Mutex<HashMap<Document, Arc<str>>>,
}

impl Library {
    pub fn new(source: Source) -> Self {
        Self {
            source,
            cache: Mutex::new(HashMap::new()),
        }
    }

    pub fn source(&self) -> &Source {
        &self.source
    }

    pub async fn load(&self, doc: Document) -> Result<Arc<str>> {
        if let Some(text) = self.cached(doc) {
            debug!("Cache hit for {}", doc);
            return Ok(text);
        }
        let text: Arc<str> = self.source.fetch(doc).await?.into();
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(doc, Arc::clone(&text));
        Ok(text)
    }

    fn cached(&self, doc: Document) -> Option<Arc<str>> {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&doc)
            .cloned()
    }
}
