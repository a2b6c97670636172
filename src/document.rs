use std::fmt;

use clap::ValueEnum;

/// The four markdown sources the site is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Document {
    Cv,
    Projects,
    Publications,
    Zen,
}

impl Document {
    pub fn name(self) -> &'static str {
        match self {
            Document::Cv => "cv",
            Document::Projects => "projects",
            Document::Publications => "publications",
            Document::Zen => "zen",
        }
    }

    pub fn file_name(self) -> String {
        format!("{}.md", self.name())
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Documents that split into routable items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Collection {
    Projects,
    Publications,
    Zen,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Collection::Projects, Collection::Publications, Collection::Zen];

    pub fn document(self) -> Document {
        match self {
            Collection::Projects => Document::Projects,
            Collection::Publications => Document::Publications,
            Collection::Zen => Document::Zen,
        }
    }

    pub fn name(self) -> &'static str {
        self.document().name()
    }

    /// `/projects`, `/publications`, `/zen`
    pub fn route(self) -> String {
        format!("/{}", self.name())
    }

    pub fn item_route(self, slug: &str) -> String {
        format!("/{}/{}", self.name(), slug)
    }

    pub fn not_found(self) -> &'static str {
        match self {
            Collection::Projects => "Project not found.",
            Collection::Publications => "Publication not found.",
            Collection::Zen => "Post not found.",
        }
    }

    pub fn empty_list(self) -> &'static str {
        match self {
            Collection::Projects => "No projects found.",
            Collection::Publications => "No publications found.",
            Collection::Zen => "No posts found.",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
