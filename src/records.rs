use serde::Serialize;

/// A list page: the document intro followed by one summary per item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListPage<T> {
    pub intro: String,
    pub items: Vec<T>,
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            intro: String::new(),
            items: Vec::new(),
        }
    }
}

/// Project or Zen card: a single metadata line above the preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntrySummary {
    pub title: String,
    pub slug: String,
    pub metadata: String,
    pub preview: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicationSummary {
    pub title: String,
    pub slug: String,
    pub category: String,
    pub metadata: Vec<String>,
    pub preview: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDetail {
    pub title: String,
    pub slug: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicationDetail {
    pub title: String,
    pub slug: String,
    pub category: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZenDetail {
    pub title: String,
    pub slug: String,
    pub content: String,
}

/// Common view over list records, used by the CLI and exporters.
pub trait Summary {
    fn title(&self) -> &str;
    fn slug(&self) -> &str;
    fn metadata(&self) -> Vec<&str>;
    fn preview(&self) -> &str;
}

impl Summary for EntrySummary {
    fn title(&self) -> &str {
        &self.title
    }
    fn slug(&self) -> &str {
        &self.slug
    }
    fn metadata(&self) -> Vec<&str> {
        if self.metadata.is_empty() {
            Vec::new()
        } else {
            vec![self.metadata.as_str()]
        }
    }
    fn preview(&self) -> &str {
        &self.preview
    }
}

impl Summary for PublicationSummary {
    fn title(&self) -> &str {
        &self.title
    }
    fn slug(&self) -> &str {
        &self.slug
    }
    fn metadata(&self) -> Vec<&str> {
        self.metadata.iter().map(String::as_str).collect()
    }
    fn preview(&self) -> &str {
        &self.preview
    }
}

/// Common view over detail records.
pub trait Detail {
    fn title(&self) -> &str;
    fn content(&self) -> &str;
    fn category(&self) -> Option<&str> {
        None
    }
    fn pdf(&self) -> Option<&str> {
        None
    }
}

impl Detail for ProjectDetail {
    fn title(&self) -> &str {
        &self.title
    }
    fn content(&self) -> &str {
        &self.content
    }
    fn pdf(&self) -> Option<&str> {
        self.pdf.as_deref()
    }
}

impl Detail for PublicationDetail {
    fn title(&self) -> &str {
        &self.title
    }
    fn content(&self) -> &str {
        &self.content
    }
    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
    fn pdf(&self) -> Option<&str> {
        self.pdf.as_deref()
    }
}

impl Detail for ZenDetail {
    fn title(&self) -> &str {
        &self.title
    }
    fn content(&self) -> &str {
        &self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_omitted_from_json_when_absent() {
        let detail = ProjectDetail {
            title: "T".into(),
            slug: "t".into(),
            content: "body".into(),
            pdf: None,
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert!(json.get("pdf").is_none());
        assert_eq!(json["slug"], "t");
    }

    #[test]
    fn entry_metadata_view() {
        let mut entry = EntrySummary {
            title: "T".into(),
            slug: "t".into(),
            metadata: String::new(),
            preview: String::new(),
        };
        assert!(Summary::metadata(&entry).is_empty());
        entry.metadata = "2024".into();
        assert_eq!(Summary::metadata(&entry), ["2024"]);
    }
}
