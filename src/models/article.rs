use serde::{Deserialize, Serialize};

/// A news article as listed by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    pub title: String,
    /// Upstream feeds leave this null for some items
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, alias = "urlToImage")]
    pub image: Option<String>,
    #[serde(default)]
    pub source: Option<ArticleSource>,
}

impl Article {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: Some(description.into()),
            url: None,
            image: None,
            source: None,
        }
    }

    /// Description text, empty when the feed had none.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn source_name(&self) -> Option<&str> {
        self.source.as_ref().and_then(ArticleSource::name)
    }
}

/// Publisher, either flattened to its name or as the upstream object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ArticleSource {
    Name(String),
    Outlet {
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        name: Option<String>,
    },
}

impl ArticleSource {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Outlet { name, .. } => name.as_deref(),
        }
    }
}
