use crate::error::ApiError;
use crate::models::Article;

/// Articles currently shown by the articles view.
///
/// Each successful fetch replaces the whole list; there is no merging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleList {
    articles: Vec<Article>,
}

impl ArticleList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn set_articles(&mut self, articles: Vec<Article>) {
        self.articles = articles;
    }

    /// Replace the list on success; on failure keep it and hand the error back.
    pub fn apply_fetch(&mut self, result: Result<Vec<Article>, ApiError>) -> Result<usize, ApiError> {
        let articles = result?;
        self.set_articles(articles);
        Ok(self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_replaces_wholesale() {
        let mut list = ArticleList::new();
        list.set_articles(vec![Article::new("old 1", "x"), Article::new("old 2", "y")]);

        let count = list.apply_fetch(Ok(vec![Article::new("A", "B")])).unwrap();

        assert_eq!(count, 1);
        assert_eq!(list.entries(), &[Article::new("A", "B")]);
    }

    #[test]
    fn test_failed_fetch_keeps_previous_list() {
        let mut list = ArticleList::new();
        list.set_articles(vec![Article::new("kept", "still here")]);
        let before = list.clone();

        let result = list.apply_fetch(Err(ApiError::Network("connection refused".to_string())));

        assert!(matches!(result, Err(ApiError::Network(_))));
        assert_eq!(list, before);
    }

    #[test]
    fn test_empty_result_clears_list() {
        let mut list = ArticleList::new();
        list.set_articles(vec![Article::new("gone", "soon")]);
        list.apply_fetch(Ok(Vec::new())).unwrap();
        assert!(list.is_empty());
    }
}
