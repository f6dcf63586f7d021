// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, Category};
use crate::domain::errors::{DomainError, DomainResult};
use std::collections::HashSet;

const DEFAULT_DISPLAY_TAGS: [&str; 2] = ["Logistics", "Supply Chain"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub summary: String,
    pub category: Category,
    pub author: String,
    pub read_time: String,
    pub date: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub is_featured: bool,
    pub content: Option<String>,
}

impl Article {
    /// `needle` must already be lowercased.
    pub fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.summary.to_lowercase().contains(needle)
    }

    /// `tag` must already be lowercased.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate.to_lowercase() == tag)
    }

    /// Tags shown on the detail page; untagged articles get generic ones.
    pub fn display_tags(&self) -> Vec<String> {
        if self.tags.is_empty() {
            DEFAULT_DISPLAY_TAGS
                .iter()
                .map(|tag| (*tag).to_string())
                .chain(std::iter::once(self.category.label().to_string()))
                .collect()
        } else {
            self.tags.clone()
        }
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = Some(content.into());
    }
}

pub fn ensure_unique_ids(articles: &[Article]) -> DomainResult<()> {
    let mut seen = HashSet::with_capacity(articles.len());
    for article in articles {
        if !seen.insert(article.id.as_str()) {
            return Err(DomainError::DuplicateArticleId(article.id.to_string()));
        }
    }
    Ok(())
}
