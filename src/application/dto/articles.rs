use crate::domain::article::{Article, ShareLinks};
use crate::domain::navigation::{NavigationTarget, highlight};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::navigation::{HighlightSegmentDto, NavigationTargetDto};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub category: String,
    pub author: String,
    pub read_time: String,
    pub date: String,
    pub image_url: String,
    pub tags: Vec<String>,
    pub is_featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into_inner(),
            title: article.title,
            summary: article.summary,
            category: article.category.label().to_string(),
            author: article.author,
            read_time: article.read_time,
            date: article.date,
            image_url: article.image_url,
            tags: article.tags,
            is_featured: article.is_featured,
            content: article.content,
        }
    }
}

/// Feed card with its click target. While a search is active the title and
/// summary are also returned split into highlight segments.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleCardDto {
    #[serde(flatten)]
    pub article: ArticleDto,
    pub target: NavigationTargetDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_segments: Option<Vec<HighlightSegmentDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_segments: Option<Vec<HighlightSegmentDto>>,
}

impl ArticleCardDto {
    pub fn new(article: Article, search: Option<&str>) -> Self {
        let target = NavigationTarget::article(&article.id).into();
        let (title_segments, summary_segments) = match search.filter(|term| !term.is_empty()) {
            Some(term) => (
                Some(segments(&article.title, term)),
                Some(segments(&article.summary, term)),
            ),
            None => (None, None),
        };

        Self {
            article: article.into(),
            target,
            title_segments,
            summary_segments,
        }
    }

    pub fn list(articles: Vec<Article>, search: Option<&str>) -> Vec<Self> {
        articles
            .into_iter()
            .map(|article| Self::new(article, search))
            .collect()
    }
}

fn segments(text: &str, term: &str) -> Vec<HighlightSegmentDto> {
    highlight(text, term).into_iter().map(Into::into).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleBodyDto {
    pub article_id: String,
    /// Markdown text.
    pub content: String,
    /// `true` when the provider failed and the fixed notice was returned.
    pub fallback: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShareLinksDto {
    pub permalink: String,
    pub twitter: String,
    pub linkedin: String,
    pub facebook: String,
}

impl From<ShareLinks> for ShareLinksDto {
    fn from(links: ShareLinks) -> Self {
        Self {
            permalink: links.permalink,
            twitter: links.twitter,
            linkedin: links.linkedin,
            facebook: links.facebook,
        }
    }
}

/// Store contents; `loaded` stays `false` until the startup fetch completed.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleListDto {
    pub loaded: bool,
    pub count: usize,
    pub articles: Vec<ArticleDto>,
}

/// Type-ahead entries for the header search box.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchSuggestionsDto {
    pub query: String,
    pub suggestions: Vec<ArticleCardDto>,
    /// Submitting the query navigates here.
    pub submit: NavigationTargetDto,
}
