// src/application/services/content.rs
use std::sync::Arc;

use crate::application::ports::{
    content::{ArticleDraft, ContentSource},
    time::Clock,
};
use crate::domain::article::{Article, ArticleId, Category};

pub const SERVICE_UNAVAILABLE_BODY: &str = "## Service Unavailable\n\nWe are unable to generate the full article content at this moment. Please try again later.";

const DEFAULT_IMAGE_SEED: &str = "100";

/// Body text for the detail page. Only `Generated` text may be cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleBody {
    Generated(String),
    Unavailable,
}

impl ArticleBody {
    pub fn as_markdown(&self) -> &str {
        match self {
            Self::Generated(text) => text,
            Self::Unavailable => SERVICE_UNAVAILABLE_BODY,
        }
    }

    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

/// Wraps the content provider so that no provider failure reaches callers:
/// listings degrade to the fixed fallback list and bodies to a fixed notice.
pub struct ContentService {
    source: Arc<dyn ContentSource>,
    clock: Arc<dyn Clock>,
}

impl ContentService {
    pub fn new(source: Arc<dyn ContentSource>, clock: Arc<dyn Clock>) -> Self {
        Self { source, clock }
    }

    pub async fn fetch_latest_articles(&self) -> Vec<Article> {
        match self.source.latest_articles().await {
            Ok(drafts) if !drafts.is_empty() => {
                let batch = format!("art-{}", self.clock.now_millis());
                let articles: Vec<Article> = drafts
                    .into_iter()
                    .enumerate()
                    .map(|(index, draft)| enrich(&batch, index, draft))
                    .collect();
                tracing::info!(count = articles.len(), "fetched latest articles");
                articles
            }
            Ok(_) => {
                tracing::warn!("content provider returned an empty article list, using fallback");
                fallback_articles()
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to fetch articles, using fallback");
                fallback_articles()
            }
        }
    }

    pub async fn generate_full_article(&self, article: &Article) -> ArticleBody {
        match self.source.article_body(article).await {
            Ok(text) if !text.trim().is_empty() => ArticleBody::Generated(text),
            Ok(_) => {
                tracing::warn!(article_id = %article.id, "content provider returned an empty body");
                ArticleBody::Unavailable
            }
            Err(err) => {
                tracing::warn!(article_id = %article.id, error = %err, "failed to generate article body");
                ArticleBody::Unavailable
            }
        }
    }
}

fn enrich(batch: &str, index: usize, draft: ArticleDraft) -> Article {
    let id = ArticleId::sequenced(batch, index);
    Article {
        image_url: image_url_for(&id),
        id,
        title: draft.title,
        summary: draft.summary,
        category: draft.category,
        author: draft.author,
        read_time: draft.read_time,
        date: draft.date,
        tags: draft.tags,
        is_featured: index == 0,
        content: None,
    }
}

/// Stock photo keyed on the first three digits of the id.
pub fn image_url_for(id: &ArticleId) -> String {
    let digits: String = id
        .as_str()
        .chars()
        .filter(char::is_ascii_digit)
        .take(3)
        .collect();
    let seed = if digits.is_empty() {
        DEFAULT_IMAGE_SEED
    } else {
        digits.as_str()
    };
    format!("https://picsum.photos/seed/{seed}/800/600")
}

/// Hand-written articles served whenever the provider cannot be used.
pub fn fallback_articles() -> Vec<Article> {
    vec![
        Article {
            id: ArticleId::sequenced("fallback", 1),
            title: "New GxP Guidelines Impact Pharma Cold Chain Strategies".into(),
            summary: "Pharmaceutical shippers are revising packaging protocols to meet stricter temperature monitoring requirements for cell & gene therapies.".into(),
            category: Category::SupplyChain,
            author: "Sarah Jenkins".into(),
            read_time: "6 min read".into(),
            date: "Oct 26, 2023".into(),
            image_url: "https://picsum.photos/seed/pharma1/800/600".into(),
            tags: tags(&["Pharma", "Cold Chain", "GxP", "Monitoring"]),
            is_featured: true,
            content: None,
        },
        Article {
            id: ArticleId::sequenced("fallback", 2),
            title: "Major Airlines Expand Cargo Fleet Amidst Demand Surge".into(),
            summary: "Leading global airlines are converting passenger aircraft to freighters to capture the growing e-commerce market share.".into(),
            category: Category::AirFreight,
            author: "David Chen".into(),
            read_time: "5 min read".into(),
            date: "Oct 24, 2023".into(),
            image_url: "https://picsum.photos/seed/logistics1/800/600".into(),
            tags: tags(&["Airlines", "Air Cargo", "Airport", "Logistics"]),
            is_featured: false,
            content: None,
        },
        Article {
            id: ArticleId::sequenced("fallback", 3),
            title: "Logistics World Summit 2024: Key Takeaways".into(),
            summary: "Industry leaders gathered to discuss sustainable packaging and the future of digital monitoring in supply chains.".into(),
            category: Category::MarketInsight,
            author: "Elena Rodriguez".into(),
            read_time: "4 min read".into(),
            date: "Oct 22, 2023".into(),
            image_url: "https://picsum.photos/seed/event1/800/600".into(),
            tags: tags(&["Events", "Packaging", "Logistics"]),
            is_featured: false,
            content: None,
        },
    ]
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}
