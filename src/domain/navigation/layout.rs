// src/domain/navigation/layout.rs
use crate::domain::article::Article;

const SECONDARY_SLOTS: usize = 3;
const RELATED_LIMIT: usize = 3;
const EDITORS_PICKS: usize = 4;

/// Magazine split of a filtered feed: one hero, a short headline column and
/// the remaining list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedLayout {
    pub featured: Option<Article>,
    pub secondary: Vec<Article>,
    pub main_feed: Vec<Article>,
}

impl FeedLayout {
    pub fn partition(filtered: &[Article]) -> Self {
        let featured = filtered
            .iter()
            .find(|article| article.is_featured)
            .or_else(|| filtered.first())
            .cloned();

        let mut rest = filtered
            .iter()
            .filter(|article| featured.as_ref().is_none_or(|hero| hero.id != article.id))
            .cloned();

        let secondary = rest.by_ref().take(SECONDARY_SLOTS).collect();
        let main_feed = rest.collect();

        Self {
            featured,
            secondary,
            main_feed,
        }
    }
}

/// Up to three other articles, same category first, then store order.
pub fn related_articles(articles: &[Article], selected: &Article) -> Vec<Article> {
    let mut related: Vec<Article> = articles
        .iter()
        .filter(|article| article.id != selected.id && article.category == selected.category)
        .take(RELATED_LIMIT)
        .cloned()
        .collect();

    if related.len() < RELATED_LIMIT {
        let missing = RELATED_LIMIT - related.len();
        let others: Vec<Article> = articles
            .iter()
            .filter(|article| {
                article.id != selected.id && !related.iter().any(|picked| picked.id == article.id)
            })
            .take(missing)
            .cloned()
            .collect();
        related.extend(others);
    }

    related
}

/// The editor's picks strip always draws from the unfiltered store.
pub fn editors_picks(articles: &[Article]) -> Vec<Article> {
    articles.iter().take(EDITORS_PICKS).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{ArticleId, Category};

    fn article(id: &str, category: Category, featured: bool) -> Article {
        Article {
            id: ArticleId::new(id).unwrap(),
            title: format!("Title {id}"),
            summary: String::new(),
            category,
            author: String::new(),
            read_time: String::new(),
            date: String::new(),
            image_url: String::new(),
            tags: Vec::new(),
            is_featured: featured,
            content: None,
        }
    }

    fn ids(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|article| article.id.as_str()).collect()
    }

    #[test]
    fn flagged_article_becomes_featured() {
        let articles = vec![
            article("a", Category::AirFreight, false),
            article("b", Category::AirFreight, false),
            article("c", Category::OceanFreight, true),
            article("d", Category::OceanFreight, false),
            article("e", Category::Regulations, false),
            article("f", Category::Regulations, false),
        ];

        let layout = FeedLayout::partition(&articles);
        assert_eq!(layout.featured.as_ref().map(|a| a.id.as_str()), Some("c"));
        assert_eq!(ids(&layout.secondary), vec!["a", "b", "d"]);
        assert_eq!(ids(&layout.main_feed), vec!["e", "f"]);
    }

    #[test]
    fn first_article_is_featured_without_flag() {
        let articles = vec![
            article("a", Category::AirFreight, false),
            article("b", Category::AirFreight, false),
        ];
        let layout = FeedLayout::partition(&articles);
        assert_eq!(layout.featured.as_ref().map(|a| a.id.as_str()), Some("a"));
        assert_eq!(ids(&layout.secondary), vec!["b"]);
        assert!(layout.main_feed.is_empty());
    }

    #[test]
    fn empty_feed_has_no_featured() {
        assert_eq!(FeedLayout::partition(&[]), FeedLayout::default());
    }

    #[test]
    fn related_prefers_category_then_tops_up() {
        let articles = vec![
            article("a", Category::AirFreight, false),
            article("b", Category::OceanFreight, false),
            article("c", Category::AirFreight, false),
            article("d", Category::Regulations, false),
        ];
        let related = related_articles(&articles, &articles[0]);
        assert_eq!(ids(&related), vec!["c", "b", "d"]);
    }

    #[test]
    fn related_never_contains_selected() {
        let articles = vec![article("a", Category::AirFreight, false)];
        assert!(related_articles(&articles, &articles[0]).is_empty());
    }

    #[test]
    fn editors_picks_take_four() {
        let articles: Vec<_> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|id| article(id, Category::SupplyChain, false))
            .collect();
        assert_eq!(ids(&editors_picks(&articles)), vec!["a", "b", "c", "d"]);
    }
}
