// src/domain/navigation/filter.rs
use crate::domain::article::{Article, CategoryFilter};

const MAX_SUGGESTIONS: usize = 5;

/// Predicate combining category, search and tag selection.
///
/// Search and tag are stored lowercased; an article passes when it satisfies
/// every active criterion.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedFilter {
    category: CategoryFilter,
    search: Option<String>,
    tag: Option<String>,
}

impl FeedFilter {
    pub fn new(category: CategoryFilter, search: Option<&str>, tag: Option<&str>) -> Self {
        Self {
            category,
            search: normalized(search),
            tag: normalized(tag),
        }
    }

    pub fn matches(&self, article: &Article) -> bool {
        self.category.matches(article.category)
            && self
                .search
                .as_deref()
                .is_none_or(|needle| article.mentions(needle))
            && self.tag.as_deref().is_none_or(|tag| article.has_tag(tag))
    }

    /// Matching articles in their original relative order.
    pub fn apply(&self, articles: &[Article]) -> Vec<Article> {
        articles
            .iter()
            .filter(|article| self.matches(article))
            .cloned()
            .collect()
    }
}

fn normalized(value: Option<&str>) -> Option<String> {
    value
        .filter(|value| !value.is_empty())
        .map(str::to_lowercase)
}

/// Type-ahead matches for the header search box.
pub fn search_suggestions(articles: &[Article], query: &str) -> Vec<Article> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    articles
        .iter()
        .filter(|article| article.mentions(&needle))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{ArticleId, Category};
    use proptest::prelude::*;

    fn article(id: &str, category: Category, title: &str, summary: &str, tags: &[&str]) -> Article {
        Article {
            id: ArticleId::new(id).unwrap(),
            title: title.into(),
            summary: summary.into(),
            category,
            author: "Desk".into(),
            read_time: "4 min read".into(),
            date: "Oct 1, 2023".into(),
            image_url: String::new(),
            tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
            is_featured: false,
            content: None,
        }
    }

    fn seven_articles() -> Vec<Article> {
        vec![
            article("a1", Category::SupplyChain, "Cold chain shake-up", "New GxP compliance rules for pharma", &["Pharma", "GxP"]),
            article("a2", Category::AirFreight, "Freighter conversions", "Airlines add capacity", &["Airlines"]),
            article("a3", Category::OceanFreight, "SCFI slides", "Spot rates fall again", &["Ocean"]),
            article("a4", Category::Regulations, "EU ETS phase-in", "Carriers face surcharges", &["EU ETS"]),
            article("a5", Category::AirFreight, "Hub airports expand", "New cargo terminals open", &["Airport"]),
            article("a6", Category::MarketInsight, "Summit takeaways", "Packaging and monitoring lead", &["Events"]),
            article("a7", Category::SupplyChain, "Nearshoring wave", "Mexico corridors boom", &[]),
        ]
    }

    fn ids(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|article| article.id.as_str()).collect()
    }

    #[test]
    fn category_filter_keeps_relative_order() {
        let filter = FeedFilter::new(CategoryFilter::Only(Category::AirFreight), None, None);
        assert_eq!(ids(&filter.apply(&seven_articles())), vec!["a2", "a5"]);
    }

    #[test]
    fn search_matches_summary_regardless_of_case() {
        let filter = FeedFilter::new(CategoryFilter::All, Some("gxp"), None);
        assert_eq!(ids(&filter.apply(&seven_articles())), vec!["a1"]);
        let filter = FeedFilter::new(CategoryFilter::All, Some("GxP"), None);
        assert_eq!(ids(&filter.apply(&seven_articles())), vec!["a1"]);
    }

    #[test]
    fn empty_search_is_no_search() {
        let filter = FeedFilter::new(CategoryFilter::All, Some(""), None);
        assert_eq!(filter.apply(&seven_articles()).len(), 7);
    }

    #[test]
    fn tag_requires_exact_match() {
        let filter = FeedFilter::new(CategoryFilter::All, None, Some("eu ets"));
        assert_eq!(ids(&filter.apply(&seven_articles())), vec!["a4"]);
        let filter = FeedFilter::new(CategoryFilter::All, None, Some("EU"));
        assert!(filter.apply(&seven_articles()).is_empty());
    }

    #[test]
    fn criteria_combine() {
        let filter = FeedFilter::new(
            CategoryFilter::Only(Category::AirFreight),
            Some("cargo"),
            Some("airport"),
        );
        assert_eq!(ids(&filter.apply(&seven_articles())), vec!["a5"]);
    }

    #[test]
    fn suggestions_are_capped_and_skip_blank_queries() {
        assert!(search_suggestions(&seven_articles(), "   ").is_empty());
        assert_eq!(search_suggestions(&seven_articles(), "e").len(), 5);
        assert_eq!(ids(&search_suggestions(&seven_articles(), "SCFI")), vec!["a3"]);
    }

    fn arb_category() -> impl Strategy<Value = Category> {
        prop::sample::select(Category::ALL.to_vec())
    }

    fn arb_article() -> impl Strategy<Value = Article> {
        (
            arb_category(),
            "[a-zA-Z ]{0,16}",
            "[a-zA-Z ]{0,24}",
            prop::collection::vec("[a-zA-Z]{1,6}", 0..4),
        )
            .prop_map(|(category, title, summary, tags)| Article {
                id: ArticleId::new("generated").unwrap(),
                title,
                summary,
                category,
                author: String::new(),
                read_time: String::new(),
                date: String::new(),
                image_url: String::new(),
                tags,
                is_featured: false,
                content: None,
            })
    }

    proptest! {
        #[test]
        fn category_results_all_match(articles in prop::collection::vec(arb_article(), 0..12), category in arb_category()) {
            let filter = FeedFilter::new(CategoryFilter::Only(category), None, None);
            for article in filter.apply(&articles) {
                prop_assert_eq!(article.category, category);
            }
        }

        #[test]
        fn all_category_keeps_everything(articles in prop::collection::vec(arb_article(), 0..12)) {
            let filter = FeedFilter::new(CategoryFilter::All, None, None);
            prop_assert_eq!(filter.apply(&articles), articles);
        }

        #[test]
        fn search_results_contain_query(articles in prop::collection::vec(arb_article(), 0..12), query in "[a-zA-Z]{1,3}") {
            let filter = FeedFilter::new(CategoryFilter::All, Some(&query), None);
            let needle = query.to_lowercase();
            for article in filter.apply(&articles) {
                prop_assert!(
                    article.title.to_lowercase().contains(&needle)
                        || article.summary.to_lowercase().contains(&needle)
                );
            }
        }

        #[test]
        fn tag_results_carry_tag(articles in prop::collection::vec(arb_article(), 0..12), tag in "[a-zA-Z]{1,6}") {
            let filter = FeedFilter::new(CategoryFilter::All, None, Some(&tag));
            let wanted = tag.to_lowercase();
            for article in filter.apply(&articles) {
                prop_assert!(article.tags.iter().any(|candidate| candidate.to_lowercase() == wanted));
            }
        }
    }
}
