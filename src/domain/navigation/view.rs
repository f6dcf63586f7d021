// src/domain/navigation/view.rs
use crate::domain::article::Article;

use super::layout::{FeedLayout, editors_picks, related_articles};
use super::state::{NavigationState, Route};

/// Hero block shown on the unfiltered home page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroBlock {
    pub featured: Article,
    pub secondary: Vec<Article>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeView {
    pub title: String,
    pub hero: Option<HeroBlock>,
    /// The list column: the whole filtered set while filtering, otherwise
    /// only what the hero block did not take.
    pub list: Vec<Article>,
    pub editors_picks: Vec<Article>,
    pub filtered_count: usize,
}

impl HomeView {
    pub const fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleView {
    pub article: Article,
    pub related: Vec<Article>,
    pub display_tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Home(HomeView),
    Team,
    Article(ArticleView),
    NotFound { article_id: String },
}

/// Derive the whole page from the article list and the URL.
pub fn derive_view_state(
    articles: &[Article],
    loaded: bool,
    navigation: &NavigationState,
) -> ViewState {
    match &navigation.route {
        Route::Team => ViewState::Team,
        Route::Article(_) | Route::Home if !loaded => ViewState::Loading,
        Route::Article(id) => articles
            .iter()
            .find(|article| article.id.as_str() == id)
            .map_or_else(
                || ViewState::NotFound {
                    article_id: id.clone(),
                },
                |article| {
                    ViewState::Article(ArticleView {
                        related: related_articles(articles, article),
                        display_tags: article.display_tags(),
                        article: article.clone(),
                    })
                },
            ),
        Route::Home => ViewState::Home(home_view(articles, navigation)),
    }
}

fn home_view(articles: &[Article], navigation: &NavigationState) -> HomeView {
    let filtered = navigation.feed_filter().apply(articles);
    let title = navigation.page_title();
    let filtered_count = filtered.len();

    if filtered.is_empty() {
        return HomeView {
            title,
            hero: None,
            list: Vec::new(),
            editors_picks: Vec::new(),
            filtered_count,
        };
    }

    let editors_picks = if navigation.shows_editors_picks() {
        editors_picks(articles)
    } else {
        Vec::new()
    };

    if navigation.is_filtered() {
        return HomeView {
            title,
            hero: None,
            list: filtered,
            editors_picks,
            filtered_count,
        };
    }

    let layout = FeedLayout::partition(&filtered);
    HomeView {
        title,
        hero: layout.featured.map(|featured| HeroBlock {
            featured,
            secondary: layout.secondary,
        }),
        list: layout.main_feed,
        editors_picks,
        filtered_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{ArticleId, Category};

    fn article(id: &str, category: Category, featured: bool) -> Article {
        Article {
            id: ArticleId::new(id).unwrap(),
            title: format!("Story {id}"),
            summary: format!("Summary for {id}"),
            category,
            author: "Desk".into(),
            read_time: "3 min read".into(),
            date: "Oct 2, 2023".into(),
            image_url: String::new(),
            tags: vec!["Pharma".into()],
            is_featured: featured,
            content: None,
        }
    }

    fn store() -> Vec<Article> {
        vec![
            article("a1", Category::SupplyChain, true),
            article("a2", Category::AirFreight, false),
            article("a3", Category::OceanFreight, false),
            article("a4", Category::Regulations, false),
            article("a5", Category::AirFreight, false),
            article("a6", Category::MarketInsight, false),
            article("a7", Category::SupplyChain, false),
        ]
    }

    fn ids(articles: &[Article]) -> Vec<&str> {
        articles.iter().map(|article| article.id.as_str()).collect()
    }

    fn derive(location: &str) -> ViewState {
        derive_view_state(&store(), true, &NavigationState::from_location(location))
    }

    #[test]
    fn home_splits_hero_and_list() {
        let ViewState::Home(home) = derive("/") else {
            panic!("expected home view");
        };
        let hero = home.hero.expect("hero");
        assert_eq!(hero.featured.id.as_str(), "a1");
        assert_eq!(ids(&hero.secondary), vec!["a2", "a3", "a4"]);
        assert_eq!(ids(&home.list), vec!["a5", "a6", "a7"]);
        assert_eq!(ids(&home.editors_picks), vec!["a1", "a2", "a3", "a4"]);
        assert_eq!(home.title, "Latest Intelligence");
    }

    #[test]
    fn category_filter_lists_everything_without_hero() {
        let ViewState::Home(home) = derive("/?category=Air+Freight") else {
            panic!("expected home view");
        };
        assert!(home.hero.is_none());
        assert_eq!(ids(&home.list), vec!["a2", "a5"]);
        assert_eq!(home.title, "Air Freight");
        assert_eq!(home.editors_picks.len(), 4);
    }

    #[test]
    fn tag_filter_hides_editors_picks() {
        let ViewState::Home(home) = derive("/?tag=pharma") else {
            panic!("expected home view");
        };
        assert_eq!(home.list.len(), 7);
        assert!(home.editors_picks.is_empty());
        assert_eq!(home.title, "Articles tagged with #pharma");
    }

    #[test]
    fn empty_result_is_reported() {
        let ViewState::Home(home) = derive("/?q=zeppelin") else {
            panic!("expected home view");
        };
        assert!(home.is_empty());
        assert!(home.list.is_empty());
    }

    #[test]
    fn article_route_finds_article_and_related() {
        let ViewState::Article(view) = derive("/article/a2") else {
            panic!("expected article view");
        };
        assert_eq!(view.article.id.as_str(), "a2");
        assert_eq!(ids(&view.related), vec!["a5", "a1", "a3"]);
        assert_eq!(view.display_tags, vec!["Pharma"]);
    }

    #[test]
    fn unknown_article_is_not_found() {
        assert_eq!(
            derive("/article/missing"),
            ViewState::NotFound {
                article_id: "missing".into()
            }
        );
    }

    #[test]
    fn loading_store_reports_loading_except_team() {
        let navigation = NavigationState::from_location("/article/a1");
        assert_eq!(derive_view_state(&[], false, &navigation), ViewState::Loading);
        let navigation = NavigationState::from_location("/team");
        assert_eq!(derive_view_state(&[], false, &navigation), ViewState::Team);
    }
}
