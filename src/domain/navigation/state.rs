// src/domain/navigation/state.rs
use crate::domain::article::CategoryFilter;

use super::filter::FeedFilter;

const ARTICLE_PATH_PREFIX: &str = "/article/";
const TEAM_PATH: &str = "/team";
const DEFAULT_PAGE_TITLE: &str = "Latest Intelligence";

/// Which view a path addresses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Team,
    Article(String),
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        if let Some(id) = path.strip_prefix(ARTICLE_PATH_PREFIX) {
            if !id.is_empty() {
                return Self::Article(decode_path_segment(id));
            }
        }
        if path == TEAM_PATH {
            Self::Team
        } else {
            Self::Home
        }
    }
}

/// Everything the UI knows about where the reader is, derived from the URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub route: Route,
    pub category: CategoryFilter,
    pub tag: Option<String>,
    pub search: Option<String>,
}

impl NavigationState {
    /// Parse a request target such as `/article/art-1` or `/?category=Regulations`.
    pub fn from_location(location: &str) -> Self {
        let location = location.split('#').next().unwrap_or_default();
        match location.split_once('?') {
            Some((path, query)) => Self::from_parts(path, Some(query)),
            None => Self::from_parts(location, None),
        }
    }

    pub fn from_parts(path: &str, query: Option<&str>) -> Self {
        let params = QueryParams::parse(query.unwrap_or_default());
        Self {
            route: Route::from_path(path),
            category: CategoryFilter::from_param(params.first("category")),
            tag: params.first("tag").map(str::to_string),
            search: params.first("q").map(str::to_string),
        }
    }

    pub fn feed_filter(&self) -> FeedFilter {
        FeedFilter::new(self.category, self.search.as_deref(), self.tag.as_deref())
    }

    /// True when any of search, tag or a concrete category narrows the feed.
    pub const fn is_filtered(&self) -> bool {
        self.search.is_some() || self.tag.is_some() || !self.category.is_all()
    }

    pub const fn shows_editors_picks(&self) -> bool {
        self.search.is_none() && self.tag.is_none()
    }

    /// Search wins over tag, tag over category.
    pub fn page_title(&self) -> String {
        if let Some(query) = &self.search {
            return format!("Results for \"{query}\"");
        }
        if let Some(tag) = &self.tag {
            return format!("Articles tagged with #{tag}");
        }
        match self.category {
            CategoryFilter::All => DEFAULT_PAGE_TITLE.to_string(),
            CategoryFilter::Only(category) => category.label().to_string(),
        }
    }
}

/// Decoded query pairs; the first occurrence of a key wins and empty values
/// count as absent.
struct QueryParams(Vec<(String, String)>);

/// Percent-decode one path segment. Unlike a query value, `+` stays literal.
pub(super) fn decode_path_segment(raw: &str) -> String {
    let escaped = raw.replace('+', "%2B").replace('&', "%26");
    serde_urlencoded::from_str::<Vec<(String, String)>>(&format!("segment={escaped}"))
        .ok()
        .and_then(|mut pairs| pairs.pop())
        .map_or_else(|| raw.to_string(), |(_, value)| value)
}

/// Inverse of [`decode_path_segment`].
pub(super) fn encode_path_segment(segment: &str) -> String {
    match serde_urlencoded::to_string([("segment", segment)].as_slice()) {
        Ok(encoded) => encoded
            .trim_start_matches("segment=")
            .replace('+', "%20"),
        Err(err) => {
            tracing::warn!(error = %err, "could not encode path segment");
            segment.to_string()
        }
    }
}

impl QueryParams {
    fn parse(query: &str) -> Self {
        match serde_urlencoded::from_str::<Vec<(String, String)>>(query) {
            Ok(pairs) => Self(pairs),
            Err(err) => {
                tracing::debug!(error = %err, "ignoring undecodable query string");
                Self(Vec::new())
            }
        }
    }

    fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
            .filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::Category;

    #[test]
    fn routes_are_matched_by_path() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path("/team"), Route::Team);
        assert_eq!(Route::from_path("/team/"), Route::Home);
        assert_eq!(
            Route::from_path("/article/art-1"),
            Route::Article("art-1".into())
        );
        assert_eq!(Route::from_path("/article/"), Route::Home);
        assert_eq!(Route::from_path("/somewhere"), Route::Home);
    }

    #[test]
    fn article_ids_are_percent_decoded() {
        assert_eq!(
            Route::from_path("/article/fallback%201"),
            Route::Article("fallback 1".into())
        );
        assert_eq!(
            Route::from_path("/article/a%2Fb+c&d"),
            Route::Article("a/b+c&d".into())
        );
    }

    #[test]
    fn path_segments_round_trip() {
        for segment in ["art-1-0", "a b", "a/b", "c+d", "50%", "x&y=z", "caf\u{e9}"] {
            let encoded = encode_path_segment(segment);
            assert!(!encoded.contains(['/', ' ', '?', '#']), "{encoded}");
            assert_eq!(decode_path_segment(&encoded), segment);
        }
    }

    #[test]
    fn parses_all_parameters() {
        let state = NavigationState::from_location("/?category=Air%20Freight&tag=Pharma&q=gxp");
        assert_eq!(state.route, Route::Home);
        assert_eq!(state.category, CategoryFilter::Only(Category::AirFreight));
        assert_eq!(state.tag.as_deref(), Some("Pharma"));
        assert_eq!(state.search.as_deref(), Some("gxp"));
    }

    #[test]
    fn plus_decodes_to_space() {
        let state = NavigationState::from_location("/?category=Ocean+Freight");
        assert_eq!(state.category, CategoryFilter::Only(Category::OceanFreight));
    }

    #[test]
    fn invalid_category_and_empty_values_are_ignored() {
        let state = NavigationState::from_location("/?category=Space&tag=&q=");
        assert_eq!(state.category, CategoryFilter::All);
        assert!(state.tag.is_none());
        assert!(state.search.is_none());
        assert!(!state.is_filtered());
    }

    #[test]
    fn first_occurrence_wins() {
        let state = NavigationState::from_location("/?tag=GxP&tag=Events");
        assert_eq!(state.tag.as_deref(), Some("GxP"));
    }

    #[test]
    fn fragment_is_dropped() {
        let state = NavigationState::from_location("/article/art-9#comments");
        assert_eq!(state.route, Route::Article("art-9".into()));
    }

    #[test]
    fn title_precedence() {
        let mut state = NavigationState::from_location("/?category=Regulations&tag=GxP&q=ETS");
        assert_eq!(state.page_title(), "Results for \"ETS\"");
        state.search = None;
        assert_eq!(state.page_title(), "Articles tagged with #GxP");
        state.tag = None;
        assert_eq!(state.page_title(), "Regulations");
        state.category = CategoryFilter::All;
        assert_eq!(state.page_title(), "Latest Intelligence");
    }
}
