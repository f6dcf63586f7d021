use crate::domain::article::{ArticleId, CategoryFilter};

/// Where a UI action sends the reader. Every navigation scrolls to the top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationTarget {
    pub location: String,
    pub scroll_to_top: bool,
}

impl NavigationTarget {
    fn to(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            scroll_to_top: true,
        }
    }

    pub fn home() -> Self {
        Self::to("/")
    }

    pub fn team() -> Self {
        Self::to("/team")
    }

    /// Selecting "All" clears every parameter.
    pub fn category(filter: CategoryFilter) -> Self {
        match filter {
            CategoryFilter::All => Self::home(),
            CategoryFilter::Only(category) => Self::with_param("category", category.label()),
        }
    }

    pub fn tag(tag: &str) -> Self {
        Self::with_param("tag", tag)
    }

    pub fn search(query: &str) -> Self {
        if query.is_empty() {
            Self::home()
        } else {
            Self::with_param("q", query)
        }
    }

    pub fn article(id: &ArticleId) -> Self {
        Self::to(format!(
            "/article/{}",
            super::state::encode_path_segment(id.as_str())
        ))
    }

    fn with_param(key: &str, value: &str) -> Self {
        match serde_urlencoded::to_string([(key, value)].as_slice()) {
            Ok(query) => Self::to(format!("/?{query}")),
            Err(err) => {
                tracing::warn!(error = %err, key, "could not encode navigation parameter");
                Self::home()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::Category;
    use crate::domain::navigation::NavigationState;

    #[test]
    fn all_category_goes_home() {
        assert_eq!(NavigationTarget::category(CategoryFilter::All).location, "/");
    }

    #[test]
    fn category_target_round_trips_through_derivation() {
        for category in Category::ALL {
            let target = NavigationTarget::category(CategoryFilter::Only(category));
            let state = NavigationState::from_location(&target.location);
            assert_eq!(state.category, CategoryFilter::Only(category));
            assert!(state.tag.is_none());
            assert!(state.search.is_none());
        }
    }

    #[test]
    fn tag_and_search_set_single_parameter() {
        let tag = NavigationTarget::tag("Cold Chain");
        assert_eq!(tag.location, "/?tag=Cold+Chain");
        let state = NavigationState::from_location(&tag.location);
        assert_eq!(state.tag.as_deref(), Some("Cold Chain"));
        assert!(state.category.is_all());

        let search = NavigationTarget::search("rates & ports");
        let state = NavigationState::from_location(&search.location);
        assert_eq!(state.search.as_deref(), Some("rates & ports"));
        assert!(state.tag.is_none());
    }

    #[test]
    fn empty_search_clears() {
        assert_eq!(NavigationTarget::search("").location, "/");
    }

    #[test]
    fn article_target_embeds_id_and_scrolls() {
        let target = NavigationTarget::article(&ArticleId::new("art-7").unwrap());
        assert_eq!(target.location, "/article/art-7");
        assert!(target.scroll_to_top);
    }

    #[test]
    fn article_target_round_trips_reserved_characters() {
        let id = ArticleId::new("ocean/rates 2024").unwrap();
        let target = NavigationTarget::article(&id);
        assert_eq!(target.location, "/article/ocean%2Frates%202024");
        let state = NavigationState::from_location(&target.location);
        assert_eq!(state.route, crate::domain::navigation::Route::Article(id.to_string()));
    }
}
