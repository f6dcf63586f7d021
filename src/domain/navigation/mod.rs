//! URL-driven feed state: everything a page shows is derived from the
//! request path and its `category`, `tag` and `q` parameters.
pub mod filter;
pub mod highlight;
pub mod layout;
pub mod state;
pub mod target;
pub mod view;

pub use filter::{FeedFilter, search_suggestions};
pub use highlight::{Segment, highlight};
pub use layout::{FeedLayout, editors_picks, related_articles};
pub use state::{NavigationState, Route};
pub use target::NavigationTarget;
pub use view::{ArticleView, HeroBlock, HomeView, ViewState, derive_view_state};

/// Fixed topic shortcuts offered next to the feed.
pub const INDUSTRY_FOCUS_TAGS: [&str; 11] = [
    "Pharma",
    "Cold Chain",
    "Logistics",
    "Packaging",
    "Monitoring",
    "GxP",
    "Events",
    "Airlines",
    "Airport",
    "Automotive",
    "E-Commerce",
];
