pub mod articles;
pub mod comments;
pub mod detail;
pub mod navigation;
pub mod newsletter;
pub mod views;

pub use articles::{
    ArticleBodyDto, ArticleCardDto, ArticleDto, ArticleListDto, SearchSuggestionsDto, ShareLinksDto,
};
pub use comments::CommentDto;
pub use detail::{DetailSnapshotDto, ViewerDto};
pub use navigation::{
    CategoryOptionDto, HighlightSegmentDto, NavigationDto, NavigationTargetDto, TagOptionDto,
};
pub use newsletter::{InterestSelectionDto, SubscriptionDto};
pub use views::{
    ArticleViewDto, HeroDto, HomeViewDto, LoadingViewDto, NotFoundViewDto, TeamMemberDto,
    TeamViewDto, ViewDto,
};
