mod content;
mod list;
mod service;
mod suggestions;

pub use content::GetArticleContentQuery;
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
pub use suggestions::SearchSuggestionsQuery;
