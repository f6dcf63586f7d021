// src/application/queries/views/render.rs
use super::ViewQueryService;
use crate::{
    application::{
        dto::{
            ArticleBodyDto, ArticleCardDto, ArticleViewDto, HeroDto, HomeViewDto, LoadingViewDto,
            NavigationDto, NotFoundViewDto, TagOptionDto, TeamMemberDto, TeamViewDto, ViewDto,
        },
        error::ApplicationResult,
    },
    domain::{
        article::ShareLinks,
        navigation::{
            ArticleView, HomeView, NavigationState, NavigationTarget, ViewState,
            derive_view_state,
        },
        team::editorial_team,
    },
};

const LOADING_MESSAGE: &str = "Gathering market intelligence...";
const EMPTY_FEED_MESSAGE: &str = "No articles found";
const NOT_FOUND_MESSAGE: &str =
    "The article you are looking for does not exist or has been removed.";

/// Location as received by the server, e.g. `/?category=Regulations`.
pub struct RenderViewQuery {
    pub location: String,
}

impl ViewQueryService {
    pub async fn render(&self, query: RenderViewQuery) -> ApplicationResult<ViewDto> {
        let navigation = NavigationState::from_location(&query.location);
        let loaded = self.repo.is_loaded().await?;
        let articles = self.repo.list().await?;
        let nav_dto = NavigationDto::from(&navigation);

        let view = match derive_view_state(&articles, loaded, &navigation) {
            ViewState::Loading => ViewDto::Loading(LoadingViewDto {
                navigation: nav_dto,
                message: LOADING_MESSAGE.into(),
            }),
            ViewState::Team => ViewDto::Team(TeamViewDto {
                navigation: nav_dto,
                members: editorial_team().iter().map(TeamMemberDto::from).collect(),
            }),
            ViewState::Home(home) => ViewDto::Home(home_view(home, &navigation, nav_dto)),
            ViewState::Article(article) => {
                ViewDto::Article(Box::new(self.article_view(article, nav_dto).await?))
            }
            ViewState::NotFound { article_id } => {
                tracing::debug!(%article_id, "requested article is not in the store");
                ViewDto::NotFound(NotFoundViewDto {
                    navigation: nav_dto,
                    article_id,
                    message: NOT_FOUND_MESSAGE.into(),
                    back: NavigationTarget::home().into(),
                })
            }
        };

        Ok(view)
    }

    async fn article_view(
        &self,
        view: ArticleView,
        navigation: NavigationDto,
    ) -> ApplicationResult<ArticleViewDto> {
        let ArticleView {
            article,
            related,
            display_tags,
        } = view;

        let comments = self.comments.load(&article.id).await?;
        let share = ShareLinks::for_article(&self.site_url, &article);
        let body = article.content.clone().map(|content| ArticleBodyDto {
            article_id: article.id.to_string(),
            content,
            fallback: false,
        });

        Ok(ArticleViewDto {
            navigation,
            tags: display_tags
                .iter()
                .map(|tag| TagOptionDto::new(tag, None))
                .collect(),
            related: ArticleCardDto::list(related, None),
            share: share.into(),
            comments: comments.into_iter().map(Into::into).collect(),
            body,
            back: NavigationTarget::home().into(),
            article: article.into(),
        })
    }
}

fn home_view(view: HomeView, navigation: &NavigationState, nav_dto: NavigationDto) -> HomeViewDto {
    let search = navigation.search.as_deref();
    let empty = view.is_empty();
    let HomeView {
        title,
        hero,
        list,
        editors_picks,
        filtered_count,
    } = view;

    HomeViewDto {
        navigation: nav_dto,
        title,
        hero: hero.map(|hero| HeroDto {
            featured: ArticleCardDto::new(hero.featured, search),
            secondary: ArticleCardDto::list(hero.secondary, search),
        }),
        articles: ArticleCardDto::list(list, search),
        editors_picks: ArticleCardDto::list(editors_picks, None),
        result_count: filtered_count,
        empty_message: empty.then(|| EMPTY_FEED_MESSAGE.to_string()),
        clear_filters: (empty || navigation.is_filtered())
            .then(|| NavigationTarget::home().into()),
    }
}
