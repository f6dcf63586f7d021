// src/application/dto/views.rs
use crate::domain::team::TeamMember;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{
    articles::{ArticleBodyDto, ArticleCardDto, ArticleDto, ShareLinksDto},
    comments::CommentDto,
    navigation::{NavigationDto, NavigationTargetDto, TagOptionDto},
};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoadingViewDto {
    pub navigation: NavigationDto,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HeroDto {
    pub featured: ArticleCardDto,
    pub secondary: Vec<ArticleCardDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HomeViewDto {
    pub navigation: NavigationDto,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<HeroDto>,
    pub articles: Vec<ArticleCardDto>,
    pub editors_picks: Vec<ArticleCardDto>,
    pub result_count: usize,
    /// Shown instead of the list when nothing matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<String>,
    /// Clears every filter; present only while filtering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clear_filters: Option<NavigationTargetDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TeamMemberDto {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub image_url: String,
}

impl From<&TeamMember> for TeamMemberDto {
    fn from(member: &TeamMember) -> Self {
        Self {
            name: member.name.to_string(),
            role: member.role.to_string(),
            bio: member.bio.to_string(),
            image_url: member.image_url.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamViewDto {
    pub navigation: NavigationDto,
    pub members: Vec<TeamMemberDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleViewDto {
    pub navigation: NavigationDto,
    pub article: ArticleDto,
    pub tags: Vec<TagOptionDto>,
    pub related: Vec<ArticleCardDto>,
    pub share: ShareLinksDto,
    pub comments: Vec<CommentDto>,
    /// Present when the body was already generated for this article.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<ArticleBodyDto>,
    pub back: NavigationTargetDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotFoundViewDto {
    pub navigation: NavigationDto,
    pub article_id: String,
    pub message: String,
    pub back: NavigationTargetDto,
}

/// Whole-page state for one location.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewDto {
    Loading(LoadingViewDto),
    Home(HomeViewDto),
    Team(TeamViewDto),
    Article(Box<ArticleViewDto>),
    NotFound(NotFoundViewDto),
}
