// src/application/dto/navigation.rs
use crate::domain::article::CategoryFilter;
use crate::domain::navigation::{INDUSTRY_FOCUS_TAGS, NavigationState, NavigationTarget, Segment};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NavigationTargetDto {
    pub location: String,
    pub scroll_to_top: bool,
}

impl From<NavigationTarget> for NavigationTargetDto {
    fn from(target: NavigationTarget) -> Self {
        Self {
            location: target.location,
            scroll_to_top: target.scroll_to_top,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryOptionDto {
    pub label: String,
    pub active: bool,
    pub target: NavigationTargetDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TagOptionDto {
    pub tag: String,
    pub active: bool,
    pub target: NavigationTargetDto,
}

impl TagOptionDto {
    pub fn new(tag: &str, active_tag: Option<&str>) -> Self {
        Self {
            tag: tag.to_string(),
            active: active_tag == Some(tag),
            target: NavigationTarget::tag(tag).into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HighlightSegmentDto {
    pub text: String,
    pub highlighted: bool,
}

impl From<Segment> for HighlightSegmentDto {
    fn from(segment: Segment) -> Self {
        Self {
            text: segment.text,
            highlighted: segment.highlighted,
        }
    }
}

/// Header, filter bar and sidebar state shared by every page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NavigationDto {
    pub category: String,
    #[serde(default)]
    pub tag: Option<String>,
    pub search: String,
    pub categories: Vec<CategoryOptionDto>,
    pub industry_tags: Vec<TagOptionDto>,
    pub home: NavigationTargetDto,
    pub team: NavigationTargetDto,
}

impl From<&NavigationState> for NavigationDto {
    fn from(state: &NavigationState) -> Self {
        let categories = CategoryFilter::options()
            .map(|option| CategoryOptionDto {
                label: option.label().to_string(),
                active: option == state.category,
                target: NavigationTarget::category(option).into(),
            })
            .collect();

        let industry_tags = INDUSTRY_FOCUS_TAGS
            .iter()
            .map(|tag| TagOptionDto::new(tag, state.tag.as_deref()))
            .collect();

        Self {
            category: state.category.label().to_string(),
            tag: state.tag.clone(),
            search: state.search.clone().unwrap_or_default(),
            categories,
            industry_tags,
            home: NavigationTarget::home().into(),
            team: NavigationTarget::team().into(),
        }
    }
}
