use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArticleId(String);

impl ArticleId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::InvalidArticle("id cannot be empty".into()));
        }
        Ok(Self(value))
    }

    /// Build `<prefix>-<index>`, which is never empty.
    pub fn sequenced(prefix: &str, index: usize) -> Self {
        Self(format!("{prefix}-{index}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleId> for String {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

/// Editorial section an article belongs to.
///
/// The "All" filter sentinel is deliberately not a variant here; see
/// [`CategoryFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    AirFreight,
    OceanFreight,
    SupplyChain,
    MarketInsight,
    Regulations,
}

impl Category {
    pub const ALL: [Self; 5] = [
        Self::AirFreight,
        Self::OceanFreight,
        Self::SupplyChain,
        Self::MarketInsight,
        Self::Regulations,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::AirFreight => "Air Freight",
            Self::OceanFreight => "Ocean Freight",
            Self::SupplyChain => "Supply Chain",
            Self::MarketInsight => "Market Insight",
            Self::Regulations => "Regulations",
        }
    }

    /// Exact label match, as the labels appear in URLs and provider payloads.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.label() == value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::InvalidArticle(format!("unknown category `{s}`")))
    }
}

/// Category selection in the feed. `All` disables category filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "All";

    /// Missing or unrecognised values fall back to `All`.
    pub fn from_param(value: Option<&str>) -> Self {
        value.and_then(Category::parse).map_or(Self::All, Self::Only)
    }

    pub fn options() -> impl Iterator<Item = Self> {
        std::iter::once(Self::All).chain(Category::ALL.into_iter().map(Self::Only))
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => Self::ALL_LABEL,
            Self::Only(category) => category.label(),
        }
    }

    pub const fn is_all(self) -> bool {
        matches!(self, Self::All)
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
