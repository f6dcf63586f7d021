// src/domain/newsletter.rs
use crate::domain::article::Category;
use crate::domain::errors::{DomainError, DomainResult};

/// Sections a reader can subscribe to.
pub const NEWSLETTER_INTERESTS: [Category; 4] = [
    Category::AirFreight,
    Category::OceanFreight,
    Category::SupplyChain,
    Category::Regulations,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub email: String,
    pub interests: Vec<Category>,
}

impl Subscription {
    pub fn new(email: &str, interests: Vec<Category>) -> DomainResult<Self> {
        let email = email.trim();
        if email.is_empty() {
            return Err(DomainError::InvalidSubscription("email is required".into()));
        }
        if let Some(unsupported) = interests
            .iter()
            .find(|interest| !NEWSLETTER_INTERESTS.contains(interest))
        {
            return Err(DomainError::InvalidSubscription(format!(
                "{unsupported} is not a newsletter interest"
            )));
        }

        let mut unique = Vec::with_capacity(interests.len());
        for interest in interests {
            if !unique.contains(&interest) {
                unique.push(interest);
            }
        }

        Ok(Self {
            email: email.to_string(),
            interests: unique,
        })
    }
}

/// Add the interest when absent, drop it when present.
pub fn toggle_interest(selected: &mut Vec<Category>, interest: Category) {
    if let Some(position) = selected.iter().position(|current| *current == interest) {
        selected.remove(position);
    } else {
        selected.push(interest);
    }
}
