use crate::domain::{article::Category, newsletter::Subscription};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionDto {
    pub email: String,
    pub interests: Vec<String>,
    pub subscribed: bool,
    pub message: String,
}

impl From<Subscription> for SubscriptionDto {
    fn from(subscription: Subscription) -> Self {
        Self {
            email: subscription.email,
            interests: subscription
                .interests
                .into_iter()
                .map(|interest| interest.label().to_string())
                .collect(),
            subscribed: true,
            message: "Successfully subscribed! Welcome aboard.".into(),
        }
    }
}

/// Interests currently picked in the sign-up form, in selection order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InterestSelectionDto {
    pub interests: Vec<String>,
}

impl From<Vec<Category>> for InterestSelectionDto {
    fn from(interests: Vec<Category>) -> Self {
        Self {
            interests: interests
                .into_iter()
                .map(|interest| interest.label().to_string())
                .collect(),
        }
    }
}
