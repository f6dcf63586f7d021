use crate::{
    application::{
        dto::{InterestSelectionDto, SubscriptionDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::Category,
        newsletter::{NEWSLETTER_INTERESTS, Subscription, toggle_interest},
    },
};

pub struct SubscribeCommand {
    pub email: String,
    pub interests: Vec<String>,
}

/// Flip one interest in a not yet submitted selection.
pub struct ToggleInterestCommand {
    pub selected: Vec<String>,
    pub interest: String,
}

/// Acknowledges subscriptions. Nothing is delivered or persisted.
#[derive(Default)]
pub struct NewsletterCommandService;

impl NewsletterCommandService {
    pub fn subscribe(&self, command: SubscribeCommand) -> ApplicationResult<SubscriptionDto> {
        let interests = parse_interests(&command.interests)?;

        let subscription = Subscription::new(&command.email, interests)?;
        tracing::info!(
            interests = subscription.interests.len(),
            "newsletter subscription acknowledged"
        );
        Ok(subscription.into())
    }

    pub fn toggle_interest(
        &self,
        command: ToggleInterestCommand,
    ) -> ApplicationResult<InterestSelectionDto> {
        let mut selected = Vec::with_capacity(command.selected.len() + 1);
        for current in parse_interests(&command.selected)? {
            if !NEWSLETTER_INTERESTS.contains(&current) {
                return Err(not_an_interest(current.label()));
            }
            if !selected.contains(&current) {
                selected.push(current);
            }
        }
        let interest = Category::parse(&command.interest)
            .filter(|interest| NEWSLETTER_INTERESTS.contains(interest))
            .ok_or_else(|| not_an_interest(&command.interest))?;

        toggle_interest(&mut selected, interest);
        Ok(selected.into())
    }
}

fn parse_interests(labels: &[String]) -> ApplicationResult<Vec<Category>> {
    labels
        .iter()
        .map(|label| {
            Category::parse(label)
                .ok_or_else(|| ApplicationError::validation(format!("unknown interest: {label}")))
        })
        .collect()
}

fn not_an_interest(label: &str) -> ApplicationError {
    ApplicationError::validation(format!("{label} is not a newsletter interest"))
}
