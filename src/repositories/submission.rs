use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{ContactSubmission, NewsletterSubscription, TrialWaitlistEntry};
use crate::services::Generator;

/// Storage boundary for marketing form submissions.
/// Each method returns the identifier assigned to the accepted entry.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    async fn save_contact(&self, submission: ContactSubmission) -> AppResult<String>;

    async fn save_newsletter(&self, subscription: NewsletterSubscription) -> AppResult<String>;

    async fn save_waitlist(&self, entry: TrialWaitlistEntry) -> AppResult<String>;
}

/// Accepts submissions and drops them after logging
#[derive(Clone)]
pub struct DiscardingSubmissionRepository {
    generator: Arc<dyn Generator>,
}

impl DiscardingSubmissionRepository {
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl SubmissionRepository for DiscardingSubmissionRepository {
    async fn save_contact(&self, submission: ContactSubmission) -> AppResult<String> {
        let id = self.generator.id();
        tracing::info!(
            submission_id = %id,
            has_company = submission.company.is_some(),
            "Contact submission accepted"
        );
        Ok(id)
    }

    async fn save_newsletter(&self, _subscription: NewsletterSubscription) -> AppResult<String> {
        let id = self.generator.id();
        tracing::info!(subscription_id = %id, "Newsletter subscription accepted");
        Ok(id)
    }

    async fn save_waitlist(&self, entry: TrialWaitlistEntry) -> AppResult<String> {
        let id = self.generator.id();
        tracing::info!(
            waitlist_id = %id,
            plan = entry.selected_plan.as_deref().unwrap_or("none"),
            "Trial waitlist entry accepted"
        );
        Ok(id)
    }
}
