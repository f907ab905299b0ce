use crate::models::EmailAddress;

#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub email: EmailAddress,
    pub name: String,
    pub subject: String,
    pub message: String,
    pub company: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewsletterSubscription {
    pub email: EmailAddress,
}

#[derive(Debug, Clone)]
pub struct TrialWaitlistEntry {
    pub email: EmailAddress,
    pub full_name: String,
    pub company: Option<String>,
    pub selected_plan: Option<String>,
}
