pub mod api;
pub mod common;
pub mod status;
pub mod submission;

pub use api::{
    delete_api, get_api, list_apis, list_health_checks, missing_api_id, register_api,
    update_api, ApiListResponse, ApiResponse, HealthCheckListResponse, HealthCheckResponse,
    MessageResponse, RegisterApiRequest,
};
pub use common::{require_id, AppJson};
pub use status::{
    health, root, service_status, HealthResponse, RootResponse, ServiceState,
    ServiceStatusResponse, SERVICE_NAME, SERVICE_VERSION,
};
pub use submission::{
    join_trial_waitlist, submit_contact, subscribe_newsletter, ContactSubmissionRequest,
    ContactSubmissionResponse, NewsletterSubscriptionRequest, NewsletterSubscriptionResponse,
    TrialWaitlistRequest, TrialWaitlistResponse,
};
