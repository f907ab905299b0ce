use serde_json::{json, Value};

/// A complete API registration body
#[allow(dead_code)]
pub fn api_registration() -> Value {
    json!({
        "name": "Orders API",
        "description": "Order management",
        "base_url": "https://orders.example.com",
        "version": "2.3.1",
        "owner_id": "team-orders",
        "documentation_url": "https://docs.orders.example.com",
        "tags": ["orders", "internal"]
    })
}

#[allow(dead_code)]
pub fn contact_submission() -> Value {
    json!({
        "email": "jane@example.com",
        "name": "Jane Doe",
        "subject": "Pricing",
        "message": "Do you offer annual billing?",
        "company": "Acme"
    })
}

#[allow(dead_code)]
pub fn trial_waitlist_entry() -> Value {
    json!({
        "email": "jane@example.com",
        "full_name": "Jane Doe",
        "company": "Acme",
        "selected_plan": "growth"
    })
}
