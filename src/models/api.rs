/// A registered API descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct Api {
    pub id: String,
    pub name: String,
    pub description: String,
    pub base_url: String,
    pub version: String,
    pub owner_id: String,
    pub documentation_url: Option<String>,
    pub tags: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Fields supplied when registering or updating an API
#[derive(Debug, Clone)]
pub struct ApiInput {
    pub name: String,
    pub description: String,
    pub base_url: String,
    pub version: String,
    pub owner_id: String,
    pub documentation_url: Option<String>,
    pub tags: Vec<String>,
}
