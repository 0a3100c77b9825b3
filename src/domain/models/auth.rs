use serde::{Deserialize, Serialize};

pub const TOKEN_AUDIENCE: &str = "hr-frontend";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub tenant_id: Option<String>,
    pub role: String,
    pub csrf_token: String,
    pub aud: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Serialize)]
pub struct AuthResponse {
    pub csrf_token: String,
    pub user: UserProfile,
}

#[derive(Serialize)]
pub struct UserProfile {
    pub id: String,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub role: String,
    pub tenant_id: Option<String>,
}
