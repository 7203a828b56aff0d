use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Wire shape of a successful login. The body carries the bearer token and
/// nothing else; expiry lives inside the token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccessTokenDto {
    pub access_token: String,
}

/// Identity recovered from a verified bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TokenSubject {
    pub user_id: UserId,
}
