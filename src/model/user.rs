use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Email and password supplied to the register and login endpoints.
///
/// Both fields are optional at the wire level so that a missing value can be
/// reported with the status each endpoint requires (400 on register, 401 on login).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, ToSchema)]
pub struct CredentialsDto {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Token issued by a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub user_id: i32,
    pub token: String,
}
