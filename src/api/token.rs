use serde::{Deserialize, Serialize};
use validator::Validate;

/// `POST /token/`
#[derive(Debug, Deserialize, Validate)]
pub struct TokenRequest {
    #[validate(required(message = "This field is required."), custom(function = "crate::api::not_blank"))]
    pub username: Option<String>,

    #[validate(required(message = "This field is required."), custom(function = "crate::api::not_blank"))]
    pub password: Option<String>,
}

/// `POST /token/refresh/`
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshRequest {
    #[validate(required(message = "This field is required."), custom(function = "crate::api::not_blank"))]
    pub refresh: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AccessToken {
    pub access: String,
}
