use crate::auth::AccessCode;
use crate::config::Platform;
use crate::error::{Stage, WalkError};
use crate::http::HttpClient;
use crate::settings::Settings;
use log::*;
use reqwest::Method;
use serde::Deserialize;

/// Session credentials returned by the login endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Token {
    pub token_info: TokenInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenInfo {
    #[serde(default)]
    pub login_token: String,
    pub app_token: String,
    pub user_id: String,
}

impl Token {
    pub fn app_token(&self) -> &str {
        &self.token_info.app_token
    }

    pub fn user_id(&self) -> &str {
        &self.token_info.user_id
    }

    fn validate(self) -> Result<Self, WalkError> {
        if self.token_info.app_token.is_empty() {
            return Err(WalkError::MissingField {
                stage: Stage::Login,
                field: "token_info.app_token",
            });
        }
        if self.token_info.user_id.is_empty() {
            return Err(WalkError::MissingField {
                stage: Stage::Login,
                field: "token_info.user_id",
            });
        }
        Ok(self)
    }
}

pub fn exchange_token(
    c: &HttpClient,
    settings: &Settings,
    code: &AccessCode,
    platform: Platform,
) -> Result<Token, WalkError> {
    let form = [
        ("app_name", settings.app_name.as_str()),
        ("app_version", settings.app_version.as_str()),
        ("code", code.as_str()),
        ("country_code", settings.country_code.as_str()),
        ("device_id", settings.device_id.as_str()),
        ("device_model", settings.device_model.as_str()),
        ("grant_type", settings.grant_type.as_str()),
        ("third_name", platform.third_name()),
    ];

    let rsp = c.send(Stage::Login, Method::POST, &settings.login_url, &form, &[])?;
    let token = parse_token(&rsp.body)?;
    info!("logged in as user {}", token.user_id());
    Ok(token)
}

fn parse_token(body: &[u8]) -> Result<Token, WalkError> {
    let token: Token = serde_json::from_slice(body).map_err(|source| WalkError::Decode {
        stage: Stage::Login,
        body: String::from_utf8_lossy(body).into_owned(),
        source,
    })?;
    token.validate()
}
