use crate::config::Credentials;
use crate::error::{Stage, WalkError};
use crate::http::HttpClient;
use crate::settings::Settings;
use log::*;
use reqwest::{Method, Url};

/// Short-lived code handed out via the registration redirect. Consumed by
/// the login step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessCode(String);

impl AccessCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub fn fetch_access_code(
    c: &HttpClient,
    settings: &Settings,
    credentials: &Credentials,
) -> Result<AccessCode, WalkError> {
    let url = settings.tokens_url(&credentials.registration_id(settings));
    let form = [
        ("client_id", settings.client_id.as_str()),
        ("password", credentials.password.as_str()),
        ("redirect_uri", settings.redirect_uri.as_str()),
        ("token", "access"),
    ];

    let rsp = c.send(Stage::Auth, Method::POST, &url, &form, &[])?;
    let location = rsp.location.ok_or(WalkError::MissingRedirect {
        status: rsp.status.as_u16(),
    })?;

    let code = access_from_location(&location)?;
    info!("obtained access code for {}", credentials.user);
    Ok(code)
}

fn access_from_location(location: &Url) -> Result<AccessCode, WalkError> {
    location
        .query_pairs()
        .find(|(k, _)| k == "access")
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
        .map(AccessCode)
        .ok_or_else(|| WalkError::MissingAccessCode {
            location: location.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_access_parameter() {
        let u = Url::parse(
            "https://s3-us-west-2.amazonaws.com/hm-registration/successsignin.html\
             ?region=us-west-2&access=NQVBQFJ&country_code=CN&expiration=1634000000",
        )
        .unwrap();
        assert_eq!(access_from_location(&u).unwrap().as_str(), "NQVBQFJ");
    }

    #[test]
    fn missing_access_parameter_is_an_error() {
        let u = Url::parse("https://example.com/successsignin.html?error=0106").unwrap();
        match access_from_location(&u) {
            Err(WalkError::MissingAccessCode { location }) => assert!(location.contains("error=0106")),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn empty_access_parameter_is_an_error() {
        let u = Url::parse("https://example.com/successsignin.html?access=").unwrap();
        assert!(matches!(
            access_from_location(&u),
            Err(WalkError::MissingAccessCode { .. })
        ));
    }
}
