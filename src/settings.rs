// Fixed values the vendor's endpoints expect from the iOS Mi Fit app.

use std::time::Duration;

pub const AUTH_BASE_URL: &str = "https://api-user.huami.com";
pub const LOGIN_URL: &str = "https://account.huami.com/v2/client/login";
pub const DATA_BASE_URL: &str = "https://api-mifit-cn.huami.com";

pub const USER_AGENT: &str = "MiFit/4.6.0 (iPhone; iOS 14.0.1; Scale/2.00)";

pub const CLIENT_ID: &str = "HuaMi";
pub const REDIRECT_URI: &str = "https://s3-us-west-2.amazonaws.com/hm-registration/successsignin.html";

pub const APP_NAME: &str = "com.xiaomi.hm.health";
pub const APP_VERSION: &str = "4.6.0";
pub const COUNTRY_CODE: &str = "CN";
pub const DEVICE_ID: &str = "2C8B4939-0CCD-4E94-8CBA-CB8EA6E613A1";
pub const DEVICE_MODEL: &str = "phone";
pub const GRANT_TYPE: &str = "access_token";

pub const PHONE_PREFIX: &str = "+86";

pub const LAST_SYNC_DATA_TIME: &str = "1597306380";
pub const LAST_DEVICE_ID: &str = "DA932FFFFE8888E8";
pub const DEVICE_TYPE: &str = "0";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything the workflow sends that is not supplied by the user.
///
/// `Default` gives the production values; tests swap the base URLs for a
/// local server.
#[derive(Debug, Clone)]
pub struct Settings {
    pub auth_base_url: String,
    pub login_url: String,
    pub data_base_url: String,
    pub user_agent: String,
    pub client_id: String,
    pub redirect_uri: String,
    pub app_name: String,
    pub app_version: String,
    pub country_code: String,
    pub device_id: String,
    pub device_model: String,
    pub grant_type: String,
    pub phone_prefix: String,
    pub last_sync_data_time: String,
    pub last_device_id: String,
    pub device_type: String,
    pub timeout: Option<Duration>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            auth_base_url: AUTH_BASE_URL.to_string(),
            login_url: LOGIN_URL.to_string(),
            data_base_url: DATA_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            client_id: CLIENT_ID.to_string(),
            redirect_uri: REDIRECT_URI.to_string(),
            app_name: APP_NAME.to_string(),
            app_version: APP_VERSION.to_string(),
            country_code: COUNTRY_CODE.to_string(),
            device_id: DEVICE_ID.to_string(),
            device_model: DEVICE_MODEL.to_string(),
            grant_type: GRANT_TYPE.to_string(),
            phone_prefix: PHONE_PREFIX.to_string(),
            last_sync_data_time: LAST_SYNC_DATA_TIME.to_string(),
            last_device_id: LAST_DEVICE_ID.to_string(),
            device_type: DEVICE_TYPE.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl Settings {
    /// Points all three endpoints at `base`, e.g. a mock server.
    pub fn with_base_url(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Settings {
            auth_base_url: base.to_string(),
            login_url: format!("{}/v2/client/login", base),
            data_base_url: base.to_string(),
            ..Settings::default()
        }
    }

    pub fn tokens_url(&self, registration_id: &str) -> String {
        format!(
            "{}/registrations/{}/tokens",
            self.auth_base_url.trim_end_matches('/'),
            registration_id
        )
    }

    pub fn band_data_url(&self, unix_secs: i64) -> String {
        format!(
            "{}/v1/data/band_data.json?&t={}",
            self.data_base_url.trim_end_matches('/'),
            unix_secs
        )
    }
}
