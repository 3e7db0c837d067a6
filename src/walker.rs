use crate::auth::fetch_access_code;
use crate::config::WalkerConfig;
use crate::error::WalkError;
use crate::http::HttpClient;
use crate::login::exchange_token;
use crate::payload::StepReport;
use crate::settings::Settings;
use crate::steps::{submit_steps, StepResponse};
use log::*;

/// Runs access code, login and step submission in order. The first failure
/// ends the run.
pub struct Walker {
    config: WalkerConfig,
    settings: Settings,
}

impl Walker {
    pub fn new(config: WalkerConfig) -> Self {
        Walker::with_settings(config, Settings::default())
    }

    pub fn with_settings(config: WalkerConfig, settings: Settings) -> Self {
        Walker { config, settings }
    }

    pub fn run(&self) -> Result<StepResponse, WalkError> {
        let c = HttpClient::new(&self.settings)?;
        let creds = &self.config.credentials;
        info!("walking {} steps for {}", self.config.step, creds.user);

        let code = fetch_access_code(&c, &self.settings, creds)?;
        let token = exchange_token(&c, &self.settings, &code, creds.platform())?;
        let report = StepReport::today(self.config.step.as_str());
        submit_steps(&c, &self.settings, &token, &report)
    }
}
