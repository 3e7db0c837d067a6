use crate::error::{Stage, WalkError};
use crate::http::HttpClient;
use crate::login::Token;
use crate::payload::StepReport;
use crate::settings::Settings;
use chrono::Utc;
use log::*;
use reqwest::Method;
use serde::Deserialize;

const SUCCESS_CODE: i64 = 1;
const SUCCESS_MESSAGE: &str = "success";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StepResponse {
    pub code: i64,
    pub message: String,
}

impl StepResponse {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE && self.message == SUCCESS_MESSAGE
    }
}

pub fn submit_steps(
    c: &HttpClient,
    settings: &Settings,
    token: &Token,
    report: &StepReport,
) -> Result<StepResponse, WalkError> {
    let data_json = report.render()?;
    let url = settings.band_data_url(Utc::now().timestamp());
    let form = [
        ("userid", token.user_id()),
        ("last_sync_data_time", settings.last_sync_data_time.as_str()),
        ("device_type", settings.device_type.as_str()),
        ("last_deviceid", settings.last_device_id.as_str()),
        ("data_json", data_json.as_str()),
    ];
    let headers = [("apptoken", token.app_token())];

    let rsp = c.send(Stage::Submit, Method::POST, &url, &form, &headers)?;
    let body = rsp.text();
    debug!("band data response: {}", body);

    let out = check_response(&body)?;
    info!("recorded {} steps for {}", report.step, report.date);
    Ok(out)
}

fn check_response(body: &str) -> Result<StepResponse, WalkError> {
    let rsp: StepResponse = serde_json::from_str(body).map_err(|source| WalkError::Decode {
        stage: Stage::Submit,
        body: body.to_string(),
        source,
    })?;
    if !rsp.is_success() {
        return Err(WalkError::Rejected {
            code: rsp.code,
            message: rsp.message,
            body: body.to_string(),
        });
    }
    Ok(rsp)
}
