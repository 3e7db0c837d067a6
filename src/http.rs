use crate::error::{Stage, WalkError};
use crate::settings::Settings;
use log::*;
use reqwest::blocking::Client;
use reqwest::header::LOCATION;
use reqwest::redirect;
use reqwest::{Method, StatusCode, Url};

pub type Header<'a> = (&'a str, &'a str);

#[derive(Debug)]
pub struct HttpResult {
    pub status: StatusCode,
    pub body: Vec<u8>,
    /// The `Location` header, resolved against the request URL.
    pub location: Option<Url>,
}

impl HttpResult {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Blocking client shared by every step of a run. Redirects are never
/// followed: the auth step reads the access code off the redirect target.
pub struct HttpClient {
    c: Client,
}

impl HttpClient {
    pub fn new(settings: &Settings) -> Result<Self, WalkError> {
        let mut builder = Client::builder()
            .redirect(redirect::Policy::none())
            .user_agent(settings.user_agent.as_str());
        if let Some(t) = settings.timeout {
            builder = builder.timeout(t);
        }
        let c = builder.build().map_err(WalkError::Client)?;
        Ok(HttpClient { c })
    }

    /// Sends `form` url-encoded. Any status is returned as-is; callers decide
    /// what a usable response looks like.
    pub fn send(
        &self,
        stage: Stage,
        method: Method,
        url: &str,
        form: &[Header],
        headers: &[Header],
    ) -> Result<HttpResult, WalkError> {
        let mut req = self.c.request(method, url).form(form);
        for (k, v) in headers {
            req = req.header(*k, *v);
        }
        let req = req
            .build()
            .map_err(|source| WalkError::Request { stage, source })?;

        debug!("{}: {} {}", stage, req.method(), req.url());
        let rsp = self
            .c
            .execute(req)
            .map_err(|source| WalkError::Transport { stage, source })?;

        let status = rsp.status();
        let location = rsp
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|l| rsp.url().join(l).ok());
        let body = rsp
            .bytes()
            .map_err(|source| WalkError::Transport { stage, source })?
            .to_vec();
        debug!("{}: status {}, {} bytes", stage, status, body.len());

        Ok(HttpResult {
            status,
            body,
            location,
        })
    }
}
