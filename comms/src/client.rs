use log::debug;
use reqwest::{Client, RequestBuilder, header::USER_AGENT};
use serde::Serialize;

use crate::{
    dataset::parse_dataset,
    error::Result,
    msg::{Fingerprint, Input, Outcome, Sample, SessionId},
    service::ScoringService,
};

pub const DEFAULT_BASE_URL: &str = "http://pms.zelros.com";
const DEFAULT_USER_AGENT: &str = "zelros";
const DEFAULT_PREPARE_SCORE: u32 = 200;

const DATASET_PATH: &str = "/ml/dataset/";
const INPUT_PATH: &str = "/ml/";
const PEOPLE_PATH: &str = "/people";
const FINGERPRINT_PATH: &str = "/fingerprint";
const PREPARE_PATH: &str = "/prepare";
const SUBMIT_PATH: &str = "/";

/// Connection settings for `HttpClient`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host of the service, without a trailing path.
    pub base_url: String,
    /// Identification header sent on submissions.
    pub user_agent: String,
    /// The fixed value posted on warm up calls.
    pub prepare_score: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            prepare_score: DEFAULT_PREPARE_SCORE,
        }
    }
}

#[derive(Serialize)]
struct SubmitForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    predict: Option<f64>,
}

#[derive(Serialize)]
struct PrepareForm {
    score: u32,
}

/// `ScoringService` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Creates a new `HttpClient`.
    ///
    /// # Arguments
    /// * `config` - Where and how to reach the service.
    ///
    /// # Returns
    /// An error if the underlying client can't be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder().build()?;
        Ok(Self { http, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    pub fn dataset_request(&self, id: &SessionId) -> RequestBuilder {
        self.get(DATASET_PATH, id)
    }

    pub fn input_request(&self, id: &SessionId) -> RequestBuilder {
        self.get(INPUT_PATH, id)
    }

    pub fn people_request(&self, id: &SessionId) -> RequestBuilder {
        self.get(PEOPLE_PATH, id)
    }

    pub fn fingerprint_request(&self, id: &SessionId) -> RequestBuilder {
        self.get(FINGERPRINT_PATH, id)
    }

    pub fn prepare_request(&self, id: &SessionId) -> RequestBuilder {
        self.http
            .post(self.url(PREPARE_PATH))
            .query(&[("id", id.as_str())])
            .form(&PrepareForm {
                score: self.config.prepare_score,
            })
    }

    pub fn submit_request(&self, id: &SessionId, prediction: Option<f64>) -> RequestBuilder {
        self.http
            .post(self.url(SUBMIT_PATH))
            .query(&[("id", id.as_str())])
            .header(USER_AGENT, &self.config.user_agent)
            .form(&SubmitForm {
                predict: prediction,
            })
    }

    fn get(&self, path: &str, id: &SessionId) -> RequestBuilder {
        self.http.get(self.url(path)).query(&[("id", id.as_str())])
    }

    /// Sends the request and reads the whole body, failing on a non success status.
    async fn exchange(req: RequestBuilder) -> Result<Vec<u8>> {
        let res = req.send().await?.error_for_status()?;
        Ok(res.bytes().await?.to_vec())
    }
}

impl ScoringService for HttpClient {
    async fn fetch_dataset(&self, id: &SessionId) -> Result<Vec<Sample>> {
        debug!(id = id.as_str(); "fetching dataset");
        let body = Self::exchange(self.dataset_request(id)).await?;
        parse_dataset(&body)
    }

    async fn fetch_input(&self, id: &SessionId) -> Result<Input> {
        debug!(id = id.as_str(); "fetching input");
        let body = Self::exchange(self.input_request(id)).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn fetch_people(&self, id: &SessionId) -> Result<Vec<u8>> {
        debug!(id = id.as_str(); "fetching people");
        Self::exchange(self.people_request(id)).await
    }

    async fn prime(&self, id: &SessionId) -> Result<()> {
        debug!(id = id.as_str(); "priming session");
        Self::exchange(self.prepare_request(id)).await?;
        Ok(())
    }

    async fn submit(&self, id: &SessionId, prediction: Option<f64>) -> Result<Outcome> {
        debug!(id = id.as_str(), prediction:? = prediction; "submitting");
        let body = Self::exchange(self.submit_request(id, prediction)).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn fetch_fingerprint(&self, id: &SessionId) -> Result<Fingerprint> {
        debug!(id = id.as_str(); "fetching fingerprint");
        let body = Self::exchange(self.fingerprint_request(id)).await?;
        Ok(Fingerprint::new(body))
    }
}
