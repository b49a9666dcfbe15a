use std::sync::Arc;

use folio_extern_contracts::relay::{
    RelayApiService, RelayRequest, RelaySendError, RelaySendResponse,
};
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::HttpClient;

const SUBMIT_ENDPOINT: &str = "https://api.web3forms.com/submit";

#[derive(Debug, Clone)]
pub struct RelayApiServiceImpl {
    config: RelayApiServiceConfig,
    client: HttpClient,
}

impl RelayApiServiceImpl {
    pub fn new(config: RelayApiServiceConfig) -> Self {
        Self {
            config,
            client: HttpClient::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RelayApiServiceConfig {
    submit_endpoint: Arc<Url>,
}

impl RelayApiServiceConfig {
    pub fn new(submit_endpoint_override: Option<Url>) -> Self {
        Self {
            submit_endpoint: submit_endpoint_override
                .unwrap_or_else(|| SUBMIT_ENDPOINT.parse().unwrap())
                .into(),
        }
    }
}

impl RelayApiService for RelayApiServiceImpl {
    async fn send(
        &self,
        request: RelayRequest,
        access_key: &str,
    ) -> Result<RelaySendResponse, RelaySendError> {
        let response = self
            .client
            .post((*self.config.submit_endpoint).clone())
            .header(ACCEPT, "application/json")
            .json(&SubmitRequest {
                access_key,
                name: request.message.name.as_str(),
                email: request.message.email.as_str(),
                message: request.message.body.as_str(),
                subject: &request.subject,
            })
            .send()
            .await
            .map_err(|err| RelaySendError::Network(err.into()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelaySendError::Status(status.as_u16()));
        }

        response
            .json::<SubmitResponse>()
            .await
            .map(Into::into)
            .map_err(|err| RelaySendError::MalformedResponse(err.into()))
    }
}

#[derive(Serialize)]
struct SubmitRequest<'a> {
    access_key: &'a str,
    name: &'a str,
    email: &'a str,
    message: &'a str,
    subject: &'a str,
}

#[derive(Deserialize)]
struct SubmitResponse {
    success: bool,
    message: Option<String>,
}

impl From<SubmitResponse> for RelaySendResponse {
    fn from(value: SubmitResponse) -> Self {
        Self {
            success: value.success,
            message: value.message,
        }
    }
}
