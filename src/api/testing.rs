use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;

use super::transport::{HttpRequest, HttpResponse, Transport};
use crate::error::{Error, Result};

/// Transport double that records every request and answers with a canned
/// status and body.
pub(crate) struct StubTransport {
    status: StatusCode,
    body: String,
    reject_errors: bool,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    pub(crate) fn ok(body: &str) -> Self {
        Self::with_status(StatusCode::OK, body)
    }

    pub(crate) fn with_status(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            reject_errors: true,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Hands every status back as `Ok`, like a transport that leaves status
    /// handling to its caller.
    pub(crate) fn passing_status(status: StatusCode, body: &str) -> Self {
        Self {
            reject_errors: false,
            ..Self::with_status(status, body)
        }
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last_request(&self) -> HttpRequest {
        self.requests().pop().expect("no request was sent")
    }

    pub(crate) fn last_body(&self) -> serde_json::Value {
        serde_json::from_slice(&self.last_request().body).unwrap()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse<Vec<u8>>> {
        self.requests.lock().unwrap().push(request);
        if self.reject_errors && !self.status.is_success() {
            return Err(Error::Status {
                status: self.status,
                body: self.body.clone(),
            });
        }
        Ok(HttpResponse {
            data: self.body.clone().into_bytes(),
            status: self.status,
            headers: HeaderMap::new(),
        })
    }
}
