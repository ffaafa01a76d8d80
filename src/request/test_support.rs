//! In-memory transport for unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use serde_json::Value;

use crate::clients::{ApiError, Headers, HttpMethod, Params, RequestOptions, Transport};

/// One call observed by [`ScriptedTransport`].
#[derive(Clone, Debug)]
pub struct RecordedCall {
    pub params: Params,
    pub method: HttpMethod,
    pub endpoint: String,
    pub headers: Headers,
    pub options: RequestOptions,
    pub file_upload: bool,
}

/// Replies to calls with pre-scripted outcomes, in order, and records
/// every call it receives.
#[derive(Debug)]
pub struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Result<Value, ApiError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new(outcomes: Vec<Result<Value, ApiError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn reply(
        &self,
        params: &Params,
        method: HttpMethod,
        endpoint: &str,
        headers: &Headers,
        options: &RequestOptions,
        file_upload: bool,
    ) -> Result<Value, ApiError> {
        self.calls.lock().unwrap().push(RecordedCall {
            params: params.clone(),
            method,
            endpoint: endpoint.to_string(),
            headers: headers.clone(),
            options: options.clone(),
            file_upload,
        });

        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("transport called more often than scripted")
    }
}

impl Transport for ScriptedTransport {
    async fn request(
        &self,
        params: &Params,
        method: HttpMethod,
        endpoint: &str,
        headers: &Headers,
        options: &RequestOptions,
    ) -> Result<Value, ApiError> {
        self.reply(params, method, endpoint, headers, options, false)
    }

    async fn request_file_upload(
        &self,
        params: &Params,
        method: HttpMethod,
        endpoint: &str,
        headers: &Headers,
        options: &RequestOptions,
    ) -> Result<Value, ApiError> {
        self.reply(params, method, endpoint, headers, options, true)
    }
}

/// Builds a list payload with the given item ids.
pub fn list_payload(ids: &[&str], has_more: bool) -> Value {
    let data: Vec<Value> = ids.iter().map(|id| serde_json::json!({ "id": id })).collect();
    serde_json::json!({
        "object": "list",
        "data": data,
        "has_more": has_more,
        "url": "/v1/ignored"
    })
}
