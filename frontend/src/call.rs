//! Browser voice calls through the Retell web client.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use log::{error, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::js_sys::{Object, Promise, Reflect};

use crate::services::same_instance;

#[derive(Debug, Error)]
pub enum CallError {
    #[error("voice calls need a backend to issue access tokens")]
    NoBackend,
    #[error("token request failed: {0}")]
    Request(#[from] gloo_net::Error),
    #[error("token endpoint answered with status {0}")]
    Status(u16),
    #[error("call client failed: {0}")]
    Sdk(String),
}

impl From<JsValue> for CallError {
    fn from(value: JsValue) -> Self {
        CallError::Sdk(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub trait CallClient {
    fn start(&self, access_token: &str) -> Result<(), CallError>;
    fn stop(&self);
}

#[wasm_bindgen]
extern "C" {
    type RetellWebClient;

    #[wasm_bindgen(constructor, catch)]
    fn new() -> Result<RetellWebClient, JsValue>;

    #[wasm_bindgen(method, js_name = startCall)]
    fn start_call(this: &RetellWebClient, options: &JsValue) -> Promise;

    #[wasm_bindgen(method, js_name = stopCall)]
    fn stop_call(this: &RetellWebClient);
}

/// Adapter over the `RetellWebClient` global. The SDK object is created on
/// the first call so a missing script only breaks calling.
#[derive(Default)]
pub struct RetellCallClient {
    client: RefCell<Option<RetellWebClient>>,
}

impl CallClient for RetellCallClient {
    fn start(&self, access_token: &str) -> Result<(), CallError> {
        let mut client = self.client.borrow_mut();
        if client.is_none() {
            *client = Some(RetellWebClient::new()?);
        }
        let Some(client) = client.as_ref() else {
            return Err(CallError::Sdk("client not created".to_string()));
        };

        let options = Object::new();
        Reflect::set(&options, &JsValue::from_str("accessToken"), &JsValue::from_str(access_token))?;

        let started = JsFuture::from(client.start_call(&options));
        spawn_local(async move {
            if let Err(e) = started.await {
                error!("Error starting call: {:?}", e);
            }
        });
        Ok(())
    }

    fn stop(&self) {
        if let Some(client) = self.client.borrow().as_ref() {
            client.stop_call();
        }
    }
}

#[derive(Serialize)]
struct CreateWebCallRequest<'a> {
    agent_id: &'a str,
}

#[derive(Deserialize)]
struct CreateWebCallResponse {
    access_token: String,
}

#[derive(Clone)]
pub struct VoiceCall {
    client: Rc<dyn CallClient>,
    backend_url: String,
    agent_id: String,
}

impl PartialEq for VoiceCall {
    fn eq(&self, other: &Self) -> bool {
        same_instance(&self.client, &other.client)
            && self.backend_url == other.backend_url
            && self.agent_id == other.agent_id
    }
}

impl VoiceCall {
    pub fn new(client: Rc<dyn CallClient>, backend_url: &str, agent_id: &str) -> Self {
        Self {
            client,
            backend_url: backend_url.trim_end_matches('/').to_string(),
            agent_id: agent_id.to_string(),
        }
    }

    fn token_endpoint(&self) -> Result<String, CallError> {
        if self.backend_url.is_empty() {
            return Err(CallError::NoBackend);
        }
        Ok(format!("{}/api/create-web-call", self.backend_url))
    }

    /// Asks the backend for a web-call access token, then starts the call.
    pub async fn start(&self) -> Result<(), CallError> {
        let endpoint = self.token_endpoint()?;
        info!("Starting web call...");

        let response = Request::post(&endpoint)
            .json(&CreateWebCallRequest { agent_id: &self.agent_id })?
            .send()
            .await?;
        if !response.ok() {
            return Err(CallError::Status(response.status()));
        }
        let token: CreateWebCallResponse = response.json().await?;

        self.client.start(&token.access_token)
    }

    pub fn stop(&self) {
        self.client.stop();
    }
}
