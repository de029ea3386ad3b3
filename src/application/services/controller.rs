//! Controller API service
//!
//! Turns an [`Operation`] into one authenticated HTTP request and decodes the
//! JSON reply. Documents are passed through as untyped [`Value`]s.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{AuthToken, Endpoint, Operation};
use crate::infrastructure::traits::{HttpRequest, HttpTransport};

/// Header the daemon reads the auth token from.
pub const AUTH_HEADER: &str = "X-ZT1-AUTH";

/// Service issuing requests against the controller API.
pub struct ControllerService {
    http: Arc<dyn HttpTransport>,
    base_url: String,
    token: AuthToken,
}

impl ControllerService {
    pub fn new(http: Arc<dyn HttpTransport>, endpoint: &Endpoint, token: AuthToken) -> Self {
        Self {
            http,
            base_url: endpoint.base_url(),
            token,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the request for `op` without sending it.
    pub fn request_for(&self, op: &Operation) -> HttpRequest {
        HttpRequest {
            method: op.method(),
            url: format!("{}{}", self.base_url, op.path()),
            headers: vec![(AUTH_HEADER.to_string(), self.token.as_str().to_string())],
            body: op.body().map(|b| b.to_string()),
        }
    }

    /// Perform `op` and return the decoded response document.
    ///
    /// Non-2xx statuses and bodies that are not JSON (including empty ones) are errors.
    #[instrument(skip(self), fields(method = %op.method(), path = %op.path()))]
    pub fn execute(&self, op: &Operation) -> ApplicationResult<Value> {
        let request = self.request_for(op);
        debug!("execute: {} {}", request.method, request.url);

        let response = self
            .http
            .send(&request)
            .map_err(|source| ApplicationError::Transport {
                method: request.method,
                url: request.url.clone(),
                source,
            })?;

        if !response.is_success() {
            warn!("execute: HTTP {} from {}", response.status, request.url);
            return Err(ApplicationError::HttpStatus {
                method: request.method,
                url: request.url,
                status: response.status,
                body: response.body,
            });
        }

        serde_json::from_str(&response.body).map_err(|source| ApplicationError::Decode {
            url: request.url,
            source,
        })
    }

    pub fn status(&self) -> ApplicationResult<Value> {
        self.execute(&Operation::Status)
    }

    pub fn list_networks(&self) -> ApplicationResult<Value> {
        self.execute(&Operation::ListNetworks)
    }

    pub fn show_network(&self, network_id: &str) -> ApplicationResult<Value> {
        self.execute(&Operation::ShowNetwork {
            network_id: network_id.to_string(),
        })
    }

    pub fn list_members(&self, network_id: &str) -> ApplicationResult<Value> {
        self.execute(&Operation::ListMembers {
            network_id: network_id.to_string(),
        })
    }

    pub fn show_member(&self, network_id: &str, member_id: &str) -> ApplicationResult<Value> {
        self.execute(&Operation::ShowMember {
            network_id: network_id.to_string(),
            member_id: member_id.to_string(),
        })
    }

    pub fn delete_member(&self, network_id: &str, member_id: &str) -> ApplicationResult<Value> {
        self.execute(&Operation::DeleteMember {
            network_id: network_id.to_string(),
            member_id: member_id.to_string(),
        })
    }

    /// Set the member's `authorized` flag to `enable`.
    pub fn authorize_member(
        &self,
        network_id: &str,
        member_id: &str,
        enable: bool,
    ) -> ApplicationResult<Value> {
        self.execute(&Operation::AuthorizeMember {
            network_id: network_id.to_string(),
            member_id: member_id.to_string(),
            enable,
        })
    }
}
