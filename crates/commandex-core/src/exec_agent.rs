//! Exec-agent process output events
//!
//! The exec agent pushes JSON-RPC notifications for every chunk of process
//! output. Handlers decode the params and fan them out to subscribers.

use std::fmt::Debug;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{CommandexError, Result};
use crate::events::{EventBus, SubscriptionId};

/// An event the exec agent sends for a running process
pub trait ExecAgentEvent: DeserializeOwned + Debug + Clone + Send + 'static {
    /// JSON-RPC method name
    const METHOD: &'static str;

    fn pid(&self) -> u32;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStdOutEventDto {
    pub pid: u32,
    pub text: String,
    pub time: DateTime<Utc>,
}

impl ExecAgentEvent for ProcessStdOutEventDto {
    const METHOD: &'static str = "process_stdout";

    fn pid(&self) -> u32 {
        self.pid
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStdErrEventDto {
    pub pid: u32,
    pub text: String,
    pub time: DateTime<Utc>,
}

impl ExecAgentEvent for ProcessStdErrEventDto {
    const METHOD: &'static str = "process_stderr";

    fn pid(&self) -> u32 {
        self.pid
    }
}

/// JSON-RPC 2.0 notification envelope
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcNotification {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Decodes `E` notifications and delivers them to subscribers in
/// registration order
#[derive(Debug)]
pub struct ExecAgentEventHandler<E> {
    bus: EventBus<E>,
}

pub type ProcessStdOutEventHandler = ExecAgentEventHandler<ProcessStdOutEventDto>;
pub type ProcessStdErrEventHandler = ExecAgentEventHandler<ProcessStdErrEventDto>;

impl<E: ExecAgentEvent> ExecAgentEventHandler<E> {
    pub fn new() -> Self {
        Self {
            bus: EventBus::new(),
        }
    }

    pub fn method(&self) -> &'static str {
        E::METHOD
    }

    /// Receive every event of this kind
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&E) + Send + 'static,
    {
        self.bus.subscribe(listener)
    }

    /// Receive events for one process only
    pub fn subscribe_to_process<F>(&mut self, pid: u32, mut listener: F) -> SubscriptionId
    where
        F: FnMut(&E) + Send + 'static,
    {
        self.bus.subscribe(move |event: &E| {
            if event.pid() == pid {
                listener(event);
            }
        })
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }

    pub fn handle_notification(&mut self, params: E) {
        debug!(
            method = E::METHOD,
            pid = params.pid(),
            "handling exec agent event"
        );
        self.bus.publish(&params);
    }

    /// # Errors
    ///
    /// Returns `Serialization` if the params do not decode as `E`.
    pub fn handle_notification_json(&mut self, params: serde_json::Value) -> Result<()> {
        let params: E = serde_json::from_value(params)?;
        self.handle_notification(params);
        Ok(())
    }

    /// Handle a raw JSON-RPC notification
    ///
    /// # Errors
    ///
    /// Returns `Serialization` for malformed JSON, a non-2.0 envelope, a
    /// method other than `E::METHOD` or undecodable params.
    pub fn handle_message(&mut self, message: &str) -> Result<()> {
        let notification: JsonRpcNotification = serde_json::from_str(message)?;
        if notification.jsonrpc != "2.0" {
            return Err(CommandexError::Serialization {
                message: format!("unsupported jsonrpc version '{}'", notification.jsonrpc),
            });
        }
        if notification.method != E::METHOD {
            return Err(CommandexError::Serialization {
                message: format!(
                    "expected method '{}', got '{}'",
                    E::METHOD,
                    notification.method
                ),
            });
        }
        self.handle_notification_json(notification.params)
    }
}

impl<E: ExecAgentEvent> Default for ExecAgentEventHandler<E> {
    fn default() -> Self {
        Self::new()
    }
}
