//! # Server-driven view events
//!
//! The view layer pushes named events with JSON payloads into the editors,
//! and the editors push user intents back the same way. This module holds
//! the envelope and the sink abstraction; transports live elsewhere.

use crate::{CommonError, CommonResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use tokio::sync::mpsc;

/// Intent pushed from the client to the view layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundEvent {
    pub name: String,
    pub payload: serde_json::Value,
}

impl OutboundEvent {
    pub fn new(name: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }

    /// Build an event from any serializable payload
    pub fn from_payload<T: Serialize>(name: impl Into<String>, payload: &T) -> CommonResult<Self> {
        Ok(Self::new(name, serde_json::to_value(payload)?))
    }
}

/// Update pushed from the view layer into the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundEvent {
    pub name: String,
    pub payload: serde_json::Value,
}

impl InboundEvent {
    pub fn new(name: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            name: name.into(),
            payload,
        }
    }

    /// Decode the payload into a typed value, failing on missing fields
    pub fn decode<T: DeserializeOwned>(&self) -> CommonResult<T> {
        Ok(serde_json::from_value(self.payload.clone())?)
    }
}

/// Destination for outbound intents (the `pushEvent` side of a hook)
pub trait EventSink: Send + Sync {
    fn push_event(&self, event: OutboundEvent) -> CommonResult<()>;
}

/// Sink that forwards events over an unbounded channel
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<OutboundEvent>,
}

impl ChannelSink {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<OutboundEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl EventSink for ChannelSink {
    fn push_event(&self, event: OutboundEvent) -> CommonResult<()> {
        self.tx.send(event).map_err(|_| CommonError::SinkClosed)
    }
}

/// Sink that keeps every event in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<OutboundEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far
    pub fn events(&self) -> Vec<OutboundEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn names(&self) -> Vec<String> {
        self.events().into_iter().map(|e| e.name).collect()
    }
}

impl EventSink for RecordingSink {
    fn push_event(&self, event: OutboundEvent) -> CommonResult<()> {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
        Ok(())
    }
}
