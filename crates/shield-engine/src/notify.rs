//! # Notification Sink
//!
//! Best-effort publication of domain events for real-time UI refresh.
//! The engine assumes no delivery guarantee: a WebSocket layer (outside
//! this workspace) subscribes to topics and forwards payloads to
//! connected clients; if nothing is listening, publishes vanish.
//!
//! Engine code logs and swallows publish failures — notification loss
//! never fails the operation that produced the event.

use dashmap::DashMap;
use thiserror::Error;

use shield_core::EmployeeId;

/// The per-employee topic score and review updates are published on.
pub fn employee_topic(id: EmployeeId) -> String {
    format!("employee:{id}")
}

/// Errors raised when publishing to a notification sink.
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The sink rejected the publish.
    #[error("publish to {topic:?} failed: {reason}")]
    PublishFailed {
        /// Target topic.
        topic: String,
        /// Sink-specific reason.
        reason: String,
    },
}

/// A best-effort publish/subscribe sink.
pub trait NotificationSink: Send + Sync {
    /// Publish a payload on a topic. Delivery is not guaranteed.
    fn publish(&self, topic: &str, payload: serde_json::Value) -> Result<(), NotifyError>;
}

/// Publish a payload, swallowing sink failures.
pub fn publish_best_effort(sink: &dyn NotificationSink, topic: &str, payload: serde_json::Value) {
    if let Err(e) = sink.publish(topic, payload) {
        tracing::warn!(error = %e, topic, "notification publish failed; continuing");
    }
}

/// In-memory [`NotificationSink`] that retains published payloads per
/// topic. Stands in for the WebSocket fan-out in development and lets
/// tests assert on what was published.
#[derive(Default)]
pub struct MemoryNotifier {
    topics: DashMap<String, Vec<serde_json::Value>>,
}

impl MemoryNotifier {
    /// Create an empty notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Payloads published on a topic, oldest first.
    pub fn published(&self, topic: &str) -> Vec<serde_json::Value> {
        self.topics
            .get(topic)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }
}

impl NotificationSink for MemoryNotifier {
    fn publish(&self, topic: &str, payload: serde_json::Value) -> Result<(), NotifyError> {
        self.topics.entry(topic.to_string()).or_default().push(payload);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn published_payloads_are_recorded_per_topic() {
        let notifier = MemoryNotifier::new();
        let employee = EmployeeId::new();
        let topic = employee_topic(employee);

        notifier.publish(&topic, json!({"event": "review_update"})).unwrap();
        notifier.publish(&topic, json!({"event": "score_update"})).unwrap();
        notifier.publish("employee:other", json!({"event": "noise"})).unwrap();

        let seen = notifier.published(&topic);
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0]["event"], "review_update");
    }

    #[test]
    fn unknown_topic_is_empty() {
        let notifier = MemoryNotifier::new();
        assert!(notifier.published("employee:nobody").is_empty());
    }
}
