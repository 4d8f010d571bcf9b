//! In-memory event bus.
//!
//! Captures every published envelope in order so callers can inspect
//! what the domain emitted.

use async_trait::async_trait;
use std::sync::RwLock;
use tracing::debug;

use crate::domain::foundation::{DomainError, ErrorCode, EventEnvelope};
use crate::ports::EventPublisher;

/// In-memory event bus with captured events for inspection.
///
/// # Example
///
/// ```ignore
/// let bus = Arc::new(InMemoryEventBus::new());
/// bus.publish(envelope).await?;
/// assert!(bus.has_event("rider_profile.calculated.v1"));
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEventBus {
    published: RwLock<Vec<EventEnvelope>>,
}

impl InMemoryEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// All published events, oldest first. Empty if the lock is poisoned.
    pub fn published_events(&self) -> Vec<EventEnvelope> {
        self.published
            .read()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Returns events of a specific type.
    pub fn events_of_type(&self, event_type: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.event_type == event_type)
            .collect()
    }

    /// Returns events for a specific aggregate.
    pub fn events_for_aggregate(&self, aggregate_id: &str) -> Vec<EventEnvelope> {
        self.published_events()
            .into_iter()
            .filter(|e| e.aggregate_id == aggregate_id)
            .collect()
    }

    pub fn event_count(&self) -> usize {
        self.published.read().map(|events| events.len()).unwrap_or(0)
    }

    pub fn has_event(&self, event_type: &str) -> bool {
        self.published
            .read()
            .map(|events| events.iter().any(|e| e.event_type == event_type))
            .unwrap_or(false)
    }

    /// Clears all published events.
    pub fn clear(&self) {
        if let Ok(mut events) = self.published.write() {
            events.clear();
        }
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventBus {
    async fn publish(&self, event: EventEnvelope) -> Result<(), DomainError> {
        debug!(
            event_type = %event.event_type,
            aggregate_id = %event.aggregate_id,
            "event published"
        );
        self.published
            .write()
            .map_err(|_| {
                DomainError::new(ErrorCode::EventPublishFailed, "event bus lock poisoned")
            })?
            .push(event);
        Ok(())
    }

    async fn publish_all(&self, events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        for event in events {
            self.publish(event).await?;
        }
        Ok(())
    }
}
