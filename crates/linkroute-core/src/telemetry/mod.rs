//! Fire-and-forget telemetry events.
//!
//! The classifier and view models describe what happened as a
//! category / method / object triple and hand it to a [`TelemetrySink`].
//! Delivery is not guaranteed and never affects the caller.

mod events;

pub use events::{event_for_host, EventCategory, EventMethod, EventObject, TelemetryEvent};

use std::sync::Mutex;

/// Receives telemetry events. Implementations must not block.
pub trait TelemetrySink: Send + Sync {
    fn record(&self, event: TelemetryEvent);
}

/// Discards every event.
impl TelemetrySink for () {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Emits each event as a `tracing` record on target `telemetry`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTelemetry;

impl TelemetrySink for TracingTelemetry {
    fn record(&self, event: TelemetryEvent) {
        tracing::info!(
            target: "telemetry",
            category = event.category.as_str(),
            method = event.method.as_str(),
            object = event.object.as_str(),
            extras = ?event.extras,
            "telemetry event"
        );
    }
}

/// Keeps events in memory, in recording order.
#[derive(Debug, Default)]
pub struct MemoryTelemetry {
    events: Mutex<Vec<TelemetryEvent>>,
}

impl MemoryTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn events(&self) -> Vec<TelemetryEvent> {
        match self.events.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.events().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TelemetrySink for MemoryTelemetry {
    fn record(&self, event: TelemetryEvent) {
        match self.events.lock() {
            Ok(mut guard) => guard.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}
