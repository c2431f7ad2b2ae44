//! # Update Subject
//!
//! Ordered, deduplicated subscriber list with synchronous fan-out.
//!
//! Delivery is best-effort: a failing subscriber is logged and skipped, the
//! remaining subscribers still run, and the committed write is untouched.

use std::fmt;
use std::sync::Arc;

use super::errors::NotifyResult;
use super::event::SectionUpdateEvent;

/// Anything that wants to hear about section updates
pub trait ContentSubscriber: Send + Sync {
    /// Handle one event
    fn update(&self, event: &SectionUpdateEvent) -> NotifyResult<()>;

    /// Stable identity used for deduplication and removal.
    ///
    /// Subscribers without one are compared by pointer.
    fn identity(&self) -> Option<&str> {
        None
    }
}

/// Result of publishing one event
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PublishReport {
    /// Subscribers that handled the event
    pub delivered: usize,
    /// Subscribers that returned an error
    pub failed: usize,
}

/// Fan-out list of subscribers
#[derive(Default)]
pub struct ContentUpdateSubject {
    subscribers: Vec<Arc<dyn ContentSubscriber>>,
}

impl fmt::Debug for ContentUpdateSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentUpdateSubject")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

fn same_subscriber(a: &Arc<dyn ContentSubscriber>, b: &Arc<dyn ContentSubscriber>) -> bool {
    match (a.identity(), b.identity()) {
        (Some(x), Some(y)) => x == y,
        _ => Arc::ptr_eq(a, b),
    }
}

impl ContentUpdateSubject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a subscriber at the end of the list.
    ///
    /// Returns false if an equal subscriber is already present.
    pub fn subscribe(&mut self, subscriber: Arc<dyn ContentSubscriber>) -> bool {
        if self.subscribers.iter().any(|s| same_subscriber(s, &subscriber)) {
            return false;
        }
        self.subscribers.push(subscriber);
        true
    }

    /// Remove a subscriber. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, subscriber: &Arc<dyn ContentSubscriber>) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| !same_subscriber(s, subscriber));
        self.subscribers.len() != before
    }

    /// Deliver `event` to every subscriber in subscription order
    pub fn publish(&self, event: &SectionUpdateEvent) -> PublishReport {
        let mut report = PublishReport::default();

        for subscriber in &self.subscribers {
            match subscriber.update(event) {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    report.failed += 1;
                    tracing::warn!(
                        subscriber = subscriber.identity().unwrap_or("anonymous"),
                        section_id = %event.section_id,
                        language = %event.language,
                        error = %e,
                        "section update subscriber failed"
                    );
                }
            }
        }

        report
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}
