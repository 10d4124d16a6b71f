//! Notification sink contract.

/// Destination for user-visible validation warnings.
///
/// Composite validators call [`warning`](NotificationSink::warning) with the
/// first failure's message; how (or whether) it is rendered is the
/// implementor's business. Callers that have nowhere to surface warnings
/// pass `None` instead of a sink — there is no implicit no-op implementation.
pub trait NotificationSink {
    fn warning(&self, message: &str);
}
