//! Composition of host and internal event handlers.
//!
//! A widget often needs to run its own bookkeeping for an event while still
//! letting the embedding application observe the same event. [`compose`]
//! builds one handler that calls the host's handler first and the internal
//! one second, each with the same event value.
//!
//! A panic inside the host handler is caught and logged; the internal
//! handler still runs so the widget's state stays consistent.
//!
//! ```
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use horizon_sortable_core::compose::{compose, handler};
//!
//! let log = Arc::new(Mutex::new(Vec::new()));
//! let host_log = log.clone();
//! let internal_log = log.clone();
//!
//! let combined = compose(
//!     Some(handler(move |n: &i32| host_log.lock().push(("host", *n)))),
//!     move |n: &i32| internal_log.lock().push(("internal", *n)),
//! );
//! combined(&7);
//! assert_eq!(*log.lock(), vec![("host", 7), ("internal", 7)]);
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

/// A shareable event handler.
pub type Handler<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// Wrap a closure into a [`Handler`].
pub fn handler<E, F>(f: F) -> Handler<E>
where
    F: Fn(&E) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Combine an optional host handler with an internal handler.
///
/// The host handler (if any) runs first, then the internal handler. Both
/// run exactly once per invocation.
pub fn compose<E, F>(user: Option<Handler<E>>, internal: F) -> Handler<E>
where
    E: 'static,
    F: Fn(&E) + Send + Sync + 'static,
{
    Arc::new(move |event: &E| {
        if let Some(user) = &user {
            invoke_isolated(user, event);
        }
        internal(event);
    })
}

/// Run a host handler, containing any panic it raises.
///
/// Returns `false` when the handler panicked.
pub fn invoke_isolated<E>(handler: &Handler<E>, event: &E) -> bool {
    catch_host_panic("event handler", || handler(event)).is_some()
}

/// Run host code, containing any panic it raises.
///
/// A panic is logged at error level with `what` naming the callback and
/// yields `None`. No lock may be held across `f`, since host code is free
/// to call back into the widget.
pub fn catch_host_panic<R, F>(what: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => Some(value),
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "non-string panic payload".to_string());
            tracing::error!(
                target: "horizon_sortable_core::compose",
                callback = what,
                panic = %message,
                "host callback panicked; continuing"
            );
            None
        }
    }
}
