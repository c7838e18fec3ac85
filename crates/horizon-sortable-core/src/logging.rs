//! Logging facilities for Horizon Sortable.
//!
//! Horizon Sortable uses the `tracing` crate for instrumentation and never
//! installs a subscriber itself. To see logs, install one in your
//! application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_sortable=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core primitives target.
    pub const CORE: &str = "horizon_sortable_core";
    /// Signal system target.
    pub const SIGNAL: &str = "horizon_sortable_core::signal";
    /// Handler composition target.
    pub const COMPOSE: &str = "horizon_sortable_core::compose";
    /// Reorder engine target.
    pub const REORDER: &str = "horizon_sortable_core::reorder";
    /// Sortable store target.
    pub const STORE: &str = "horizon_sortable::store";
    /// Drag lifecycle target.
    pub const ROOT: &str = "horizon_sortable::root";
    /// Accessibility announcement target.
    pub const ANNOUNCE: &str = "horizon_sortable::announce";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_sortable::config";
}

/// A guard that keeps a debug span entered for a drag lifecycle step.
///
/// ```
/// use horizon_sortable_core::logging::LifecycleSpan;
///
/// let _span = LifecycleSpan::new("drag_end");
/// ```
pub struct LifecycleSpan {
    _span: tracing::span::EnteredSpan,
}

impl LifecycleSpan {
    /// Create and enter a span named after the lifecycle step.
    pub fn new(step: &'static str) -> Self {
        let span = tracing::debug_span!(target: targets::ROOT, "drag_lifecycle", step);
        Self {
            _span: span.entered(),
        }
    }
}

impl std::fmt::Debug for LifecycleSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleSpan").finish_non_exhaustive()
    }
}
