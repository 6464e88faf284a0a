//! Feature-gated structured logging.
//!
//! Events are emitted through `tracing` only when the `tracing` feature is
//! enabled; otherwise the macro expands to an empty block.

/// Emits a `tracing` event at the given level when the `tracing` feature is on.
///
/// ```ignore
/// trace_event!(trace, parent, child, "merged sets");
/// ```
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        ::tracing::$level!($($arg)+);
    }};
}

pub(crate) use trace_event;
