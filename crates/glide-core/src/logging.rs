//! Logging facilities for Glide.
//!
//! Glide uses the `tracing` crate for instrumentation. To see logs, install a
//! tracing subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("glide=debug,glide_core=trace")
//!     .init();
//! ```
//!
//! Settled slide transitions are logged at `debug`; drag previews, autoplay
//! ticks and ignored input are logged at `trace`; host failures at `warn`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Timer queue target.
    pub const TIMER: &str = "glide_core::timer";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "glide_core::signal";
    /// Slider controller (index transitions, lifecycle).
    pub const CONTROLLER: &str = "glide::controller";
    /// Pointer drag tracking.
    pub const GESTURE: &str = "glide::gesture";
    /// Autoplay scheduling.
    pub const AUTOPLAY: &str = "glide::autoplay";
    /// Live-region announcements.
    pub const ANNOUNCER: &str = "glide::announcer";
    /// Host surface implementations shipped with Glide.
    pub const HOST: &str = "glide::host";
}

