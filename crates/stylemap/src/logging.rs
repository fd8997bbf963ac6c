//! Tracing integration.
//!
//! The crate emits events through the `tracing` crate and never installs a
//! subscriber itself. Applications opt in with their own subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("stylemap::parser=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter events by stage.
pub mod targets {
    /// Primitive token scanning.
    pub const SCANNER: &str = "stylemap::scanner";
    /// Rule/property state machine.
    pub const PARSER: &str = "stylemap::parser";
    /// Property value interpretation.
    pub const STYLE: &str = "stylemap::style";
}
