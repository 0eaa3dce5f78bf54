//! Constants used throughout the docfeed library.

/// Tracing target prefix used by the library and its default log filter.
pub const LOG_TARGET: &str = "docfeed";

/// Name of the required argument checked by `AnchorMap::add_anchor`.
pub const URI_ARGUMENT: &str = "uri";
