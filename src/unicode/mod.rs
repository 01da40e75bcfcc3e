//! Unicode utilities for grapheme handling, display width and input cleanup.

mod grapheme;
mod sanitize;
mod width;

pub use grapheme::{Cluster, clusters, prefix_width};
pub use sanitize::sanitize;
pub use width::{WidthMethod, display_width_with_method};
