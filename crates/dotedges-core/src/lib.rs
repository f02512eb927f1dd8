//! dotedges-core library.
//!
//! Turns dot-style edge listings such as
//!
//! ```text
//! Node0x55d0c8 -> Node0x55d0f0[color=red]
//! ```
//!
//! into a dense numeric edge list (`0 1 red`), numbering nodes in order of
//! first appearance.
//!
//! # Conventions
//!
//! - **Errors**: `thiserror` enums carrying an [`error::ErrorCode`].
//! - **Logging**: `tracing` macros (`info!`, `debug!`, `trace!`).

#![forbid(unsafe_code)]

pub mod convert;
pub mod edge;
pub mod error;
pub mod pattern;
pub mod table;

pub use convert::{ConversionSummary, Converter, convert_file};
pub use edge::{Edge, EdgeList};
pub use error::{ConvertError, EdgeLineError, ErrorCode};
pub use pattern::{EdgeMatch, match_line};
pub use table::{NodeIndex, NodeTable};
