//! Loading graphs from edge-list files.
//!
//! [`source`] contains the delimited edge-list loader, [`datasets`] the
//! registry of known dataset files and [`example`] small bundled graphs
//! that need no data files at all.

pub mod datasets;
pub mod example;
pub mod source;
