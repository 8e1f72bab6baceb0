//! Heatmap service library.
//!
//! Loads the temperature variance dataset, renders it with the
//! [`renderer`] crate and either writes the artifacts to disk or serves
//! them over HTTP.

pub mod config;
pub mod fetch;
pub mod handlers;
pub mod output;
pub mod pipeline;
pub mod server;
pub mod state;
