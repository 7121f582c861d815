//! HTTP transport layer for the web app
//!
//! Holds the axum handlers mounted by [`crate::build_app`].

pub mod handlers;
