//! Page rendering and payloads for the web app
//!
//! Everything here is pure and independent of the HTTP layer.

pub mod pages;
pub mod status;
