//! orgtree: strictly-typed organization hierarchies behind an HTTP API
//!
//! Hierarchies are rooted trees with a fixed level chain
//! (ROOT → FRANCHISE → REGION → STORE). The crate is layered:
//!
//! - [`domain`]: entities, pure validation, business-rule errors
//! - [`application`]: the in-memory hierarchy store
//! - [`server`]: the axum HTTP adapter
//! - [`config`] / [`cli`]: settings and argument parsing

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod server;
pub mod util;
