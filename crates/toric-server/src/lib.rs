//! HTTP/JSON API server for the Toric Scope frontend.
//!
//! Exposes the mode-text registry and polytope storage over a REST API.
//! This crate contains the server framework, API schema types, error
//! handling, and route definitions; all filesystem interaction lives in
//! `toric-storage` behind the `ScopeStore` trait.

pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
