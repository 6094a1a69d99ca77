//! HTTP handler modules for the Toric Scope API.
//!
//! Each sub-module implements thin handlers that parse requests, acquire
//! the store lock, delegate to the `ScopeStore` backend, and return JSON
//! responses. Handlers never touch the filesystem directly.

pub mod meta;
pub mod polytopes;
pub mod texts;
