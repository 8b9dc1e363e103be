//! Instagram webhook integration module
//!
//! This module provides webhook handling for the Instagram Graph API.
//! It includes the HTTP route handlers, the logging-only event processing,
//! and the client for sending outbound messages.
//!
//! ## Submodules
//!
//! - [`routes`] - HTTP endpoint handlers (verification handshake, event
//!   receiver, Meta app lifecycle callbacks)
//! - [`handler`] - Processing of incoming webhook payloads
//! - [`schemas`] - Data structures for incoming webhook payloads
//! - [`outgoing_schemas`] - Data structures for outbound message sends
//! - [`client`] - Graph API client for sending messages

pub mod client;
pub mod handler;
pub mod outgoing_schemas;
pub mod routes;
pub mod schemas;

// Re-export commonly used items for convenience
pub use routes::{data_deletion_request, deauthorize, receive, verify};
