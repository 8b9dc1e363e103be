//! Webhook handlers for external integrations
//!
//! This module contains webhook endpoint handlers for the Meta platform
//! callbacks the relay subscribes to.
//!
//! ## Modules
//!
//! - [`instagram`] - Instagram Graph API webhook handlers and messaging client

pub mod instagram;
pub mod routes;
