//! HTTP transport layer for the menu service
//!
//! Provides the external API routing for `/api/menu` and the metadata endpoints.

pub mod handlers;
