//! # Engine Module
//!
//! The request plumbing between the dispatcher and the ESM Atlas API.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - base URL, timeout, user agent and TLS policy
//! - **Endpoint Catalogue** ([`endpoints`]) - method, URL and headers for each API call
//! - **HTTP Client Adapter** ([`client`]) - the `Transport` seam and its `reqwest` implementation
//! - **Progress Monitoring** ([`progress`]) - phase events for front ends that draw spinners
//! - **Error Handling** ([`error`]) - transport and dispatch error types
//!
//! One request is sent per user action. There is no retry and no caching: an
//! interactive user re-triggers the action instead.

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod progress;
