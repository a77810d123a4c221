//! # Workflows Module
//!
//! High-level entry points for front ends.
//!
//! - **Presentation Dispatcher** ([`dispatch`]) - maps each user action to its
//!   request/decode sequence and renders the complete outcome on a
//!   [`dispatch::DisplaySurface`], or a single error banner when any step fails.
//!
//! Actions are independent: each one takes an immutable [`dispatch::Request`] and
//! keeps no state between calls.

pub mod dispatch;
