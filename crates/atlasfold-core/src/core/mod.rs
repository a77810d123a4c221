//! # Core Module
//!
//! Request-scoped value objects and the pure functions that produce them from raw
//! API payloads.
//!
//! - **Data Model** ([`models`]) - sequences, protein identifiers, structure payloads,
//!   confidence summaries and embedding vectors
//! - **Payload Decoding** ([`decode`]) - UTF-8 text, JSON values and binary16 arrays
//! - **File Formats** ([`io`]) - PDB parsing for per-residue confidence
//!
//! Nothing in this module performs I/O; every function is total over well-formed
//! input and returns an explicit error otherwise.

pub mod decode;
pub mod io;
pub mod models;
pub(crate) mod utils;
