//! # atlasfold Core Library
//!
//! A typed client for the ESM Metagenomic Atlas structure-prediction API. Folding
//! and rendering happen elsewhere; this crate turns user intents into API calls
//! and API payloads into typed values.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Stateless value objects (`Sequence`, `ProteinId`,
//!   `StructurePayload`, `EmbeddingVector`), payload decoders and the PDB confidence
//!   extractor.
//!
//! - **[`engine`]: The Plumbing.** Client configuration, the endpoint catalogue, the
//!   `Transport` seam with its `reqwest`-backed implementation, error types and
//!   progress reporting.
//!
//! - **[`workflows`]: The Public API.** The presentation dispatcher that maps each
//!   user action to a request/decode sequence and hands the complete outcome to a
//!   `DisplaySurface`.

pub mod core;
pub mod engine;
pub mod workflows;
