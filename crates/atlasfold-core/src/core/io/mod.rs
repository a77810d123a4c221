//! Structure-file parsing.
//!
//! Only the subset of the PDB format needed to read per-residue confidence is
//! interpreted here; geometry and secondary structure are left to the renderer.

pub mod pdb;
