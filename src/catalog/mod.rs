//! Question catalog for maturity assessments.
//!
//! This module defines the static question bank: dimensions with weights,
//! their questions, and the sector-specific augmentations layered on top.
//! Catalogs are built once, validated at construction, and read-only
//! afterwards. A scoring call never mutates the catalog it reads.

mod bank;
mod responses;
mod sector;
mod types;

pub use bank::*;
pub use responses::*;
pub use sector::*;
pub use types::*;
