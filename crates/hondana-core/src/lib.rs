//! Core types for the Hondana extension catalog
//!
//! This crate holds:
//! - Extension record types (installed, untrusted, available)
//! - Install step lifecycle states
//! - Catalog snapshot and presentation types
//! - Language display-name resolution
//! - Typed errors shared across the workspace

pub mod error;
pub mod lang;
pub mod types;

pub use error::{Error, Result};
pub use lang::{DefaultLanguageResolver, LanguageResolver, ALL_LANGUAGES};
