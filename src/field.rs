//! Finite fields.
//!
//! This module exposes the two fields used by SIDH with the p751 prime:
//! the base field GF(p751) and its quadratic extension GF(p751^2). These
//! are the backend-provided `GFp751` and `GFp751x2` types.

pub use crate::backend::{GFp751, GFp751x2};
