//! JSONPath module tests
//!
//! Tests mirroring the source module structure in src/jsonpath/

pub mod compiler;
pub mod config;
pub mod error;
pub mod filter;
pub mod tokenizer;
