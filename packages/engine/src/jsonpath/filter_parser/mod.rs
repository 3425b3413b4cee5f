//! Filter expression parsing
//!
//! Precedence climbing over the filter grammar of RFC 9535 Section 2.3.5.
//! Well-typedness is checked as each expression is built, so a compiled
//! query never holds an ill-typed function call or a bare literal test.

mod expressions;
mod functions;
mod literals;
