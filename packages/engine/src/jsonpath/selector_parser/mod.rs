//! Bracketed selection parsing
//!
//! `[...]` holds one or more comma separated selectors: quoted names,
//! indices, slices, `*` and filters.

mod bracket;
mod slice;
