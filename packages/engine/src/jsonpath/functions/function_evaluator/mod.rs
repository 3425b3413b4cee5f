//! Built-in function extensions

mod count;
mod length;
mod regex_functions;
mod value;

pub use count::Count;
pub use length::Length;
pub use regex_functions::{Match, Search};
pub use value::ValueOf;
