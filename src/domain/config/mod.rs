//! Environment file loading: parse, bind templates, validate, fill defaults.

mod bind;
mod parse;

pub use parse::{load, parse_environment};
