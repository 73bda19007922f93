//! # Debug Console
//!
//! Wizard-mode console: a registry of debug commands and the line parser
//! that tokenizes input and offers completions as the user types.

pub mod parser;
pub mod registry;

pub use parser::*;
pub use registry::*;
