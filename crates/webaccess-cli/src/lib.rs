//! Command line front end for Web Access criteria expressions.
//!
//! The `webaccess-criteria` binary scans, translates and validates criteria
//! expressions against JSON vocabulary files, using the same code paths as
//! the rule editor.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod vocabulary;
