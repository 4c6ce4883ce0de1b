//! smalires - resource identifier resolution for smali listings
//!
//! smalires reads the public resource declarations of a disassembled Android
//! application (`res/values/public.xml`, plus `strings.xml` for string
//! literals) and annotates every `const` load and `.packed-switch` directive
//! in the smali listings whose constant is a declared resource id.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, run driver, report output)
//! - `config`: Optional `.smaliresrc.json` project configuration
//! - `context`: Run context tying the stages together
//! - `listing`: Line scanning, annotation and listing rewriting
//! - `resources`: Resource table loading and string enrichment

pub mod cli;
pub mod config;
pub mod context;
pub mod listing;
pub mod resources;
