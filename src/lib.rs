#![allow(clippy::doc_markdown, clippy::missing_errors_doc)]
#![doc = include_str!("../README.md")]

pub mod cli;
pub mod core;
mod prelude;
pub mod quantity;
mod tables;
