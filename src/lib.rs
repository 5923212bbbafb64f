#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate
)]

#[macro_use]
extern crate rust_i18n;

i18n!("locales", fallback = "en");

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod reviews;
pub mod site;

pub use cli::{Cli, Commands};
pub use config::Config;
