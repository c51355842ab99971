//! List the images stored by a local Docker daemon and render them as
//! plain text, JSON or YAML.
// Increase the compiler's recursion limit for the `error_chain` crate.
#![recursion_limit = "1024"]

// import external libraries
#[macro_use]
extern crate error_chain;

#[macro_use]
extern crate serde_derive;

// declare modules
pub mod age;
pub mod cli;
mod docker;
pub mod driver;
pub mod errors;
pub mod format;
pub mod image;

// publicly re-export
pub use crate::age::{age_map, clean_id, AgeMap};
pub use crate::cli::{Args, Config};
pub use crate::docker::{Docker, DEFAULT_DOCKER_HOST};
pub use crate::driver::{execute, run, ImageSource};
pub use crate::format::{encode, select_format, OutputFormat, PlainText};
pub use crate::image::Image;
