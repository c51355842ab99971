//! Command-line flags and the configuration we build from them.

use clap::Parser;

use crate::docker::DEFAULT_DOCKER_HOST;
use crate::errors::*;
use crate::format::{select_format, OutputFormat};

/// docker_image_info - Docker Images Info tool
#[derive(Parser, Debug, Clone)]
#[command(name = "docker_image_info", version)]
pub struct Args {
    /// Use JSON encoding
    #[arg(long)]
    pub json: bool,

    /// Use YAML encoding
    #[arg(long)]
    pub yaml: bool,

    /// Output the result in plain text (the default)
    #[arg(long)]
    pub text: bool,

    /// Print age of images in Unix epoch (text/json/yaml format)
    #[arg(long)]
    pub age: bool,

    /// Docker daemon socket to connect to
    #[arg(short = 'H', long, env = "DOCKER_HOST", default_value = DEFAULT_DOCKER_HOST)]
    pub host: String,
}

/// Everything a run needs to know, fixed once the flags are parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    pub age: bool,
    pub host: String,
}

impl Config {
    /// Validate `args`. Fails when more than one output format is requested,
    /// whether or not `--age` is set.
    pub fn from_args(args: &Args) -> Result<Config> {
        Ok(Config {
            format: select_format(args.json, args.yaml, args.text)?,
            age: args.age,
            host: args.host.clone(),
        })
    }
}
