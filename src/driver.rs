//! Fetch the image list once and render it the way the user asked.

use log::debug;
use std::future::Future;

use crate::age::age_map;
use crate::cli::{Args, Config};
use crate::docker::Docker;
use crate::errors::*;
use crate::format::encode;
use crate::image::Image;

/// Something that can list images for us.
pub trait ImageSource {
    /// A human-readable name for error messages.
    fn name(&self) -> &str;

    /// List images, optionally including intermediate layers.
    fn list_images(&self, all: bool) -> impl Future<Output = Result<Vec<Image>>>;
}

impl ImageSource for Docker {
    fn name(&self) -> &str {
        self.host()
    }

    async fn list_images(&self, all: bool) -> Result<Vec<Image>> {
        self.images(all).await
    }
}

/// List top-level images from `source` and encode them per `config`.
///
/// Nothing is written here; the caller prints the returned string in one
/// go, so a failure anywhere means no output at all.
pub async fn run<S: ImageSource>(config: &Config, source: &S) -> Result<String> {
    let images = source
        .list_images(false)
        .await
        .chain_err(|| ErrorKind::ListImages(source.name().to_owned()))?;
    debug!("{} images listed from {}", images.len(), source.name());

    if config.age {
        encode(&age_map(&images), config.format)
    } else {
        encode(&images[..], config.format)
    }
}

/// Validate `args`, connect to the daemon with `connect` and render its
/// images.
///
/// Conflicting format flags are rejected before `connect` is ever called.
pub async fn execute<S, F>(args: &Args, connect: F) -> Result<String>
where
    S: ImageSource,
    F: FnOnce(&str) -> Result<S>,
{
    let config = Config::from_args(args)?;
    let source = connect(&config.host)?;
    run(&config, &source).await
}
