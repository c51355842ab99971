use hyper::{client::Client, Body, Request, Response, Uri};
use log::debug;

use crate::errors::*;
use crate::image::Image;

use serde::de::DeserializeOwned;

/// The default `DOCKER_HOST` address that we will try to connect to.
///
/// `--host` and `DOCKER_HOST` override it on the command line.
pub const DEFAULT_DOCKER_HOST: &str = "unix:///var/run/docker.sock";

/// How we reach the daemon.
#[cfg(unix)]
type Transport = hyperlocal::UnixConnector;

/// Never constructed: without Unix sockets `connect_with_unix` fails first.
#[cfg(not(unix))]
type Transport = hyper::client::HttpConnector;

/// Our Docker client.
pub struct Docker {
    client: Client<Transport, Body>,
    host: String,
    socket_path: String,
}

impl Docker {
    /// Connect to the Docker daemon at `host`, which must be a `unix://`
    /// URL. Remote and TLS endpoints are not supported.
    pub fn connect(host: &str) -> Result<Docker> {
        if host.starts_with("unix://") {
            let mkerr = || ErrorKind::CouldNotConnect(host.to_owned());
            Docker::connect_with_unix(host).chain_err(mkerr)
        } else {
            Err(ErrorKind::UnsupportedScheme(host.to_owned()).into())
        }
    }

    #[cfg(unix)]
    pub fn connect_with_unix(addr: &str) -> Result<Docker> {
        // Get our bare path.
        let socket_path = if addr.starts_with("unix://") {
            addr.replacen("unix://", "", 1)
        } else {
            addr.to_owned()
        };
        if socket_path.is_empty() {
            return Err(format!("no socket path in '{}'", addr).into());
        }
        let client = Client::builder().build(hyperlocal::UnixConnector);
        Ok(Docker {
            client,
            host: addr.to_owned(),
            socket_path,
        })
    }

    #[cfg(not(unix))]
    pub fn connect_with_unix(addr: &str) -> Result<Docker> {
        Err(ErrorKind::UnsupportedScheme(addr.to_owned()).into())
    }

    /// The address we were asked to connect to.
    pub fn host(&self) -> &str {
        &self.host
    }

    #[cfg(unix)]
    fn get_url(&self, path: &str) -> Result<Uri> {
        Ok(Uri::from(hyperlocal::Uri::new(&self.socket_path, path)))
    }

    #[cfg(not(unix))]
    fn get_url(&self, _path: &str) -> Result<Uri> {
        Err(ErrorKind::UnsupportedScheme(self.socket_path.clone()).into())
    }

    fn build_empty_get_request(&self, request_url: &Uri) -> Result<Request<Body>> {
        Request::get(request_url)
            .body(Body::empty())
            .chain_err(|| "error building request")
    }

    async fn start_request(&self, request: Request<Body>) -> Result<Response<Body>> {
        let response = self.client.request(request).await?;
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(format!("HTTP request failed: {}", response.status()).into())
        }
    }

    async fn execute_request(&self, request: Request<Body>) -> Result<Vec<u8>> {
        let response = self.start_request(request).await?;
        let body = hyper::body::to_bytes(response.into_body()).await?;
        Ok(body.to_vec())
    }

    /// `GET` a URL and decode it.
    async fn decode_url<T>(&self, type_name: &'static str, url: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let request_url = self.get_url(url)?;
        debug!("GET {} via {}", url, self.socket_path);
        let request = self.build_empty_get_request(&request_url)?;
        let body = self.execute_request(request).await?;
        let info = serde_json::from_slice::<T>(&body).chain_err(|| {
            ErrorKind::ParseError(type_name, String::from_utf8_lossy(&body[..]).into_owned())
        })?;
        Ok(info)
    }

    /// List images. Unless `all` is set, intermediate layers are left out.
    pub async fn images(&self, all: bool) -> Result<Vec<Image>> {
        let a = match all {
            true => "1",
            false => "0",
        };
        let url = format!("/images/json?a={}", a);
        self.decode_url("Image", &url).await
    }
}
