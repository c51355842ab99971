//! Error types for talking to the daemon and rendering its answer.

use std::io;

error_chain! {
    foreign_links {
        Hyper(hyper::Error);
        Http(hyper::http::Error);
        Io(io::Error);
        Json(serde_json::Error);
        Yaml(serde_yaml::Error);
    }

    errors {
        // We could not set up a client for the Docker daemon at `host`.
        CouldNotConnect(host: String) {
            description("could not connect to Docker")
            display("could not connect to Docker at '{}'", host)
        }

        // `DOCKER_HOST` (or `--host`) names a transport we don't speak.
        UnsupportedScheme(host: String) {
            description("unsupported Docker URL scheme")
            display("do not know how to connect to Docker at '{}'", host)
        }

        // The daemon answered with something we could not decode.
        ParseError(type_name: &'static str, input: String) {
            description("error parsing JSON from Docker")
            display("error parsing JSON from Docker for type '{}': {}", type_name, input)
        }

        // Listing images failed.
        ListImages(host: String) {
            description("could not list Docker images")
            display("could not list images from Docker at '{}'", host)
        }

        // More than one of `--json`, `--yaml` and `--text` was given.
        ConflictingFormats {
            description("conflicting output formats")
            display("the program does not support more than one encoding flag")
        }

        // Plain text was requested for an empty image list.
        EmptyImageList {
            description("empty image list")
            display("Empty image list")
        }

        // Serializing the result failed.
        Encoding(encoder: &'static str) {
            description("encoding error")
            display("{} encoding error", encoder)
        }
    }
}

impl Error {
    /// Is this a failure to reach or talk to the daemon?
    ///
    /// These end the run without any output at all and get their own exit
    /// code, separate from usage and encoding errors.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::CouldNotConnect(_)
                | ErrorKind::UnsupportedScheme(_)
                | ErrorKind::ListImages(_)
                | ErrorKind::ParseError(..)
                | ErrorKind::Hyper(_)
                | ErrorKind::Http(_)
                | ErrorKind::Io(_)
        )
    }

    /// The message we show the user: this error and everything that caused it.
    pub fn describe(&self) -> String {
        let mut out = format!("Error: {}\n", self);
        for cause in self.iter().skip(1) {
            out.push_str(&format!("  caused by: {}\n", cause));
        }
        out
    }

    /// The process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        if self.is_fatal() {
            2
        } else {
            1
        }
    }
}
