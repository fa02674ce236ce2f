use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP transport error: {}", _0)]
    Http(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {} from `{}`", .status, .url)]
    UnexpectedStatus { status: u16, url: String },

    #[error("Could not decode reply from `{}`: {}", .url, .original)]
    Decode {
        url: String,
        original: serde_json::Error,
    },

    #[error("Could not encode request for `{}`: {}", .url, .original)]
    Encode {
        url: String,
        original: serde_json::Error,
    },

    #[error("Confirmation request for `{}` carries no target path", .command)]
    MalformedConfirmation { command: String },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Only one of `--yes` or `--no` may be given.")]
    MixedConfirmationPolicy,

    #[error("Invalid server URL `{}`: it must start with http:// or https://", .0)]
    InvalidServerUrl(String),

}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn decode_error(url: &str, original: serde_json::Error) -> Self {
        Self::Decode {
            url: url.to_string(),
            original,
        }
    }
}
