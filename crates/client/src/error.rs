use thiserror::Error;

pub type Result<T> = std::result::Result<T, WebflowError>;

#[derive(Error, Debug)]
pub enum WebflowError {
    /// The request never produced a usable response (connect, timeout,
    /// body decode).
    #[error("Webflow API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status. `message` is the response
    /// body as the API sent it.
    #[error("Webflow API returned {status}: {message}")]
    Api { status: u16, message: String },
}
