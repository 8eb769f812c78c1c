//! Parivahan client error types.

/// Errors from fetching the lookup result page.
///
/// None of these abort the program: the lookup pipeline turns each one into
/// the `Error` field of a [`VehicleRecord`](crate::domain::VehicleRecord),
/// using the `Display` text below.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// HTTP request failed (connection, TLS, timeout, body decoding)
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The site answered with a non-success status code
    #[error("Network error: HTTP {status} for url: {url}")]
    Status { status: u16, url: String },

    /// The search button is missing from the landing page
    #[error("Website structure changed")]
    StructureChanged,

    /// The landing page carries no `javax.faces.ViewState` token
    #[error("Processing error: view state token not found")]
    MissingViewState,

    /// A configured header value is not a valid HTTP header value
    #[error("Processing error: invalid {name} header value")]
    InvalidHeader { name: &'static str },
}
