use thiserror::Error;

/// Failure of a text or image generation call.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("API key not found. Set GEMINI_API_KEY or genai.api_key in the config file.")]
    MissingCredential,

    #[error("Generation request failed: {0}")]
    Http(String),

    #[error("Generation API returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("No recommendation generated.")]
    EmptyResponse,

    #[error("Malformed generation response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("No image part found in response. The model may have refused the request.")]
    NoImage,
}

pub type Result<T> = std::result::Result<T, GenerationError>;

/// Unknown value for one of the fixed enumerations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind}: '{value}' (expected one of: {expected})")]
pub struct ParseChoiceError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}
