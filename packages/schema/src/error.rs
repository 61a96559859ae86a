use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("malformed card JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("card root must be a JSON object")]
    NotAnObject,
}
