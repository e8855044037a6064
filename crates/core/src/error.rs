/// Failure reported by [`BufferedResponse`](crate::writer::BufferedResponse)
/// when writing a body.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("Failed to serialize response body: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Response body already written")]
    AlreadyWritten,
}
