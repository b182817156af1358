/// Errors raised while transcoding a staticcheck stream
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to decode staticcheck entry on line {line}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to determine the current working directory: {0}")]
    WorkingDirectory(#[source] std::io::Error),

    #[error("Failed to encode code quality report: {0}")]
    Encode(#[source] serde_json::Error),
}
