#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Decode error {0}")]
    Decode(serde_json::Error),
    #[error("Encode error {0}")]
    Encode(serde_json::Error),
    #[error("no endpoint reachable")]
    Exhausted,
    #[error("Http error {0}")]
    Http(#[from] reqwest::Error),
    #[error("Io error {0}")]
    Io(#[from] std::io::Error),
}
