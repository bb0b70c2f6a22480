#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("provider rejected email with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("smtp error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("email building error: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("{0}")]
    Transport(String),
}
