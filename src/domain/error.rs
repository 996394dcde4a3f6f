#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("Ingestion failed with: {0}")]
    Ingestion(String),

    #[error("No {entity} with id {id}")]
    NotFound { entity: &'static str, id: u32 },

    #[error("{0}")]
    InvalidInput(String),

    #[error("Please fill in all required fields")]
    MissingFields,

    #[error("Please check your username and password")]
    AuthenticationFailed,

    #[error("Please sign in to continue")]
    SignInRequired,
}

impl Error {
    /// Short heading shown above the message when the error is surfaced to the user.
    pub fn title(&self) -> &'static str {
        match self {
            Error::IO(_) | Error::Ingestion(_) => "Something Went Wrong",
            Error::NotFound { .. } => "Not Found",
            Error::InvalidInput(_) => "Invalid Input",
            Error::MissingFields => "Missing Information",
            Error::AuthenticationFailed => "Invalid Credentials",
            Error::SignInRequired => "Signed Out",
        }
    }
}
