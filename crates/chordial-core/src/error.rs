pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("layout engine is not available; the diagram cannot be rendered in this session")]
    DependencyMissing,

    #[error("invalid {field} data: expected an array")]
    InvalidInput { field: &'static str },

    #[error("matrix is empty")]
    EmptyInput,

    #[error("matrix size ({matrix_len}) does not match names length ({names_len})")]
    SizeMismatch {
        matrix_len: usize,
        names_len: usize,
    },

    #[error("rendering failed: {message}")]
    Render { message: String },
}

impl Error {
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }
}
