use crate::VertexId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("vertex {id} already exists")]
    DuplicateVertex { id: VertexId },

    #[error("vertex {id} does not exist")]
    UnknownVertex { id: VertexId },

    #[error("could not generate a connected graph in {attempts} attempts")]
    GenerationFailed { attempts: usize },
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
