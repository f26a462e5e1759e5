use vertexlab_graph::VertexId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] vertexlab_graph::Error),

    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("invalid layout configuration: {message}")]
    InvalidConfig { message: String },

    #[error("drawing has no node {id}")]
    UnknownNode { id: VertexId },

    #[error("drawing has no edge {id}")]
    UnknownEdge { id: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
