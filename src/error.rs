use thiserror::Error;

/// Top-level error type for the Alinea alignment kernel.
#[derive(Debug, Error)]
pub enum AlineaError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Reference(#[from] ReferenceError),
}

/// Errors caused by an unsuitable vertex selection.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("at least {required} selected vertices required, got {actual}")]
    TooFew { required: usize, actual: usize },

    #[error("exactly {required} selected vertices required, got {actual}")]
    ExactCount { required: usize, actual: usize },
}

/// Errors caused by degenerate reference geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate axis: the two reference points coincide")]
    DegenerateAxis,

    #[error("degenerate normal: the three reference points are collinear")]
    DegenerateNormal,
}

/// Errors caused by using a reference before it has been defined.
#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("{reference} reference is not defined")]
    NotDefined { reference: &'static str },
}

/// Convenience type alias for results using [`AlineaError`].
pub type Result<T> = std::result::Result<T, AlineaError>;
