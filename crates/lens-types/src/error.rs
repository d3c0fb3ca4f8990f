use thiserror::Error;

#[derive(Error, Debug)]
pub enum LensError {
    #[error("Invalid lens configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Root solver failed after {iterations} iterations: {message}")]
    RootSolve { iterations: usize, message: String },

    #[error("Sweep aborted at sample {index} (phi = {phi}): {source}")]
    SweepAborted {
        index: usize,
        phi: f64,
        #[source]
        source: Box<LensError>,
    },

    #[error("Render error: {0}")]
    Render(String),

    #[error("NPY export error: {0}")]
    Npy(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LensResult<T> = Result<T, LensError>;
