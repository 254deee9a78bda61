use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum EvaluatorError {
    ZeroThreads,
    ThreadPool(rayon::ThreadPoolBuildError),
}

impl fmt::Display for EvaluatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroThreads => write!(f, "worker pool needs at least one thread"),
            Self::ThreadPool(err) => write!(f, "failed to build worker pool: {}", err),
        }
    }
}

impl Error for EvaluatorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ZeroThreads => None,
            Self::ThreadPool(err) => Some(err),
        }
    }
}

impl From<rayon::ThreadPoolBuildError> for EvaluatorError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err)
    }
}
