use thiserror::Error;

#[derive(Error, Debug)]
pub enum PeakCallError {
    #[error("Fragment length must be a positive number of bases, got {0}")]
    InvalidFragmentLength(i32),

    #[error("Depth threshold must be non-negative, got {0}")]
    InvalidThreshold(i32),

    #[error("Can't parse strand field: {0}")]
    InvalidStrand(String),

    #[error("Error parsing read record: {0}")]
    ReadParseError(String),

    #[error("Can't estimate fragment length: {0}")]
    FragmentLengthEstimation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
