use thiserror::Error;

#[derive(Error,Debug)]
pub enum Error {
    #[error("IO error")]
    IoError(#[from] std::io::Error),

    #[error("Unrecognized logic level: {0:} V")]
    InvalidLevel(f64),

    #[error("Empty plateau at cycle {0:}")]
    EmptyPlateau(usize),

    #[error("Wrong plateau duration: {0:} s")]
    InvalidPlateauDuration(f64),

    #[error("Cycle {0:} of {1:} was never resolved")]
    IncompleteExtraction(usize, usize),

    #[error("Malformed trace input: {0:}")]
    MalformedInput(String),

    #[error("Failed to extract signal '{name:}'")]
    Signal {
        name: String,
        #[source]
        source: Box<Error>,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
