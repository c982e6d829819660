use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid latitude: {0} (must be between -90 and 90)")]
    InvalidLatitude(f64),

    #[error("Invalid longitude: {0} (must be between -180 and 180)")]
    InvalidLongitude(f64),

    #[error("Invalid radius: {0} (must be a finite, non-negative number of meters)")]
    InvalidRadius(f64),

    #[error("Invalid geohash precision: {0} (must be between 1 and 22 characters)")]
    InvalidPrecision(usize),

    #[error("Invalid bit count: {0} (must be between 1 and 110)")]
    InvalidBits(u32),

    #[error("Invalid geohash: '{0}'")]
    InvalidGeohash(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl Error {
    pub fn error_code(&self) -> i32 {
        match self {
            Error::InvalidLatitude(_) => -1,
            Error::InvalidLongitude(_) => -2,
            Error::InvalidRadius(_) => -3,
            Error::InvalidPrecision(_) => -4,
            Error::InvalidBits(_) => -5,
            Error::InvalidGeohash(_) => -6,
            Error::Config(_) => -7,
            Error::Io(_) => -8,
            Error::Serialization(_) => -9,
            Error::Store(_) => -10,
        }
    }

    /// True when the caller passed a value outside the documented domain.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidLatitude(_)
                | Error::InvalidLongitude(_)
                | Error::InvalidRadius(_)
                | Error::InvalidPrecision(_)
                | Error::InvalidBits(_)
                | Error::InvalidGeohash(_)
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            Error::InvalidLatitude(91.0),
            Error::InvalidLongitude(181.0),
            Error::InvalidRadius(-1.0),
            Error::InvalidPrecision(0),
            Error::InvalidBits(0),
            Error::InvalidGeohash("a".to_string()),
            Error::Config(String::new()),
            Error::Io(std::io::Error::other("io")),
            Error::Serialization(String::new()),
            Error::Store(String::new()),
        ];

        let mut codes: Vec<i32> = errors.iter().map(Error::error_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_input_errors() {
        assert!(Error::InvalidLatitude(100.0).is_input_error());
        assert!(Error::InvalidGeohash("!".into()).is_input_error());
        assert!(!Error::Store("down".into()).is_input_error());
        assert!(!Error::Config("bad".into()).is_input_error());
    }

    #[test]
    fn test_display() {
        let err = Error::InvalidLatitude(95.5);
        assert_eq!(
            err.to_string(),
            "Invalid latitude: 95.5 (must be between -90 and 90)"
        );
    }
}
