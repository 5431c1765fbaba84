use std::{error, fmt};

/// Error type of the glue code: CLI handling, config loading, encoding.
///
/// The report parser has its own typed error, see `parse::ParseError`,
/// which converts into this one.
pub struct Error {
    message: String,
    source: Option<Box<dyn error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

// `main` reports errors through Debug.
impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.source {
            Some(err) => write!(f, "{}: {}", self.message, err),
            None => write!(f, "{}", self.message),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self.source {
            Some(ref err) => Some(&**err),
            None => None,
        }
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Self {
            message,
            source: None,
        }
    }
}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl<E: error::Error + Send + Sync + 'static> From<(String, E)> for Error {
    fn from((message, err): (String, E)) -> Self {
        Self {
            message,
            source: Some(Box::new(err)),
        }
    }
}

impl<E: error::Error + Send + Sync + 'static> From<(&str, E)> for Error {
    fn from((message, err): (&str, E)) -> Self {
        (String::from(message), err).into()
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_display_with_source() {
        let err = Error::from((
            "couldn't open config",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        ));
        assert_eq!(err.to_string(), "couldn't open config: gone");
        assert_eq!(err.message(), "couldn't open config");
        assert!(error::Error::source(&err).is_some());
    }

    #[test]
    fn test_display_without_source() {
        let err = Error::from(format!("unknown encoder {}", "xml"));
        assert_eq!(err.to_string(), "unknown encoder xml");
        assert!(error::Error::source(&err).is_none());
    }
}
