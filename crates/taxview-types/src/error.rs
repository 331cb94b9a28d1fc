use std::fmt;

/// Result type for taxview operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading a parameter table
#[derive(Debug)]
pub enum Error {
    /// IO operation failed (file missing or unreadable)
    Io(std::io::Error),
    /// Malformed table structure: ragged rows, empty header, non-numeric cells
    Parse { line: usize, message: String },
    /// A year column header that does not parse as an integer
    YearHeader { column: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Parse { line, message } => {
                write!(f, "parse error at line {}: {}", line, message)
            }
            Error::YearHeader { column } => {
                write!(f, "year column '{}' is not an integer year", column)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Parse { .. } | Error::YearHeader { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display_names_the_failing_line() {
        let err = Error::Parse {
            line: 4,
            message: "expected 12 fields, found 11".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "parse error at line 4: expected 12 fields, found 11"
        );
    }

    #[test]
    fn display_names_the_bad_year_column() {
        let err = Error::YearHeader {
            column: "Notes".to_string(),
        };
        assert_eq!(err.to_string(), "year column 'Notes' is not an integer year");
    }
}
