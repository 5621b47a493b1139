#[derive(Debug)]
/// Represents all errors that can occur while loading symbol values.
///
/// Line numbers are 1-based and refer to the values source.
pub enum LoadError {
    /// A line does not have the shape `name value` or
    /// `name length (index,value) ...`.
    MalformedValueLine {
        /// What was wrong with the line.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An `(index,value)` pair writes outside the declared array length.
    IndexOutOfRange {
        /// Name of the array symbol.
        name:   String,
        /// The index that was requested.
        index:  i64,
        /// The declared length of the array.
        length: usize,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// The underlying reader failed.
    Io {
        /// The I/O error reported by the reader.
        source: std::io::Error,
        /// The source line that was being read.
        line:   usize,
    },
    /// Several lines failed. Every other line was applied.
    Lines {
        /// One error per failed line, in source order.
        errors: Vec<Self>,
    },
}

impl LoadError {
    /// Folds the errors collected while loading into a single result.
    ///
    /// # Returns
    /// - `Ok(())`: If `errors` is empty.
    /// - `Err(error)`: The only error, if there is exactly one.
    /// - `Err(LoadError::Lines)`: If there are several.
    pub fn from_errors(mut errors: Vec<Self>) -> Result<(), Self> {
        match errors.len() {
            0 => Ok(()),
            1 => Err(errors.remove(0)),
            _ => Err(Self::Lines { errors }),
        }
    }

    /// The individual line errors.
    ///
    /// A single-line error yields itself.
    #[must_use]
    pub fn errors(&self) -> &[Self] {
        match self {
            Self::Lines { errors } => errors,
            _ => std::slice::from_ref(self),
        }
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedValueLine { details, line } => {
                write!(f, "Error on line {line}: Malformed value line: {details}.")
            },

            Self::IndexOutOfRange { name,
                                    index,
                                    length,
                                    line, } => write!(f,
                                                      "Error on line {line}: Index {index} is out of range for array '{name}' of length {length}."),

            Self::Io { source, line } => {
                write!(f, "Error on line {line}: Failed to read values: {source}.")
            },

            Self::Lines { errors } => {
                write!(f, "{} value lines could not be loaded:", errors.len())?;
                for error in errors {
                    write!(f, "\n  {error}")?;
                }
                Ok(())
            },
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
