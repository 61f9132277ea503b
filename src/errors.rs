use num_bigint::BigUint;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur when shifting an encoded value.
#[derive(Debug, PartialEq, Eq)]
pub enum ShiftError {
    /// Compression was requested for a file that already encodes to 0.
    /// The empty file is the smallest element of the enumeration; there is
    /// nothing below it to shift to.
    EmptyFile,
    /// The requested shift is larger than the file's current value.
    ExceedsValue {
        /// Number of single compressions that reaches exactly the empty
        /// file. Equal to the file's current encoded value.
        max: BigUint,
    },
}

impl fmt::Display for ShiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            ShiftError::EmptyFile => {
                if use_color {
                    write!(f, "\x1b[1;31merror:\x1b[0m cannot compress a zero-length file")?;
                } else {
                    write!(f, "error: cannot compress a zero-length file")?;
                }
                Ok(())
            }
            ShiftError::ExceedsValue { max } => {
                if use_color {
                    writeln!(f, "\x1b[1;31merror:\x1b[0m cannot compress that much")?;
                    write!(
                        f,
                        "\n\x1b[1;36mhint:\x1b[0m compressing {} time(s) makes a zero-length file",
                        max
                    )?;
                } else {
                    writeln!(f, "error: cannot compress that much")?;
                    write!(
                        f,
                        "\nhint: compressing {} time(s) makes a zero-length file",
                        max
                    )?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ShiftError {}

/// Error when a `-C`/`-D` argument is not an integer literal.
#[derive(Debug, PartialEq, Eq)]
pub struct ParseShiftError {
    pub literal: String,
}

impl ParseShiftError {
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
        }
    }
}

impl fmt::Display for ParseShiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        if use_color {
            writeln!(
                f,
                "\x1b[1;31merror:\x1b[0m argument '{}' is not an integer",
                self.literal
            )?;
            write!(
                f,
                "\n\x1b[1;36mhint:\x1b[0m decimal, 0x, 0o and 0b literals are accepted, with an optional sign"
            )?;
        } else {
            writeln!(f, "error: argument '{}' is not an integer", self.literal)?;
            write!(
                f,
                "\nhint: decimal, 0x, 0o and 0b literals are accepted, with an optional sign"
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseShiftError {}

/// Errors from the end-to-end file transform.
#[derive(Debug)]
pub enum TransformError {
    /// The file could not be opened, fully read, or fully rewritten.
    Io { path: PathBuf, source: io::Error },
    /// The requested shift was rejected before any write happened.
    Shift(ShiftError),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::Io { path, source } => {
                if should_use_color() {
                    write!(
                        f,
                        "\x1b[1;31merror:\x1b[0m unable to access '{}': {}",
                        path.display(),
                        source
                    )?;
                } else {
                    write!(f, "error: unable to access '{}': {}", path.display(), source)?;
                }
                Ok(())
            }
            TransformError::Shift(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for TransformError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransformError::Io { source, .. } => Some(source),
            TransformError::Shift(err) => Some(err),
        }
    }
}

impl From<ShiftError> for TransformError {
    fn from(err: ShiftError) -> Self {
        TransformError::Shift(err)
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stderr is a terminal
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}
