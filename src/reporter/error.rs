use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
#[non_exhaustive]
pub enum ReportError {
    /// The report could not be persisted at `path`.
    Write { path: PathBuf, source: io::Error },
    Render(liquid::Error),
    Encode(serde_json::Error),
}

impl ReportError {
    pub(crate) fn write<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        ReportError::Write {
            path: path.into(),
            source,
        }
    }
}

impl ::std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
        match *self {
            ReportError::Write { ref source, .. } => Some(source),
            ReportError::Render(ref err) => Some(err),
            ReportError::Encode(ref err) => Some(err),
        }
    }
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ReportError::Write {
                ref path,
                ref source,
            } => write!(f, "Cannot write report to '{}': {}", path.display(), source),
            ReportError::Render(ref err) => write!(f, "Cannot render report template: {}", err),
            ReportError::Encode(ref err) => write!(f, "Cannot encode report as JSON: {}", err),
        }
    }
}

impl From<liquid::Error> for ReportError {
    fn from(err: liquid::Error) -> Self {
        ReportError::Render(err)
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        ReportError::Encode(err)
    }
}
