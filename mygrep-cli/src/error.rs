use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("malformed pattern: {0}")]
    MalformedPattern(String),
    #[error("malformed pattern: {0}")]
    Parse(#[from] regexen::ParseError),
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
