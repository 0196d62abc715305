/// Errors that can occur in the data layer.
///
/// `NotFound` is the only domain error; driver faults are carried through
/// as `Database` and surface to the HTTP layer as 500s.
#[derive(Debug)]
pub enum DataError {
    NotFound(String),
    Database(Box<dyn std::error::Error + Send + Sync>),
}

impl DataError {
    pub fn not_found(what: impl Into<String>) -> Self {
        DataError::NotFound(what.into())
    }

    /// Construct a `Database` variant from any error type.
    pub fn database(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        DataError::Database(Box::new(err))
    }
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::NotFound(msg) => write!(f, "Not found: {msg}"),
            DataError::Database(err) => write!(f, "Database error: {err}"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Database(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<sqlx::Error> for DataError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DataError::NotFound("row not found".into()),
            other => DataError::database(other),
        }
    }
}
