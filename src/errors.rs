use thiserror::Error;

/// Errors raised by the filter/sort query path.
///
/// `UnknownField` is strict only at the public entry points (resolving a
/// sort field, the `fields` command); inside a multi-clause expression an
/// unresolvable field turns the clause into a no-op instead.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("unknown field: {0:?}")]
    UnknownField(String),

    #[error("malformed number: {0:?}")]
    MalformedNumber(String),

    #[error("operator {op} is not supported on field {field}")]
    UnsupportedOperation {
        field: &'static str,
        op: &'static str,
    },
}

/// Errors raised by the selection list.
#[derive(Error, Debug)]
pub enum ListError {
    #[error("index out of range: {0}")]
    IndexOutOfRange(String),

    #[error("no game named {0:?} in the filtered list")]
    NotFound(String),

    #[error("io error: {0:?}")]
    Io(#[from] std::io::Error),
}
