use thiserror::Error;

#[derive(Error, Debug)]
pub enum SqlError {
    #[error("no `-- name:` markers found in template text")]
    NoStatements,

    #[error("empty statement name at line {0}")]
    EmptyName(usize),

    #[error("invalid statement name '{name}' at line {line}")]
    InvalidName { name: String, line: usize },

    #[error("duplicate statement name '{0}'")]
    DuplicateName(String),

    #[error("statement '{0}' has an empty SQL body")]
    EmptyStatement(String),

    #[error("unexpected content before first `-- name:` marker at line {0}")]
    UnexpectedContent(usize),

    #[error("statement '{0}' not found")]
    StatementNotFound(String),

    #[error("missing parameter '@{0}'")]
    MissingParameter(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("execution error: {0}")]
    Execution(String),
}

pub type Result<T> = std::result::Result<T, SqlError>;
