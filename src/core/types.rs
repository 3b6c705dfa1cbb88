use super::Value;

/// One result row, positionally aligned with the column list of the
/// result it came from.
pub type Row = Vec<Value>;
