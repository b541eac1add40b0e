//! Lookup expression parsing

use crate::error::{EngineError, EngineResult};
use refsheet_core::CellRef;

/// Parse a lookup expression into a cell reference
///
/// The accepted shape is exactly `lookup(<column>,<row>)`: the literal prefix,
/// one or more ASCII letters, a comma, a decimal row index, and a closing
/// parenthesis. No whitespace anywhere, nothing before or after. `rows` is the
/// owning sheet's row count; indices at or past it are rejected.
///
/// # Examples
/// ```
/// use refsheet_engine::parse_lookup;
/// use refsheet_core::CellRef;
///
/// let target = parse_lookup("lookup(Age,3)", 10).unwrap();
/// assert_eq!(target, CellRef::new("Age", 3));
///
/// assert!(parse_lookup("lookup(Age, 3)", 10).is_err());
/// assert!(parse_lookup("lookup(Age,10)", 10).is_err());
/// ```
pub fn parse_lookup(expr: &str, rows: usize) -> EngineResult<CellRef> {
    const PREFIX: &[u8] = b"lookup(";

    let bytes = expr.as_bytes();
    if !bytes.starts_with(PREFIX) {
        return Err(malformed(expr, "expected 'lookup(' prefix"));
    }
    let mut pos = PREFIX.len();

    // Column letters
    let col_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
        pos += 1;
    }
    if pos == col_start {
        return Err(malformed(expr, "no column letters"));
    }
    let column = &expr[col_start..pos];

    if bytes.get(pos) != Some(&b',') {
        return Err(malformed(expr, "expected ',' after column name"));
    }
    pos += 1;

    // Row digits
    let row_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    if pos == row_start {
        return Err(malformed(expr, "no row index"));
    }
    let row: usize = expr[row_start..pos]
        .parse()
        .map_err(|_| malformed(expr, "row index too large"))?;

    if bytes.get(pos) != Some(&b')') {
        return Err(malformed(expr, "expected ')'"));
    }
    pos += 1;

    if pos != bytes.len() {
        return Err(malformed(expr, "trailing characters"));
    }

    if row >= rows {
        return Err(EngineError::RowOutOfBounds(row, rows.saturating_sub(1)));
    }

    Ok(CellRef::new(column, row))
}

fn malformed(expr: &str, reason: &str) -> EngineError {
    EngineError::MalformedLookup(format!("{} in '{}'", reason, expr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_lookups() {
        assert_eq!(
            parse_lookup("lookup(A,0)", 10).unwrap(),
            CellRef::new("A", 0)
        );
        assert_eq!(
            parse_lookup("lookup(score,9)", 10).unwrap(),
            CellRef::new("score", 9)
        );
        assert_eq!(
            parse_lookup("lookup(ABC,42)", 100).unwrap(),
            CellRef::new("ABC", 42)
        );
        // Leading zeros parse as decimal
        assert_eq!(
            parse_lookup("lookup(A,07)", 10).unwrap(),
            CellRef::new("A", 7)
        );
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert!(parse_lookup("", 10).is_err());
        assert!(parse_lookup("lookup", 10).is_err());
        assert!(parse_lookup("lookup(", 10).is_err());
        assert!(parse_lookup("lookup(A)", 10).is_err());
        assert!(parse_lookup("lookup(A,)", 10).is_err());
        assert!(parse_lookup("lookup(,1)", 10).is_err());
        assert!(parse_lookup("lookup(A,1", 10).is_err());
        assert!(parse_lookup("lookup(A,1))", 10).is_err());
        assert!(parse_lookup("lookup(1,2)", 10).is_err());
        assert!(parse_lookup("lookup(A1,2)", 10).is_err());
        assert!(parse_lookup("lookup(A,-1)", 10).is_err());
        assert!(parse_lookup("Lookup(A,1)", 10).is_err());
    }

    #[test]
    fn test_parse_rejects_whitespace() {
        assert!(parse_lookup(" lookup(A,1)", 10).is_err());
        assert!(parse_lookup("lookup(A,1) ", 10).is_err());
        assert!(parse_lookup("lookup(A, 1)", 10).is_err());
        assert!(parse_lookup("lookup( A,1)", 10).is_err());
        assert!(parse_lookup("lookup (A,1)", 10).is_err());
    }

    #[test]
    fn test_parse_row_bounds() {
        assert!(parse_lookup("lookup(A,9)", 10).is_ok());
        assert!(matches!(
            parse_lookup("lookup(A,10)", 10),
            Err(EngineError::RowOutOfBounds(10, 9))
        ));
        assert!(matches!(
            parse_lookup("lookup(A,500)", 10),
            Err(EngineError::RowOutOfBounds(500, 9))
        ));
        // A bigger sheet accepts bigger indices
        assert!(parse_lookup("lookup(A,500)", 501).is_ok());
    }

    #[test]
    fn test_parse_huge_row_index() {
        assert!(matches!(
            parse_lookup("lookup(A,99999999999999999999999)", 10),
            Err(EngineError::MalformedLookup(_))
        ));
    }
}
