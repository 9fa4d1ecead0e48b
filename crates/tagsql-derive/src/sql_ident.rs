use proc_macro2::Span;
use syn::{Error, Result};

pub(crate) fn is_valid_sql_ident(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Validate a column name used in generated SQL and as a `:name` placeholder.
pub(crate) fn parse_column(s: &str, span: Span) -> Result<String> {
    let s = s.trim();
    if s.is_empty() {
        return Err(Error::new(span, "column must not be empty"));
    }
    if !is_valid_sql_ident(s) {
        return Err(Error::new(
            span,
            format!("column '{s}' must be a valid SQL identifier (expected [A-Za-z_][A-Za-z0-9_]*)"),
        ));
    }
    Ok(s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_sql_ident() {
        assert!(is_valid_sql_ident("is_active"));
        assert!(is_valid_sql_ident("_x1"));
        assert!(!is_valid_sql_ident("1x"));
        assert!(!is_valid_sql_ident("a.b"));
        assert!(!is_valid_sql_ident(""));
    }

    #[test]
    fn test_parse_column_trims() {
        assert_eq!(parse_column(" name ", Span::call_site()).unwrap(), "name");
        assert!(parse_column("   ", Span::call_site()).is_err());
        assert!(parse_column("a-b", Span::call_site()).is_err());
    }
}
