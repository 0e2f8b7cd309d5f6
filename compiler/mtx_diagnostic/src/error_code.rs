use std::fmt;
use std::str::FromStr;

/// Error codes for all compile-time diagnostics.
///
/// Format: E#### where the first digit names the phase:
/// - E0xxx: scanner
/// - E1xxx: parser
/// - E2xxx: type/shape checker
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorCode {
    // Scanner (E0xxx)
    /// Character that starts no token
    E0001,
    /// Integer literal out of range
    E0002,
    /// String literal without a closing quote
    E0003,

    // Parser (E1xxx)
    /// Unexpected token
    E1001,
    /// Input ended inside a construct
    E1002,

    // Checker (E2xxx)
    /// Variable read before any assignment
    E2001,
    /// Operator not defined for the operand kinds
    E2002,
    /// Elementwise operands with different shapes
    E2003,
    /// Matrix product with mismatched inner dimensions
    E2004,
    /// Relational operator on a non-scalar
    E2005,
    /// Compound assignment not defined for the kinds
    E2006,
    /// Indexing a variable that is not a vector or matrix
    E2007,
    /// Two-index access on a non-matrix
    E2008,
    /// Literal index outside the known shape
    E2009,
    /// Malformed matrix literal
    E2010,
    /// Non-positive matrix constructor dimension
    E2011,
    /// Non-numeric range bound
    E2012,
    /// `break` or `continue` outside a loop
    E2013,
    /// Unary minus on a string
    E2014,
    /// Transposition of a non-matrix
    E2015,
    /// Non-scalar element in a vector literal
    E2016,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: [ErrorCode; 21] = [
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E2006,
        ErrorCode::E2007,
        ErrorCode::E2008,
        ErrorCode::E2009,
        ErrorCode::E2010,
        ErrorCode::E2011,
        ErrorCode::E2012,
        ErrorCode::E2013,
        ErrorCode::E2014,
        ErrorCode::E2015,
        ErrorCode::E2016,
    ];

    /// Get the numeric code as a string (e.g., "E2002").
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E2008 => "E2008",
            ErrorCode::E2009 => "E2009",
            ErrorCode::E2010 => "E2010",
            ErrorCode::E2011 => "E2011",
            ErrorCode::E2012 => "E2012",
            ErrorCode::E2013 => "E2013",
            ErrorCode::E2014 => "E2014",
            ErrorCode::E2015 => "E2015",
            ErrorCode::E2016 => "E2016",
        }
    }

    /// One-line summary, shown by `mtx explain` when no long form exists.
    pub const fn description(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "illegal character",
            ErrorCode::E0002 => "invalid number literal",
            ErrorCode::E0003 => "unterminated string literal",
            ErrorCode::E1001 => "syntax error",
            ErrorCode::E1002 => "unexpected end of input",
            ErrorCode::E2001 => "undefined variable",
            ErrorCode::E2002 => "invalid operands",
            ErrorCode::E2003 => "incompatible shapes",
            ErrorCode::E2004 => "matrix multiplication dimension mismatch",
            ErrorCode::E2005 => "relational operator requires scalars",
            ErrorCode::E2006 => "invalid compound assignment",
            ErrorCode::E2007 => "variable is not indexable",
            ErrorCode::E2008 => "variable is not a matrix",
            ErrorCode::E2009 => "index out of bounds",
            ErrorCode::E2010 => "malformed matrix literal",
            ErrorCode::E2011 => "non-positive matrix dimension",
            ErrorCode::E2012 => "range bound must be numeric",
            ErrorCode::E2013 => "loop control outside loop",
            ErrorCode::E2014 => "invalid unary minus operand",
            ErrorCode::E2015 => "invalid transpose operand",
            ErrorCode::E2016 => "non-scalar vector element",
        }
    }

    /// Check if this is a scanner error (E0xxx range).
    pub fn is_lexer_error(self) -> bool {
        self.as_str().starts_with("E0")
    }

    /// Check if this is a parser error (E1xxx range).
    pub fn is_parser_error(self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is a checker error (E2xxx range).
    pub fn is_type_error(self) -> bool {
        self.as_str().starts_with("E2")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known error code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseErrorCodeError(pub String);

impl fmt::Display for ParseErrorCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error code '{}'", self.0)
    }
}

impl std::error::Error for ParseErrorCodeError {}

impl FromStr for ErrorCode {
    type Err = ParseErrorCodeError;

    /// Accepts `E2002` as well as lower-case `e2002`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        ErrorCode::ALL
            .into_iter()
            .find(|code| code.as_str() == wanted)
            .ok_or_else(|| ParseErrorCodeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(ErrorCode::E1001.to_string(), "E1001");
        assert_eq!(ErrorCode::E2016.as_str(), "E2016");
    }

    #[test]
    fn phase_ranges() {
        assert!(ErrorCode::E0002.is_lexer_error());
        assert!(ErrorCode::E1002.is_parser_error());
        assert!(ErrorCode::E2009.is_type_error());
        assert!(!ErrorCode::E2009.is_parser_error());
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("E2003".parse::<ErrorCode>(), Ok(ErrorCode::E2003));
        assert_eq!(" e0001 ".parse::<ErrorCode>(), Ok(ErrorCode::E0001));
        assert!("E9999".parse::<ErrorCode>().is_err());
    }

    #[test]
    fn all_is_sorted_and_unique() {
        let mut sorted = ErrorCode::ALL.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted, ErrorCode::ALL.to_vec());
    }
}
