//! Expression parsing.
//!
//! Binary levels are left associative. Each level only calls the next
//! tighter one, so the call chain itself encodes precedence.

use mtx_ir::{BinaryOp, Dims, Expr, ExprKind, MatrixFn, MatrixRef, VectorRef};
use mtx_lexer::TokenKind;
use mtx_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an arithmetic expression.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_additive())
    }

    /// `+ -` (lowest precedence).
    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_dot_additive()?;
        while let Some(op) = self.match_op(&[
            (TokenKind::Plus, BinaryOp::Add),
            (TokenKind::Minus, BinaryOp::Sub),
        ]) {
            let right = self.parse_dot_additive()?;
            let line = left.line;
            left = Expr::binary(op, left, right, line);
        }
        Ok(left)
    }

    /// `.+ .-`
    fn parse_dot_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = self.match_op(&[
            (TokenKind::DotAdd, BinaryOp::DotAdd),
            (TokenKind::DotSub, BinaryOp::DotSub),
        ]) {
            let right = self.parse_multiplicative()?;
            let line = left.line;
            left = Expr::binary(op, left, right, line);
        }
        Ok(left)
    }

    /// `* /`
    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_dot_multiplicative()?;
        while let Some(op) = self.match_op(&[
            (TokenKind::Star, BinaryOp::Mul),
            (TokenKind::Slash, BinaryOp::Div),
        ]) {
            let right = self.parse_dot_multiplicative()?;
            let line = left.line;
            left = Expr::binary(op, left, right, line);
        }
        Ok(left)
    }

    /// `.* ./`
    fn parse_dot_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;
        while let Some(op) = self.match_op(&[
            (TokenKind::DotMul, BinaryOp::DotMul),
            (TokenKind::DotDiv, BinaryOp::DotDiv),
        ]) {
            let right = self.parse_unary()?;
            let line = left.line;
            left = Expr::binary(op, left, right, line);
        }
        Ok(left)
    }

    /// Consume the current token if it is one of `table`'s operators.
    fn match_op(&mut self, table: &[(TokenKind, BinaryOp)]) -> Option<BinaryOp> {
        let op = table
            .iter()
            .find(|(kind, _)| self.check(kind))
            .map(|(_, op)| *op)?;
        self.advance();
        Some(op)
    }

    /// `- unary | postfix`
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if self.check(&TokenKind::Minus) {
            let line = self.current_line();
            self.advance();
            let operand = ensure_sufficient_stack(|| self.parse_unary())?;
            return Ok(Expr::new(ExprKind::Neg(Box::new(operand)), line));
        }
        self.parse_postfix()
    }

    /// `primary '*`
    fn parse_postfix(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;
        while self.eat(&TokenKind::Apostrophe) {
            let line = expr.line;
            expr = Expr::new(ExprKind::Transpose(Box::new(expr)), line);
        }
        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let line = self.current_line();
        match self.current_kind() {
            TokenKind::Int(value) => {
                self.advance();
                Ok(Expr::int(*value, line))
            }
            TokenKind::Float(value) => {
                self.advance();
                Ok(Expr::float(*value, line))
            }
            TokenKind::Str(value) => {
                self.advance();
                Ok(Expr::string(value.clone(), line))
            }
            TokenKind::Ident(_) => self.parse_variable_or_element(),
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(&TokenKind::RParen)?;
                Ok(inner)
            }
            TokenKind::LBracket => self.parse_bracket_list(),
            TokenKind::Zeros => self.parse_matrix_fn(MatrixFn::Zeros),
            TokenKind::Ones => self.parse_matrix_fn(MatrixFn::Ones),
            TokenKind::Eye => self.parse_matrix_fn(MatrixFn::Eye),
            _ => Err(self.unexpected()),
        }
    }

    /// `ID`, `ID [ INT ]` or `ID [ INT , INT ]`
    fn parse_variable_or_element(&mut self) -> Result<Expr, ParseError> {
        let line = self.current_line();
        let name = self.expect_ident()?;
        if !self.eat(&TokenKind::LBracket) {
            return Ok(Expr::variable(name, line));
        }
        let first = self.expect_int()?;
        let kind = if self.eat(&TokenKind::Comma) {
            let col = self.expect_int()?;
            ExprKind::MatrixElement(MatrixRef {
                name,
                row: first,
                col,
            })
        } else {
            ExprKind::VectorElement(VectorRef { name, index: first })
        };
        self.expect(&TokenKind::RBracket)?;
        Ok(Expr::new(kind, line))
    }

    /// `[ ]` or `[ expr (, expr)* ]`.
    ///
    /// A list whose items are all vector literals (or `[]`) is a matrix
    /// literal; `[]` alone is the empty matrix.
    fn parse_bracket_list(&mut self) -> Result<Expr, ParseError> {
        let line = self.expect(&TokenKind::LBracket)?;
        if self.eat(&TokenKind::RBracket) {
            return Ok(Expr::new(ExprKind::Matrix(Vec::new()), line));
        }

        let mut items = vec![self.parse_expr()?];
        while self.eat(&TokenKind::Comma) {
            items.push(self.parse_expr()?);
        }
        self.expect(&TokenKind::RBracket)?;

        let is_row = |item: &Expr| match &item.kind {
            ExprKind::Vector(_) => true,
            ExprKind::Matrix(rows) => rows.is_empty(),
            _ => false,
        };
        if !items.iter().all(is_row) {
            return Ok(Expr::new(ExprKind::Vector(items), line));
        }

        let rows = items
            .into_iter()
            .map(|item| match item.kind {
                ExprKind::Matrix(_) => Expr::new(ExprKind::Vector(Vec::new()), item.line),
                _ => item,
            })
            .collect();
        Ok(Expr::new(ExprKind::Matrix(rows), line))
    }

    /// `zeros ( size [, size] )`, `size := [-] INT`
    fn parse_matrix_fn(&mut self, func: MatrixFn) -> Result<Expr, ParseError> {
        let line = self.current_line();
        self.advance();
        self.expect(&TokenKind::LParen)?;
        let first = self.parse_size()?;
        let dims = if self.eat(&TokenKind::Comma) {
            Dims::Rect(first, self.parse_size()?)
        } else {
            Dims::Square(first)
        };
        self.expect(&TokenKind::RParen)?;
        Ok(Expr::new(ExprKind::MatrixFn { func, dims }, line))
    }

    fn parse_size(&mut self) -> Result<i64, ParseError> {
        let negative = self.eat(&TokenKind::Minus);
        let value = self.expect_int()?;
        Ok(if negative { -value } else { value })
    }
}
