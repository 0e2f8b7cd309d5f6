//! Instruction parsing.

use mtx_ir::{
    AssignOp, AssignTarget, Block, Expr, MatrixRef, Range, RelOp, Stmt, StmtKind, VectorRef,
};
use mtx_lexer::TokenKind;
use mtx_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse one instruction.
    pub(crate) fn parse_stmt(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| self.parse_stmt_inner())
    }

    fn parse_stmt_inner(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current_line();
        match self.current_kind() {
            TokenKind::LBrace => {
                let block = self.parse_block()?;
                Ok(Stmt::new(StmtKind::Block(block), line))
            }
            TokenKind::If => self.parse_if(),
            TokenKind::While => self.parse_while(),
            TokenKind::For => self.parse_for(),
            TokenKind::Break => {
                self.advance();
                self.expect(&TokenKind::Semicolon)?;
                Ok(Stmt::new(StmtKind::Break, line))
            }
            TokenKind::Continue => {
                self.advance();
                self.expect(&TokenKind::Semicolon)?;
                Ok(Stmt::new(StmtKind::Continue, line))
            }
            TokenKind::Return => {
                self.advance();
                let value = self.parse_expr()?;
                self.expect(&TokenKind::Semicolon)?;
                Ok(Stmt::new(StmtKind::Return(value), line))
            }
            TokenKind::Print => self.parse_print(),
            TokenKind::Ident(_) => self.parse_assignment(),
            _ => Err(self.unexpected()),
        }
    }

    /// `{ instruction* }`
    fn parse_block(&mut self) -> Result<Block, ParseError> {
        let line = self.expect(&TokenKind::LBrace)?;
        let mut stmts = Vec::new();
        while !self.check(&TokenKind::RBrace) {
            if self.cursor.is_at_end() {
                return Err(self.unexpected());
            }
            stmts.push(self.parse_stmt()?);
        }
        self.advance();
        Ok(Block { stmts, line })
    }

    /// `if ( condition ) instruction [else instruction]`
    ///
    /// `else` binds to the nearest `if`.
    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        let line = self.expect(&TokenKind::If)?;
        let cond = self.parse_paren_condition()?;
        let then_branch = Box::new(self.parse_stmt()?);
        let else_branch = if self.eat(&TokenKind::Else) {
            Some(Box::new(self.parse_stmt()?))
        } else {
            None
        };
        Ok(Stmt::new(
            StmtKind::If {
                cond,
                then_branch,
                else_branch,
            },
            line,
        ))
    }

    /// `while ( condition ) instruction`
    fn parse_while(&mut self) -> Result<Stmt, ParseError> {
        let line = self.expect(&TokenKind::While)?;
        let cond = self.parse_paren_condition()?;
        let body = Box::new(self.parse_stmt()?);
        Ok(Stmt::new(StmtKind::While { cond, body }, line))
    }

    /// `for ID = expr : expr instruction`
    fn parse_for(&mut self) -> Result<Stmt, ParseError> {
        let line = self.expect(&TokenKind::For)?;
        let var = self.expect_ident()?;
        self.expect(&TokenKind::Eq)?;
        let start = self.parse_expr()?;
        self.expect(&TokenKind::Colon)?;
        let end = self.parse_expr()?;
        let range = Range {
            line: start.line,
            start,
            end,
        };
        let body = Box::new(self.parse_stmt()?);
        Ok(Stmt::new(StmtKind::For { var, range, body }, line))
    }

    /// `print item (, item)* ;`
    fn parse_print(&mut self) -> Result<Stmt, ParseError> {
        let line = self.expect(&TokenKind::Print)?;
        let mut values = vec![self.parse_expr()?];
        while self.eat(&TokenKind::Comma) {
            values.push(self.parse_expr()?);
        }
        self.expect(&TokenKind::Semicolon)?;
        Ok(Stmt::new(StmtKind::Print(values), line))
    }

    /// Assignment to a variable or an element:
    ///
    /// - `ID op expr ;` with `op` one of `= += -= *= /=`
    /// - `ID [ INT ] = expr ;`
    /// - `ID [ INT , INT ] = expr ;`
    fn parse_assignment(&mut self) -> Result<Stmt, ParseError> {
        let line = self.current_line();
        let name = self.expect_ident()?;

        if self.eat(&TokenKind::LBracket) {
            let first = self.expect_int()?;
            let target = if self.eat(&TokenKind::Comma) {
                let col = self.expect_int()?;
                AssignTarget::MatrixElement(MatrixRef {
                    name,
                    row: first,
                    col,
                })
            } else {
                AssignTarget::VectorElement(VectorRef { name, index: first })
            };
            self.expect(&TokenKind::RBracket)?;
            self.expect(&TokenKind::Eq)?;
            let value = self.parse_expr()?;
            self.expect(&TokenKind::Semicolon)?;
            return Ok(Stmt::new(
                StmtKind::Assign {
                    op: AssignOp::Assign,
                    target,
                    value,
                },
                line,
            ));
        }

        let op = match self.current_kind() {
            TokenKind::Eq => AssignOp::Assign,
            TokenKind::AddAssign => AssignOp::AddAssign,
            TokenKind::SubAssign => AssignOp::SubAssign,
            TokenKind::MulAssign => AssignOp::MulAssign,
            TokenKind::DivAssign => AssignOp::DivAssign,
            _ => return Err(self.unexpected()),
        };
        self.advance();
        let value = self.parse_expr()?;
        self.expect(&TokenKind::Semicolon)?;
        Ok(Stmt::new(
            StmtKind::Assign {
                op,
                target: AssignTarget::Variable(name),
                value,
            },
            line,
        ))
    }

    /// `( expr relop expr )`
    fn parse_paren_condition(&mut self) -> Result<Expr, ParseError> {
        self.expect(&TokenKind::LParen)?;
        let cond = self.parse_condition()?;
        self.expect(&TokenKind::RParen)?;
        Ok(cond)
    }

    /// `expr relop expr`; relational operators do not chain.
    pub(crate) fn parse_condition(&mut self) -> Result<Expr, ParseError> {
        let left = self.parse_expr()?;
        let op = match self.current_kind() {
            TokenKind::EqEq => RelOp::Eq,
            TokenKind::NotEq => RelOp::NotEq,
            TokenKind::Lt => RelOp::Lt,
            TokenKind::Gt => RelOp::Gt,
            TokenKind::LtEq => RelOp::LtEq,
            TokenKind::GtEq => RelOp::GtEq,
            _ => return Err(self.unexpected()),
        };
        self.advance();
        let right = self.parse_expr()?;
        let line = left.line;
        Ok(Expr::relational(op, left, right, line))
    }

    pub(crate) fn expect_ident(&mut self) -> Result<String, ParseError> {
        if let TokenKind::Ident(name) = self.current_kind() {
            self.advance();
            Ok(name.clone())
        } else {
            Err(self.unexpected())
        }
    }

    pub(crate) fn expect_int(&mut self) -> Result<i64, ParseError> {
        if let TokenKind::Int(value) = self.current_kind() {
            self.advance();
            Ok(*value)
        } else {
            Err(self.unexpected())
        }
    }
}
