use crate::{
    ast::{Expression, InfixOperator, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses an expression starting at the current token.
    ///
    /// This is the heart of the Pratt parser. The current token's prefix
    /// rule produces the left operand; the loop then folds in infix
    /// operators for as long as the peek token binds more strongly than
    /// `precedence`, so `a + b * c` groups the product before the sum.
    ///
    /// # Parameters
    /// - `precedence`: The binding strength of the context this expression
    ///   appears in.
    ///
    /// # Returns
    /// The parsed expression node.
    ///
    /// # Errors
    /// - `NoPrefixParseFn` if no expression can start with the current
    ///   token.
    /// - `IllegalToken` if the lexer could not recognize the input here.
    /// - Propagates any error from sub-expression parsing.
    pub(in crate::interpreter::parser) fn parse_expression(
        &mut self,
        precedence: Precedence,
    ) -> ParseResult<Expression> {
        let mut left = self.parse_prefix()?;

        while precedence < self.peek_precedence() {
            left = match &self.peek {
                Some(Token::Plus) => self.parse_infix_expression(left, InfixOperator::Add)?,
                Some(Token::Minus) => self.parse_infix_expression(left, InfixOperator::Sub)?,
                Some(Token::Asterisk) => self.parse_infix_expression(left, InfixOperator::Mul)?,
                Some(Token::Slash) => self.parse_infix_expression(left, InfixOperator::Div)?,
                Some(Token::Lt) => self.parse_infix_expression(left, InfixOperator::Lt)?,
                Some(Token::Gt) => self.parse_infix_expression(left, InfixOperator::Gt)?,
                Some(Token::Equal) => self.parse_infix_expression(left, InfixOperator::Eq)?,
                Some(Token::NotEqual) => self.parse_infix_expression(left, InfixOperator::NotEq)?,
                Some(Token::LParen) => {
                    self.advance();
                    self.parse_call_expression(left)?
                },
                Some(Token::LBracket) => {
                    self.advance();
                    self.parse_index_expression(left)?
                },
                _ => break,
            };
        }

        Ok(left)
    }

    /// Applies the prefix rule for the current token.
    fn parse_prefix(&mut self) -> ParseResult<Expression> {
        match &self.current {
            Some(Token::Ident(name)) => Ok(Expression::Identifier { name: name.clone() }),
            Some(Token::Int(value)) => Ok(Expression::IntegerLiteral { value: *value }),
            Some(Token::Str(value)) => Ok(Expression::StringLiteral { value: value.clone() }),
            Some(Token::True) => Ok(Expression::BooleanLiteral { value: true }),
            Some(Token::False) => Ok(Expression::BooleanLiteral { value: false }),
            Some(Token::Bang) => self.parse_prefix_expression(PrefixOperator::Not),
            Some(Token::Minus) => self.parse_prefix_expression(PrefixOperator::Negate),
            Some(Token::LParen) => self.parse_grouped_expression(),
            Some(Token::If) => self.parse_if_expression(),
            Some(Token::Function) => self.parse_function_literal(),
            Some(Token::LBracket) => self.parse_array_literal(),
            Some(Token::LBrace) => self.parse_hash_literal(),
            Some(Token::Illegal(literal)) => {
                Err(ParseError::IllegalToken { literal: literal.clone() })
            },
            other => Err(ParseError::NoPrefixParseFn { token: Self::describe(other.as_ref()) }),
        }
    }

    /// Parses `!<operand>` or `-<operand>`.
    fn parse_prefix_expression(&mut self, operator: PrefixOperator) -> ParseResult<Expression> {
        self.advance();
        let right = self.parse_expression(Precedence::Prefix)?;

        Ok(Expression::Prefix { operator, right: Box::new(right) })
    }

    /// Parses the right operand of a binary operator and folds it with
    /// `left`.
    ///
    /// The right operand is parsed at the operator's own precedence, which
    /// makes every binary operator left-associative.
    fn parse_infix_expression(
        &mut self,
        left: Expression,
        operator: InfixOperator,
    ) -> ParseResult<Expression> {
        self.advance();
        let precedence = self.current_precedence();
        self.advance();
        let right = self.parse_expression(precedence)?;

        Ok(Expression::Infix { left: Box::new(left), operator, right: Box::new(right) })
    }

    /// Parses `(<expression>)`.
    fn parse_grouped_expression(&mut self) -> ParseResult<Expression> {
        self.advance();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(&Token::RParen)?;

        Ok(expression)
    }

    /// Parses `om (<condition>) { ... }` with an optional
    /// `annars { ... }` branch.
    fn parse_if_expression(&mut self) -> ParseResult<Expression> {
        self.expect_peek(&Token::LParen)?;
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(&Token::RParen)?;
        self.expect_peek(&Token::LBrace)?;
        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek == Some(Token::Else) {
            self.advance();
            self.expect_peek(&Token::LBrace)?;
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Ok(Expression::If { condition: Box::new(condition), consequence, alternative })
    }

    /// Parses `funktion(<parameters>) { ... }`.
    fn parse_function_literal(&mut self) -> ParseResult<Expression> {
        self.expect_peek(&Token::LParen)?;
        let parameters = self.parse_function_parameters()?;
        self.expect_peek(&Token::LBrace)?;
        let body = self.parse_block_statement()?;

        Ok(Expression::FunctionLiteral { parameters, body })
    }

    /// Parses a possibly empty, comma-separated parameter list, ending on
    /// the closing parenthesis.
    fn parse_function_parameters(&mut self) -> ParseResult<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek == Some(Token::RParen) {
            self.advance();
            return Ok(parameters);
        }

        parameters.push(self.expect_identifier()?);
        while self.peek == Some(Token::Comma) {
            self.advance();
            parameters.push(self.expect_identifier()?);
        }
        self.expect_peek(&Token::RParen)?;

        Ok(parameters)
    }

    /// Parses the argument list of a call, with `left` as the callee.
    fn parse_call_expression(&mut self, left: Expression) -> ParseResult<Expression> {
        let arguments = self.parse_expression_list(&Token::RParen)?;

        Ok(Expression::Call { function: Box::new(left), arguments })
    }

    /// Parses `[e1, e2, ...]`.
    fn parse_array_literal(&mut self) -> ParseResult<Expression> {
        let elements = self.parse_expression_list(&Token::RBracket)?;

        Ok(Expression::ArrayLiteral { elements })
    }

    /// Parses a possibly empty, comma-separated expression list closed by
    /// `end`.
    ///
    /// Shared by call arguments and array literals; the parser starts on
    /// the opening delimiter and ends on `end`.
    fn parse_expression_list(&mut self, end: &Token) -> ParseResult<Vec<Expression>> {
        let mut items = Vec::new();

        if self.peek.as_ref() == Some(end) {
            self.advance();
            return Ok(items);
        }

        self.advance();
        items.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek == Some(Token::Comma) {
            self.advance();
            self.advance();
            items.push(self.parse_expression(Precedence::Lowest)?);
        }
        self.expect_peek(end)?;

        Ok(items)
    }

    /// Parses `<left>[<index>]`.
    fn parse_index_expression(&mut self, left: Expression) -> ParseResult<Expression> {
        self.advance();
        let index = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek(&Token::RBracket)?;

        Ok(Expression::Index { left: Box::new(left), index: Box::new(index) })
    }

    /// Parses `{<key>: <value>, ...}`, the parse-only hash literal form.
    fn parse_hash_literal(&mut self) -> ParseResult<Expression> {
        let mut pairs = Vec::new();

        while self.peek.as_ref() != Some(&Token::RBrace) {
            self.advance();
            let key = self.parse_expression(Precedence::Lowest)?;
            self.expect_peek(&Token::Colon)?;
            self.advance();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if self.peek.as_ref() != Some(&Token::RBrace) {
                self.expect_peek(&Token::Comma)?;
            }
        }
        self.expect_peek(&Token::RBrace)?;

        Ok(Expression::HashLiteral { pairs })
    }
}
