use crate::{
    ast::{BlockStatement, Statement},
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses a single statement starting at the current token.
    ///
    /// A statement is one of:
    /// - a `låt` binding,
    /// - a `tillbaka` statement,
    /// - an expression used as a statement.
    ///
    /// Each form accepts an optional trailing semicolon; the parser is left
    /// positioned on the statement's last token.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current {
            Some(Token::Let) => self.parse_let_statement(),
            Some(Token::Return) => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `låt <name> = <expression>;`.
    ///
    /// # Errors
    /// Returns a `ParseError` if the name or the `=` is missing, or if the
    /// value expression is malformed.
    fn parse_let_statement(&mut self) -> ParseResult<Statement> {
        let name = self.expect_identifier()?;
        self.expect_peek(&Token::Assign)?;
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.consume_optional_semicolon();

        Ok(Statement::Let { name, value })
    }

    /// Parses `tillbaka <expression>;`.
    fn parse_return_statement(&mut self) -> ParseResult<Statement> {
        self.advance();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.consume_optional_semicolon();

        Ok(Statement::Return { value })
    }

    /// Parses an expression in statement position.
    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.consume_optional_semicolon();

        Ok(Statement::Expression { expression })
    }

    /// Parses the statements of a block, starting at its opening brace.
    ///
    /// The block ends at the matching `}` or, failing that, at the end of
    /// the input; the parser is left positioned on whichever ended it.
    pub(in crate::interpreter::parser) fn parse_block_statement(
        &mut self,
    ) -> ParseResult<BlockStatement> {
        let mut statements = Vec::new();
        self.advance();

        while let Some(token) = &self.current {
            if *token == Token::RBrace {
                break;
            }
            statements.push(self.parse_statement()?);
            self.advance();
        }

        Ok(BlockStatement { statements })
    }
}
