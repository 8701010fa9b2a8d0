use std::io::{BufRead, Write};

use crate::interpreter::{
    evaluator::core::eval_program,
    lexer::Lexer,
    parser::core::Parser,
    value::environment::Environment,
};

/// The prompt printed before every line of input.
pub const PROMPT: &str = ">> ";

/// Drives an interactive session over the given reader and writer.
///
/// Each line is lexed, parsed and evaluated on its own, but every line of
/// a session shares one environment, so bindings persist between inputs.
/// Parse errors are printed one per line, indented by a tab, and skip
/// evaluation for that input; runtime errors print as `ERROR: <message>`.
/// The session ends when the reader runs out of input.
///
/// # Errors
/// Returns any I/O error raised by the reader or writer.
pub fn start(input: &mut impl BufRead, output: &mut impl Write) -> std::io::Result<()> {
    let env = Environment::new();
    let mut line = String::new();

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let mut parser = Parser::new(Lexer::new(&line));
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            for error in parser.errors() {
                writeln!(output, "\t{error}")?;
            }
            continue;
        }

        match eval_program(&program, &env) {
            Ok(Some(value)) => writeln!(output, "{value}")?,
            Ok(None) => {},
            Err(error) => writeln!(output, "ERROR: {error}")?,
        }
    }
}
