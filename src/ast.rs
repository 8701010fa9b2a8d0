use std::fmt;

/// A complete parsed source unit: the ordered sequence of its statements.
///
/// The `Display` rendering concatenates the statements' renderings, which is
/// the canonical textual form used by the REPL and the parser tests.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// An abstract syntax tree (AST) node representing a statement.
///
/// Statements are the units the parser produces at the top level of a
/// program and inside blocks. Every variant models a distinct syntactic
/// construct.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable binding: `låt <name> = <value>;`.
    Let {
        /// The bound name.
        name: String,
        /// The expression producing the bound value.
        value: Expression,
    },
    /// An early return from a function body: `tillbaka <value>;`.
    Return {
        /// The returned expression.
        value: Expression,
    },
    /// An expression evaluated for its value.
    Expression {
        /// The inner expression.
        expression: Expression,
    },
}

/// A brace-delimited sequence of statements.
///
/// Blocks appear as the branches of `om` expressions and as function
/// bodies; they are not statements of their own.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStatement {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expression` covers all value-producing constructs, from literals and
/// identifiers to operator applications, conditionals, function literals,
/// calls and indexing.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Reference to a binding by name.
    Identifier {
        /// Name of the binding.
        name: String,
    },
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The literal value.
        value: i64,
    },
    /// A boolean literal: `sant` or `falskt`.
    BooleanLiteral {
        /// The literal value.
        value: bool,
    },
    /// A string literal.
    StringLiteral {
        /// The literal text, without the quotes.
        value: String,
    },
    /// An array literal: `[e1, e2, ...]`.
    ArrayLiteral {
        /// Elements of the array.
        elements: Vec<Expression>,
    },
    /// A hash literal: `{key: value, ...}`. Recognized by the parser; the
    /// evaluator has no rule for it.
    HashLiteral {
        /// Key/value pairs in source order.
        pairs: Vec<(Expression, Expression)>,
    },
    /// A prefix operator application (e.g. `!x`, `-x`).
    Prefix {
        /// The prefix operator.
        operator: PrefixOperator,
        /// The operand.
        right: Box<Expression>,
    },
    /// An infix operator application (e.g. `x + y`).
    Infix {
        /// Left operand.
        left: Box<Expression>,
        /// The operator.
        operator: InfixOperator,
        /// Right operand.
        right: Box<Expression>,
    },
    /// A conditional: `om (<condition>) { ... }` with an optional
    /// `annars { ... }` branch.
    If {
        /// The condition expression.
        condition: Box<Expression>,
        /// Block evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Block evaluated otherwise, if present.
        alternative: Option<BlockStatement>,
    },
    /// A function literal: `funktion(a, b) { ... }`.
    FunctionLiteral {
        /// Parameter names in declaration order.
        parameters: Vec<String>,
        /// The function body.
        body: BlockStatement,
    },
    /// A call: `<function>(<arguments>)`.
    Call {
        /// The callee expression.
        function: Box<Expression>,
        /// Argument expressions in call order.
        arguments: Vec<Expression>,
    },
    /// An index access: `<left>[<index>]`.
    Index {
        /// The indexed expression.
        left: Box<Expression>,
        /// The index expression.
        index: Box<Expression>,
    },
}

/// Represents a prefix (unary) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Truthiness negation (`!x`).
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
}

/// Represents an infix (binary) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Lt,
    /// Greater than (`>`)
    Gt,
    /// Equal to (`==`)
    Eq,
    /// Not equal to (`!=`)
    NotEq,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "låt {name} = {value};"),
            Self::Return { value } => write!(f, "tillbaka {value};"),
            Self::Expression { expression } => write!(f, "{expression}"),
        }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name } => write!(f, "{name}"),
            Self::IntegerLiteral { value } => write!(f, "{value}"),
            Self::BooleanLiteral { value } => {
                write!(f, "{}", if *value { "sant" } else { "falskt" })
            },
            Self::StringLiteral { value } => write!(f, "{value}"),
            Self::ArrayLiteral { elements } => {
                write!(f, "[{}]", join(elements))
            },
            Self::HashLiteral { pairs } => {
                let pairs = pairs
                    .iter()
                    .map(|(key, value)| format!("{key}:{value}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{{{pairs}}}")
            },
            Self::Prefix { operator, right } => write!(f, "({operator}{right})"),
            Self::Infix { left, operator, right } => write!(f, "({left} {operator} {right})"),
            Self::If { condition, consequence, alternative } => {
                write!(f, "om{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, "annars {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body } => {
                write!(f, "funktion({}) {body}", parameters.join(", "))
            },
            Self::Call { function, arguments } => {
                write!(f, "{function}({})", join(arguments))
            },
            Self::Index { left, index } => write!(f, "({left}[{index}])"),
        }
    }
}

/// Renders a list of expressions separated by `", "`.
fn join(expressions: &[Expression]) -> String {
    expressions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
