use thiserror::Error;

use ast::*;
use lexer::*;
use symbols::{SymbolKind, SymbolTable};
use ty::Type;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected keyword 'fonction', found '{0}'")]
    ExpectedFunction(String),
    #[error("expected a function name")]
    MissingFunctionName,
    #[error("expected a variable name")]
    MissingVariableName,
    #[error("'{0}' is not a type")]
    InvalidType(String),
    #[error("'{0}' is already declared")]
    Redeclaration(String),
    #[error("expected ';' or '=' after a declaration, found '{0}'")]
    BadDeclarator(char),
    #[error("expected ')' or ',' in a parameter list, found '{0}'")]
    BadParameterList(char),
    #[error("statement '{0}' is not supported")]
    UnsupportedStatement(String),
    #[error("empty expression")]
    EmptyExpression,
    #[error("malformed expression")]
    MalformedExpression,
    #[error(transparent)]
    Lex(#[from] LexError),
}

pub struct Parser<'a> {
    lexer: Lexer<'a>,
    symbols: SymbolTable,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lexer: Lexer::new(source),
            symbols: SymbolTable::new(),
        }
    }

    /// Unconsumed input, for the trailing-input check and the error dump
    pub fn remainder(&self) -> &'a str {
        self.lexer.remainder()
    }

    /// Names collected so far, parameters and locals alike
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn parse(&mut self) -> Result<Program, ParseError> {
        let func = self.parse_function()?;

        Ok(Program { func })
    }

    fn parse_function(&mut self) -> Result<Function, ParseError> {
        match self.lexer.word() {
            Some(word) if word == "fonction" => {}
            Some(word) => return Err(ParseError::ExpectedFunction(word)),
            None => return Err(self.not_a_word().into()),
        }

        let name = self.lexer.word().ok_or(ParseError::MissingFunctionName)?;
        let params = self.parse_params()?;
        let return_type = self.parse_return_type()?;
        let body = self.parse_body()?;

        Ok(Function {
            name,
            return_type,
            params,
            body,
        })
    }

    fn parse_params(&mut self) -> Result<Vec<Variable>, ParseError> {
        self.lexer.expect_punct('(')?;

        let mut params = Vec::new();

        // an immediately closing paren is an empty parameter list
        if self.lexer.peek_punct() == Some(')') {
            self.lexer.expect_punct(')')?;
            return Ok(params);
        }

        loop {
            let ty = self.parse_var_type()?;
            let name = self.lexer.word().ok_or(ParseError::MissingVariableName)?;
            let var = Variable { name, ty };

            self.declare(SymbolKind::Parameter, &var)?;
            params.push(var);

            match self.lexer.punct()? {
                ')' => break,
                ',' => continue,
                c => return Err(ParseError::BadParameterList(c)),
            }
        }

        Ok(params)
    }

    fn parse_return_type(&mut self) -> Result<Type, ParseError> {
        self.lexer.expect_punct(':')?;

        let word = self.word_or_fail()?;
        Type::from_keyword(&word).ok_or(ParseError::InvalidType(word))
    }

    fn parse_body(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.lexer.expect_punct('{')?;

        let mut body = Vec::new();

        loop {
            match self.lexer.peek_punct() {
                Some('}') => {
                    self.lexer.expect_punct('}')?;
                    break;
                }
                Some(_) => body.push(self.parse_statement()?),
                None => return Err(LexError::UnexpectedEof.into()),
            }
        }

        Ok(body)
    }

    /// One statement. The next lexeme is peeked, not consumed, so the
    /// declaration parser reads its own type keyword.
    fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.lexer.peek_word() {
            Some(word) if word == "entier" => self.parse_declaration(),
            Some(word) => Err(ParseError::UnsupportedStatement(word)),
            None => Err(self.not_a_word().into()),
        }
    }

    /// `<type> <name>` followed by `;` or `= <expression>`. The name goes
    /// into the symbol table before the declarator is read; a failure after
    /// that point does not take it back out.
    fn parse_declaration(&mut self) -> Result<Stmt, ParseError> {
        let ty = self.parse_var_type()?;
        let name = self.lexer.word().ok_or(ParseError::MissingVariableName)?;
        let var = Variable { name, ty };

        self.declare(SymbolKind::Variable, &var)?;

        match self.lexer.punct()? {
            ';' => Ok(Stmt::Declaration { var, init: None }),
            '=' => {
                let init = self.parse_expression()?;

                Ok(Stmt::Declaration {
                    var,
                    init: Some(init),
                })
            }
            c => Err(ParseError::BadDeclarator(c)),
        }
    }

    /// One expression, up to and including the `;` that ends it.
    ///
    /// Symbols move from the input through a working stack into an output
    /// stack ordered for evaluation, then fold into a tree. A symbol goes on
    /// top of the working stack while the stack below it binds less; once
    /// the top binds at least as strongly as the incoming symbol, tops move
    /// to the output until it no longer does.
    fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let mut working: Vec<Token> = Vec::new();
        let mut output: Vec<Token> = Vec::new();

        let mut incoming = self.lexer.token()?;

        // the empty working stack doubles as the start sentinel: its
        // precedence 0 matches the end marker and nothing else
        while !(working.is_empty() && incoming == Token::End) {
            let top = working.last().map_or(0, precedence);

            if top < precedence(&incoming) {
                working.push(incoming);
                incoming = self.lexer.token()?;
            } else {
                // pops at least one symbol, so the loop always shrinks
                // something; popping on equal precedence keeps operator
                // chains left-associative
                while working.last().map_or(0, precedence) >= precedence(&incoming) {
                    match working.pop() {
                        Some(top) => output.push(top),
                        None => break,
                    }
                }
            }
        }

        fold_expression(&mut output)
    }

    fn parse_var_type(&mut self) -> Result<Type, ParseError> {
        let word = self.word_or_fail()?;

        // `rien` types nothing, only a return type may use it
        match Type::from_keyword(&word) {
            Some(Type::Int) => Ok(Type::Int),
            _ => Err(ParseError::InvalidType(word)),
        }
    }

    /// Look the name up before inserting it; the single flat scope makes
    /// any second sighting a redeclaration.
    fn declare(&mut self, kind: SymbolKind, var: &Variable) -> Result<(), ParseError> {
        if self.symbols.is_defined(&var.name) {
            return Err(ParseError::Redeclaration(var.name.clone()));
        }

        self.symbols.add(kind, var.clone());

        Ok(())
    }

    fn word_or_fail(&mut self) -> Result<String, ParseError> {
        match self.lexer.word() {
            Some(word) => Ok(word),
            None => Err(self.not_a_word().into()),
        }
    }

    /// What stands at the cursor when a word was required
    fn not_a_word(&mut self) -> LexError {
        match self.lexer.peek_punct() {
            Some(c) => LexError::UnexpectedChar(c),
            None => LexError::UnexpectedEof,
        }
    }
}

/// Binding strength of a symbol on the stacks. Operands outrank every
/// operator so they never wait behind one; the end marker ranks below
/// everything, level with the empty stack.
fn precedence(token: &Token) -> i32 {
    match token {
        Token::Number(_) | Token::Ident(_) => 60,
        Token::Star | Token::Slash | Token::Percent => 50,
        Token::Plus | Token::Minus => 45,
        Token::End => 0,
    }
}

/// Rebuild the tree from the evaluation-ordered output stack. Leftover
/// symbols after the fold mean the input was not one expression.
fn fold_expression(output: &mut Vec<Token>) -> Result<Expr, ParseError> {
    if output.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let expr = fold_node(output)?;

    if output.is_empty() {
        Ok(expr)
    } else {
        Err(ParseError::MalformedExpression)
    }
}

/// An operator absorbs its right child first, then its left; operands are
/// leaves.
fn fold_node(output: &mut Vec<Token>) -> Result<Expr, ParseError> {
    match output.pop() {
        Some(Token::Number(value)) => Ok(Expr::Constant(value)),
        Some(Token::Ident(name)) => Ok(Expr::Var(name)),
        Some(token) => {
            let right = fold_node(output)?;
            let left = fold_node(output)?;

            Ok(Expr::Binary {
                op: binary_op(&token),
                left: Box::new(left),
                right: Box::new(right),
            })
        }
        None => Err(ParseError::MalformedExpression),
    }
}

fn binary_op(token: &Token) -> BinaryOp {
    match token {
        Token::Plus => BinaryOp::Add,
        Token::Minus => BinaryOp::Subtract,
        Token::Star => BinaryOp::Multiply,
        Token::Slash => BinaryOp::Divide,
        Token::Percent => BinaryOp::Modulo,
        _ => unreachable!("Not a binary operator: '{:?}'", token),
    }
}
