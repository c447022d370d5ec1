use std::fmt::{Display, Formatter};

use itertools::Itertools;

use ty::Type;

/// Defines AST datatypes
///
/// Every node owns its children exclusively. The Display impls emit the
/// concrete syntax back, so a dumped tree can be fed to the parser again.

#[derive(Debug, Eq, PartialEq)]
pub struct Program {
    pub func: Function,
}

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Function {
    pub name: String,
    pub return_type: Type,
    pub params: Vec<Variable>,
    pub body: Vec<Stmt>,
}

/// A typed variable or parameter.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Variable {
    pub name: String,
    pub ty: Type,
}

#[derive(Debug, Eq, PartialEq, Clone)]
pub enum Stmt {
    Declaration { var: Variable, init: Option<Expr> },
}

#[derive(Debug, Eq, PartialEq, Clone)]
pub enum Expr {
    Constant(i64),
    Var(String),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.func)
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let params = self.params.iter().map(Variable::to_string).join(", ");
        writeln!(
            f,
            "fonction {}({}): {} {{",
            self.name, params, self.return_type
        )?;
        for stmt in &self.body {
            writeln!(f, "    {}", stmt)?;
        }
        write!(f, "}}")
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Declaration { var, init: None } => write!(f, "{};", var),
            Stmt::Declaration {
                var,
                init: Some(expr),
            } => write!(f, "{} = {};", var, expr),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Constant(value) => write!(f, "{}", value),
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Binary { op, left, right } => write!(f, "{} {} {}", left, op, right),
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinaryOp::Add => '+',
            BinaryOp::Subtract => '-',
            BinaryOp::Multiply => '*',
            BinaryOp::Divide => '/',
            BinaryOp::Modulo => '%',
        };
        write!(f, "{}", symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_display() {
        let var = Variable {
            name: "a".to_string(),
            ty: Type::Int,
        };

        assert_eq!(var.to_string(), "entier a");
    }

    #[test]
    fn declaration_display() {
        let bare = Stmt::Declaration {
            var: Variable {
                name: "b".to_string(),
                ty: Type::Int,
            },
            init: None,
        };
        let initialized = Stmt::Declaration {
            var: Variable {
                name: "b".to_string(),
                ty: Type::Int,
            },
            init: Some(Expr::Constant(1)),
        };

        assert_eq!(bare.to_string(), "entier b;");
        assert_eq!(initialized.to_string(), "entier b = 1;");
    }

    #[test]
    fn expr_display_keeps_infix_order() {
        let expr = Expr::Binary {
            op: BinaryOp::Add,
            left: Box::new(Expr::Constant(1)),
            right: Box::new(Expr::Binary {
                op: BinaryOp::Multiply,
                left: Box::new(Expr::Constant(2)),
                right: Box::new(Expr::Var("x".to_string())),
            }),
        };

        assert_eq!(expr.to_string(), "1 + 2 * x");
    }

    #[test]
    fn function_display() {
        let func = Function {
            name: "f".to_string(),
            return_type: Type::Int,
            params: vec![
                Variable {
                    name: "a".to_string(),
                    ty: Type::Int,
                },
                Variable {
                    name: "b".to_string(),
                    ty: Type::Int,
                },
            ],
            body: vec![Stmt::Declaration {
                var: Variable {
                    name: "c".to_string(),
                    ty: Type::Int,
                },
                init: Some(Expr::Constant(2)),
            }],
        };

        assert_eq!(
            func.to_string(),
            "fonction f(entier a, entier b): entier {\n    entier c = 2;\n}"
        );
    }

    #[test]
    fn empty_function_display() {
        let func = Function {
            name: "f".to_string(),
            return_type: Type::Void,
            params: vec![],
            body: vec![],
        };

        assert_eq!(func.to_string(), "fonction f(): rien {\n}");
    }
}
