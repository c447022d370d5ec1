use std::collections::HashMap;

use ast::Variable;

/// What introduced a name into the table.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum SymbolKind {
    Parameter,
    Variable,
}

/// One table entry. Holds a description of the AST node that introduced the
/// name; the tree itself keeps exclusive ownership of its nodes.
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub var: Variable,
}

/// Flat single-scope symbol table. Uniqueness is the caller's job: look the
/// name up before adding it.
pub struct SymbolTable {
    pub symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            symbols: HashMap::with_capacity(20),
        }
    }

    pub fn add(&mut self, kind: SymbolKind, var: Variable) {
        self.symbols.insert(var.name.clone(), Symbol { kind, var });
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
