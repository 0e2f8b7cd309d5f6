//! Static scope chain.
//!
//! A stack of flat name-to-symbol maps, innermost last. The checker itself
//! only ever uses the root scope: blocks, branches and loop bodies do not
//! introduce scopes, so a variable assigned inside an `if` stays visible
//! after it.

use rustc_hash::FxHashMap;

use crate::TypeInfo;

/// A variable as the checker last saw it assigned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    /// `None` if the assigned value's type could not be inferred.
    pub ty: Option<TypeInfo>,
}

impl Symbol {
    pub fn new(name: impl Into<String>, ty: Option<TypeInfo>) -> Self {
        Symbol {
            name: name.into(),
            ty,
        }
    }
}

/// One level of the chain.
#[derive(Clone, Debug, Default)]
pub struct Scope {
    pub name: String,
    symbols: FxHashMap<String, Symbol>,
}

impl Scope {
    fn new(name: impl Into<String>) -> Self {
        Scope {
            name: name.into(),
            symbols: FxHashMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct SymbolTable {
    /// Never empty: index 0 is the root scope.
    scopes: Vec<Scope>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolTable {
    /// A chain holding only the root scope, named `root`.
    pub fn new() -> Self {
        SymbolTable {
            scopes: vec![Scope::new("root")],
        }
    }

    /// Define or overwrite `symbol` in the innermost scope.
    pub fn put(&mut self, symbol: Symbol) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.symbols.insert(symbol.name.clone(), symbol);
        }
    }

    /// Look `name` up from the innermost scope outwards.
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.symbols.get(name))
    }

    pub fn push_scope(&mut self, name: impl Into<String>) {
        self.scopes.push(Scope::new(name));
    }

    /// Remove and return the innermost scope. The root scope is never popped.
    pub fn pop_scope(&mut self) -> Option<Scope> {
        if self.scopes.len() > 1 {
            self.scopes.pop()
        } else {
            None
        }
    }

    /// Name of the innermost scope.
    pub fn name(&self) -> &str {
        self.scopes.last().map_or("root", |scope| scope.name.as_str())
    }

    /// Name of the scope enclosing the innermost one; `None` at the root.
    pub fn parent(&self) -> Option<&str> {
        let depth = self.scopes.len();
        if depth < 2 {
            return None;
        }
        self.scopes.get(depth - 2).map(|scope| scope.name.as_str())
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}
