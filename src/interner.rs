//! Process-wide symbol interning.
//!
//! Symbols (head tags, identifiers in expressions) are interned once and
//! compared by key thereafter. The pool only ever grows; a `Symbol` is a
//! `Copy` handle that resolves back to its name on demand.

use std::fmt;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use string_interner::{DefaultBackend, DefaultSymbol, StringInterner};

static POOL: Lazy<RwLock<StringInterner<DefaultBackend>>> =
    Lazy::new(|| RwLock::new(StringInterner::default()));

// ============================================================================
// Symbol
// ============================================================================

/// An interned symbol, compared and hashed by pool key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(DefaultSymbol);

impl Symbol {
    /// Intern `name`, returning its handle. Interning the same name twice
    /// yields equal symbols.
    pub fn intern(name: &str) -> Self {
        let mut pool = POOL.write().unwrap_or_else(|e| e.into_inner());
        Symbol(pool.get_or_intern(name))
    }

    /// Resolve the symbol back to its name.
    pub fn resolve(&self) -> String {
        let pool = POOL.read().unwrap_or_else(|e| e.into_inner());
        // A Symbol can only be obtained through intern, so the key is
        // always present.
        pool.resolve(self.0).unwrap_or_default().to_string()
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::intern(name)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resolve())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.resolve())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_idempotent() {
        let a = Symbol::intern("sin");
        let b = Symbol::intern("sin");
        assert_eq!(a, b);
        assert_eq!(a.resolve(), "sin");
    }

    #[test]
    fn distinct_names_distinct_symbols() {
        assert_ne!(Symbol::intern("car"), Symbol::intern("cdr"));
    }
}
