use super::Engine;
use crate::lang::Error;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

/// An operator implementation. It receives the engine and reports
/// failure through the returned error.
pub type Handler = Rc<dyn Fn(&mut Engine) -> Result<(), Error>>;

/// ## Registered operator

#[derive(Clone)]
pub struct Operator {
    pub handler: Handler,
    pub category: Rc<str>,
    pub help: Rc<str>,
}

impl std::fmt::Debug for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Operator {{ {}: {} }}", self.category, self.help)
    }
}

/// ## Token to operator table
///
/// Registering a token a second time replaces the first entry.

#[derive(Debug, Default)]
pub struct Registry {
    ops: HashMap<Rc<str>, Operator>,
}

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    pub fn insert(&mut self, token: &str, op: Operator) -> Option<Operator> {
        self.ops.insert(token.into(), op)
    }

    pub fn get(&self, token: &str) -> Option<&Operator> {
        self.ops.get(token)
    }

    pub fn handler(&self, token: &str) -> Option<Handler> {
        self.ops.get(token).map(|op| op.handler.clone())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.ops.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn help(&self, token: &str) -> Option<&str> {
        self.ops.get(token).map(|op| op.help.as_ref())
    }

    pub fn categories(&self) -> Vec<Rc<str>> {
        let set: BTreeSet<&Rc<str>> = self.ops.values().map(|op| &op.category).collect();
        set.into_iter().cloned().collect()
    }

    pub fn tokens_in(&self, category: &str) -> Vec<Rc<str>> {
        let mut tokens: Vec<Rc<str>> = self
            .ops
            .iter()
            .filter(|(_, op)| op.category.as_ref() == category)
            .map(|(token, _)| token.clone())
            .collect();
        tokens.sort();
        tokens
    }
}
