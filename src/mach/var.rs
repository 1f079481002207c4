use super::Frame;
use crate::error;
use crate::lang::Error;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Variable memory
///
/// A stack of scopes. Writes go to the innermost scope, reads search
/// outward. The base scope can't be removed.

#[derive(Debug)]
pub struct Var {
    scopes: Vec<HashMap<Rc<str>, Frame>>,
}

impl Default for Var {
    fn default() -> Var {
        Var {
            scopes: vec![HashMap::new()],
        }
    }
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    pub fn pop_scope(&mut self) -> Result<()> {
        if self.scopes.len() <= 1 {
            return Err(error!(StackEmpty; "NO SCOPE TO REMOVE"));
        }
        self.scopes.pop();
        Ok(())
    }

    pub fn fetch(&self, var_name: &str) -> Option<&Frame> {
        self.scopes.iter().rev().find_map(|scope| scope.get(var_name))
    }

    pub fn store(&mut self, var_name: &str, value: Frame) {
        if let Some(scope) = self.scopes.last_mut() {
            match scope.get_mut(var_name) {
                Some(var) => *var = value,
                None => {
                    scope.insert(var_name.into(), value);
                }
            }
        }
    }

    pub fn remove(&mut self, var_name: &str) -> Result<Frame> {
        match self.scopes.last_mut().and_then(|scope| scope.remove(var_name)) {
            Some(frame) => Ok(frame),
            None => Err(error!(NotFound; var_name)),
        }
    }

    /// Every name visible from the innermost scope, sorted.
    pub fn names(&self) -> Vec<Rc<str>> {
        let names: BTreeSet<&Rc<str>> = self.scopes.iter().flat_map(|s| s.keys()).collect();
        names.into_iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_shadowing() {
        let mut v = Var::new();
        v.store("x", Frame::real(1.0));
        v.push_scope();
        assert_eq!(v.fetch("x"), Some(&Frame::real(1.0)));
        v.store("x", Frame::real(2.0));
        assert_eq!(v.fetch("x"), Some(&Frame::real(2.0)));
        v.pop_scope().unwrap();
        assert_eq!(v.fetch("x"), Some(&Frame::real(1.0)));
    }

    #[test]
    fn test_base_scope_is_permanent() {
        let mut v = Var::new();
        assert_eq!(v.pop_scope().unwrap_err().code(), ErrorCode::StackEmpty);
        assert_eq!(v.depth(), 1);
    }

    #[test]
    fn test_remove_only_innermost() {
        let mut v = Var::new();
        v.store("x", Frame::real(1.0));
        v.push_scope();
        assert_eq!(v.remove("x").unwrap_err().code(), ErrorCode::NotFound);
        v.pop_scope().unwrap();
        assert!(v.remove("x").is_ok());
        assert!(v.fetch("x").is_none());
    }

    #[test]
    fn test_names_deduplicated() {
        let mut v = Var::new();
        v.store("b", Frame::real(1.0));
        v.push_scope();
        v.store("b", Frame::real(2.0));
        v.store("a", Frame::real(3.0));
        let names: Vec<String> = v.names().iter().map(|n| n.to_string()).collect();
        assert_eq!(names, ["a", "b"]);
    }
}
