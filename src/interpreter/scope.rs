use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::value::{Builtin, CapturedEnv, RValue, ScopeFrame};

/// Manages lexical scoping during interpretation
pub struct Scope {
    frames: Vec<ScopeFrame>,
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl Scope {
    /// Create a scope whose global frame holds the builtins
    pub fn new() -> Self {
        let globals = HashMap::from([("console".to_string(), RValue::Builtin(Builtin::Console))]);
        Self {
            frames: vec![Rc::new(RefCell::new(globals))],
        }
    }

    /// Enter a new scope frame
    pub fn enter(&mut self) {
        self.frames.push(Rc::new(RefCell::new(HashMap::new())));
    }

    /// Leave the current scope frame
    pub fn leave(&mut self) {
        self.frames.pop();
    }

    /// Resolve a name by searching from innermost to outermost scope
    pub fn resolve(&self, name: impl AsRef<str>) -> Option<RValue> {
        let key = name.as_ref();
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.borrow().get(key).cloned())
    }

    /// Add a binding to the current (innermost) scope
    pub fn add(&mut self, name: impl ToString, value: RValue) {
        self.frames
            .last()
            .expect("scope stack should not be empty")
            .borrow_mut()
            .insert(name.to_string(), value);
    }

    /// Share the current frame chain with a closure being created
    pub fn capture(&self) -> CapturedEnv {
        CapturedEnv(self.frames.clone())
    }

    /// Switch to a closure's environment, returning the frames to restore afterwards
    pub fn switch_to(&mut self, env: &CapturedEnv) -> Vec<ScopeFrame> {
        std::mem::replace(&mut self.frames, env.0.clone())
    }

    /// Go back to the frames returned by [`Scope::switch_to`]
    pub fn restore(&mut self, frames: Vec<ScopeFrame>) {
        self.frames = frames;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_bindings_shadow_outer_ones() {
        let mut scope = Scope::new();
        scope.add("x", RValue::Number(1.0));
        scope.enter();
        scope.add("x", RValue::Number(2.0));
        assert!(matches!(scope.resolve("x"), Some(RValue::Number(n)) if n == 2.0));
        scope.leave();
        assert!(matches!(scope.resolve("x"), Some(RValue::Number(n)) if n == 1.0));
    }

    #[test]
    fn captured_frames_see_later_bindings() {
        let mut scope = Scope::new();
        let env = scope.capture();
        scope.add("late", RValue::Bool(true));

        let saved = scope.switch_to(&env);
        assert!(matches!(scope.resolve("late"), Some(RValue::Bool(true))));
        scope.restore(saved);
    }

    #[test]
    fn console_is_a_global() {
        let scope = Scope::new();
        assert!(matches!(
            scope.resolve("console"),
            Some(RValue::Builtin(Builtin::Console))
        ));
    }
}
