//! Runtime variable storage.
//!
//! A stack of flat name-to-value frames searched top to bottom. The
//! interpreter itself runs every program in the single global frame; blocks
//! and loops never push frames, so assignments inside them stay visible
//! afterwards.

use rustc_hash::FxHashMap;

use crate::Value;

/// One frame of bindings.
#[derive(Clone, Debug, Default)]
pub struct Memory {
    name: String,
    bindings: FxHashMap<String, Value>,
}

impl Memory {
    pub fn new(name: impl Into<String>) -> Self {
        Memory {
            name: name.into(),
            bindings: FxHashMap::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn put(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// The frame stack. Never empty: the bottom frame is the global one.
#[derive(Clone, Debug)]
pub struct MemoryStack {
    frames: Vec<Memory>,
}

impl Default for MemoryStack {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStack {
    /// A stack holding one empty frame named `global`.
    pub fn new() -> Self {
        Self::with_global(Memory::new("global"))
    }

    /// A stack whose global frame is `memory`.
    pub fn with_global(memory: Memory) -> Self {
        MemoryStack {
            frames: vec![memory],
        }
    }

    /// Find `name`, innermost frame first.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }

    /// The value of `name`, or [`Value::Null`] if it was never assigned.
    pub fn get(&self, name: &str) -> Value {
        self.lookup(name).cloned().unwrap_or(Value::Null)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.frames
            .iter_mut()
            .rev()
            .find_map(|frame| frame.bindings.get_mut(name))
    }

    /// Bind `name` in the innermost frame.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        if let Some(frame) = self.frames.last_mut() {
            frame.put(name, value);
        }
    }

    /// Overwrite `name` in the innermost frame that has it, or bind it in
    /// the innermost frame if none does.
    pub fn set(&mut self, name: &str, value: Value) {
        match self.get_mut(name) {
            Some(slot) => *slot = value,
            None => self.insert(name, value),
        }
    }

    pub fn push(&mut self, memory: Memory) {
        self.frames.push(memory);
    }

    /// Pop the innermost frame. The global frame is never popped.
    pub fn pop(&mut self) -> Option<Memory> {
        if self.frames.len() > 1 {
            self.frames.pop()
        } else {
            None
        }
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn global(&self) -> &Memory {
        &self.frames[0]
    }
}

#[cfg(test)]
mod tests;
