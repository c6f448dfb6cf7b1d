//! Named animation parameters written by gameplay and read by presentation.

use bevy::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimatorValue {
    Bool(bool),
    Float(f32),
    Int(i32),
}

/// Parameter table of a sprite's animation state machine.
#[derive(Component, Debug, Default, Clone)]
pub struct AnimatorParameters {
    values: HashMap<String, AnimatorValue>,
}

impl AnimatorParameters {
    pub fn set_bool(&mut self, name: &str, value: bool) {
        self.set(name, AnimatorValue::Bool(value));
    }

    pub fn set_float(&mut self, name: &str, value: f32) {
        self.set(name, AnimatorValue::Float(value));
    }

    pub fn set_int(&mut self, name: &str, value: i32) {
        self.set(name, AnimatorValue::Int(value));
    }

    fn set(&mut self, name: &str, value: AnimatorValue) {
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value;
        } else {
            self.values.insert(name.to_string(), value);
        }
    }

    pub fn get(&self, name: &str) -> Option<AnimatorValue> {
        self.values.get(name).copied()
    }

    /// Missing or non-bool parameters read as false.
    pub fn get_bool(&self, name: &str) -> bool {
        matches!(self.get(name), Some(AnimatorValue::Bool(true)))
    }

    pub fn get_float(&self, name: &str) -> f32 {
        match self.get(name) {
            Some(AnimatorValue::Float(v)) => v,
            _ => 0.0,
        }
    }

    pub fn get_int(&self, name: &str) -> i32 {
        match self.get(name) {
            Some(AnimatorValue::Int(v)) => v,
            _ => 0,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
