//! Key-to-direction mapping with press-edge detection.
//!
//! A held key fires once; it must be released before it can fire again. The
//! key type stays generic so any input backend's key codes plug in.

use cube_data::Direction;
use std::{
    collections::{
        HashMap,
        HashSet,
    },
    hash::Hash,
};


#[derive(Debug, Clone)]
pub struct KeyBindings<K> {
    bindings: HashMap<K, Direction>,
    held: HashSet<K>,
}

impl<K: Copy + Eq + Hash> KeyBindings<K> {
    pub fn new() -> Self {
        KeyBindings {
            bindings: HashMap::new(),
            held: HashSet::new(),
        }
    }

    pub fn bind(&mut self, key: K, direction: Direction) {
        self.bindings.insert(key, direction);
    }

    /// Register a key press. Returns the bound direction only on the
    /// press edge; repeats while held yield nothing.
    pub fn key_down(&mut self, key: K) -> Option<Direction> {
        if !self.held.insert(key) {
            return None;
        }
        self.bindings.get(&key).copied()
    }

    /// Register a key release, re-arming the key.
    pub fn key_up(&mut self, key: K) {
        self.held.remove(&key);
    }
}

impl KeyBindings<char> {
    /// The usual W/A/S/D layout.
    pub fn wasd() -> Self {
        let mut keys = KeyBindings::new();
        keys.bind('w', Direction::Forward);
        keys.bind('s', Direction::Backward);
        keys.bind('a', Direction::Left);
        keys.bind('d', Direction::Right);
        keys
    }
}
