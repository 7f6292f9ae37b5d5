//! Logical/physical key mapping
//!
//! The hex keypad has 16 logical codes; hosts bind each to one or more
//! physical keys.  Both directions are built once at startup and never
//! rebuilt per query.

use std::collections::HashMap;

/// A physical key, as decoded by the frontend
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum Key {
    /// Arrow up
    Up,
    /// Arrow down
    Down,
    /// Arrow left
    Left,
    /// Arrow right
    Right,
    /// The space bar
    Space,
    /// A printable key, lower-cased
    Char(u8),
}

/// The default layout: QWERTY left hand plus arrows on 5/7/8/9
const DEFAULT_LAYOUT: [(u8, &[Key]); 16] = [
    (0x0, &[Key::Char(b'x')]),
    (0x1, &[Key::Char(b'1')]),
    (0x2, &[Key::Char(b'2')]),
    (0x3, &[Key::Char(b'3')]),
    (0x4, &[Key::Char(b'q')]),
    (0x5, &[Key::Char(b'w'), Key::Up]),
    (0x6, &[Key::Char(b'e'), Key::Space]),
    (0x7, &[Key::Char(b'a'), Key::Left]),
    (0x8, &[Key::Char(b's'), Key::Down]),
    (0x9, &[Key::Char(b'd'), Key::Right]),
    (0xA, &[Key::Char(b'z')]),
    (0xB, &[Key::Char(b'c')]),
    (0xC, &[Key::Char(b'4')]),
    (0xD, &[Key::Char(b'r')]),
    (0xE, &[Key::Char(b'f')]),
    (0xF, &[Key::Char(b'v')]),
];

/// Immutable key lookup tables: logical code to physical keys, and back
pub struct Keymap {
    logical: [Vec<Key>; 16],
    physical: HashMap<Key, u8>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new(&DEFAULT_LAYOUT)
    }
}

impl Keymap {
    /// Builds both tables from a layout
    ///
    /// If a physical key appears under several codes, the last binding
    /// wins in the inverse table.
    pub fn new(layout: &[(u8, &[Key])]) -> Self {
        let mut logical = [(); 16].map(|_| Vec::new());
        let mut physical = HashMap::new();
        for (code, keys) in layout {
            for &k in keys.iter() {
                logical[usize::from(code & 0xF)].push(k);
                physical.insert(k, *code);
            }
        }
        Self { logical, physical }
    }

    /// Logical code bound to a physical key
    pub fn logical(&self, key: Key) -> Option<u8> {
        self.physical.get(&key).copied()
    }

    /// Physical keys bound to a logical code
    pub fn physical(&self, code: u8) -> &[Key] {
        &self.logical[usize::from(code & 0xF)]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_layout_round_trips() {
        let map = Keymap::default();
        assert_eq!(map.logical(Key::Char(b'x')), Some(0x0));
        assert_eq!(map.logical(Key::Up), Some(0x5));
        assert_eq!(map.logical(Key::Space), Some(0x6));
        assert_eq!(map.logical(Key::Char(b'p')), None);
        for code in 0..16 {
            for &k in map.physical(code) {
                assert_eq!(map.logical(k), Some(code));
            }
        }
    }
}
