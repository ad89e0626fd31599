use std::cell::RefCell;

use crate::remember;

/// Runs an effect only when its key differs from the key of the previous run.
///
/// The first `run` always fires. This is the building block for advisory
/// checks that must report a condition once when it appears, not on every
/// composition pass while it persists.
pub struct KeyedEffect<K> {
    last: RefCell<Option<K>>,
}

impl<K> Default for KeyedEffect<K> {
    fn default() -> Self {
        Self {
            last: RefCell::new(None),
        }
    }
}

impl<K: PartialEq> KeyedEffect<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the key changed and `effect` ran.
    pub fn run(&self, key: K, effect: impl FnOnce(&K)) -> bool {
        let mut last = self.last.borrow_mut();
        if last.as_ref() == Some(&key) {
            return false;
        }
        effect(&key);
        *last = Some(key);
        true
    }
}

/// Slot-based keyed effect for use inside a composition.
pub fn keyed_effect<K: PartialEq + 'static>(key: K, effect: impl FnOnce(&K)) -> bool {
    let slot = remember(KeyedEffect::<K>::new);
    slot.run(key, effect)
}
