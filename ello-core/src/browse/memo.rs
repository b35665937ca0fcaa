//! Single-slot memoization for derived views

/// Caches the value computed for the most recent key.
///
/// The value is recomputed only when a different key is presented.
#[derive(Debug)]
pub struct Memo<K, V> {
    slot: Option<(K, V)>,
    computations: u64,
}

impl<K, V> Default for Memo<K, V> {
    fn default() -> Self {
        Self {
            slot: None,
            computations: 0,
        }
    }
}

impl<K: PartialEq, V> Memo<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `key`, computing it only if the cached key differs
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce() -> V) -> &V {
        if self.slot.as_ref().is_some_and(|(cached, _)| *cached != key) {
            self.slot = None;
        }
        let computations = &mut self.computations;
        let (_, value) = self.slot.get_or_insert_with(|| {
            *computations += 1;
            (key, compute())
        });
        value
    }

    /// Most recently computed value, whatever its key
    pub fn cached(&self) -> Option<&V> {
        self.slot.as_ref().map(|(_, value)| value)
    }

    /// How many times a value has been computed
    pub fn computations(&self) -> u64 {
        self.computations
    }

    pub fn invalidate(&mut self) {
        self.slot = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recomputes_only_on_key_change() {
        let mut memo: Memo<u32, String> = Memo::new();
        assert_eq!(memo.get_or_compute(1, || "one".to_string()), "one");
        assert_eq!(memo.get_or_compute(1, || "uno".to_string()), "one");
        assert_eq!(memo.computations(), 1);

        assert_eq!(memo.get_or_compute(2, || "two".to_string()), "two");
        assert_eq!(memo.computations(), 2);

        memo.invalidate();
        memo.get_or_compute(2, || "two".to_string());
        assert_eq!(memo.computations(), 3);
    }
}
