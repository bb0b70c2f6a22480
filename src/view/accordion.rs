/// Expand/collapse state for a list of FAQ entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion {
    expanded: Vec<bool>,
    allow_multiple_open: bool,
}

/// `KeyboardEvent.key` values that activate a focused header.
pub const ACTIVATION_KEYS: [&str; 3] = ["Enter", " ", "Spacebar"];

impl Accordion {
    pub fn new(len: usize, allow_multiple_open: bool) -> Self {
        Self {
            expanded: vec![false; len],
            allow_multiple_open,
        }
    }

    /// Builds the state from a list of open indices, as carried in a URL.
    ///
    /// In single-open mode only the last valid index stays open.
    pub fn with_open(len: usize, allow_multiple_open: bool, open: &[usize]) -> Self {
        let mut accordion = Self::new(len, allow_multiple_open);
        for &index in open {
            if !accordion.is_expanded(index) {
                accordion.toggle(index);
            }
        }

        accordion
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn allow_multiple_open(&self) -> bool {
        self.allow_multiple_open
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    /// Flips one entry. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        let Some(current) = self.expanded.get(index).copied() else {
            return;
        };

        if !current && !self.allow_multiple_open {
            self.expanded.iter_mut().for_each(|e| *e = false);
        }

        self.expanded[index] = !current;
    }

    /// Returns true when the key was handled.
    pub fn on_key(&mut self, index: usize, key: &str) -> bool {
        if !ACTIVATION_KEYS.contains(&key) {
            return false;
        }

        self.toggle(index);
        true
    }

    pub fn open_indices(&self) -> Vec<usize> {
        self.expanded
            .iter()
            .enumerate()
            .filter_map(|(i, open)| open.then_some(i))
            .collect()
    }
}
