//! Per-unit collapse state for a rendered sequence. Lives outside parsing:
//! toggling a unit never changes what was parsed.

/// One flag per display unit, keyed by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: Vec<bool>,
}

impl ExpansionState {
    /// All `len` units start expanded.
    pub fn new(len: usize) -> Self {
        Self {
            expanded: vec![true; len],
        }
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Out-of-range positions read as expanded.
    pub fn is_expanded(&self, idx: usize) -> bool {
        self.expanded.get(idx).copied().unwrap_or(true)
    }

    /// Flips one unit and returns its new state, or `None` if out of range.
    pub fn toggle(&mut self, idx: usize) -> Option<bool> {
        let flag = self.expanded.get_mut(idx)?;
        *flag = !*flag;
        Some(*flag)
    }

    pub fn expand_all(&mut self) {
        self.expanded.fill(true);
    }

    pub fn collapse_all(&mut self) {
        self.expanded.fill(false);
    }

    /// Adapts to a new render. Existing positions keep their state and new
    /// ones start expanded.
    pub fn resize(&mut self, len: usize) {
        self.expanded.resize(len, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_expanded() {
        let state = ExpansionState::new(3);
        assert!((0..3).all(|i| state.is_expanded(i)));
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn toggle_flips_one_unit() {
        let mut state = ExpansionState::new(2);
        assert_eq!(state.toggle(1), Some(false));
        assert!(state.is_expanded(0));
        assert!(!state.is_expanded(1));
        assert_eq!(state.toggle(1), Some(true));
        assert_eq!(state.toggle(5), None);
    }

    #[test]
    fn collapse_and_expand_all() {
        let mut state = ExpansionState::new(4);
        state.collapse_all();
        assert!((0..4).all(|i| !state.is_expanded(i)));
        state.expand_all();
        assert!((0..4).all(|i| state.is_expanded(i)));
    }

    #[test]
    fn resize_keeps_existing_state() {
        let mut state = ExpansionState::new(2);
        state.toggle(0);
        state.resize(3);
        assert!(!state.is_expanded(0));
        assert!(state.is_expanded(2));
        state.resize(0);
        assert!(state.is_empty());
    }
}
