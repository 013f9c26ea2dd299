// src/model/selection.rs

/// Hover and selection of the periodic grid, keyed by atomic number.
/// Owned by the grid widget; nothing else mutates it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    hovered: Option<u32>,
    selected: Option<u32>,
}

/// Outcome of a click, reported upward to whoever shows details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Selected(u32),
    Cleared,
}

impl SelectionChange {
    pub fn selected(&self) -> Option<u32> {
        match self {
            SelectionChange::Selected(n) => Some(*n),
            SelectionChange::Cleared => None,
        }
    }
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> Option<u32> {
        self.hovered
    }

    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    pub fn hover(&mut self, atomic_number: u32) {
        self.hovered = Some(atomic_number);
    }

    /// Pointer left `atomic_number`. A late leave from a cell that is no
    /// longer hovered is ignored.
    pub fn leave(&mut self, atomic_number: u32) {
        if self.hovered == Some(atomic_number) {
            self.hovered = None;
        }
    }

    /// Toggle: clicking the selected element deselects it.
    pub fn click(&mut self, atomic_number: u32) -> SelectionChange {
        if self.selected == Some(atomic_number) {
            self.selected = None;
            SelectionChange::Cleared
        } else {
            self.selected = Some(atomic_number);
            SelectionChange::Selected(atomic_number)
        }
    }

    /// Returns true if something was selected.
    pub fn clear(&mut self) -> bool {
        self.selected.take().is_some()
    }

    pub fn is_hovered(&self, atomic_number: u32) -> bool {
        self.hovered == Some(atomic_number)
    }

    pub fn is_selected(&self, atomic_number: u32) -> bool {
        self.selected == Some(atomic_number)
    }

    /// Element whose hover tooltip may show. Suppressed while a selection is active.
    pub fn tooltip_target(&self) -> Option<u32> {
        match self.selected {
            Some(_) => None,
            None => self.hovered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_toggles_selection() {
        let mut sel = SelectionState::new();
        assert_eq!(sel.click(8), SelectionChange::Selected(8));
        assert!(sel.is_selected(8));

        assert_eq!(sel.click(8), SelectionChange::Cleared);
        assert_eq!(sel.selected(), None);
    }

    #[test]
    fn test_click_other_element_switches() {
        let mut sel = SelectionState::new();
        sel.click(1);
        assert_eq!(sel.click(2), SelectionChange::Selected(2));
        assert!(!sel.is_selected(1));
        assert!(sel.is_selected(2));
    }

    #[test]
    fn test_tooltip_suppressed_while_selected() {
        let mut sel = SelectionState::new();
        sel.hover(26);
        assert_eq!(sel.tooltip_target(), Some(26));

        sel.click(79);
        assert!(sel.is_hovered(26));
        assert_eq!(sel.tooltip_target(), None);

        assert!(sel.clear());
        assert_eq!(sel.tooltip_target(), Some(26));
        assert!(!sel.clear());
    }

    #[test]
    fn test_stale_leave_keeps_new_hover() {
        let mut sel = SelectionState::new();
        sel.hover(3);
        sel.hover(4);
        sel.leave(3);
        assert_eq!(sel.hovered(), Some(4));
        sel.leave(4);
        assert_eq!(sel.hovered(), None);
    }

    #[test]
    fn test_change_reports_selected_number() {
        assert_eq!(SelectionChange::Selected(5).selected(), Some(5));
        assert_eq!(SelectionChange::Cleared.selected(), None);
    }
}
