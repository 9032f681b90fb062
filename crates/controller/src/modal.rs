//! Modal visibility
//!
//! Every page has the same five overlays. They are toggled through one
//! `ModalSet` instead of per-page show/hide helpers.

use std::collections::BTreeSet;

/// The overlays a table page can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModalKind {
    Add,
    Edit,
    Delete,
    Error,
    Success,
}

impl ModalKind {
    /// All modal kinds
    pub const ALL: [ModalKind; 5] = [
        ModalKind::Add,
        ModalKind::Edit,
        ModalKind::Delete,
        ModalKind::Error,
        ModalKind::Success,
    ];

    /// Dialog title
    pub fn title(&self) -> &'static str {
        match self {
            ModalKind::Add => "Add",
            ModalKind::Edit => "Edit",
            ModalKind::Delete => "Delete",
            ModalKind::Error => "Error",
            ModalKind::Success => "Done",
        }
    }

    /// Whether this modal carries a form or confirmation
    pub fn is_dialog(&self) -> bool {
        matches!(self, ModalKind::Add | ModalKind::Edit | ModalKind::Delete)
    }
}

/// Currently visible modals
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalSet {
    visible: BTreeSet<ModalKind>,
}

impl ModalSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, kind: ModalKind) {
        self.visible.insert(kind);
    }

    pub fn hide(&mut self, kind: ModalKind) {
        self.visible.remove(&kind);
    }

    pub fn is_visible(&self, kind: ModalKind) -> bool {
        self.visible.contains(&kind)
    }

    /// Hide every modal
    pub fn close_all(&mut self) {
        self.visible.clear();
    }

    /// Whether anything is shown
    pub fn any_visible(&self) -> bool {
        !self.visible.is_empty()
    }

    /// Visible modals in display order
    pub fn visible(&self) -> Vec<ModalKind> {
        self.visible.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_and_hide() {
        let mut modals = ModalSet::new();
        assert!(!modals.any_visible());

        modals.show(ModalKind::Edit);
        modals.show(ModalKind::Error);
        assert!(modals.is_visible(ModalKind::Edit));
        assert_eq!(modals.visible(), vec![ModalKind::Edit, ModalKind::Error]);

        modals.hide(ModalKind::Edit);
        assert!(!modals.is_visible(ModalKind::Edit));
        assert!(modals.is_visible(ModalKind::Error));
    }

    #[test]
    fn test_close_all() {
        let mut modals = ModalSet::new();
        for kind in ModalKind::ALL {
            modals.show(kind);
        }
        modals.close_all();
        assert!(!modals.any_visible());
    }

    #[test]
    fn test_dialog_kinds() {
        assert!(ModalKind::Delete.is_dialog());
        assert!(!ModalKind::Success.is_dialog());
    }
}
