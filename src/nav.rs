use std::rc::Rc;

use yew::functional::Reducible;

/// A header link: what the visitor reads and which section it scrolls to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: &'static str,
}

/// Whether the mobile navigation overlay is expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Toggle,
    /// A navigation link was followed. Valid or not, the overlay must not stay open.
    Activate,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn apply(self, action: MenuAction) -> Self {
        match (self, action) {
            (MenuState::Closed, MenuAction::Toggle) => MenuState::Open,
            (MenuState::Open, MenuAction::Toggle) => MenuState::Closed,
            (_, MenuAction::Activate) => MenuState::Closed,
        }
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// `true` if `target` is one of `items`' anchors.
#[cfg(test)]
pub(crate) fn is_known_target(items: &[NavItem], target: &str) -> bool {
    items.iter().any(|item| item.target == target)
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Compile-time check that every item points at one of `sections`.
pub const fn targets_within(items: &[NavItem], sections: &[&str]) -> bool {
    let mut i = 0;
    while i < items.len() {
        let mut found = false;
        let mut j = 0;
        while j < sections.len() {
            if str_eq(items[i].target, sections[j]) {
                found = true;
            }
            j += 1;
        }
        if !found {
            return false;
        }
        i += 1;
    }
    true
}
