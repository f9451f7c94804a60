//! Expanded-row state of the search results.
//!
//! Sum type: at most one user is expanded, and that invariant holds by
//! construction.

use crate::model::UserId;

/// Which result row (if any) shows its repository list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Expansion {
    /// Every row is collapsed.
    #[default]
    None,
    /// Exactly this user is expanded.
    Selected(UserId),
}

impl Expansion {
    /// Toggle `id`: collapses it when already expanded, otherwise switches
    /// expansion to it.
    pub fn toggle(self, id: UserId) -> Self {
        match self {
            Expansion::Selected(current) if current == id => Expansion::None,
            _ => Expansion::Selected(id),
        }
    }

    /// True when `id` is the expanded user.
    pub fn is_expanded(self, id: UserId) -> bool {
        self == Expansion::Selected(id)
    }

    /// The expanded user, if any.
    pub fn selected(self) -> Option<UserId> {
        match self {
            Expansion::None => None,
            Expansion::Selected(id) => Some(id),
        }
    }
}
