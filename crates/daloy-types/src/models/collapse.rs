//! Collapsed/expanded state of the desktop drawer.

use serde::{Deserialize, Serialize};

/// Collapse state with change reporting.
///
/// [`announce`](Self::announce) reports the initial value on mount and
/// [`apply_toggle`] reports every transition, so an owner never holds a
/// stale copy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollapseState {
    collapsed: bool,
}

impl CollapseState {
    pub fn new(collapsed: bool) -> Self {
        Self { collapsed }
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Flip the state and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        self.collapsed
    }

    /// Report the current value without changing it (mount).
    pub fn announce(&self, mut notify: impl FnMut(bool)) {
        notify(self.collapsed);
    }
}

impl Default for CollapseState {
    /// The sidebar starts collapsed to icons.
    fn default() -> Self {
        Self::new(true)
    }
}

/// Toggle a stored collapse state.
///
/// The flipped state is written back before `report` runs, so a reporter
/// reading the store sees the new value. Returns the new collapsed flag.
pub fn apply_toggle(
    read: impl FnOnce() -> CollapseState,
    write: impl FnOnce(CollapseState),
    report: impl FnMut(bool),
) -> bool {
    let mut state = read();
    let collapsed = state.toggle();
    write(state);
    state.announce(report);
    collapsed
}
