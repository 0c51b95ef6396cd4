#[cfg(test)]
#[path = "hover_test.rs"]
mod hover_test;

/// Identifies a dish by section and position in the menu catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MenuItemKey {
    pub section: usize,
    pub item: usize,
}

/// Which menu item, if any, is showing its tooltip.
///
/// Holding a single slot means at most one tooltip exists at a time, however
/// fast the pointer moves between items.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverState {
    pub active: Option<MenuItemKey>,
}

impl HoverState {
    /// Pointer entered `key`; its tooltip replaces any other.
    pub fn enter(&mut self, key: MenuItemKey) {
        self.active = Some(key);
    }

    /// Pointer left `key`. A leave for an item that is no longer active is
    /// ignored so a late event cannot hide the current tooltip.
    pub fn leave(&mut self, key: MenuItemKey) {
        if self.active == Some(key) {
            self.active = None;
        }
    }

    pub fn shows_tooltip(&self, key: MenuItemKey) -> bool {
        self.active == Some(key)
    }

    /// Number of tooltips currently attached.
    #[cfg(test)]
    fn tooltip_count(&self) -> usize {
        usize::from(self.active.is_some())
    }
}
