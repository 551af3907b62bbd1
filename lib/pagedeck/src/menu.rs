//! Local state of one page option menu: where the popup is anchored, and the
//! alert toast shown when an action fails.

use shared::{AlertSeverity, Capabilities};
use tracing::warn;

use crate::actions::ActionOutcome;

/// Client position of the click that opened the menu.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

impl Anchor {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// `None` anchor means closed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MenuState {
    anchor: Option<Anchor>,
}

impl MenuState {
    pub fn open(&mut self, anchor: Anchor) {
        self.anchor = Some(anchor);
    }

    pub fn close(&mut self) {
        self.anchor = None;
    }

    pub fn is_open(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn anchor(&self) -> Option<Anchor> {
        self.anchor
    }

    /// Closes the menu and returns the item if the role may use it.
    pub fn select(&mut self, item: MenuItem, capabilities: Capabilities) -> Option<MenuItem> {
        self.close();
        if item.is_allowed(capabilities) {
            Some(item)
        } else {
            warn!("Menu item {:?} is not allowed for {:?}", item, capabilities);
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
    Configure,
    Leave,
    Delete,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::Configure, MenuItem::Leave, MenuItem::Delete];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Configure => "페이지 설정",
            MenuItem::Leave => "페이지 떠나기",
            MenuItem::Delete => "페이지 삭제",
        }
    }

    pub fn is_destructive(&self) -> bool {
        matches!(self, MenuItem::Delete)
    }

    pub fn is_allowed(&self, capabilities: Capabilities) -> bool {
        match self {
            MenuItem::Configure => capabilities.can_configure,
            MenuItem::Leave => capabilities.can_leave,
            MenuItem::Delete => capabilities.can_delete,
        }
    }

    /// Items shown for the given capabilities, in display order.
    pub fn visible(capabilities: Capabilities) -> Vec<MenuItem> {
        Self::ALL
            .into_iter()
            .filter(|item| item.is_allowed(capabilities))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlertState {
    pub open: bool,
    pub message: String,
    pub severity: AlertSeverity,
}

impl AlertState {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            open: true,
            message: message.into(),
            severity: AlertSeverity::Error,
        }
    }

    /// Only failures that are meant to reach the user open the alert.
    pub fn apply(&mut self, outcome: &ActionOutcome) {
        if let ActionOutcome::Failed { message } = outcome {
            *self = Self::error(message.clone());
        }
    }

    pub fn dismiss(&mut self) {
        self.open = false;
    }
}

/// Auto-hide bookkeeping for the alert. Each time the alert opens, `arm`
/// hands out a new ticket; a timer only dismisses the alert if its ticket is
/// still the latest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlertTimer {
    generation: u64,
}

impl AlertTimer {
    pub fn arm(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Returns whether the alert was dismissed.
    pub fn expire(&self, ticket: u64, alert: &mut AlertState) -> bool {
        if ticket != self.generation || !alert.open {
            return false;
        }
        alert.dismiss();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared::PageRole;

    #[test]
    fn open_and_close() {
        let mut menu = MenuState::default();
        assert!(!menu.is_open());
        menu.open(Anchor::new(10.0, 20.0));
        assert_eq!(menu.anchor(), Some(Anchor::new(10.0, 20.0)));
        menu.close();
        assert_eq!(menu.anchor(), None);
    }

    #[test]
    fn reopening_moves_the_single_anchor() {
        let mut menu = MenuState::default();
        menu.open(Anchor::new(1.0, 1.0));
        menu.open(Anchor::new(5.0, 6.0));
        assert_eq!(menu.anchor(), Some(Anchor::new(5.0, 6.0)));
    }

    #[test]
    fn selecting_any_item_closes_the_menu() {
        for role in shared::role::ALL_ROLES {
            for item in MenuItem::ALL {
                let mut menu = MenuState::default();
                menu.open(Anchor::default());
                let _ = menu.select(item, role.capabilities());
                assert_eq!(menu.anchor(), None, "{role:?} {item:?}");
            }
        }
    }

    #[test]
    fn select_rejects_items_outside_the_role() {
        let mut menu = MenuState::default();
        menu.open(Anchor::default());
        assert_eq!(
            menu.select(MenuItem::Leave, PageRole::Owner.capabilities()),
            None
        );
        assert_eq!(
            menu.select(MenuItem::Delete, PageRole::Owner.capabilities()),
            Some(MenuItem::Delete)
        );
    }

    #[test]
    fn visible_items_per_role() {
        assert_eq!(
            MenuItem::visible(PageRole::Owner.capabilities()),
            vec![MenuItem::Configure, MenuItem::Delete]
        );
        assert_eq!(
            MenuItem::visible(PageRole::Maintainer.capabilities()),
            vec![MenuItem::Configure, MenuItem::Leave, MenuItem::Delete]
        );
        assert_eq!(
            MenuItem::visible(PageRole::Editor.capabilities()),
            vec![MenuItem::Configure, MenuItem::Leave]
        );
        assert_eq!(
            MenuItem::visible(PageRole::Viewer.capabilities()),
            vec![MenuItem::Leave]
        );
    }

    #[test]
    fn only_delete_is_destructive() {
        assert!(MenuItem::Delete.is_destructive());
        assert!(!MenuItem::Leave.is_destructive());
        assert!(!MenuItem::Configure.is_destructive());
    }

    #[test]
    fn alert_opens_on_failure_only() {
        let mut alert = AlertState::default();
        alert.apply(&ActionOutcome::Ignored);
        alert.apply(&ActionOutcome::Left);
        assert_eq!(alert, AlertState::default());

        alert.apply(&ActionOutcome::Failed {
            message: "X".into(),
        });
        assert_eq!(
            alert,
            AlertState {
                open: true,
                message: "X".into(),
                severity: AlertSeverity::Error,
            }
        );

        alert.dismiss();
        assert!(!alert.open);
    }

    #[test]
    fn stale_timer_leaves_reopened_alert_alone() {
        let mut timer = AlertTimer::default();
        let mut alert = AlertState::error("first");
        let first = timer.arm();

        alert = AlertState::error("second");
        let second = timer.arm();

        assert!(!timer.expire(first, &mut alert));
        assert!(alert.open);
        assert_eq!(alert.message, "second");

        assert!(timer.expire(second, &mut alert));
        assert!(!alert.open);
    }

    #[test]
    fn timer_after_manual_close_is_a_no_op() {
        let mut timer = AlertTimer::default();
        let mut alert = AlertState::error("X");
        let ticket = timer.arm();
        alert.dismiss();
        assert!(!timer.expire(ticket, &mut alert));
    }
}
