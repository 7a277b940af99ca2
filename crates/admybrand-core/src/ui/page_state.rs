use serde::{Deserialize, Serialize};

use super::Theme;
use crate::calculator::CalculatorInput;

/// Vertical scroll offset past which the header switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD_PX
}

/// Interactive state of the landing page.
///
/// Every flag is written by exactly one kind of user action and read only by
/// rendering; the last write wins and flags never depend on each other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageState {
    pub scrolled: bool,
    pub mobile_menu_open: bool,
    pub theme: Theme,
    pub demo_open: bool,

    #[serde(skip)]
    pub calculator: CalculatorInput,
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_scroll(&mut self, scroll_y: f64) {
        self.scrolled = is_scrolled(scroll_y);
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }

    pub fn open_demo(&mut self) {
        self.demo_open = true;
    }

    pub fn close_demo(&mut self) {
        self.demo_open = false;
    }
}
