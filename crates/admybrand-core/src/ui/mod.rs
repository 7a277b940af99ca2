mod accordion;
mod page_state;
mod resource_tab;
mod theme;

pub use accordion::Accordion;
pub use page_state::{is_scrolled, PageState, SCROLL_THRESHOLD_PX};
pub use resource_tab::ResourceTab;
pub use theme::Theme;
