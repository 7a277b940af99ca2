// Domain modules
pub mod calculator;
pub mod config;
pub mod content;
pub mod error;
pub mod plan;
pub mod reveal;
pub mod ui;

pub use calculator::{
    track_gradient, CalculatorInput, SliderRange, MONTHLY_WORDS_RANGE, TEAM_SIZE_RANGE,
};
pub use config::{BrandConfig, CalculatorConfig, DemoConfig, HeaderConfig, LandingConfig};
pub use content::VideoEmbed;
pub use error::{LandingError, Result};
pub use plan::{recommend, Plan, PlanTier, ENTERPRISE, PROFESSIONAL, STARTER};
pub use reveal::Reveal;
pub use ui::{is_scrolled, Accordion, PageState, ResourceTab, Theme, SCROLL_THRESHOLD_PX};
