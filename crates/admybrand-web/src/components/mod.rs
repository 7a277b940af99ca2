pub mod demo_modal;
pub mod footer;
pub mod header;
pub mod icons;
pub mod in_view;
pub mod section_heading;
