pub mod cta;
pub mod demo;
pub mod faq;
pub mod features;
pub mod hero;
pub mod how_it_works;
pub mod logos;
pub mod pricing;
pub mod resources;
pub mod testimonials;
