//! One-shot reveal transitions for content scrolling into view.
//!
//! An element starts in its hidden style and switches to the shown style the
//! first time it intersects the viewport. It never returns to hidden.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reveal {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub offset_x_px: i32,
    pub offset_y_px: i32,
    pub scale_from: f32,
}

impl Default for Reveal {
    fn default() -> Self {
        Self::fade_up()
    }
}

impl Reveal {
    /// Fade in while rising 20px.
    pub fn fade_up() -> Self {
        Self {
            duration_ms: 500,
            delay_ms: 0,
            offset_x_px: 0,
            offset_y_px: 20,
            scale_from: 1.0,
        }
    }

    pub fn fade() -> Self {
        Self {
            offset_y_px: 0,
            ..Self::fade_up()
        }
    }

    /// Fade in while growing from 95%.
    pub fn zoom() -> Self {
        Self {
            duration_ms: 700,
            offset_y_px: 0,
            scale_from: 0.95,
            ..Self::fade_up()
        }
    }

    pub fn slide_x(from_left: bool) -> Self {
        Self {
            offset_x_px: if from_left { -20 } else { 20 },
            offset_y_px: 0,
            ..Self::fade_up()
        }
    }

    pub fn with_duration(self, duration_ms: u32) -> Self {
        Self { duration_ms, ..self }
    }

    pub fn with_delay(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    pub fn with_offset_y(self, offset_y_px: i32) -> Self {
        Self { offset_y_px, ..self }
    }

    /// Delay for the `index`-th item of a list revealed in sequence.
    pub fn staggered(self, index: usize, step_ms: u32) -> Self {
        let delay = u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms);
        self.with_delay(self.delay_ms.saturating_add(delay))
    }

    fn transition(&self) -> String {
        format!(
            "transition: opacity {d}ms ease-out {l}ms, transform {d}ms ease-out {l}ms",
            d = self.duration_ms,
            l = self.delay_ms
        )
    }

    pub fn hidden_style(&self) -> String {
        let mut transform = format!("translate({}px, {}px)", self.offset_x_px, self.offset_y_px);
        if self.scale_from != 1.0 {
            transform.push_str(&format!(" scale({})", self.scale_from));
        }
        format!("opacity: 0; transform: {}; {}", transform, self.transition())
    }

    pub fn shown_style(&self) -> String {
        format!("opacity: 1; transform: none; {}", self.transition())
    }

    pub fn style(&self, shown: bool) -> String {
        if shown {
            self.shown_style()
        } else {
            self.hidden_style()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_and_shown_styles() {
        let reveal = Reveal::fade_up();
        assert_eq!(
            reveal.hidden_style(),
            "opacity: 0; transform: translate(0px, 20px); transition: opacity 500ms ease-out 0ms, transform 500ms ease-out 0ms"
        );
        assert!(reveal.shown_style().starts_with("opacity: 1; transform: none;"));
        assert_eq!(reveal.style(true), reveal.shown_style());
    }

    #[test]
    fn test_zoom_adds_scale() {
        let hidden = Reveal::zoom().with_delay(200).hidden_style();
        assert!(hidden.contains("scale(0.95)"));
        assert!(hidden.contains("700ms ease-out 200ms"));
        assert!(!Reveal::fade().hidden_style().contains("scale"));
    }

    #[test]
    fn test_stagger() {
        let base = Reveal::fade_up().with_delay(100);
        assert_eq!(base.staggered(0, 50).delay_ms, 100);
        assert_eq!(base.staggered(3, 50).delay_ms, 250);
        assert_eq!(Reveal::slide_x(true).offset_x_px, -20);
        assert_eq!(Reveal::slide_x(false).offset_x_px, 20);
    }
}
