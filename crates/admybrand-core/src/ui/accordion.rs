use serde::{Deserialize, Serialize};

/// Single-open, collapsible accordion state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens `index`, closing whichever item was open. Toggling the open item collapses it.
    pub fn toggle(&mut self, index: usize) {
        self.open = match self.open {
            Some(current) if current == index => None,
            _ => Some(index),
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_open() {
        let mut faq = Accordion::new();
        faq.toggle(2);
        assert!(faq.is_open(2));

        faq.toggle(4);
        assert!(faq.is_open(4));
        assert!(!faq.is_open(2));
    }

    #[test]
    fn test_collapsible() {
        let mut faq = Accordion::new();
        faq.toggle(0);
        faq.toggle(0);
        assert_eq!(faq, Accordion::default());
        assert!(!faq.is_open(0));
    }
}
