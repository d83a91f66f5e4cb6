//! Enums used throughout the cost estimator UI.

/// Which form control currently receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Categories, // Category list (dropdown equivalent)
    Features, // Feature checkbox list
    Submit,   // Submit control
}

impl Focus {
    /// Cycle focus in form order: categories -> features -> submit -> back
    pub fn next(&self) -> Self {
        match self {
            Focus::Categories => Focus::Features,
            Focus::Features => Focus::Submit,
            Focus::Submit => Focus::Categories,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Focus::Categories => "Categories",
            Focus::Features => "Features",
            Focus::Submit => "Submit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_default() {
        assert_eq!(Focus::default(), Focus::Categories);
    }

    #[test]
    fn test_focus_next_cycles() {
        assert_eq!(Focus::Categories.next(), Focus::Features);
        assert_eq!(Focus::Features.next(), Focus::Submit);
        assert_eq!(Focus::Submit.next(), Focus::Categories);
    }

    #[test]
    fn test_focus_label() {
        assert_eq!(Focus::Categories.label(), "Categories");
        assert_eq!(Focus::Features.label(), "Features");
        assert_eq!(Focus::Submit.label(), "Submit");
    }
}
