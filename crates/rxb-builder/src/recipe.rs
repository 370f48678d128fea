//! The typed recipe a builder accumulates.
//!
//! A [`Recipe`] is the ordered record of everything that shaped a pattern.
//! Anchors live outside the step list: `^start` is always the outermost
//! prefix and `end$` the outermost suffix, no matter when they were set.

/// One `then`-class fragment, in application order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub fragment: String,
}

impl Step {
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
        }
    }
}

/// Ordered record of builder operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipe {
    /// Fragment anchored at the start of the pattern.
    pub starts_with: Option<String>,
    /// Fragment anchored at the end of the pattern.
    pub ends_with: Option<String>,
    /// Last requested case sensitivity, if `case_sensitive` was ever called.
    pub case_sensitive: Option<bool>,
    /// Body fragments in application order.
    pub steps: Vec<Step>,
}

impl Recipe {
    /// Render the pattern text described by this recipe.
    pub fn render(&self) -> String {
        let mut pattern = String::new();
        if let Some(start) = &self.starts_with {
            pattern.push('^');
            pattern.push_str(start);
        }
        for step in &self.steps {
            pattern.push_str(&step.fragment);
        }
        if let Some(end) = &self.ends_with {
            pattern.push_str(end);
            pattern.push('$');
        }
        pattern
    }

    /// True when no anchor or step has been recorded.
    pub fn is_empty(&self) -> bool {
        self.starts_with.is_none() && self.ends_with.is_none() && self.steps.is_empty()
    }
}
