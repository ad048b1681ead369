//! Determinate progress bar

use hearth_html::prelude::*;

#[derive(Debug, Clone)]
pub struct Progress {
    pub value: f64,
    pub max: f64,
    pub label: String,
    pub class: String,
}

impl Progress {
    pub fn new(current: f64) -> Self {
        Self {
            value: current,
            max: 100.0,
            label: String::new(),
            class: String::new(),
        }
    }

    pub fn max(mut self, upper: f64) -> Self {
        if upper.is_finite() && upper > 0.0 {
            self.max = upper;
        }
        self
    }

    pub fn label(mut self, label_text: impl Into<String>) -> Self {
        self.label = label_text.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Completion in `[0, 100]`; non-finite values count as zero.
    pub fn percent(&self) -> f64 {
        if !self.value.is_finite() {
            return 0.0;
        }
        (self.value / self.max * 100.0).clamp(0.0, 100.0)
    }
}

impl Component for Progress {
    fn view(&self) -> Node {
        let pct = self.percent();
        div([
            role("progressbar"),
            aria("valuemin", "0"),
            aria("valuemax", super::chart::tick_label(self.max)),
            aria("valuenow", super::chart::tick_label(pct * self.max / 100.0)),
            if_(!self.label.is_empty(), aria("label", self.label.clone())),
            data_state(if pct >= 100.0 { "complete" } else { "loading" }),
            class(cn!(
                "relative h-2 w-full overflow-hidden rounded-full bg-primary/20",
                self.class
            )),
            div([
                class("h-full w-full flex-1 bg-primary transition-all"),
                style(format!("transform: translateX(-{:.1}%);", 100.0 - pct)),
            ]),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_is_clamped() {
        assert_eq!(Progress::new(150.0).percent(), 100.0);
        assert_eq!(Progress::new(-3.0).percent(), 0.0);
        assert_eq!(Progress::new(f64::NAN).percent(), 0.0);
        assert_eq!(Progress::new(5.0).max(20.0).percent(), 25.0);
    }

    #[test]
    fn renders_aria_and_offset() {
        let html = Progress::new(60.0).view().to_string();
        assert!(html.contains(r#"aria-valuemin="0" aria-valuemax="100" aria-valuenow="60""#));
        assert!(html.contains("translateX(-40.0%)"));
        assert!(html.contains(r#"data-state="loading""#));
    }
}
