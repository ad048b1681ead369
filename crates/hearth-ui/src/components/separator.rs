//! Horizontal or vertical rule

use super::slider::Orientation;
use hearth_html::prelude::*;

#[derive(Debug, Clone)]
pub struct Separator {
    pub orientation: Orientation,
    /// Purely visual separators are hidden from assistive technology
    pub decorative: bool,
    pub class: String,
}

impl Default for Separator {
    fn default() -> Self {
        Self {
            orientation: Orientation::Horizontal,
            decorative: true,
            class: String::new(),
        }
    }
}

impl Separator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertical() -> Self {
        Self {
            orientation: Orientation::Vertical,
            ..Self::default()
        }
    }

    pub fn decorative(mut self, decorative: bool) -> Self {
        self.decorative = decorative;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}

impl Component for Separator {
    fn view(&self) -> Node {
        let vertical = self.orientation == Orientation::Vertical;
        div([
            if self.decorative {
                role("none")
            } else {
                group([role("separator"), aria("orientation", self.orientation.as_str())])
            },
            data("orientation", self.orientation.as_str()),
            class(cn!(
                "shrink-0 bg-border",
                cn_if(vertical, "h-full w-[1px]", "h-[1px] w-full"),
                self.class
            )),
        ])
    }
}
