//! Box that keeps a width/height ratio

use hearth_html::prelude::*;

#[derive(Debug, Clone)]
pub struct AspectRatio {
    /// Width divided by height
    pub ratio: f64,
    pub children: Vec<Node>,
    pub class: String,
}

impl AspectRatio {
    pub fn new(ratio: f64) -> Self {
        let ratio = if ratio.is_finite() && ratio > 0.0 { ratio } else { 1.0 };
        Self {
            ratio,
            children: Vec::new(),
            class: String::new(),
        }
    }

    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Bottom padding that produces the ratio, as a percentage of width.
    pub fn padding_percent(&self) -> f64 {
        100.0 / self.ratio
    }
}

impl Component for AspectRatio {
    fn view(&self) -> Node {
        div([
            class("relative w-full"),
            style(format!("padding-bottom: {:.4}%;", self.padding_percent())),
            div([
                class(cn!("absolute inset-0", self.class)),
                group(self.children.clone()),
            ]),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixteen_by_nine() {
        let html = AspectRatio::new(16.0 / 9.0).view().to_string();
        assert!(html.contains("padding-bottom: 56.2500%;"));
    }

    #[test]
    fn invalid_ratio_falls_back_to_square() {
        assert_eq!(AspectRatio::new(0.0).ratio, 1.0);
        assert_eq!(AspectRatio::new(f64::NAN).ratio, 1.0);
    }
}
