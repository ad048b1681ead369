//! Positioning shared by popover, tooltip and hover-card

use hearth_html::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FloatingState {
    pub open: bool,
    /// Pointer coordinates the content was opened at, in viewport pixels
    pub anchor: Option<(f64, f64)>,
}

impl FloatingState {
    /// Open, recording the anchor only when both coordinates are finite.
    pub fn open_at(&mut self, x: Option<f64>, y: Option<f64>) {
        self.open = true;
        self.anchor = match (x, y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some((x, y)),
            _ => None,
        };
    }

    pub fn close(&mut self) {
        self.open = false;
        self.anchor = None;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open = true;
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    #[default]
    Bottom,
    Left,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Start,
    #[default]
    Center,
    End,
}

impl Align {
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Start => "start",
            Align::Center => "center",
            Align::End => "end",
        }
    }
}

/// Where floating content sits relative to its trigger or anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub side: Side,
    pub align: Align,
    /// Gap between trigger and content along the side axis, in pixels
    pub side_offset: f64,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            side: Side::Bottom,
            align: Align::Center,
            side_offset: 4.0,
        }
    }
}

fn px(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}px", v as i64)
    } else {
        format!("{v:.1}px")
    }
}

impl Placement {
    /// `data-side` and `data-align`.
    pub fn data_attrs(&self) -> Node {
        group([data("side", self.side.as_str()), data("align", self.align.as_str())])
    }

    /// Inline `position: fixed` style for content opened at a pointer.
    pub fn anchored_style(&self, x: f64, y: f64) -> String {
        let offset = self.side_offset;
        let (left, top) = match self.side {
            Side::Top => (x, y - offset),
            Side::Bottom => (x, y + offset),
            Side::Left => (x - offset, y),
            Side::Right => (x + offset, y),
        };

        let cross = match self.align {
            Align::Start => "0",
            Align::Center => "-50%",
            Align::End => "-100%",
        };
        let transform = match self.side {
            Side::Top => format!("translate({cross}, -100%)"),
            Side::Bottom => format!("translate({cross}, 0)"),
            Side::Left => format!("translate(-100%, {cross})"),
            Side::Right => format!("translate(0, {cross})"),
        };

        format!(
            "position: fixed; left: {}; top: {}; transform: {};",
            px(left),
            px(top),
            transform
        )
    }

    /// Classes placing content next to a `relative` trigger wrapper.
    pub fn relative_classes(&self) -> &'static str {
        match (self.side, self.align) {
            (Side::Bottom, Align::Start) => "top-full left-0",
            (Side::Bottom, Align::Center) => "top-full left-1/2 -translate-x-1/2",
            (Side::Bottom, Align::End) => "top-full right-0",
            (Side::Top, Align::Start) => "bottom-full left-0",
            (Side::Top, Align::Center) => "bottom-full left-1/2 -translate-x-1/2",
            (Side::Top, Align::End) => "bottom-full right-0",
            (Side::Right, Align::Start) => "left-full top-0",
            (Side::Right, Align::Center) => "left-full top-1/2 -translate-y-1/2",
            (Side::Right, Align::End) => "left-full bottom-0",
            (Side::Left, Align::Start) => "right-full top-0",
            (Side::Left, Align::Center) => "right-full top-1/2 -translate-y-1/2",
            (Side::Left, Align::End) => "right-full bottom-0",
        }
    }

    /// Inline margin applying `side_offset` when positioned by classes.
    pub fn relative_style(&self) -> String {
        let property = match self.side {
            Side::Top => "margin-bottom",
            Side::Bottom => "margin-top",
            Side::Left => "margin-right",
            Side::Right => "margin-left",
        };
        format!("{property}: {};", px(self.side_offset))
    }

    /// Class and style attributes for content in `state`, merging the
    /// content's own `classes` so the element carries a single `class`.
    pub fn position(&self, state: &FloatingState, classes: &str) -> Node {
        match state.anchor {
            Some((x, y)) => group([
                class(cn!("z-50", classes)),
                style(self.anchored_style(x, y)),
            ]),
            None => group([
                class(cn!("absolute z-50", self.relative_classes(), classes)),
                style(self.relative_style()),
            ]),
        }
    }
}
