//! Scrollable viewport with thin styled scrollbars

use hearth_html::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrollAxis {
    #[default]
    Vertical,
    Horizontal,
    Both,
}

#[derive(Debug, Clone, Default)]
pub struct ScrollArea {
    pub axis: ScrollAxis,
    pub max_height: Option<String>,
    pub children: Vec<Node>,
    pub class: String,
}

impl ScrollArea {
    pub fn new(children: impl IntoIterator<Item = Node>) -> Self {
        Self {
            children: children.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn axis(mut self, axis: ScrollAxis) -> Self {
        self.axis = axis;
        self
    }

    /// Any CSS length, e.g. `"18rem"`.
    pub fn max_height(mut self, length: impl Into<String>) -> Self {
        self.max_height = Some(length.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}

impl Component for ScrollArea {
    fn view(&self) -> Node {
        let overflow = match self.axis {
            ScrollAxis::Vertical => "overflow-y-auto overflow-x-hidden",
            ScrollAxis::Horizontal => "overflow-x-auto overflow-y-hidden",
            ScrollAxis::Both => "overflow-auto",
        };
        div([
            data("scroll-area", ""),
            class(cn!("relative overflow-hidden", self.class)),
            div([
                data("scroll-area-viewport", ""),
                tab_index(0),
                class(cn!(
                    "h-full w-full rounded-[inherit] [scrollbar-width:thin] [scrollbar-color:hsl(var(--border))_transparent] focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring",
                    overflow
                )),
                match &self.max_height {
                    Some(length) => style(format!("max-height: {length};")),
                    None => Node::empty(),
                },
                group(self.children.clone()),
            ]),
        ])
    }
}
