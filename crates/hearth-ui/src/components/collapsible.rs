//! Single show/hide section

use super::button::{button_classes, ButtonSize, ButtonVariant};
use crate::region::{Region, SwapWidget};
use hearth_html::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollapsibleState {
    pub open: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Collapsible {
    pub title: String,
    /// Always visible, above the collapsible content
    pub summary: Vec<Node>,
    pub content: Vec<Node>,
    pub default_open: bool,
    pub class: String,
}

impl Collapsible {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn summary(mut self, summary: impl IntoIterator<Item = Node>) -> Self {
        self.summary.extend(summary);
        self
    }

    pub fn content(mut self, content: impl IntoIterator<Item = Node>) -> Self {
        self.content.extend(content);
        self
    }

    pub fn default_open(mut self, open: bool) -> Self {
        self.default_open = open;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}

impl SwapWidget for Collapsible {
    type State = CollapsibleState;
    const KIND: &'static str = "collapsible";

    fn initial_state(&self) -> CollapsibleState {
        CollapsibleState {
            open: self.default_open,
        }
    }

    fn render(&self, region: &Region, state: &CollapsibleState) -> Node {
        let open_state = if state.open { "open" } else { "closed" };
        region.container([
            class(cn!("w-[350px] space-y-2", self.class)),
            data_state(open_state),
            div([
                class("flex items-center justify-between space-x-4 px-4"),
                h4([class("text-sm font-semibold"), text(self.title.clone())]),
                button([
                    type_("button"),
                    class(button_classes(ButtonVariant::Ghost, ButtonSize::Sm, "w-9 p-0")),
                    aria_bool("expanded", state.open),
                    aria("controls", region.child_id("content")),
                    data_state(open_state),
                    region.post("toggle"),
                    crate::icons::chevrons_up_down("h-4 w-4"),
                    span([class("sr-only"), text("Toggle")]),
                ]),
            ]),
            group(self.summary.clone()),
            div([
                id(region.child_id("content")),
                class(cn!("space-y-2", cn_if(state.open, "", "hidden"))),
                data_state(open_state),
                group(self.content.clone()),
            ]),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_hidden_until_open() {
        let widget = Collapsible::new("3 repositories").content([text("@radix-ui/colors")]);
        let region = Region::new("col", "/col");

        let closed = widget.render(&region, &widget.initial_state()).to_string();
        assert!(closed.contains(r#"<div id="col-content" class="space-y-2 hidden""#));
        assert!(closed.contains(r#"aria-expanded="false""#));

        let open = widget
            .render(&region, &CollapsibleState { open: true })
            .to_string();
        assert!(open.contains(r#"<div id="col-content" class="space-y-2" data-state="open""#));
    }

    #[test]
    fn default_open_seeds_state() {
        assert!(Collapsible::new("x").default_open(true).initial_state().open);
    }
}
