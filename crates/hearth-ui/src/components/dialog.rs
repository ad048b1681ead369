//! Modal dialog
//!
//! ```
//! use hearth_ui::components::{Dialog, OverlayState};
//! use hearth_ui::{Region, SwapWidget};
//!
//! let dialog = Dialog::new("Are you absolutely sure?");
//! let region = Region::new("dlg", "/dlg");
//! let closed = dialog.render(&region, &OverlayState::default()).to_string();
//! assert_eq!(closed, r#"<div id="dlg"></div>"#);
//! ```

use super::overlay::{self, Overlay, OverlayState};
use crate::region::{Region, SwapWidget};
use hearth_html::prelude::*;

#[derive(Debug, Clone)]
pub struct Dialog {
    pub title: String,
    pub description: String,
    pub body: Vec<Node>,
    pub cancel_label: String,
    pub confirm_label: String,
    pub confirm_event: Option<String>,
    pub show_close: bool,
    pub class: String,
}

impl Dialog {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            body: Vec::new(),
            cancel_label: "Cancel".to_string(),
            confirm_label: "Continue".to_string(),
            confirm_event: None,
            show_close: true,
            class: String::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn body(mut self, body: impl IntoIterator<Item = Node>) -> Self {
        self.body.extend(body);
        self
    }

    /// Footer labels; an empty string drops that button.
    pub fn actions(mut self, cancel: impl Into<String>, confirm: impl Into<String>) -> Self {
        self.cancel_label = cancel.into();
        self.confirm_label = confirm.into();
        self
    }

    pub fn confirm_event(mut self, event: impl Into<String>) -> Self {
        self.confirm_event = Some(event.into());
        self
    }

    pub fn show_close(mut self, show: bool) -> Self {
        self.show_close = show;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}

impl SwapWidget for Dialog {
    type State = OverlayState;
    const KIND: &'static str = "dialog";

    fn initial_state(&self) -> OverlayState {
        OverlayState::default()
    }

    fn render(&self, region: &Region, state: &OverlayState) -> Node {
        if !state.open {
            return region.empty();
        }

        region.container([
            overlay::modal_attrs(region, "dialog", !self.description.is_empty()),
            overlay::backdrop(region, true),
            overlay::escape_listener(region),
            div([
                class(cn!(
                    "fixed left-[50%] top-[50%] z-50 grid w-full max-w-lg translate-x-[-50%] translate-y-[-50%] gap-4 border bg-background p-6 shadow-lg duration-200 sm:rounded-lg",
                    self.class
                )),
                data_state("open"),
                overlay::heading(region, &self.title, &self.description, "text-center sm:text-left"),
                group(self.body.clone()),
                overlay::footer(region, &self.cancel_label, &self.confirm_label),
                if_with(self.show_close, || overlay::close_button(region)),
            ]),
        ])
    }
}

impl Overlay for Dialog {
    fn confirm_event(&self) -> Option<&str> {
        self.confirm_event.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> Region {
        Region::new("dlg", "/dlg")
    }

    #[test]
    fn open_dialog_has_role_title_and_buttons() {
        let dialog = Dialog::new("Are you absolutely sure?");
        let html = dialog
            .render(&region(), &OverlayState { open: true })
            .to_string();
        assert!(html.starts_with(r#"<div id="dlg" role="dialog" aria-modal="true""#));
        assert!(html.contains("bg-black/80"));
        assert!(html.contains("Are you absolutely sure?"));
        assert!(html.contains(">Cancel</button>"));
        assert!(html.contains(">Continue</button>"));
        assert!(html.contains(r#"hx-post="/dlg/confirm""#));
    }

    #[test]
    fn closed_dialog_is_empty_region() {
        let html = Dialog::new("t")
            .render(&region(), &OverlayState::default())
            .to_string();
        assert_eq!(html, r#"<div id="dlg"></div>"#);
    }

    #[test]
    fn description_sets_describedby() {
        let html = Dialog::new("t")
            .description("More detail")
            .render(&region(), &OverlayState { open: true })
            .to_string();
        assert!(html.contains(r#"aria-describedby="dlg-description""#));
        assert!(html.contains(r#"<p id="dlg-description""#));
    }

    #[test]
    fn escape_closes_from_body() {
        let html = Dialog::new("t")
            .render(&region(), &OverlayState { open: true })
            .to_string();
        assert!(html.contains(r#"hx-trigger="keyup[key=='Escape'] from:body""#));
    }
}
