//! Shared pieces of the modal overlay widgets (dialog, drawer, sheet)

use crate::region::{Region, SwapWidget};
use hearth_html::prelude::*;

use super::button::{button_classes, ButtonSize, ButtonVariant};

/// Two-state overlay: closed renders the bare region, open renders the
/// backdrop and panel inside it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayState {
    pub open: bool,
}

impl OverlayState {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Overlay widgets served by the generic open/close/confirm routes.
pub trait Overlay: SwapWidget<State = OverlayState> {
    /// Client event fired through `HX-Trigger` when the confirm action runs.
    fn confirm_event(&self) -> Option<&str>;
}

pub(crate) const BACKDROP_CLASSES: &str =
    "fixed inset-0 z-50 bg-black/80 data-[state=open]:animate-in data-[state=closed]:animate-out data-[state=closed]:fade-out-0 data-[state=open]:fade-in-0";

/// Full-screen backdrop. When `closes` is set a click on it posts `close`.
pub(crate) fn backdrop(region: &Region, closes: bool) -> Node {
    div([
        class(BACKDROP_CLASSES),
        data_state("open"),
        aria("hidden", "true"),
        if_with(closes, || region.post("close")),
    ])
}

/// Invisible element that posts `close` when Escape is released anywhere.
pub(crate) fn escape_listener(region: &Region) -> Node {
    div([
        class("hidden"),
        region.post("close"),
        hx_trigger("keyup[key=='Escape'] from:body"),
    ])
}

/// The corner close button.
pub(crate) fn close_button(region: &Region) -> Node {
    button([
        type_("button"),
        class("absolute right-4 top-4 rounded-sm opacity-70 ring-offset-background transition-opacity hover:opacity-100 focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2"),
        region.post("close"),
        crate::icons::x("h-4 w-4"),
        span([class("sr-only"), text("Close")]),
    ])
}

/// Title and description block wired to the panel's ARIA labels.
pub(crate) fn heading(region: &Region, title_text: &str, description: &str, align: &str) -> Node {
    div([
        class(cn!("flex flex-col space-y-1.5", align)),
        h2([
            id(region.child_id("title")),
            class("text-lg font-semibold leading-none tracking-tight"),
            text(title_text),
        ]),
        if_with(!description.is_empty(), || {
            p([
                id(region.child_id("description")),
                class("text-sm text-muted-foreground"),
                text(description),
            ])
        }),
    ])
}

/// Cancel/confirm footer. Empty labels omit the corresponding button.
pub(crate) fn footer(region: &Region, cancel_label: &str, confirm_label: &str) -> Node {
    div([
        class("flex flex-col-reverse sm:flex-row sm:justify-end sm:space-x-2"),
        if_with(!cancel_label.is_empty(), || {
            button([
                type_("button"),
                class(button_classes(ButtonVariant::Outline, ButtonSize::Default, "mt-2 sm:mt-0")),
                region.post("close"),
                text(cancel_label),
            ])
        }),
        if_with(!confirm_label.is_empty(), || {
            button([
                type_("button"),
                class(button_classes(ButtonVariant::Default, ButtonSize::Default, "")),
                region.post("confirm"),
                text(confirm_label),
            ])
        }),
    ])
}

/// ARIA attributes for a modal panel labelled by its heading.
pub(crate) fn modal_attrs(region: &Region, role_name: &str, has_description: bool) -> Node {
    group([
        role(role_name),
        aria("modal", "true"),
        aria("labelledby", region.child_id("title")),
        if_(has_description, aria("describedby", region.child_id("description"))),
        data_state("open"),
    ])
}

/// Button rendered outside the region that opens the overlay.
pub fn overlay_trigger(region: &Region, label_text: &str, variant: ButtonVariant) -> Node {
    button([
        type_("button"),
        class(button_classes(variant, ButtonSize::Default, "")),
        aria("haspopup", "dialog"),
        aria("controls", region.id().to_string()),
        region.post("open"),
        text(label_text),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_is_idempotent() {
        let mut state = OverlayState { open: true };
        state.close();
        let once = state;
        state.close();
        assert_eq!(state, once);
        assert!(!state.open);
    }

    #[test]
    fn backdrop_only_posts_when_closing() {
        let region = Region::new("d", "/d");
        assert!(backdrop(&region, true).to_string().contains(r#"hx-post="/d/close""#));
        assert!(!backdrop(&region, false).to_string().contains("hx-post"));
    }

    #[test]
    fn footer_omits_empty_labels() {
        let region = Region::new("d", "/d");
        let html = footer(&region, "Cancel", "").to_string();
        assert!(html.contains("Cancel"));
        assert!(!html.contains("/d/confirm"));
    }

    #[test]
    fn trigger_targets_region() {
        let region = Region::new("d", "/d");
        let html = overlay_trigger(&region, "Open", ButtonVariant::Outline).to_string();
        assert!(html.contains(r##"hx-target="#d""##));
        assert!(html.contains(r#"aria-controls="d""#));
    }
}
