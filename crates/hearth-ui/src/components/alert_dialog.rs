//! Alert dialog with an optional "type the token to confirm" gate
//!
//! Unlike [`Dialog`](super::Dialog), the backdrop does not close it: the
//! user has to pick cancel or the action.

use super::button::{button_classes, ButtonSize, ButtonVariant};
use super::overlay;
use crate::region::{feedback, Region, SwapWidget};
use hearth_html::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertDialogState {
    pub open: bool,
    pub confirmation_valid: bool,
}

/// What the confirm route decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Confirmed,
    Rejected,
}

#[derive(Debug, Clone)]
pub struct AlertDialog {
    pub title: String,
    pub description: String,
    pub cancel_label: String,
    pub action_label: String,
    pub destructive: bool,
    pub confirm_token: Option<String>,
    pub confirm_event: Option<String>,
}

impl AlertDialog {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            cancel_label: "Cancel".to_string(),
            action_label: "Continue".to_string(),
            destructive: false,
            confirm_token: None,
            confirm_event: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn actions(mut self, cancel: impl Into<String>, action_label: impl Into<String>) -> Self {
        self.cancel_label = cancel.into();
        self.action_label = action_label.into();
        self
    }

    pub fn destructive(mut self, destructive: bool) -> Self {
        self.destructive = destructive;
        self
    }

    /// Require the user to type `token` exactly before the action enables.
    pub fn confirm_token(mut self, token: impl Into<String>) -> Self {
        self.confirm_token = Some(token.into());
        self
    }

    pub fn confirm_event(mut self, event: impl Into<String>) -> Self {
        self.confirm_event = Some(event.into());
        self
    }

    fn matches_token(&self, submitted: &str) -> bool {
        match &self.confirm_token {
            Some(token) => submitted == token,
            None => true,
        }
    }

    pub fn open(&self, state: &mut AlertDialogState) {
        state.open = true;
        state.confirmation_valid = self.confirm_token.is_none();
    }

    pub fn close(&self, state: &mut AlertDialogState) {
        state.open = false;
        state.confirmation_valid = false;
    }

    /// Check the typed confirmation. Exact, case-sensitive, untrimmed.
    pub fn validate(&self, state: &mut AlertDialogState, submitted: &str) -> bool {
        state.confirmation_valid = self.matches_token(submitted);
        state.confirmation_valid
    }

    /// Run the action if the gate is satisfied. A submitted confirmation
    /// overrides the last validated value.
    pub fn confirm(&self, state: &mut AlertDialogState, submitted: Option<&str>) -> ConfirmOutcome {
        let valid = match submitted {
            Some(s) => self.matches_token(s),
            None => self.confirm_token.is_none() || state.confirmation_valid,
        };
        if valid {
            self.close(state);
            ConfirmOutcome::Confirmed
        } else {
            state.confirmation_valid = false;
            ConfirmOutcome::Rejected
        }
    }

    /// The action button, `#{id}-confirm`.
    pub fn confirm_button(&self, region: &Region, enabled: bool) -> Node {
        let variant = if self.destructive {
            ButtonVariant::Destructive
        } else {
            ButtonVariant::Default
        };
        button([
            id(region.child_id("confirm")),
            type_("button"),
            class(button_classes(variant, ButtonSize::Default, "")),
            region.post("confirm"),
            if_with(self.confirm_token.is_some(), || {
                hx_include(format!("#{}", region.child_id("confirmation")))
            }),
            if_(!enabled, disabled()),
            aria_bool("disabled", !enabled),
            text(self.action_label.clone()),
        ])
    }

    /// Response body for the validate route: only the out-of-band button.
    pub fn render_validation(&self, region: &Region, state: &AlertDialogState) -> Node {
        self.confirm_button(region, state.confirmation_valid)
            .with([hx_swap_oob()])
    }

    fn rejection_message(&self) -> String {
        match &self.confirm_token {
            Some(token) => format!("Type \"{token}\" exactly to confirm."),
            None => "Confirmation required.".to_string(),
        }
    }

    /// Out-of-band error shown when confirm is rejected.
    pub fn rejection(&self, region: &Region) -> Node {
        feedback(region.child_id("feedback"), false, self.rejection_message())
    }

    /// The region after a rejected confirm, with the error already in its
    /// feedback slot so the primary swap does not clear the out-of-band one.
    pub fn render_rejected(&self, region: &Region, state: &AlertDialogState) -> Node {
        self.render_panel(region, state, Some(&self.rejection_message()))
    }

    fn token_field(&self, region: &Region, token: &str, error: Option<&str>) -> Node {
        let field_id = region.child_id("confirmation");
        div([
            class("grid gap-2"),
            label([
                for_(field_id.clone()),
                class("text-sm text-muted-foreground"),
                text("Type "),
                strong([class("font-mono text-foreground"), text(token)]),
                text(" to confirm."),
            ]),
            input([
                id(field_id),
                type_("text"),
                name("confirmation"),
                autocomplete("off"),
                class("flex h-9 w-full rounded-md border border-input bg-transparent px-3 py-1 text-sm shadow-sm focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring"),
                hx_post(region.path("validate")),
                hx_trigger("input changed delay:150ms, keyup[key=='Enter']"),
                hx_swap(Swap::None),
            ]),
            div([
                id(region.child_id("feedback")),
                aria("live", "polite"),
                match error {
                    Some(message) => p([
                        role("alert"),
                        class("text-sm font-medium text-destructive"),
                        text(message),
                    ]),
                    None => Node::empty(),
                },
            ]),
        ])
    }

    fn render_panel(&self, region: &Region, state: &AlertDialogState, error: Option<&str>) -> Node {
        if !state.open {
            return region.empty();
        }

        let enabled = self.confirm_token.is_none() || state.confirmation_valid;
        region.container([
            overlay::modal_attrs(region, "alertdialog", !self.description.is_empty()),
            overlay::backdrop(region, false),
            div([
                class("fixed left-[50%] top-[50%] z-50 grid w-full max-w-lg translate-x-[-50%] translate-y-[-50%] gap-4 border bg-background p-6 shadow-lg duration-200 sm:rounded-lg"),
                data_state("open"),
                overlay::heading(region, &self.title, &self.description, "text-center sm:text-left"),
                match &self.confirm_token {
                    Some(token) => self.token_field(region, token, error),
                    None => Node::empty(),
                },
                div([
                    class("flex flex-col-reverse sm:flex-row sm:justify-end sm:space-x-2"),
                    button([
                        type_("button"),
                        class(button_classes(ButtonVariant::Outline, ButtonSize::Default, "mt-2 sm:mt-0")),
                        region.post("close"),
                        text(self.cancel_label.clone()),
                    ]),
                    self.confirm_button(region, enabled),
                ]),
            ]),
        ])
    }
}

impl SwapWidget for AlertDialog {
    type State = AlertDialogState;
    const KIND: &'static str = "alert-dialog";

    fn initial_state(&self) -> AlertDialogState {
        AlertDialogState::default()
    }

    fn render(&self, region: &Region, state: &AlertDialogState) -> Node {
        self.render_panel(region, state, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gated() -> AlertDialog {
        AlertDialog::new("Delete account")
            .destructive(true)
            .confirm_token("DELETE")
    }

    fn region() -> Region {
        Region::new("del", "/del")
    }

    #[test]
    fn validation_is_exact_and_case_sensitive() {
        let dialog = gated();
        let mut state = AlertDialogState::default();
        dialog.open(&mut state);

        assert!(!dialog.validate(&mut state, "delete"));
        assert!(!dialog.validate(&mut state, " DELETE"));
        assert!(dialog.validate(&mut state, "DELETE"));
        assert!(state.confirmation_valid);
    }

    #[test]
    fn confirm_while_invalid_keeps_dialog_open() {
        let dialog = gated();
        let mut state = AlertDialogState::default();
        dialog.open(&mut state);

        assert_eq!(dialog.confirm(&mut state, Some("nope")), ConfirmOutcome::Rejected);
        assert!(state.open);

        assert_eq!(dialog.confirm(&mut state, Some("DELETE")), ConfirmOutcome::Confirmed);
        assert!(!state.open);
        assert!(!state.confirmation_valid);
    }

    #[test]
    fn confirm_uses_validated_state_without_submission() {
        let dialog = gated();
        let mut state = AlertDialogState::default();
        dialog.open(&mut state);
        dialog.validate(&mut state, "DELETE");
        assert_eq!(dialog.confirm(&mut state, None), ConfirmOutcome::Confirmed);
    }

    #[test]
    fn closing_resets_validity() {
        let dialog = gated();
        let mut state = AlertDialogState::default();
        dialog.open(&mut state);
        dialog.validate(&mut state, "DELETE");
        dialog.close(&mut state);
        assert_eq!(state, AlertDialogState::default());
    }

    #[test]
    fn ungated_dialog_confirms_directly() {
        let dialog = AlertDialog::new("Sure?");
        let mut state = AlertDialogState::default();
        dialog.open(&mut state);
        assert_eq!(dialog.confirm(&mut state, None), ConfirmOutcome::Confirmed);
    }

    #[test]
    fn validation_fragment_is_oob_button() {
        let dialog = gated();
        let state = AlertDialogState {
            open: true,
            confirmation_valid: false,
        };
        let html = dialog.render_validation(&region(), &state).to_string();
        assert!(html.starts_with(r#"<button id="del-confirm""#));
        assert!(html.contains(r#"hx-swap-oob="true""#));
        assert!(html.contains(" disabled"));
    }

    #[test]
    fn backdrop_does_not_close() {
        let dialog = gated();
        let state = AlertDialogState {
            open: true,
            confirmation_valid: false,
        };
        let html = dialog.render(&region(), &state).to_string();
        assert!(html.contains(r#"role="alertdialog""#));
        let backdrop_start = html.find("bg-black/80").unwrap();
        let backdrop_end = backdrop_start + html[backdrop_start..].find('>').unwrap();
        assert!(!html[backdrop_start..backdrop_end].contains("hx-post"));
    }

    #[test]
    fn rejected_region_carries_error_inline() {
        let dialog = gated();
        let state = AlertDialogState {
            open: true,
            confirmation_valid: false,
        };
        let html = dialog.render_rejected(&region(), &state).to_string();
        assert!(html.contains(r#"<div id="del-feedback" aria-live="polite"><p role="alert""#));
    }

    #[test]
    fn rejection_targets_feedback() {
        let html = gated().rejection(&region()).to_string();
        assert!(html.contains(r#"id="del-feedback""#));
        assert!(html.contains("DELETE"));
    }
}
