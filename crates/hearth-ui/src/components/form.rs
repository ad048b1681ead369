//! Form field wrapper: label, control, description and error message
//!
//! The wrapper wires `aria-describedby` and `aria-invalid` onto the control
//! it is given, so the control itself stays a plain node.

use super::label::LABEL_CLASSES;
use hearth_html::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct FormField {
    /// ID of the control; derived IDs hang off it
    pub control_id: String,
    pub label: String,
    pub control: Option<Node>,
    pub description: String,
    pub message: Option<String>,
    pub class: String,
}

impl FormField {
    pub fn new(control_id: impl Into<String>, label_text: impl Into<String>) -> Self {
        Self {
            control_id: control_id.into(),
            label: label_text.into(),
            ..Self::default()
        }
    }

    pub fn control(mut self, node: Node) -> Self {
        self.control = Some(node);
        self
    }

    pub fn description(mut self, copy: impl Into<String>) -> Self {
        self.description = copy.into();
        self
    }

    /// Validation error; marks the field invalid.
    pub fn message(mut self, error: impl Into<String>) -> Self {
        self.message = Some(error.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn description_id(&self) -> String {
        format!("{}-description", self.control_id)
    }

    pub fn message_id(&self) -> String {
        format!("{}-message", self.control_id)
    }

    fn described_by(&self) -> String {
        let mut ids = Vec::new();
        if !self.description.is_empty() {
            ids.push(self.description_id());
        }
        if self.message.is_some() {
            ids.push(self.message_id());
        }
        ids.join(" ")
    }
}

impl Component for FormField {
    fn view(&self) -> Node {
        let invalid = self.message.is_some();
        let described_by = self.described_by();
        let control = self.control.clone().map(|node| match node {
            Node::Element(_) => node.with([
                if_(!described_by.is_empty(), aria("describedby", described_by.clone())),
                if_(invalid, aria("invalid", "true")),
            ]),
            other => other,
        });

        div([
            class(cn!("space-y-2", self.class)),
            label([
                for_(self.control_id.clone()),
                class(cn!(LABEL_CLASSES, cn_if(invalid, "text-destructive", ""))),
                text(self.label.clone()),
            ]),
            control.unwrap_or_default(),
            if_with(!self.description.is_empty(), || {
                p([
                    id(self.description_id()),
                    class("text-[0.8rem] text-muted-foreground"),
                    text(self.description.clone()),
                ])
            }),
            match &self.message {
                Some(error) => p([
                    id(self.message_id()),
                    class("text-[0.8rem] font-medium text-destructive"),
                    text(error.clone()),
                ]),
                None => Node::empty(),
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Input;

    #[test]
    fn invalid_field_wires_aria() {
        let html = FormField::new("username", "Username")
            .control(Input::new().id("username").name("username").view())
            .description("This is your public display name.")
            .message("Username must be at least 2 characters.")
            .view()
            .to_string();
        assert!(html.contains(
            r#"aria-describedby="username-description username-message" aria-invalid="true""#
        ));
        assert!(html.contains(r#"<p id="username-message" class="text-[0.8rem] font-medium text-destructive">"#));
        assert!(html.contains("text-destructive\">Username</label>"));
    }

    #[test]
    fn valid_field_has_no_invalid_flag() {
        let html = FormField::new("email", "Email")
            .control(Input::new().id("email").view())
            .view()
            .to_string();
        assert!(!html.contains("aria-invalid"));
        assert!(!html.contains("aria-describedby"));
    }
}
