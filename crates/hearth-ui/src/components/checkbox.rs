//! Checkbox and switch: native checkbox inputs, restyled

use super::label::LABEL_CLASSES;
use hearth_html::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct Checkbox {
    pub id: String,
    pub name: String,
    pub value: String,
    pub label: String,
    pub checked: bool,
    pub disabled: bool,
    pub class: String,
    pub attrs: Vec<Node>,
}

impl Checkbox {
    pub fn new(control_id: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self {
            id: control_id.into(),
            name: field_name.into(),
            value: "on".to_string(),
            ..Self::default()
        }
    }

    pub fn value(mut self, submitted: impl Into<String>) -> Self {
        self.value = submitted.into();
        self
    }

    pub fn label(mut self, label_text: impl Into<String>) -> Self {
        self.label = label_text.into();
        self
    }

    pub fn checked(mut self, on: bool) -> Self {
        self.checked = on;
        self
    }

    pub fn disabled(mut self, on: bool) -> Self {
        self.disabled = on;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn attrs(mut self, attrs: impl IntoIterator<Item = Node>) -> Self {
        self.attrs.extend(attrs);
        self
    }
}

fn check_state(on: bool) -> &'static str {
    if on {
        "checked"
    } else {
        "unchecked"
    }
}

impl Component for Checkbox {
    fn view(&self) -> Node {
        div([
            class("flex items-center space-x-2"),
            input([
                type_("checkbox"),
                id(self.id.clone()),
                name(self.name.clone()),
                value(self.value.clone()),
                if_(self.checked, checked()),
                if_(self.disabled, disabled()),
                data_state(check_state(self.checked)),
                class(cn!(
                    "peer h-4 w-4 shrink-0 rounded-sm border border-primary shadow accent-primary focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring disabled:cursor-not-allowed disabled:opacity-50",
                    self.class
                )),
                group(self.attrs.clone()),
            ]),
            if_with(!self.label.is_empty(), || {
                label([for_(self.id.clone()), class(LABEL_CLASSES), text(self.label.clone())])
            }),
        ])
    }
}

#[derive(Debug, Clone, Default)]
pub struct Switch {
    pub id: String,
    pub name: String,
    pub label: String,
    pub checked: bool,
    pub disabled: bool,
    pub class: String,
    pub attrs: Vec<Node>,
}

impl Switch {
    pub fn new(control_id: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self {
            id: control_id.into(),
            name: field_name.into(),
            ..Self::default()
        }
    }

    pub fn label(mut self, label_text: impl Into<String>) -> Self {
        self.label = label_text.into();
        self
    }

    pub fn checked(mut self, on: bool) -> Self {
        self.checked = on;
        self
    }

    pub fn disabled(mut self, on: bool) -> Self {
        self.disabled = on;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn attrs(mut self, attrs: impl IntoIterator<Item = Node>) -> Self {
        self.attrs.extend(attrs);
        self
    }
}

impl Component for Switch {
    fn view(&self) -> Node {
        let switch_state = check_state(self.checked);
        div([
            class("flex items-center space-x-2"),
            label([
                class(cn!("relative inline-flex cursor-pointer items-center", self.class)),
                input([
                    type_("checkbox"),
                    role("switch"),
                    id(self.id.clone()),
                    name(self.name.clone()),
                    aria_bool("checked", self.checked),
                    if_(self.checked, checked()),
                    if_(self.disabled, disabled()),
                    data_state(switch_state),
                    class("peer sr-only"),
                    group(self.attrs.clone()),
                ]),
                span([
                    aria("hidden", "true"),
                    data_state(switch_state),
                    class("inline-flex h-5 w-9 shrink-0 items-center rounded-full border-2 border-transparent bg-input shadow-sm transition-colors peer-checked:bg-primary peer-focus-visible:ring-2 peer-focus-visible:ring-ring peer-disabled:cursor-not-allowed peer-disabled:opacity-50"),
                    span([
                        class(cn!(
                            "pointer-events-none block h-4 w-4 rounded-full bg-background shadow-lg ring-0 transition-transform",
                            cn_if(self.checked, "translate-x-4", "translate-x-0")
                        )),
                    ]),
                ]),
            ]),
            if_with(!self.label.is_empty(), || {
                label([for_(self.id.clone()), class(LABEL_CLASSES), text(self.label.clone())])
            }),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkbox_reflects_state() {
        let html = Checkbox::new("terms", "terms")
            .label("Accept terms and conditions")
            .checked(true)
            .view()
            .to_string();
        assert!(html.contains(r#"value="on" checked data-state="checked""#));
        assert!(html.contains(r#"<label for="terms""#));
    }

    #[test]
    fn switch_uses_switch_role() {
        let html = Switch::new("airplane", "airplane").view().to_string();
        assert!(html.contains(r#"role="switch" id="airplane" name="airplane" aria-checked="false""#));
        assert!(html.contains("translate-x-0"));
    }
}
