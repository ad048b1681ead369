//! Radio button group

use super::label::LABEL_CLASSES;
use super::slider::Orientation;
use hearth_html::prelude::*;

#[derive(Debug, Clone)]
pub struct RadioOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl RadioOption {
    pub fn new(option_value: impl Into<String>, option_label: impl Into<String>) -> Self {
        Self {
            value: option_value.into(),
            label: option_label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct RadioGroup {
    pub name: String,
    pub options: Vec<RadioOption>,
    pub selected: Option<String>,
    pub orientation: Orientation,
    pub disabled: bool,
    pub class: String,
    pub attrs: Vec<Node>,
}

impl RadioGroup {
    pub fn new(group_name: impl Into<String>, options: impl IntoIterator<Item = RadioOption>) -> Self {
        Self {
            name: group_name.into(),
            options: options.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn selected(mut self, option_value: impl Into<String>) -> Self {
        self.selected = Some(option_value.into());
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
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

    /// Attributes placed on every radio input (e.g. `hx-post` on change).
    pub fn attrs(mut self, attrs: impl IntoIterator<Item = Node>) -> Self {
        self.attrs.extend(attrs);
        self
    }
}

impl Component for RadioGroup {
    fn view(&self) -> Node {
        let vertical = self.orientation == Orientation::Vertical;
        div([
            role("radiogroup"),
            aria("orientation", self.orientation.as_str()),
            if_(self.disabled, aria("disabled", "true")),
            class(cn!("grid gap-2", cn_if(vertical, "", "grid-flow-col auto-cols-max gap-4"), self.class)),
            map(&self.options, |opt| {
                let option_id = format!("{}-{}", self.name, opt.value);
                let on = self.selected.as_deref() == Some(opt.value.as_str());
                div([
                    class("flex items-center space-x-2"),
                    input([
                        type_("radio"),
                        id(option_id.clone()),
                        name(self.name.clone()),
                        value(opt.value.clone()),
                        if_(on, checked()),
                        if_(self.disabled || opt.disabled, disabled()),
                        data_state(if on { "checked" } else { "unchecked" }),
                        class("peer aspect-square h-4 w-4 rounded-full border border-primary text-primary shadow accent-primary focus:outline-none focus-visible:ring-1 focus-visible:ring-ring disabled:cursor-not-allowed disabled:opacity-50"),
                        group(self.attrs.clone()),
                    ]),
                    label([for_(option_id), class(LABEL_CLASSES), text(opt.label.clone())]),
                ])
            }),
        ])
    }
}
