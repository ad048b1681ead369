//! Native select with optional option groups

use hearth_html::prelude::*;

#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
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
pub struct Select {
    pub id: Option<String>,
    pub name: String,
    pub placeholder: Option<String>,
    /// Ungrouped options use an empty group label
    pub groups: Vec<(String, Vec<SelectOption>)>,
    pub selected: Option<String>,
    pub disabled: bool,
    pub required: bool,
    pub class: String,
    pub attrs: Vec<Node>,
}

impl Select {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            name: field_name.into(),
            ..Self::default()
        }
    }

    pub fn id(mut self, control_id: impl Into<String>) -> Self {
        self.id = Some(control_id.into());
        self
    }

    pub fn placeholder(mut self, hint: impl Into<String>) -> Self {
        self.placeholder = Some(hint.into());
        self
    }

    pub fn options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.groups.push((String::new(), options.into_iter().collect()));
        self
    }

    pub fn group(mut self, heading: impl Into<String>, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.groups.push((heading.into(), options.into_iter().collect()));
        self
    }

    pub fn selected(mut self, option_value: impl Into<String>) -> Self {
        self.selected = Some(option_value.into());
        self
    }

    pub fn disabled(mut self, on: bool) -> Self {
        self.disabled = on;
        self
    }

    pub fn required(mut self, on: bool) -> Self {
        self.required = on;
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

    fn option(&self, opt: &SelectOption) -> Node {
        option([
            value(opt.value.clone()),
            if_(self.selected.as_deref() == Some(opt.value.as_str()), selected()),
            if_(opt.disabled, disabled()),
            text(opt.label.clone()),
        ])
    }
}

impl Component for Select {
    fn view(&self) -> Node {
        select([
            match &self.id {
                Some(control_id) => id(control_id.clone()),
                None => Node::empty(),
            },
            name(self.name.clone()),
            if_(self.disabled, disabled()),
            if_(self.required, required()),
            class(cn!(
                "flex h-9 w-full items-center justify-between rounded-md border border-input bg-transparent px-3 py-2 text-sm shadow-sm focus:outline-none focus:ring-1 focus:ring-ring disabled:cursor-not-allowed disabled:opacity-50",
                self.class
            )),
            group(self.attrs.clone()),
            match &self.placeholder {
                Some(hint) => option([
                    value(""),
                    disabled(),
                    if_(self.selected.is_none(), selected()),
                    text(hint.clone()),
                ]),
                None => Node::empty(),
            },
            map(&self.groups, |(heading, options)| {
                let items = map(options, |opt| self.option(opt));
                if heading.is_empty() {
                    items
                } else {
                    el("optgroup", [attr("label", heading.clone()), items])
                }
            }),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_selected_until_choice() {
        let select = Select::new("fruit")
            .placeholder("Select a fruit")
            .options([SelectOption::new("apple", "Apple"), SelectOption::new("banana", "Banana")]);
        let html = select.clone().view().to_string();
        assert!(html.contains(r#"<option value="" disabled selected>Select a fruit</option>"#));

        let html = select.selected("banana").view().to_string();
        assert!(html.contains(r#"<option value="" disabled>Select a fruit</option>"#));
        assert!(html.contains(r#"<option value="banana" selected>Banana</option>"#));
    }

    #[test]
    fn groups_render_optgroups() {
        let html = Select::new("tz")
            .group("North America", [SelectOption::new("est", "Eastern Standard Time")])
            .view()
            .to_string();
        assert!(html.contains(r#"<optgroup label="North America"><option value="est">"#));
    }
}
