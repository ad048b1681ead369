//! Form label

use hearth_html::prelude::*;

pub(crate) const LABEL_CLASSES: &str =
    "text-sm font-medium leading-none peer-disabled:cursor-not-allowed peer-disabled:opacity-70";

#[derive(Debug, Clone, Default)]
pub struct Label {
    pub text: String,
    /// ID of the labelled control
    pub for_id: Option<String>,
    pub class: String,
}

impl Label {
    pub fn new(label_text: impl Into<String>) -> Self {
        Self {
            text: label_text.into(),
            ..Self::default()
        }
    }

    pub fn for_id(mut self, control_id: impl Into<String>) -> Self {
        self.for_id = Some(control_id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}

impl Component for Label {
    fn view(&self) -> Node {
        label([
            match &self.for_id {
                Some(control_id) => for_(control_id.clone()),
                None => Node::empty(),
            },
            class(cn!(LABEL_CLASSES, self.class)),
            text(self.text.clone()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_points_at_control() {
        let html = Label::new("Email").for_id("email").view().to_string();
        assert!(html.starts_with(r#"<label for="email" class="text-sm font-medium"#));
        assert!(html.ends_with(">Email</label>"));
    }
}
