//! Card container with header, content and footer slots

use hearth_html::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct Card {
    pub title: String,
    pub description: String,
    pub content: Vec<Node>,
    pub footer: Vec<Node>,
    pub class: String,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, heading: impl Into<String>) -> Self {
        self.title = heading.into();
        self
    }

    pub fn description(mut self, copy: impl Into<String>) -> Self {
        self.description = copy.into();
        self
    }

    pub fn content(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.content.extend(nodes);
        self
    }

    pub fn footer(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.footer.extend(nodes);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}

impl Component for Card {
    fn view(&self) -> Node {
        let has_header = !self.title.is_empty() || !self.description.is_empty();
        div([
            class(cn!("rounded-xl border bg-card text-card-foreground shadow", self.class)),
            if_with(has_header, || {
                div([
                    class("flex flex-col space-y-1.5 p-6"),
                    if_with(!self.title.is_empty(), || {
                        h3([
                            class("font-semibold leading-none tracking-tight"),
                            text(self.title.clone()),
                        ])
                    }),
                    if_with(!self.description.is_empty(), || {
                        p([
                            class("text-sm text-muted-foreground"),
                            text(self.description.clone()),
                        ])
                    }),
                ])
            }),
            if_with(!self.content.is_empty(), || {
                div([class("p-6 pt-0"), group(self.content.clone())])
            }),
            if_with(!self.footer.is_empty(), || {
                div([class("flex items-center p-6 pt-0"), group(self.footer.clone())])
            }),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_render_in_order() {
        let html = Card::new()
            .title("Create project")
            .description("Deploy your new project in one-click.")
            .content([text("body")])
            .footer([text("actions")])
            .view()
            .to_string();
        let heading = html.find("Create project").unwrap();
        let body = html.find("body").unwrap();
        let actions = html.find("actions").unwrap();
        assert!(heading < body && body < actions);
    }

    #[test]
    fn bare_card_has_no_header() {
        let html = Card::new().content([text("x")]).view().to_string();
        assert!(!html.contains("space-y-1.5"));
    }
}
