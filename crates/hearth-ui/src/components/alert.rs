//! Inline callout with an optional icon, title and description

use hearth_html::prelude::*;
use std::sync::LazyLock;

static ALERT: LazyLock<VariantConfig> = LazyLock::new(|| {
    VariantConfig::new(
        "relative w-full rounded-lg border px-4 py-3 text-sm [&>svg+div]:translate-y-[-3px] [&>svg]:absolute [&>svg]:left-4 [&>svg]:top-4 [&>svg]:text-foreground [&>svg~*]:pl-7",
    )
    .variant(
        "variant",
        [
            ("default", "bg-background text-foreground"),
            ("destructive", "border-destructive/50 text-destructive dark:border-destructive [&>svg]:text-destructive"),
        ],
    )
    .default_value("variant", "default")
});

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertVariant {
    #[default]
    Default,
    Destructive,
}

impl AlertVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertVariant::Default => "default",
            AlertVariant::Destructive => "destructive",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Alert {
    pub variant: AlertVariant,
    pub icon: Option<Node>,
    pub title: String,
    pub description: Vec<Node>,
    pub class: String,
}

impl Alert {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            title: heading.into(),
            ..Self::default()
        }
    }

    pub fn variant(mut self, variant: AlertVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn icon(mut self, icon: Node) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn description(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.description.extend(nodes);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}

impl Component for Alert {
    fn view(&self) -> Node {
        div([
            role("alert"),
            class(ALERT.classes(
                &VariantProps::new()
                    .set("variant", self.variant.as_str())
                    .class(&self.class),
            )),
            self.icon.clone().unwrap_or_default(),
            if_with(!self.title.is_empty(), || {
                h5([
                    class("mb-1 font-medium leading-none tracking-tight"),
                    text(self.title.clone()),
                ])
            }),
            if_with(!self.description.is_empty(), || {
                div([
                    class("text-sm [&_p]:leading-relaxed"),
                    group(self.description.clone()),
                ])
            }),
        ])
    }
}
