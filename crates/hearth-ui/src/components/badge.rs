//! Small status label

use hearth_html::prelude::*;
use std::sync::LazyLock;

static BADGE: LazyLock<VariantConfig> = LazyLock::new(|| {
    VariantConfig::new(
        "inline-flex items-center rounded-md border px-2.5 py-0.5 text-xs font-semibold transition-colors focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2",
    )
    .variant(
        "variant",
        [
            ("default", "border-transparent bg-primary text-primary-foreground shadow hover:bg-primary/80"),
            ("secondary", "border-transparent bg-secondary text-secondary-foreground hover:bg-secondary/80"),
            ("destructive", "border-transparent bg-destructive text-destructive-foreground shadow hover:bg-destructive/80"),
            ("outline", "text-foreground"),
        ],
    )
    .default_value("variant", "default")
});

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Destructive,
    Outline,
}

impl BadgeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Badge {
    pub variant: BadgeVariant,
    pub label: String,
    pub class: String,
}

impl Badge {
    pub fn new(badge_label: impl Into<String>) -> Self {
        Self {
            label: badge_label.into(),
            ..Self::default()
        }
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}

impl Component for Badge {
    fn view(&self) -> Node {
        div([
            class(BADGE.classes(
                &VariantProps::new()
                    .set("variant", self.variant.as_str())
                    .class(&self.class),
            )),
            text(self.label.clone()),
        ])
    }
}
