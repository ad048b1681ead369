//! Button with shadcn-style variants
//!
//! ```
//! use hearth_html::Component;
//! use hearth_ui::components::{Button, ButtonSize, ButtonVariant};
//!
//! let html = Button::new()
//!     .variant(ButtonVariant::Destructive)
//!     .size(ButtonSize::Sm)
//!     .label("Delete")
//!     .view()
//!     .to_string();
//! assert!(html.contains("bg-destructive"));
//! ```

use hearth_html::prelude::*;
use std::sync::LazyLock;

static BUTTON: LazyLock<VariantConfig> = LazyLock::new(|| {
    VariantConfig::new(
        "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium transition-colors focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg]:size-4 [&_svg]:shrink-0",
    )
    .variant(
        "variant",
        [
            ("default", "bg-primary text-primary-foreground shadow hover:bg-primary/90"),
            ("destructive", "bg-destructive text-destructive-foreground shadow-sm hover:bg-destructive/90"),
            ("outline", "border border-input bg-background shadow-sm hover:bg-accent hover:text-accent-foreground"),
            ("secondary", "bg-secondary text-secondary-foreground shadow-sm hover:bg-secondary/80"),
            ("ghost", "hover:bg-accent hover:text-accent-foreground"),
            ("link", "text-primary underline-offset-4 hover:underline"),
        ],
    )
    .variant(
        "size",
        [
            ("default", "h-9 px-4 py-2"),
            ("sm", "h-8 rounded-md px-3 text-xs"),
            ("lg", "h-10 rounded-md px-8"),
            ("icon", "h-9 w-9"),
        ],
    )
    .default_value("variant", "default")
    .default_value("size", "default")
});

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

impl ButtonVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Default => "default",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Link => "link",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

impl ButtonSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonSize::Default => "default",
            ButtonSize::Sm => "sm",
            ButtonSize::Lg => "lg",
            ButtonSize::Icon => "icon",
        }
    }
}

/// Class string for a button with the given variant, size and extra classes.
///
/// Exposed so other widgets (dialog footers, pagination links, carousel
/// arrows) can style their own elements like buttons.
pub fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    BUTTON.classes(
        &VariantProps::new()
            .set("variant", variant.as_str())
            .set("size", size.as_str())
            .class(extra),
    )
}

#[derive(Debug, Clone, Default)]
pub struct Button {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub class: String,
    pub disabled: bool,
    pub kind: Option<String>,
    /// Render as `<a href>` instead of `<button>`
    pub href: Option<String>,
    pub attrs: Vec<Node>,
    pub children: Vec<Node>,
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// The `type` attribute; defaults to `button`.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.children.push(text(label));
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Extra attributes (HTMX wiring, ARIA) appended after the defaults.
    pub fn attrs(mut self, attrs: impl IntoIterator<Item = Node>) -> Self {
        self.attrs.extend(attrs);
        self
    }
}

impl Component for Button {
    fn view(&self) -> Node {
        let classes = button_classes(self.variant, self.size, &self.class);
        match &self.href {
            Some(link) => a([
                href(link.clone()),
                class(classes),
                if_(self.disabled, aria("disabled", "true")),
                group(self.attrs.clone()),
                group(self.children.clone()),
            ]),
            None => button([
                type_(self.kind.clone().unwrap_or_else(|| "button".to_string())),
                class(classes),
                if_(self.disabled, disabled()),
                group(self.attrs.clone()),
                group(self.children.clone()),
            ]),
        }
    }
}
