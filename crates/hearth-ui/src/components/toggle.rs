//! Two-state toggle button and toggle groups

use hearth_html::prelude::*;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static TOGGLE: LazyLock<VariantConfig> = LazyLock::new(|| {
    VariantConfig::new(
        "inline-flex items-center justify-center gap-2 rounded-md text-sm font-medium transition-colors hover:bg-muted hover:text-muted-foreground focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring disabled:pointer-events-none disabled:opacity-50 data-[state=on]:bg-accent data-[state=on]:text-accent-foreground",
    )
    .variant(
        "variant",
        [
            ("default", "bg-transparent"),
            ("outline", "border border-input bg-transparent shadow-sm hover:bg-accent hover:text-accent-foreground"),
        ],
    )
    .variant(
        "size",
        [
            ("default", "h-9 min-w-9 px-2"),
            ("sm", "h-8 min-w-8 px-1.5"),
            ("lg", "h-10 min-w-10 px-2.5"),
        ],
    )
    .default_value("variant", "default")
    .default_value("size", "default")
});

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToggleVariant {
    #[default]
    Default,
    Outline,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToggleSize {
    #[default]
    Default,
    Sm,
    Lg,
}

pub fn toggle_classes(variant: ToggleVariant, size: ToggleSize, extra: &str) -> String {
    let variant_name = match variant {
        ToggleVariant::Default => "default",
        ToggleVariant::Outline => "outline",
    };
    let size_name = match size {
        ToggleSize::Default => "default",
        ToggleSize::Sm => "sm",
        ToggleSize::Lg => "lg",
    };
    TOGGLE.classes(
        &VariantProps::new()
            .set("variant", variant_name)
            .set("size", size_name)
            .class(extra),
    )
}

fn on_off(pressed: bool) -> &'static str {
    if pressed {
        "on"
    } else {
        "off"
    }
}

#[derive(Debug, Clone, Default)]
pub struct Toggle {
    pub pressed: bool,
    pub variant: ToggleVariant,
    pub size: ToggleSize,
    pub disabled: bool,
    pub aria_label: String,
    pub children: Vec<Node>,
    pub class: String,
    pub attrs: Vec<Node>,
}

impl Toggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pressed(mut self, on: bool) -> Self {
        self.pressed = on;
        self
    }

    pub fn variant(mut self, variant: ToggleVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ToggleSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, on: bool) -> Self {
        self.disabled = on;
        self
    }

    pub fn aria_label(mut self, label_text: impl Into<String>) -> Self {
        self.aria_label = label_text.into();
        self
    }

    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
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

impl Component for Toggle {
    fn view(&self) -> Node {
        button([
            type_("button"),
            aria_bool("pressed", self.pressed),
            data_state(on_off(self.pressed)),
            if_(!self.aria_label.is_empty(), aria("label", self.aria_label.clone())),
            if_(self.disabled, disabled()),
            class(toggle_classes(self.variant, self.size, &self.class)),
            group(self.attrs.clone()),
            group(self.children.clone()),
        ])
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToggleGroupType {
    #[default]
    Single,
    Multiple,
}

#[derive(Debug, Clone)]
pub struct ToggleGroupItem {
    pub value: String,
    pub label: Node,
    pub aria_label: String,
    pub disabled: bool,
}

impl ToggleGroupItem {
    pub fn new(item_value: impl Into<String>, content: Node, label_text: impl Into<String>) -> Self {
        Self {
            value: item_value.into(),
            label: content,
            aria_label: label_text.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct ToggleGroup {
    pub kind: ToggleGroupType,
    pub items: Vec<ToggleGroupItem>,
    pub pressed: BTreeSet<String>,
    pub variant: ToggleVariant,
    pub size: ToggleSize,
    pub class: String,
}

impl ToggleGroup {
    pub fn new(kind: ToggleGroupType, items: impl IntoIterator<Item = ToggleGroupItem>) -> Self {
        Self {
            kind,
            items: items.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Pressed values; a single group keeps only the first.
    pub fn pressed<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
        let mut iter = values.into_iter().map(Into::into);
        self.pressed = match self.kind {
            ToggleGroupType::Single => iter.next().into_iter().collect(),
            ToggleGroupType::Multiple => iter.collect(),
        };
        self
    }

    pub fn variant(mut self, variant: ToggleVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ToggleSize) -> Self {
        self.size = size;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}

impl Component for ToggleGroup {
    fn view(&self) -> Node {
        div([
            role("group"),
            data("type", match self.kind {
                ToggleGroupType::Single => "single",
                ToggleGroupType::Multiple => "multiple",
            }),
            class(cn!("flex items-center justify-center gap-1", self.class)),
            map(&self.items, |item| {
                let on = self.pressed.contains(&item.value);
                button([
                    type_("button"),
                    match self.kind {
                        ToggleGroupType::Single => group([role("radio"), aria_bool("checked", on)]),
                        ToggleGroupType::Multiple => aria_bool("pressed", on),
                    },
                    data_state(on_off(on)),
                    data("value", item.value.clone()),
                    aria("label", item.aria_label.clone()),
                    if_(item.disabled, disabled()),
                    class(toggle_classes(self.variant, self.size, "")),
                    item.label.clone(),
                ])
            }),
        ])
    }
}
