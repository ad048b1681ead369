//! Text input and textarea

use hearth_html::prelude::*;

const INPUT_CLASSES: &str = "flex h-9 w-full rounded-md border border-input bg-transparent px-3 py-1 text-base shadow-sm transition-colors file:border-0 file:bg-transparent file:text-sm file:font-medium file:text-foreground placeholder:text-muted-foreground focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring disabled:cursor-not-allowed disabled:opacity-50 md:text-sm";

const TEXTAREA_CLASSES: &str = "flex min-h-[60px] w-full rounded-md border border-input bg-transparent px-3 py-2 text-base shadow-sm placeholder:text-muted-foreground focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring disabled:cursor-not-allowed disabled:opacity-50 md:text-sm";

/// Fields shared by [`Input`] and [`Textarea`].
#[derive(Debug, Clone, Default)]
pub struct FieldProps {
    pub id: Option<String>,
    pub name: Option<String>,
    pub value: Option<String>,
    pub placeholder: Option<String>,
    pub disabled: bool,
    pub required: bool,
    pub readonly: bool,
    pub invalid: bool,
    pub class: String,
    pub attrs: Vec<Node>,
}

impl FieldProps {
    fn common(&self) -> Node {
        group([
            match &self.id {
                Some(field_id) => id(field_id.clone()),
                None => Node::empty(),
            },
            match &self.name {
                Some(field_name) => name(field_name.clone()),
                None => Node::empty(),
            },
            match &self.placeholder {
                Some(hint) => placeholder(hint.clone()),
                None => Node::empty(),
            },
            if_(self.disabled, disabled()),
            if_(self.required, required()),
            if_(self.readonly, readonly()),
            if_(self.invalid, aria("invalid", "true")),
        ])
    }
}

macro_rules! field_builders {
    ($ty:ty) => {
        impl $ty {
            pub fn id(mut self, field_id: impl Into<String>) -> Self {
                self.props.id = Some(field_id.into());
                self
            }

            pub fn name(mut self, field_name: impl Into<String>) -> Self {
                self.props.name = Some(field_name.into());
                self
            }

            pub fn value(mut self, current: impl Into<String>) -> Self {
                self.props.value = Some(current.into());
                self
            }

            pub fn placeholder(mut self, hint: impl Into<String>) -> Self {
                self.props.placeholder = Some(hint.into());
                self
            }

            pub fn disabled(mut self, on: bool) -> Self {
                self.props.disabled = on;
                self
            }

            pub fn required(mut self, on: bool) -> Self {
                self.props.required = on;
                self
            }

            pub fn readonly(mut self, on: bool) -> Self {
                self.props.readonly = on;
                self
            }

            /// Marks the control `aria-invalid`.
            pub fn invalid(mut self, on: bool) -> Self {
                self.props.invalid = on;
                self
            }

            pub fn class(mut self, class: impl Into<String>) -> Self {
                self.props.class = class.into();
                self
            }

            /// Extra attributes such as HTMX wiring.
            pub fn attrs(mut self, attrs: impl IntoIterator<Item = Node>) -> Self {
                self.props.attrs.extend(attrs);
                self
            }
        }
    };
}

#[derive(Debug, Clone, Default)]
pub struct Input {
    pub kind: String,
    pub props: FieldProps,
}

impl Input {
    pub fn new() -> Self {
        Self {
            kind: "text".to_string(),
            props: FieldProps::default(),
        }
    }

    /// The `type` attribute.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }
}

field_builders!(Input);

impl Component for Input {
    fn view(&self) -> Node {
        input([
            type_(self.kind.clone()),
            self.props.common(),
            match &self.props.value {
                Some(current) => value(current.clone()),
                None => Node::empty(),
            },
            class(cn!(INPUT_CLASSES, self.props.class)),
            group(self.props.attrs.clone()),
        ])
    }
}

#[derive(Debug, Clone, Default)]
pub struct Textarea {
    pub rows: Option<usize>,
    pub props: FieldProps,
}

impl Textarea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(mut self, n: usize) -> Self {
        self.rows = Some(n);
        self
    }
}

field_builders!(Textarea);

impl Component for Textarea {
    fn view(&self) -> Node {
        textarea([
            self.props.common(),
            match self.rows {
                Some(n) => rows(n),
                None => Node::empty(),
            },
            class(cn!(TEXTAREA_CLASSES, self.props.class)),
            group(self.props.attrs.clone()),
            text(self.props.value.clone().unwrap_or_default()),
        ])
    }
}
