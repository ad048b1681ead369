//! Loading placeholder

use hearth_html::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct Skeleton {
    pub class: String,
}

impl Skeleton {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
        }
    }
}

impl Component for Skeleton {
    fn view(&self) -> Node {
        div([
            aria("hidden", "true"),
            class(cn!("animate-pulse rounded-md bg-primary/10", self.class)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_classes_come_last() {
        assert_eq!(
            Skeleton::new("h-4 w-[250px]").view().to_string(),
            r#"<div aria-hidden="true" class="animate-pulse rounded-md bg-primary/10 h-4 w-[250px]"></div>"#
        );
    }
}
