//! Round avatar image with a text fallback

use hearth_html::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct Avatar {
    pub src: Option<String>,
    pub alt: String,
    /// Shown when there is no image; defaults to initials of `alt`
    pub fallback: Option<String>,
    pub class: String,
}

impl Avatar {
    pub fn new(alt_text: impl Into<String>) -> Self {
        Self {
            alt: alt_text.into(),
            ..Self::default()
        }
    }

    pub fn src(mut self, url: impl Into<String>) -> Self {
        self.src = Some(url.into());
        self
    }

    pub fn fallback(mut self, initials: impl Into<String>) -> Self {
        self.fallback = Some(initials.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}

/// Up to two uppercase initials from the words of `full_name`.
pub fn initials(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

impl Component for Avatar {
    fn view(&self) -> Node {
        let fallback_text = self.fallback.clone().unwrap_or_else(|| initials(&self.alt));
        span([
            class(cn!(
                "relative flex h-10 w-10 shrink-0 overflow-hidden rounded-full",
                self.class
            )),
            match &self.src {
                Some(url) => img([
                    class("aspect-square h-full w-full"),
                    src(url.clone()),
                    alt(self.alt.clone()),
                ]),
                None => span([
                    class("flex h-full w-full items-center justify-center rounded-full bg-muted"),
                    aria("label", self.alt.clone()),
                    text(fallback_text),
                ]),
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_name() {
        assert_eq!(initials("shad cn"), "SC");
        assert_eq!(initials("Ada Byron Lovelace"), "AB");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn image_or_fallback() {
        let with_image = Avatar::new("@shadcn").src("/a.png").view().to_string();
        assert!(with_image.contains(r#"<img class="aspect-square h-full w-full" src="/a.png" alt="@shadcn">"#));

        let without = Avatar::new("Jane Doe").view().to_string();
        assert!(without.contains(">JD</span>"));
    }
}
