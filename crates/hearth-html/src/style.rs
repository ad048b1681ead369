//! Class-name composition and the variant engine
//!
//! Class strings are composed eagerly, when a widget builds its nodes. No
//! token deduplication happens here; later classes win through the CSS
//! cascade, so callers put overrides last.

use indexmap::IndexMap;

/// Join class fragments with single spaces.
///
/// Each fragment is trimmed and empty fragments are skipped. Whitespace
/// inside a fragment is left as-is.
pub fn cn<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for part in parts {
        let part = part.as_ref().trim();
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

/// Variadic [`cn`]: `cn!("base", extra, cn_if(active, "on", "off"))`.
#[macro_export]
macro_rules! cn {
    ($($part:expr),* $(,)?) => {
        $crate::style::cn([$(::std::convert::AsRef::<str>::as_ref(&$part)),*])
    };
}

pub fn cn_if<'a>(cond: bool, when_true: &'a str, when_false: &'a str) -> &'a str {
    if cond {
        when_true
    } else {
        when_false
    }
}

/// Base classes plus named axes whose chosen value contributes more classes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantConfig {
    pub base: String,
    pub variants: IndexMap<String, IndexMap<String, String>>,
    pub defaults: IndexMap<String, String>,
}

impl VariantConfig {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            ..Self::default()
        }
    }

    /// Declare an axis and its value → classes table. Axes resolve in
    /// declaration order.
    pub fn variant<'a>(
        mut self,
        axis: impl Into<String>,
        values: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let table = values
            .into_iter()
            .map(|(v, classes)| (v.to_string(), classes.to_string()))
            .collect();
        self.variants.insert(axis.into(), table);
        self
    }

    pub fn default_value(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.insert(axis.into(), value.into());
        self
    }

    /// Resolve `props` into a class string.
    ///
    /// Per axis the caller's non-empty value wins over the default; unknown
    /// axes and values contribute nothing. The caller's extra class goes last.
    pub fn classes(&self, props: &VariantProps) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(self.variants.len() + 2);
        parts.push(&self.base);

        for (axis, table) in &self.variants {
            let chosen = props
                .values
                .get(axis)
                .map(String::as_str)
                .filter(|v| !v.is_empty())
                .or_else(|| self.defaults.get(axis).map(String::as_str));

            if let Some(classes) = chosen.and_then(|v| table.get(v)) {
                parts.push(classes);
            }
        }

        parts.push(&props.class);
        cn(parts)
    }
}

/// Call-time axis choices plus an extra class appended last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantProps {
    pub values: IndexMap<String, String>,
    pub class: String,
}

impl VariantProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(axis.into(), value.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }
}
