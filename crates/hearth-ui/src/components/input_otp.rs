//! One-time-code input: a row of single-character cells
//!
//! The last cell posts the whole region to `{base}/verify` with
//! `hx-swap="none"`; the answer lands out of band in `#{id}-feedback`.

use crate::region::{feedback, Region, SwapWidget};
use hearth_html::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Shown in empty cells.
pub const PLACEHOLDER: &str = "○";

/// Event fired after a successful verification.
pub const VERIFIED_EVENT: &str = "otp-verified";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpPattern {
    #[default]
    Digits,
    Alphanumeric,
}

impl OtpPattern {
    pub fn accepts(&self, c: char) -> bool {
        match self {
            OtpPattern::Digits => c.is_ascii_digit(),
            OtpPattern::Alphanumeric => c.is_ascii_alphanumeric(),
        }
    }

    fn html_pattern(&self) -> &'static str {
        match self {
            OtpPattern::Digits => "[0-9]",
            OtpPattern::Alphanumeric => "[A-Za-z0-9]",
        }
    }

    fn inputmode(&self) -> &'static str {
        match self {
            OtpPattern::Digits => "numeric",
            OtpPattern::Alphanumeric => "text",
        }
    }
}

pub type Verifier = Arc<dyn Fn(&str) -> bool + Send + Sync>;

#[derive(Clone)]
pub struct InputOtp {
    pub name: String,
    pub length: usize,
    pub pattern: OtpPattern,
    /// Cell counts per visual group, split by a separator
    pub groups: Vec<usize>,
    pub verifier: Option<Verifier>,
    pub class: String,
}

impl fmt::Debug for InputOtp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputOtp")
            .field("name", &self.name)
            .field("length", &self.length)
            .field("pattern", &self.pattern)
            .field("groups", &self.groups)
            .field("verifier", &self.verifier.is_some())
            .finish()
    }
}

impl Default for InputOtp {
    fn default() -> Self {
        Self {
            name: "otp".to_string(),
            length: 6,
            pattern: OtpPattern::Digits,
            groups: Vec::new(),
            verifier: None,
            class: String::new(),
        }
    }
}

impl InputOtp {
    pub fn new(field_name: impl Into<String>, length: usize) -> Self {
        Self {
            name: field_name.into(),
            length: length.max(1),
            ..Self::default()
        }
    }

    pub fn pattern(mut self, pattern: OtpPattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn groups(mut self, groups: impl IntoIterator<Item = usize>) -> Self {
        self.groups = groups.into_iter().filter(|g| *g > 0).collect();
        self
    }

    pub fn verifier(mut self, check: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        self.verifier = Some(Arc::new(check));
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn cell_name(&self, index: usize) -> String {
        format!("{}-{}", self.name, index)
    }

    /// Concatenate the submitted cells in index order. Missing cells count
    /// as empty; only the first character of each cell is used.
    pub fn collect_code(&self, fields: &HashMap<String, String>) -> String {
        (0..self.length)
            .filter_map(|i| fields.get(&self.cell_name(i)))
            .filter_map(|cell| cell.trim().chars().next())
            .collect()
    }

    /// Validate a full code. `Err` carries the message shown to the user.
    pub fn check_code(&self, code: &str) -> Result<String, String> {
        if code.chars().count() < self.length {
            return Err(format!("Enter all {} characters.", self.length));
        }
        if !code.chars().all(|c| self.pattern.accepts(c)) {
            return Err(match self.pattern {
                OtpPattern::Digits => "Only digits are allowed.".to_string(),
                OtpPattern::Alphanumeric => "Only letters and digits are allowed.".to_string(),
            });
        }
        match &self.verifier {
            Some(check) if !check(code) => Err("Invalid code. Please try again.".to_string()),
            _ => Ok(code.to_string()),
        }
    }

    /// Out-of-band feedback for a verification result.
    pub fn verdict(&self, region: &Region, result: &Result<String, String>) -> Node {
        let target_id = region.child_id("feedback");
        match result {
            Ok(_) => feedback(target_id, true, "Code verified."),
            Err(message) => feedback(target_id, false, message.clone()),
        }
    }

    fn cell(&self, region: &Region, index: usize) -> Node {
        let last = index + 1 == self.length;
        input([
            id(region.child_id(&index.to_string())),
            type_("text"),
            name(self.cell_name(index)),
            max_length(1),
            inputmode(self.pattern.inputmode()),
            pattern(self.pattern.html_pattern()),
            if_(index == 0, autocomplete("one-time-code")),
            placeholder(PLACEHOLDER),
            aria("label", format!("Character {} of {}", index + 1, self.length)),
            data("otp-cell", index.to_string()),
            class("relative flex h-9 w-9 items-center justify-center border-y border-r border-input text-center text-sm shadow-sm transition-all first:rounded-l-md first:border-l last:rounded-r-md placeholder:text-muted-foreground/40 focus:z-10 focus:outline-none focus:ring-1 focus:ring-ring"),
            if_with(last, || {
                group([
                    hx_post(region.path("verify")),
                    hx_include(region.target()),
                    hx_swap(Swap::None),
                    hx_trigger("input"),
                ])
            }),
        ])
    }

    fn layout(&self) -> Vec<usize> {
        let covered: usize = self.groups.iter().sum();
        if self.groups.is_empty() || covered != self.length {
            vec![self.length]
        } else {
            self.groups.clone()
        }
    }

    fn script(&self, region: &Region) -> Node {
        script([raw(format!(
            "(function(){{var root=document.getElementById('{id}');if(!root)return;\
var cells=root.querySelectorAll('input[data-otp-cell]');var last=cells[cells.length-1];\
cells.forEach(function(cell,i){{\
cell.addEventListener('input',function(e){{if(!e.isTrusted)return;if(cell.value&&i<cells.length-1){{cells[i+1].focus();\
if(Array.prototype.every.call(cells,function(c){{return c.value.length===1;}})){{last.dispatchEvent(new Event('input',{{bubbles:true}}));}}}}}});\
cell.addEventListener('keydown',function(e){{if(e.key==='Backspace'&&!cell.value&&i>0){{cells[i-1].focus();}}}});\
cell.addEventListener('paste',function(e){{var t=(e.clipboardData||window.clipboardData).getData('text').trim();if(!t)return;\
e.preventDefault();for(var j=0;j<cells.length;j++){{cells[j].value=t.charAt(j)||'';}}\
last.focus();last.dispatchEvent(new Event('input',{{bubbles:true}}));}});}});}})();",
            id = region.id()
        ))])
    }
}

impl SwapWidget for InputOtp {
    type State = ();
    const KIND: &'static str = "input-otp";

    fn initial_state(&self) {}

    fn render(&self, region: &Region, _state: &()) -> Node {
        let mut start = 0;
        let mut blocks = Vec::new();
        for (n, size) in self.layout().into_iter().enumerate() {
            if n > 0 {
                blocks.push(div([
                    role("separator"),
                    class("flex items-center"),
                    crate::icons::dot("h-4 w-4"),
                ]));
            }
            let cells = (start..start + size).map(|i| self.cell(region, i));
            blocks.push(div([class("flex items-center")]).with(cells));
            start += size;
        }

        region.container([
            class(cn!("flex flex-col gap-2", self.class)),
            div([class("flex items-center gap-2 has-[:disabled]:opacity-50"), group(blocks)]),
            div([id(region.child_id("feedback")), aria("live", "polite")]),
            self.script(region),
        ])
    }
}
