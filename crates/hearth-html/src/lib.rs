//! # hearth-html
//!
//! The node and style layers every hearth widget is built from.
//!
//! - [`node`]: the `Node` tree (element, attribute, text, raw, group) and
//!   its streaming serializer
//! - [`elements`] / [`attrs`] / [`htmx`]: shortcut constructors
//! - [`style`]: `cn`, `cn_if` and the variant engine
//!
//! ```
//! use hearth_html::prelude::*;
//!
//! let node = div([class(cn!["p-4", cn_if(true, "block", "hidden")]), text("hi")]);
//! assert_eq!(node.to_string(), r#"<div class="p-4 block">hi</div>"#);
//! ```

pub mod attrs;
pub mod component;
pub mod elements;
pub mod escape;
pub mod htmx;
pub mod node;
pub mod style;

pub use component::{render_to_string, Component};
pub use node::{
    attr, bool_attr, el, group, if_, if_with, map, raw, text, Attribute, Element, Node,
};
pub use style::{cn, cn_if, VariantConfig, VariantProps};

/// Glob-import surface for widget code.
pub mod prelude {
    pub use crate::attrs::*;
    pub use crate::cn;
    pub use crate::component::{render_to_string, Component};
    pub use crate::elements::*;
    pub use crate::htmx::{
        hx_boost, hx_delete, hx_disabled_elt, hx_ext, hx_get, hx_include, hx_indicator, hx_on,
        hx_post, hx_put, hx_swap, hx_swap_oob, hx_swap_with, hx_target, hx_trigger, hx_vals,
        hx_vals_js, sse_connect, Swap,
    };
    pub use crate::node::{attr, bool_attr, el, group, if_, if_with, map, raw, text, Node};
    pub use crate::style::{cn_if, VariantConfig, VariantProps};
}
