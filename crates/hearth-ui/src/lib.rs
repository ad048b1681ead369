//! # hearth-ui
//!
//! Widgets built on `hearth-html`.
//!
//! Presentation widgets are builder structs implementing
//! [`Component`](hearth_html::Component). Interactive widgets additionally
//! implement [`SwapWidget`]: they own a [`Region`] on the page, keep their
//! state in a plain `Clone` struct, and expose pure transition methods that
//! the HTTP layer calls before re-rendering the region.

pub mod components;
pub mod icons;
pub mod region;

pub use region::{feedback, oob, Region, SwapWidget, Verb};
