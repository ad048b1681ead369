//! # hearth-web
//!
//! The fragment-swap protocol on axum. Widgets from `hearth-ui` are mounted
//! on a [`Region`](hearth_ui::Region) with a per-ID state [`Store`]; their
//! routers answer each interaction with a [`Fragment`] that replaces the
//! region and may carry out-of-band nodes and `HX-*` headers.

pub mod events;
pub mod fragment;
pub mod params;
pub mod routes;
pub mod server;
pub mod store;
pub mod widgets;

mod error;

pub use error::{Result, WebError};
pub use events::{sse_stream, Hub};
pub use fragment::Fragment;
pub use params::Params;
pub use server::{build_app, start_server};
pub use store::Store;
pub use widgets::Mount;
