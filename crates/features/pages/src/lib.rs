//! # Pages
//!
//! The page inventory of the site and the HTML rendering of each page.
//!
//! - [`routes`] enumerates every `(locale, app id)` pair and every exportable page.
//! - [`render`] turns a locale and a [`Route`](vapps_domain::routes::Route) into a
//!   complete HTML document with its metadata and structured data embedded.

mod error;
pub mod render;
pub mod routes;

pub use crate::error::{RenderError, RenderErrorExt};
pub use crate::render::{PageStatus, RenderContext, RenderedPage, redirect_stub, render, render_path};
pub use crate::routes::{enumerate, page_path, pages};
