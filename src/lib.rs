//! Printable one-month calendar pages.
//!
//! Features:
//! - Sunday-first month grid padded with days of the adjacent months
//! - Cell geometry filling a landscape Letter, Legal or Tabloid page
//! - PDF output through a pluggable `Renderer`
//! - Built-in self-checks (`--test`)

pub mod args;
pub mod calendar;
pub mod error;
pub mod formatter;
pub mod layout;
pub mod render;
pub mod selfcheck;
pub mod types;
