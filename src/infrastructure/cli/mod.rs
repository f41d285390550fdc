//! Console frontend
//!
//! Interactive synopsis collection and the storyteller's banner.

mod console;

pub use console::{collect_synopsis, print_banner, print_closing};
