//! HTML handlers.

mod create;
mod goto;
mod show;

pub use create::{CreateTemplate, create_form_handler, create_submit_handler};
pub use goto::goto_handler;
pub use show::{ShowTemplate, show_handler};
