pub mod format;
pub mod presenter;
pub mod theme;

pub use format::{format_sol, format_sol_delta, lamports_to_sol, truncate_signature};
pub use presenter::{Presenter, RenderError};
