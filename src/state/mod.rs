//! Application state module

mod app_state;
mod forms;
mod notice;
mod scroll;
mod viewport;

pub use app_state::*;
pub use forms::*;
pub use notice::*;
pub use scroll::*;
pub use viewport::*;
