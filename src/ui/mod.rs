pub mod library_window;
pub mod state;

pub use library_window::{CopyRequest, LibraryWindowState};
