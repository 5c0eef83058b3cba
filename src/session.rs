mod error;
mod io;
mod state;


pub use error::{Result, SessionError};
pub use io::{load_settings, save_settings};
pub use state::Session;
