pub use questions::Questions;
pub use session::ask_about_file;

mod history;
mod prompt;
mod questions;
mod session;
