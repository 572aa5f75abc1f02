pub mod display;
pub mod logging;
pub mod text;

pub use display::{option_letter, ResultView};
pub use text::truncate_text;
