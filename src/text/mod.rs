//! Text preprocessing.

mod clean;

pub use clean::{clean_text, is_blank, is_clean_char};
