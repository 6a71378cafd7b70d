pub mod formatter;

pub use formatter::{
    format_empty, format_error, format_no_selection, format_opening, should_use_colors,
    should_use_colors_stderr,
};
