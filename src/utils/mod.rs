pub mod dates;
pub mod paths;

pub use dates::{current_month_year, format_month_year};
pub use paths::{POST_EXTENSION, is_post_filename, post_id_from_filename};
