mod common;
mod datecount;
mod daterange;
mod info;
mod support;

pub use common::{
    empty_response, escape_html, health, not_found, pretty_json_response, render_quote_page, root,
};
pub use datecount::{datecount, render_year_counts};
pub use daterange::{daterange, render_date_range};
pub use info::info;
pub use support::{error_check, version};
