pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{error, header, info, not_found, section, success};
pub use table::{employee_table, record_table, TableBuilder};
pub use theme::{theme, Theme};
