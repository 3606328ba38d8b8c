//! Work order model: header contract, rows, parsing and discovery in a source location.

pub mod locate;
pub mod parse;
pub mod row;

pub use locate::{find_work_order, partner_and_resource};
pub use parse::{parse_work_order, parse_work_order_str};
pub use row::{HEADER_ROW, Manifest, ManifestRow, header_line};
