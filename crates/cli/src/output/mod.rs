pub mod console;
pub mod json;

pub use console::print_report;
pub use json::print_json;
