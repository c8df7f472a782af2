//! Console output: live game snapshots and final evaluation reports.

pub mod console;
pub mod report;

pub use console::ConsoleRenderer;
pub use report::write_report;
