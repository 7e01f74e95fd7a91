pub mod canned;
pub mod ui;
