pub mod api;
pub mod context;
pub mod panel;
pub mod storage;
