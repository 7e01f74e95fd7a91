pub mod api_utils;
pub mod artifacts;
pub mod clipboard;
pub mod detail_inspector;
pub mod icons;
