mod component;

pub use component::{StatusIndicator, StatusLevel};
