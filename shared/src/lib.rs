pub mod content;
pub mod empty_state;
pub mod error;
pub mod theme;
pub mod view;
