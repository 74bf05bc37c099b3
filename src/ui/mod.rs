pub mod events;
pub mod helpers;
pub mod input;
pub mod key;
pub mod processing;
pub mod profile;
pub mod scanner;
pub mod tui;
