pub mod items;
pub mod render;
pub use render::{standard_card, topic_card};
