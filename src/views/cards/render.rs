// Render facade for cards: re-export the implementations from views::cards::items
// so external code keeps using views::cards::{standard_card, topic_card}.

pub use crate::views::cards::items::standard_card::standard_card;
pub use crate::views::cards::items::topic_card::topic_card;
