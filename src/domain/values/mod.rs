pub mod affiliate;
pub mod category;
pub mod classifier;
pub mod discount;
pub mod moderation;
pub mod ranking;
pub mod share;
pub mod sort_key;
pub mod temperature;
pub mod vote_direction;
