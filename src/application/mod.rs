pub mod actions;
pub mod add_deal;
pub mod blog;
pub mod feed;
pub mod listing;
