pub mod blog_post;
pub mod comment;
pub mod deal;
pub mod user;
