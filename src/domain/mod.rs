pub mod entities;
pub mod error;
pub mod feed;
pub mod ports;
pub mod values;
