pub mod deal_repo;
pub mod migrations;
