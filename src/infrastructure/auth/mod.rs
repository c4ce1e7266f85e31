pub mod static_session;
