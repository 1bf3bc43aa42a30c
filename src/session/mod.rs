pub mod arc_session;
pub mod sink;
