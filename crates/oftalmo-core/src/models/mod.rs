pub mod attendance;
pub mod patient;
