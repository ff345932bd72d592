pub mod explain;
pub mod notice;
pub mod notes;
pub mod quiz;
pub mod response;
