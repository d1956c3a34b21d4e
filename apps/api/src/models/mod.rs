pub mod participant;
pub mod response;
