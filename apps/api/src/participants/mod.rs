// Participant registration: shape validation, duplicate-email rejection, lookup.

pub mod handlers;
pub mod validation;
