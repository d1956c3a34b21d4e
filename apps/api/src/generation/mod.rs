// Listing generation: catalog tables, seeded sequence, listing generator,
// comparison set builder. Everything here except `handlers` is pure.

pub mod catalog;
pub mod comparisons;
pub mod handlers;
pub mod listing;
pub mod rng;
