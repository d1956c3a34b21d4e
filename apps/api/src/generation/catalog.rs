//! Content catalog — the fixed fragment tables a job listing is assembled from.
//!
//! Table order is part of the contract: a seeded draw maps to an index, so
//! reordering or inserting entries changes every generated listing.

pub const COMPANY_DESCRIPTIONS: &[&str] = &[
    "A technology company that develops software solutions to help organizations manage processes more efficiently and scale their operations.",
    "A business services firm that provides operational and advisory solutions to help organizations improve performance and manage complex projects.",
];

pub const COMPANY_SIZES: &[&str] = &["50-100 employees", "100-500 employees", "500+ employees"];

pub const COMPENSATION_LEVELS: &[&str] = &["Market aligned", "Competitive for the market"];

pub const LOCATIONS: &[&str] = &["Remote", "Mostly in-office"];

pub const DEI_STATEMENTS: &[&str] = &[
    "In the company's most recent annual public filing (10-K), it states: We are committed to fostering a diverse and inclusive workplace where all employees feel valued and respected.",
    "In prior annual public filings (10-K), the company stated: We are committed to fostering a diverse and inclusive workplace. This language does not appear in the company's most recent filing.",
    "No additional information provided.",
];
