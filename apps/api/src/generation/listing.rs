//! Deterministic listing generator.

use serde::{Deserialize, Serialize};

use crate::generation::catalog::{
    COMPANY_DESCRIPTIONS, COMPANY_SIZES, COMPENSATION_LEVELS, DEI_STATEMENTS, LOCATIONS,
};
use crate::generation::rng::SeededSequence;

/// A synthetic job listing. Field values always come from the catalog when
/// generated, but submitted listings are stored verbatim as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub company_description: String,
    pub company_size: String,
    pub compensation: String,
    pub location: String,
    pub dei_statement: String,
}

/// Two listings shown side by side, indexed by position in the participant's set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonPair {
    pub id: i64,
    pub job1: JobListing,
    pub job2: JobListing,
}

/// Builds a listing from `seed` alone.
///
/// Draw order is description, size, compensation, location, DEI statement.
/// Changing it changes which entry every later draw lands on.
pub fn generate_listing(seed: i64) -> JobListing {
    let mut seq = SeededSequence::new(seed);

    let company_description = seq.choose(COMPANY_DESCRIPTIONS);
    let company_size = seq.choose(COMPANY_SIZES);
    let compensation = seq.choose(COMPENSATION_LEVELS);
    let location = seq.choose(LOCATIONS);
    let dei_statement = seq.choose(DEI_STATEMENTS);

    JobListing {
        company_description: company_description.to_string(),
        company_size: company_size.to_string(),
        compensation: compensation.to_string(),
        location: location.to_string(),
        dei_statement: dei_statement.to_string(),
    }
}

#[cfg(test)]
pub(crate) fn listing_from_indices(
    description: usize,
    size: usize,
    compensation: usize,
    location: usize,
    dei: usize,
) -> JobListing {
    JobListing {
        company_description: COMPANY_DESCRIPTIONS[description].to_string(),
        company_size: COMPANY_SIZES[size].to_string(),
        compensation: COMPENSATION_LEVELS[compensation].to_string(),
        location: LOCATIONS[location].to_string(),
        dei_statement: DEI_STATEMENTS[dei].to_string(),
    }
}
