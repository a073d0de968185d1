//! In-memory catalog of states and their cities.
//!
//! The catalog is an explicitly owned value: load it, mutate it through the
//! operations here, save it back. Lookups by state name are case-insensitive;
//! city membership is exact (case-sensitive), matching the source data's
//! conventions. City lists stay sorted ascending and free of duplicates after
//! every mutation.

use serde::{Deserialize, Serialize};

/// One state and its cities. `cities` is kept sorted ascending, no duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub cities: Vec<String>,
}

/// The full states → cities mapping, as stored in the JSON file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub states: Vec<Region>,
}

/// Result of adding one city to a region. Both variants are informational;
/// `AlreadyExists` is a no-op, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Added,
    AlreadyExists,
}

/// Result of an add session against a named region.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionReport {
    /// No state matched the requested name; the catalog was not touched.
    NotFound,
    /// Per-candidate outcomes, in input order.
    Applied(Vec<(String, Outcome)>),
}

impl Catalog {
    /// Find a state by case-insensitive name match. Returns the first match;
    /// the source data is assumed to have no case-insensitive collisions.
    pub fn find_region(&self, name: &str) -> Option<&Region> {
        self.states
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name))
    }

    pub fn find_region_mut(&mut self, name: &str) -> Option<&mut Region> {
        self.states
            .iter_mut()
            .find(|r| r.name.eq_ignore_ascii_case(name))
    }
}

impl Region {
    /// Add a city if it is not already present (exact match). Inserts and
    /// re-sorts on success. Idempotent: a second call with the same candidate
    /// leaves the list unchanged.
    pub fn add_city(&mut self, candidate: &str) -> Outcome {
        if self.cities.iter().any(|c| c.as_str() == candidate) {
            return Outcome::AlreadyExists;
        }
        self.cities.push(candidate.to_string());
        self.cities.sort();
        Outcome::Added
    }
}

/// Apply a finite sequence of city candidates to the named state.
///
/// This is the pure core of an add session; the interactive prompt loop in
/// `main` is just an adapter that collects candidates and feeds them here.
/// If the state is not found the catalog is left as-is and no candidate is
/// consumed.
pub fn add_cities<I, S>(catalog: &mut Catalog, state: &str, candidates: I) -> SessionReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let Some(region) = catalog.find_region_mut(state) else {
        return SessionReport::NotFound;
    };

    let outcomes = candidates
        .into_iter()
        .map(|c| {
            let city = c.as_ref();
            (city.to_string(), region.add_city(city))
        })
        .collect();

    SessionReport::Applied(outcomes)
}
