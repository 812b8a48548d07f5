//! Problem and fixture catalogs
//!
//! Catalog data is exposed through read-only provider traits so the
//! built-in static catalogs can be swapped for a config file or a real
//! data store without touching gateway logic.

mod builtin;

pub use builtin::{StaticFixtureProvider, StaticProblemCatalog, starter_template};

use crate::models::{Problem, TestCase};

/// Read-only source of practice problems
pub trait ProblemCatalog: Send + Sync {
    /// All problems, in catalog order
    fn list(&self) -> &[Problem];

    /// Look up one problem by id
    fn get(&self, id: u32) -> Option<&Problem> {
        self.list().iter().find(|p| p.id == id)
    }
}

/// Read-only source of the batch-mode fixture battery
pub trait FixtureProvider: Send + Sync {
    /// All fixtures, in evaluation order
    fn fixtures(&self) -> &[TestCase];
}
