use super::summary::{ComponentIndex, ComponentSummary};
use crate::core::formula::{ElementCounts, FormulaError, normalize_counts, parse_formula};
use std::collections::BTreeMap;
use tracing::debug;

pub const DEFAULT_LOWER_TOLERANCE: u32 = 2;
pub const DEFAULT_UPPER_TOLERANCE: u32 = 2;

/// Inclusive count window around each target element count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTolerance {
    pub lower: u32,
    pub upper: u32,
}

impl Default for SearchTolerance {
    fn default() -> Self {
        Self {
            lower: DEFAULT_LOWER_TOLERANCE,
            upper: DEFAULT_UPPER_TOLERANCE,
        }
    }
}

impl SearchTolerance {
    pub fn new(lower: u32, upper: u32) -> Self {
        Self { lower, upper }
    }

    pub fn with_lower(mut self, lower: u32) -> Self {
        self.lower = lower;
        self
    }

    pub fn with_upper(mut self, upper: u32) -> Self {
        self.upper = upper;
        self
    }

    fn accepts(&self, target: u32, count: u32) -> bool {
        let low = target.saturating_sub(self.lower);
        let high = target.saturating_add(self.upper);
        (low..=high).contains(&count)
    }
}

/// A named element signature to look for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaTarget {
    pub id: String,
    pub counts: ElementCounts,
}

impl FormulaTarget {
    /// Builds a target from element/count pairs; symbols are uppercased.
    pub fn new<'a, I>(id: &str, counts: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, u32)>,
    {
        Self {
            id: id.to_string(),
            counts: normalize_counts(counts),
        }
    }

    pub fn from_formula(id: &str, formula: &str) -> Result<Self, FormulaError> {
        Ok(Self {
            id: id.to_string(),
            counts: parse_formula(formula)?,
        })
    }
}

/// Approximate search of a component index by element counts.
///
/// Only the elements named in a target are examined. Each must be present in
/// the component's type counts with a count inside the tolerance window; an
/// element the component lacks never matches, even when zero would be in range.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormulaSearch {
    tolerance: SearchTolerance,
}

impl FormulaSearch {
    pub fn new(tolerance: SearchTolerance) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> SearchTolerance {
        self.tolerance
    }

    pub fn matches(&self, target: &ElementCounts, summary: &ComponentSummary) -> bool {
        target.iter().all(|(symbol, &wanted)| {
            summary
                .type_counts
                .get(symbol)
                .is_some_and(|&count| self.tolerance.accepts(wanted, count))
        })
    }

    /// Matching component ids per target id, in index order.
    ///
    /// Results are keyed by target id, so when several targets share an id
    /// only the last one's matches are kept.
    pub fn search(
        &self,
        index: &ComponentIndex,
        targets: &[FormulaTarget],
    ) -> BTreeMap<String, Vec<String>> {
        let mut results = BTreeMap::new();
        for target in targets {
            let hits: Vec<String> = index
                .iter()
                .filter(|summary| self.matches(&target.counts, summary))
                .map(|summary| summary.cc_id.clone())
                .collect();
            debug!("Target '{}' matched {} component(s).", target.id, hits.len());
            results.insert(target.id.clone(), hits);
        }
        results
    }

    /// Parses `formula` and searches for it as a single target.
    pub fn search_formula(
        &self,
        index: &ComponentIndex,
        id: &str,
        formula: &str,
    ) -> Result<Vec<String>, FormulaError> {
        let target = FormulaTarget::from_formula(id, formula)?;
        Ok(self
            .search(index, std::slice::from_ref(&target))
            .remove(id)
            .unwrap_or_default())
    }
}
