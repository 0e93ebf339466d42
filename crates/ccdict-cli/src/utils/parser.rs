use ccdict::core::formula::FormulaError;
use ccdict::engine::search::FormulaTarget;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid target '{0}'. Expected 'ID=FORMULA' (e.g., 'flavone=C15 H10 O2').")]
    InvalidTargetFormat(String),

    #[error("Component '{component}' cannot be empty in target '{target}'.")]
    EmptyComponent {
        component: &'static str,
        target: String,
    },

    #[error("Invalid formula in target '{target}': {source}")]
    InvalidFormula {
        target: String,
        #[source]
        source: FormulaError,
    },

    #[error("Target ID '{0}' is given more than once; each target needs a distinct ID.")]
    DuplicateTarget(String),
}

/// Parses `ID=FORMULA` into a named search target.
pub fn parse_target(value: &str) -> Result<FormulaTarget, ParseError> {
    let (id, formula) = value
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidTargetFormat(value.to_string()))?;

    let id = id.trim();
    if id.is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "ID",
            target: value.to_string(),
        });
    }
    if formula.trim().is_empty() {
        return Err(ParseError::EmptyComponent {
            component: "FORMULA",
            target: value.to_string(),
        });
    }

    FormulaTarget::from_formula(id, formula).map_err(|source| ParseError::InvalidFormula {
        target: value.to_string(),
        source,
    })
}

/// Parses every `ID=FORMULA` argument, rejecting repeated IDs.
pub fn parse_targets<S: AsRef<str>>(values: &[S]) -> Result<Vec<FormulaTarget>, ParseError> {
    let mut seen = BTreeSet::new();
    let mut targets = Vec::with_capacity(values.len());
    for value in values {
        let target = parse_target(value.as_ref())?;
        if !seen.insert(target.id.clone()) {
            return Err(ParseError::DuplicateTarget(target.id));
        }
        targets.push(target);
    }
    Ok(targets)
}
