use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Name of the engine-seeded courage/drive variable.
pub const MUT: &str = "mut";

/// Name of the engine-seeded clarity variable.
pub const KLARHEIT: &str = "klarheit";

/// The run's variable bag: variable name to numeric value.
///
/// Reads are total — a variable that was never written has value 0.0.
/// Stories are free to introduce variables mid-run through choice effects;
/// nothing restricts the name vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vars(FxHashMap<String, f64>);

impl Vars {
    pub fn new() -> Self {
        Self(FxHashMap::default())
    }

    /// The engine's starting contract: `mut` and `klarheit` at zero.
    pub fn baseline() -> Self {
        let mut vars = Self::new();
        vars.set(MUT, 0.0);
        vars.set(KLARHEIT, 0.0);
        vars
    }

    /// Current value of a variable, 0.0 if absent.
    pub fn get(&self, name: &str) -> f64 {
        self.0.get(name).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, name: &str, value: f64) {
        self.0.insert(name.to_string(), value);
    }

    /// Returns true if the variable has ever been written.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Merge-by-addition: a new bag where each delta key's value is
    /// prior (0.0 if absent) plus the delta. Keys absent from `deltas`
    /// carry through unchanged.
    pub fn plus(&self, deltas: &Vars) -> Vars {
        let mut merged = self.clone();
        for (name, delta) in &deltas.0 {
            *merged.0.entry(name.clone()).or_insert(0.0) += delta;
        }
        merged
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl FromIterator<(String, f64)> for Vars {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, f64)> for Vars {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_variable_reads_as_zero() {
        let vars = Vars::new();
        assert_eq!(vars.get("anything"), 0.0);
        assert!(!vars.contains("anything"));
    }

    #[test]
    fn baseline_seeds_mut_and_klarheit() {
        let vars = Vars::baseline();
        assert_eq!(vars.len(), 2);
        assert!(vars.contains(MUT));
        assert!(vars.contains(KLARHEIT));
        assert_eq!(vars.get(MUT), 0.0);
        assert_eq!(vars.get(KLARHEIT), 0.0);
    }

    #[test]
    fn plus_adds_to_existing_values() {
        let mut vars = Vars::new();
        vars.set("mood", 3.0);
        let deltas = Vars::from_iter([("mood", 2.0)]);
        assert_eq!(vars.plus(&deltas).get("mood"), 5.0);
    }

    #[test]
    fn plus_introduces_new_variables_from_zero() {
        let vars = Vars::baseline();
        let deltas = Vars::from_iter([("echo", -1.5)]);
        let merged = vars.plus(&deltas);
        assert_eq!(merged.get("echo"), -1.5);
        // Untouched keys carry through
        assert_eq!(merged.get(MUT), 0.0);
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn plus_does_not_mutate_receiver() {
        let vars = Vars::from_iter([("mood", 1.0)]);
        let _ = vars.plus(&Vars::from_iter([("mood", 9.0)]));
        assert_eq!(vars.get("mood"), 1.0);
    }

    #[test]
    fn plus_with_empty_deltas_is_identity() {
        let vars = Vars::from_iter([("mood", 1.0), ("echo", 2.0)]);
        assert_eq!(vars.plus(&Vars::new()), vars);
    }

    #[test]
    fn ron_round_trip_is_a_plain_map() {
        let vars = Vars::from_iter([("mood", 2.5)]);
        let serialized = ron::to_string(&vars).unwrap();
        let deserialized: Vars = ron::from_str(&serialized).unwrap();
        assert_eq!(deserialized, vars);

        let from_literal: Vars = ron::from_str(r#"{"mood": 2.5}"#).unwrap();
        assert_eq!(from_literal, vars);
    }
}
