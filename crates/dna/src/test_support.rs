// src/test_support.rs
use std::collections::VecDeque;

use crate::random::RandomSource;

/// Replays fixed draws and records what was asked for.
#[derive(Debug, Default)]
pub(crate) struct ScriptedSource {
    ints: VecDeque<i64>,
    floats: VecDeque<f64>,
    int_requests: Vec<(i64, i64)>,
    float_requests: Vec<(f64, f64)>,
}

impl ScriptedSource {
    pub(crate) fn new(ints: &[i64], floats: &[f64]) -> Self {
        Self {
            ints: ints.iter().copied().collect(),
            floats: floats.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub(crate) fn ints(ints: &[i64]) -> Self {
        Self::new(ints, &[])
    }

    pub(crate) fn floats(floats: &[f64]) -> Self {
        Self::new(&[], floats)
    }

    pub(crate) fn int_requests(&self) -> &[(i64, i64)] {
        &self.int_requests
    }

    pub(crate) fn float_requests(&self) -> &[(f64, f64)] {
        &self.float_requests
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.ints.is_empty() && self.floats.is_empty()
    }
}

impl RandomSource for ScriptedSource {
    fn random_int_inclusive(&mut self, min: i64, max: i64) -> i64 {
        self.int_requests.push((min, max));
        self.ints.pop_front().expect("scripted int draws exhausted")
    }

    fn random_float_in_range(&mut self, min: f64, max: f64) -> f64 {
        self.float_requests.push((min, max));
        self.floats.pop_front().expect("scripted float draws exhausted")
    }
}
