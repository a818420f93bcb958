//! Score threshold choices offered by the search form

use serde::Serialize;

/// Number of thresholds offered, in steps of 0.1 below zero
const STEPS: i32 = 7;

/// One `<option>` of the threshold select box
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreOption {
    pub value: f64,
    pub label: String,
}

impl ScoreOption {
    fn new(value: f64) -> Self {
        Self {
            value,
            label: format!("score ≤ {}", value),
        }
    }
}

/// Thresholds -0.1, -0.2, ..., -0.7, strongest last
pub fn score_options() -> Vec<ScoreOption> {
    (1..=STEPS)
        .map(|step| ScoreOption::new(-f64::from(step) / 10.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_fixed() {
        let values: Vec<f64> = score_options().iter().map(|o| o.value).collect();
        assert_eq!(values, vec![-0.1, -0.2, -0.3, -0.4, -0.5, -0.6, -0.7]);
    }

    #[test]
    fn test_labels() {
        let options = score_options();
        assert_eq!(options[0].label, "score ≤ -0.1");
        assert_eq!(options[2].label, "score ≤ -0.3");
        assert_eq!(options[6].label, "score ≤ -0.7");
    }
}
