//! The logistic learner model.
//!
//! A learner's probability of succeeding on a skill is modeled as a sigmoid
//! over a linear combination of ability, difficulty, and practice terms:
//!
//! ```text
//! p = σ(θ − β + γ·T)
//! ```
//!
//! Outcome-gated variants extend the linear term with separate gains for
//! successful, failed, and hinted opportunities. All of them are the same
//! algorithm: build a logit, pass it through [`sigmoid`].
//!
//! Sign convention: difficulty is *positive-is-harder* (`θ − β`). Every call
//! site in this workspace uses that convention.

/// Numerically stable logistic sigmoid.
///
/// The two-branch form only ever calls `exp` on a non-positive argument, so
/// large-magnitude logits saturate toward 0 or 1 instead of overflowing.
pub fn sigmoid(logit: f64) -> f64 {
    if logit >= 0.0 {
        1.0 / (1.0 + (-logit).exp())
    } else {
        let e = logit.exp();
        e / (1.0 + e)
    }
}

/// Practice opportunities split by how each one went.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutcomeCounts {
    pub successes: u32,
    pub failures: u32,
    pub hints: u32,
}

impl OutcomeCounts {
    /// All opportunities counted identically (the single-rate model).
    pub fn all_successes(total: u32) -> Self {
        Self {
            successes: total,
            failures: 0,
            hints: 0,
        }
    }

    pub fn total(&self) -> u32 {
        self.successes + self.failures + self.hints
    }
}

/// Per-outcome learning gains (the γ terms).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutcomeGains {
    pub success_gain: f64,
    pub failure_gain: f64,
    pub hint_gain: f64,
}

impl OutcomeGains {
    /// A single learning rate applied to successes only; combined with
    /// [`OutcomeCounts::all_successes`] this reproduces the one-γ model.
    pub fn single(learning_rate: f64) -> Self {
        Self {
            success_gain: learning_rate,
            failure_gain: 0.0,
            hint_gain: 0.0,
        }
    }
}

/// One practice opportunity in a history fed to [`outcome_curve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Success,
    Failure,
    Hint,
}

/// The shared linear combination: `θ − β + γs·Ts + γf·Tf + γh·Th`.
pub fn outcome_logit(
    ability: f64,
    difficulty: f64,
    gains: &OutcomeGains,
    counts: &OutcomeCounts,
) -> f64 {
    ability - difficulty
        + gains.success_gain * f64::from(counts.successes)
        + gains.failure_gain * f64::from(counts.failures)
        + gains.hint_gain * f64::from(counts.hints)
}

/// Success probability under split per-outcome gains.
pub fn outcome_probability(
    ability: f64,
    difficulty: f64,
    gains: &OutcomeGains,
    counts: &OutcomeCounts,
) -> f64 {
    sigmoid(outcome_logit(ability, difficulty, gains, counts))
}

/// Success probability under a single learning rate.
///
/// Never fails: any real inputs are valid and extreme ones saturate.
pub fn success_probability(
    ability: f64,
    difficulty: f64,
    learning_rate: f64,
    practice_count: u32,
) -> f64 {
    outcome_probability(
        ability,
        difficulty,
        &OutcomeGains::single(learning_rate),
        &OutcomeCounts::all_successes(practice_count),
    )
}

/// The learning curve for practice counts `0..=max_practice`.
///
/// Pure and restartable: the same inputs always produce the same sequence.
pub fn success_curve(
    ability: f64,
    difficulty: f64,
    learning_rate: f64,
    max_practice: u32,
) -> Vec<(u32, f64)> {
    (0..=max_practice)
        .map(|t| (t, success_probability(ability, difficulty, learning_rate, t)))
        .collect()
}

/// The learning curve for a concrete outcome history.
///
/// Point `i` is the predicted probability *before* opportunity `i`, so the
/// result has `history.len() + 1` points and point 0 is the cold-start
/// prediction.
pub fn outcome_curve(
    ability: f64,
    difficulty: f64,
    gains: &OutcomeGains,
    history: &[Outcome],
) -> Vec<(u32, f64)> {
    let mut counts = OutcomeCounts::default();
    let mut out = Vec::with_capacity(history.len() + 1);
    out.push((0, outcome_probability(ability, difficulty, gains, &counts)));
    for (i, outcome) in history.iter().enumerate() {
        match outcome {
            Outcome::Success => counts.successes += 1,
            Outcome::Failure => counts.failures += 1,
            Outcome::Hint => counts.hints += 1,
        }
        out.push((
            i as u32 + 1,
            outcome_probability(ability, difficulty, gains, &counts),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_logit_is_exactly_half() {
        assert_eq!(success_probability(0.0, 0.0, 0.0, 0), 0.5);
        assert_eq!(sigmoid(0.0), 0.5);
    }

    #[test]
    fn extreme_logits_saturate_without_overflow() {
        let hi = success_probability(1000.0, 0.0, 0.0, 0);
        assert!(hi.is_finite());
        assert!((hi - 1.0).abs() < f64::EPSILON);

        let lo = success_probability(-1000.0, 0.0, 0.0, 0);
        assert!(lo.is_finite());
        assert!(lo.abs() < f64::EPSILON);

        // Even absurd practice counts with a huge gain stay in range.
        let p = success_probability(0.0, 0.0, 1.0e6, u32::MAX);
        assert!(p.is_finite());
        assert!(p > 0.0 && p <= 1.0);
    }

    #[test]
    fn probabilities_stay_in_open_interval_for_moderate_inputs() {
        for t in 0..50 {
            let p = success_probability(-1.2, 0.8, 0.15, t);
            assert!(p > 0.0 && p < 1.0);
        }
    }

    #[test]
    fn curve_is_monotone_for_positive_learning_rate() {
        let curve = success_curve(-0.5, 1.0, 0.2, 30);
        assert_eq!(curve.len(), 31);
        assert_eq!(curve[0].0, 0);
        for pair in curve.windows(2) {
            assert!(pair[1].1 >= pair[0].1);
        }
    }

    #[test]
    fn curve_is_restartable() {
        let a = success_curve(0.3, 0.7, 0.1, 12);
        let b = success_curve(0.3, 0.7, 0.1, 12);
        assert_eq!(a, b);
    }

    #[test]
    fn single_rate_matches_outcome_form() {
        let gains = OutcomeGains::single(0.25);
        for t in [0u32, 1, 7, 19] {
            let counts = OutcomeCounts::all_successes(t);
            assert_eq!(
                success_probability(0.4, 1.1, 0.25, t),
                outcome_probability(0.4, 1.1, &gains, &counts)
            );
        }
    }

    #[test]
    fn outcome_curve_tracks_running_counts() {
        let gains = OutcomeGains {
            success_gain: 0.3,
            failure_gain: 0.1,
            hint_gain: 0.05,
        };
        let history = [Outcome::Failure, Outcome::Hint, Outcome::Success];
        let curve = outcome_curve(-0.2, 0.6, &gains, &history);
        assert_eq!(curve.len(), 4);
        assert_eq!(curve[0].1, outcome_probability(-0.2, 0.6, &gains, &OutcomeCounts::default()));
        let full = OutcomeCounts {
            successes: 1,
            failures: 1,
            hints: 1,
        };
        assert_eq!(curve[3].1, outcome_probability(-0.2, 0.6, &gains, &full));
        // Every gain is positive, so the curve never drops.
        for pair in curve.windows(2) {
            assert!(pair[1].1 >= pair[0].1);
        }
    }
}
