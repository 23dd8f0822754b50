//! Per-slide body copy, as Markdown.
//!
//! Kept out of the wasm-only `web` module so the inventory can be unit-tested
//! on the host: every slide has a body, and quiz slides keep their prompts
//! phrased as questions.

use practica::deck::SlideKind;

/// Markdown body for `kind`. Rendered by `web::markdown` at display time.
pub fn body_markdown(kind: SlideKind) -> &'static str {
    match kind {
        SlideKind::Welcome => {
            "How does a tutoring system know when you've *got it*?\n\n\
             Behind most practice apps sits a small statistical model that \
             predicts, before every attempt, how likely you are to succeed. \
             This walkthrough builds that model up one term at a time — no \
             background needed beyond a willingness to guess."
        }
        SlideKind::WarmupGuess => {
            "Think of a skill you learned recently. Roughly **how many \
             practice attempts** did it take before you could do it \
             reliably?\n\nThere's no wrong answer — we'll come back to your \
             guess at the end."
        }
        SlideKind::TaskChoice => {
            "Pick one of two skills to follow through the rest of the \
             walkthrough. Every chart you'll see simulates a learner \
             practicing *your* pick."
        }
        SlideKind::FirstAttempt => {
            "A learner sits down for their **first attempt** at your chosen \
             skill. No practice yet, no history.\n\nWill they succeed? Lock \
             in a prediction, then see what the model says."
        }
        SlideKind::AbilityIntro => {
            "Meet the first term: **ability (θ)**. Some learners start \
             stronger than others. Slide θ around and watch the predicted \
             success probability move — that curve shape is the logistic \
             *sigmoid*, and it never quite reaches 0 or 1."
        }
        SlideKind::DifficultyQuiz => {
            "Two skills, same learner: adding fractions and solving linear \
             equations. **Which do you think is harder, and why?** Write a \
             sentence, then reveal how the model captures your intuition."
        }
        SlideKind::DifficultyIntro => {
            "**Difficulty (β)** is subtracted from ability: `θ − β`. A harder \
             skill (bigger β) drags the whole prediction down, for every \
             learner. Try making β larger than θ and see where the \
             probability lands."
        }
        SlideKind::PracticeIntro => {
            "Practice is where learning shows up: every opportunity adds \
             **γ** to the logit, so after `T` attempts the model reads \
             `θ − β + γ·T`. Even a small γ compounds — that's the whole \
             secret of spaced practice."
        }
        SlideKind::CurveLab => {
            "Put it all together. Press **play** to watch a learner practice: \
             the marker walks along the learning curve one opportunity at a \
             time. Change θ, β, or γ mid-run and the curve reshapes \
             instantly — the model is just a formula, recomputed every frame."
        }
        SlideKind::OutcomeQuiz => {
            "So far every attempt counted the same. But consider: **do \
             failed attempts teach as much as successful ones?** Make your \
             call, then reveal what the data says."
        }
        SlideKind::OutcomeLab => {
            "Split the learning rate in two: **γs** for successes and **γf** \
             for failures. The simulated history below mixes both outcomes — \
             notice how a learner who fails often still climbs, just more \
             slowly, when γf is positive but small."
        }
        SlideKind::HintLab => {
            "One more split: attempts where the learner needed a **hint** get \
             their own gain **γh**, sitting between success and failure. \
             Three gains, three counters, same sigmoid — the model grows by \
             adding terms to a line, never by changing shape."
        }
        SlideKind::Recap => {
            "The whole model, one line: `p = σ(θ − β + γs·Ts + γf·Tf + \
             γh·Th)`.\n\nBelow are the guesses you made along the way. How \
             close was your instinct to what the curves showed?"
        }
        SlideKind::Finale => {
            "That's the entire engine behind 'smart' practice apps: a \
             logistic regression with honest bookkeeping. You now know it \
             term by term."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_slide_has_body_copy() {
        for &k in SlideKind::all() {
            assert!(
                !body_markdown(k).trim().is_empty(),
                "missing copy for {:?}",
                k
            );
        }
    }

    #[test]
    fn quiz_prompts_ask_a_question() {
        for k in [SlideKind::DifficultyQuiz, SlideKind::OutcomeQuiz] {
            assert!(body_markdown(k).contains('?'), "{:?} should ask", k);
        }
    }

    #[test]
    fn copy_is_unique_per_slide() {
        let mut bodies: Vec<&'static str> =
            SlideKind::all().iter().map(|&k| body_markdown(k)).collect();
        bodies.sort_unstable();
        bodies.dedup();
        assert_eq!(bodies.len(), SlideKind::all().len());
    }
}
