//! Quiz slides: each owns its local selection state and drives the central
//! per-slide flags; the reveal flag is what the formula helper keys on.

use leptos::prelude::*;

use practica::answers::TaskChoice;
use practica::deck::SlideKind;
use practica::model::success_probability;

use super::super::float_fmt::fmt_f64_fixed;
use super::SlideCtx;

/// Cold-start difficulty used for the chosen example skill.
fn chosen_difficulty(choice: TaskChoice) -> f64 {
    match choice {
        TaskChoice::Equations => 1.4,
        _ => 1.0,
    }
}

pub(super) fn first_attempt(ctx: SlideCtx) -> impl IntoView {
    let prediction = RwSignal::new(None::<bool>);
    let revealed = Memo::new(move |_| ctx.flags_of(SlideKind::FirstAttempt).revealed);

    let p0 = Memo::new(move |_| {
        let beta = chosen_difficulty(ctx.answers.with(|a| a.task_choice));
        success_probability(0.0, beta, 0.0, 0)
    });

    let predict_button = move |succeeds: bool, caption: &'static str| {
        view! {
            <button
                class=move || {
                    if prediction.get() == Some(succeeds) {
                        "btn choice active"
                    } else {
                        "btn choice"
                    }
                }
                disabled=move || revealed.get()
                on:click=move |_| prediction.set(Some(succeeds))
            >
                {caption}
            </button>
        }
    };

    view! {
        <div class="choice-row">
            {predict_button(true, "They'll succeed")}
            {predict_button(false, "They'll struggle")}
        </div>
        <div class="slide-actions">
            <button
                class="btn primary"
                disabled=move || prediction.get().is_none() || revealed.get()
                on:click=move |_| {
                    if prediction.get_untracked().is_some() {
                        ctx.confirm_and_reveal(SlideKind::FirstAttempt);
                    }
                }
            >
                "Lock in my prediction"
            </button>
        </div>
        <Show when=move || revealed.get()>
            <div class="quiz-result">
                <p>
                    "With no practice history the model can only use ability and difficulty. "
                    "For an average learner on your pick it predicts "
                    <strong>{move || format!("{}% success", fmt_f64_fixed(p0.get() * 100.0, 0))}</strong>
                    " — an informed shrug. Practice is what sharpens it."
                </p>
                <button class="btn primary" on:click=move |_| ctx.go_to_kind(SlideKind::AbilityIntro)>
                    "So what's ability?"
                </button>
            </div>
        </Show>
    }
}

pub(super) fn difficulty_quiz(ctx: SlideCtx) -> impl IntoView {
    let draft = RwSignal::new(String::new());
    let revealed = Memo::new(move |_| ctx.flags_of(SlideKind::DifficultyQuiz).revealed);
    let can_submit = Memo::new(move |_| !draft.get().trim().is_empty());

    view! {
        <div class="slide-form">
            <textarea
                class="input"
                rows="3"
                placeholder="Harder is… because…"
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
                disabled=move || revealed.get()
            ></textarea>
            <button
                class="btn primary"
                disabled=move || !can_submit.get() || revealed.get()
                on:click=move |_| {
                    let guess = draft.get_untracked().trim().to_string();
                    if guess.is_empty() {
                        return;
                    }
                    ctx.answers.update(|a| a.guess_two = guess);
                    // Flipping the reveal flag is what grows the helper
                    // formula to θ − β on this slide.
                    ctx.confirm_and_reveal(SlideKind::DifficultyQuiz);
                }
            >
                "Reveal the model's answer"
            </button>
        </div>
        <Show when=move || revealed.get()>
            <div class="quiz-result">
                <p>
                    "Whatever you wrote, the model compresses it into a single number: "
                    "a per-skill difficulty β, estimated from how thousands of learners "
                    "actually fared. Watch the formula in the corner — it just grew."
                </p>
                <button class="btn primary" on:click=move |_| ctx.go_to_kind(SlideKind::DifficultyIntro)>
                    "Show me β"
                </button>
            </div>
        </Show>
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum OutcomeCall {
    SuccessTeaches,
    FailureTeaches,
    SameEither,
}

pub(super) fn outcome_quiz(ctx: SlideCtx) -> impl IntoView {
    let call = RwSignal::new(None::<OutcomeCall>);
    let revealed = Memo::new(move |_| ctx.flags_of(SlideKind::OutcomeQuiz).revealed);

    let call_button = move |c: OutcomeCall, caption: &'static str| {
        view! {
            <button
                class=move || {
                    if call.get() == Some(c) {
                        "btn choice active"
                    } else {
                        "btn choice"
                    }
                }
                disabled=move || revealed.get()
                on:click=move |_| call.set(Some(c))
            >
                {caption}
            </button>
        }
    };

    view! {
        <div class="choice-row">
            {call_button(OutcomeCall::SuccessTeaches, "Successes teach more")}
            {call_button(OutcomeCall::FailureTeaches, "Failures teach more")}
            {call_button(OutcomeCall::SameEither, "No difference")}
        </div>
        <div class="slide-actions">
            <button
                class="btn primary"
                disabled=move || call.get().is_none() || revealed.get()
                on:click=move |_| {
                    if call.get_untracked().is_some() {
                        ctx.confirm_and_reveal(SlideKind::OutcomeQuiz);
                    }
                }
            >
                "Make the call"
            </button>
        </div>
        <Show when=move || revealed.get()>
            <div class="quiz-result">
                <p>
                    "In most datasets, successful attempts carry a larger gain than failed "
                    "ones — but failures rarely count for nothing. So the model splits γ "
                    "into two: one rate per outcome type, same sigmoid."
                </p>
                <button class="btn primary" on:click=move |_| ctx.go_to_kind(SlideKind::OutcomeLab)>
                    "Try the split"
                </button>
            </div>
        </Show>
    }
}
