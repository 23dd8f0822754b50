//! Opening slides: welcome, the warm-up guess, and the task choice.

use leptos::prelude::*;

use practica::answers::TaskChoice;
use practica::deck::SlideKind;

use super::SlideCtx;

pub(super) fn welcome(ctx: SlideCtx) -> impl IntoView {
    view! {
        <div class="slide-actions">
            <button class="btn primary" on:click=move |_| ctx.go_to_kind(SlideKind::WarmupGuess)>
                "Let's find out"
            </button>
        </div>
    }
}

pub(super) fn warmup_guess(ctx: SlideCtx) -> impl IntoView {
    let draft = RwSignal::new(String::new());
    let can_submit = Memo::new(move |_| !draft.get().trim().is_empty());

    view! {
        <div class="slide-form">
            <input
                type="text"
                class="input"
                placeholder="e.g. a dozen tries"
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
            />
            <button
                class="btn primary"
                disabled=move || !can_submit.get()
                on:click=move |_| {
                    let guess = draft.get_untracked().trim().to_string();
                    if guess.is_empty() {
                        return;
                    }
                    ctx.answers.update(|a| a.guess_one = guess);
                    ctx.go_to_kind(SlideKind::TaskChoice);
                }
            >
                "Lock it in"
            </button>
        </div>
    }
}

pub(super) fn task_choice(ctx: SlideCtx) -> impl IntoView {
    let chosen = move || ctx.answers.with(|a| a.task_choice);
    let pick = move |choice: TaskChoice| ctx.answers.update(|a| a.task_choice = choice);

    let choice_button = move |choice: TaskChoice| {
        view! {
            <button
                class=move || {
                    if chosen() == choice {
                        "btn choice active"
                    } else {
                        "btn choice"
                    }
                }
                on:click=move |_| pick(choice)
            >
                {choice.label()}
            </button>
        }
    };

    view! {
        <div class="choice-row">
            {choice_button(TaskChoice::Fractions)}
            {choice_button(TaskChoice::Equations)}
        </div>
        <div class="slide-actions">
            <button
                class="btn primary"
                disabled=move || !chosen().is_set()
                on:click=move |_| {
                    if chosen().is_set() {
                        ctx.go_to_kind(SlideKind::FirstAttempt);
                    }
                }
            >
                "Continue"
            </button>
        </div>
    }
}
