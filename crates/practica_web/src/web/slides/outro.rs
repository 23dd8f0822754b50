//! Closing slides: the recap of the learner's own answers, and the finale.

use leptos::prelude::*;

use practica::deck::{self, SlideKind};

use super::SlideCtx;

pub(super) fn recap(ctx: SlideCtx) -> impl IntoView {
    let guess_one = move || ctx.answers.with(|a| a.guess_one.clone());
    let guess_two = move || ctx.answers.with(|a| a.guess_two.clone());
    let task = move || ctx.answers.with(|a| a.task_choice.label());

    view! {
        <div class="recap">
            <dl class="recap-list">
                <dt>"Your opening guess"</dt>
                <dd>{move || {
                    let g = guess_one();
                    if g.is_empty() { "(you skipped this one)".to_string() } else { g }
                }}</dd>
                <dt>"Skill you picked"</dt>
                <dd>{move || task()}</dd>
                <dt>"What you said makes a skill hard"</dt>
                <dd>{move || {
                    let g = guess_two();
                    if g.is_empty() { "(you skipped this one)".to_string() } else { g }
                }}</dd>
            </dl>
            <div class="slide-actions">
                <button class="btn" on:click=move |_| ctx.go_to_kind(SlideKind::CurveLab)>
                    "Revisit the lab"
                </button>
                <button class="btn primary" on:click=move |_| ctx.go_to_kind(SlideKind::Finale)>
                    "Finish"
                </button>
            </div>
        </div>
    }
}

pub(super) fn finale(ctx: SlideCtx) -> impl IntoView {
    // Fire the confetti once on first arrival; replays only by button.
    let fired = StoredValue::new(false);
    let own_index = deck::index_of(SlideKind::Finale);
    Effect::new(move |_| {
        if ctx.nav.with(|n| n.current()) == own_index && !fired.get_value() {
            fired.set_value(true);
            ctx.celebrate.run(());
        }
    });

    view! {
        <div class="slide-actions">
            <button class="btn primary" on:click=move |_| ctx.celebrate.run(())>
                "One more burst"
            </button>
        </div>
    }
}
