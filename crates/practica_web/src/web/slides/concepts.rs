//! Concept slides: introduce one term of the model at a time with a slider
//! and a live probability readout.

use leptos::prelude::*;

use practica::deck::SlideKind;
use practica::model::{outcome_logit, success_probability, OutcomeCounts, OutcomeGains};

use super::super::float_fmt::{fmt_f64_fixed, fmt_f64_signed_fixed};
use super::super::params::{self, ParamSlider};
use super::SlideCtx;

fn probability_readout(p: impl Fn() -> f64 + Copy + Send + 'static) -> impl IntoView {
    view! {
        <div class="readout">
            <span class="readout-label">"Predicted success"</span>
            <strong class="readout-value">{move || format!("{}%", fmt_f64_fixed(p() * 100.0, 0))}</strong>
        </div>
    }
}

pub(super) fn ability_intro(ctx: SlideCtx) -> impl IntoView {
    let ability = RwSignal::new(params::ABILITY.default);
    let p = move || success_probability(ability.get(), 0.0, 0.0, 0);

    view! {
        <div class="concept">
            <ParamSlider spec=params::ABILITY value=ability />
            {probability_readout(p)}
            <div class="slide-actions">
                <button class="btn primary" on:click=move |_| ctx.go_to_kind(SlideKind::DifficultyQuiz)>
                    "Continue"
                </button>
            </div>
        </div>
    }
}

pub(super) fn difficulty_intro(ctx: SlideCtx) -> impl IntoView {
    let ability = RwSignal::new(params::ABILITY.default);
    let difficulty = RwSignal::new(params::DIFFICULTY.default);
    let p = move || success_probability(ability.get(), difficulty.get(), 0.0, 0);

    view! {
        <div class="concept">
            <ParamSlider spec=params::ABILITY value=ability />
            <ParamSlider spec=params::DIFFICULTY value=difficulty />
            {probability_readout(p)}
            <div class="readout subtle">
                <span class="readout-label">"logit = θ − β"</span>
                <span class="readout-value">
                    {move || fmt_f64_signed_fixed(ability.get() - difficulty.get(), 1)}
                </span>
            </div>
            <div class="slide-actions">
                <button class="btn primary" on:click=move |_| ctx.go_to_kind(SlideKind::PracticeIntro)>
                    "Continue"
                </button>
            </div>
        </div>
    }
}

pub(super) fn practice_intro(ctx: SlideCtx) -> impl IntoView {
    let rate = RwSignal::new(params::LEARNING_RATE.default);
    let practice = RwSignal::new(0.0f64);
    // θ and β stay put here so the practice term is the only thing moving.
    const ABILITY: f64 = -0.5;
    const DIFFICULTY: f64 = 1.0;

    let practice_count = move || practice.get().round().max(0.0) as u32;
    let p = move || success_probability(ABILITY, DIFFICULTY, rate.get(), practice_count());
    let logit = move || {
        outcome_logit(
            ABILITY,
            DIFFICULTY,
            &OutcomeGains::single(rate.get()),
            &OutcomeCounts::all_successes(practice_count()),
        )
    };

    view! {
        <div class="concept">
            <ParamSlider spec=params::LEARNING_RATE value=rate />
            <ParamSlider spec=params::PRACTICE value=practice />
            {probability_readout(p)}
            <div class="readout subtle">
                <span class="readout-label">"logit = θ − β + γ·T"</span>
                <span class="readout-value">{move || fmt_f64_signed_fixed(logit(), 2)}</span>
            </div>
            <div class="slide-actions">
                <button class="btn primary" on:click=move |_| ctx.go_to_kind(SlideKind::CurveLab)>
                    "To the lab"
                </button>
            </div>
        </div>
    }
}
