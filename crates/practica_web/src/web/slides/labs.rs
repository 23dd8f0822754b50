//! Simulation labs: live charts over the formula evaluator.
//!
//! The curve lab animates the practice counter on an interval; the outcome
//! labs replay fixed mixed histories so the gain sliders have something
//! honest to act on.

use leptos::prelude::*;

use practica::deck::{self, SlideKind};
use practica::model::{
    outcome_curve, success_curve, success_probability, Outcome, OutcomeGains,
};

use super::super::charts;
use super::super::float_fmt::fmt_f64_fixed;
use super::super::params::{self, ParamSlider};
use super::super::ticker::IntervalTicker;
use super::SlideCtx;

const MAX_PRACTICE: u32 = 25;
const TICK_MS: i32 = 220;

// Fixed θ/β for the outcome labs; only the gains move there.
const LAB_ABILITY: f64 = -0.2;
const LAB_DIFFICULTY: f64 = 0.8;

/// A deterministic mixed run: rough early, consolidating later.
const MIXED_HISTORY: [Outcome; 18] = [
    Outcome::Failure,
    Outcome::Failure,
    Outcome::Success,
    Outcome::Failure,
    Outcome::Success,
    Outcome::Success,
    Outcome::Failure,
    Outcome::Success,
    Outcome::Success,
    Outcome::Success,
    Outcome::Failure,
    Outcome::Success,
    Outcome::Success,
    Outcome::Success,
    Outcome::Success,
    Outcome::Failure,
    Outcome::Success,
    Outcome::Success,
];

/// Same shape, with hinted attempts bridging failures and successes.
const HINTED_HISTORY: [Outcome; 18] = [
    Outcome::Failure,
    Outcome::Hint,
    Outcome::Failure,
    Outcome::Hint,
    Outcome::Success,
    Outcome::Hint,
    Outcome::Success,
    Outcome::Failure,
    Outcome::Hint,
    Outcome::Success,
    Outcome::Success,
    Outcome::Hint,
    Outcome::Success,
    Outcome::Success,
    Outcome::Success,
    Outcome::Success,
    Outcome::Hint,
    Outcome::Success,
];

fn draw_or_warn(canvas: Option<web_sys::HtmlCanvasElement>, points: &[(u32, f64)], marker: Option<u32>) {
    if let Some(canvas) = canvas {
        if let Err(e) = charts::draw_curve_chart(&canvas, points, marker) {
            web_sys::console::warn_1(&format!("curve chart: {e}").into());
        }
    }
}

pub(super) fn curve_lab(ctx: SlideCtx) -> impl IntoView {
    let ability = RwSignal::new(params::ABILITY.default);
    let difficulty = RwSignal::new(params::DIFFICULTY.default);
    let rate = RwSignal::new(params::LEARNING_RATE.default);
    let practice = RwSignal::new(0u32);
    let playing = RwSignal::new(false);
    let ticker = StoredValue::new_local(IntervalTicker::new());

    let canvas_ref: NodeRef<leptos::html::Canvas> = NodeRef::new();

    // Redraw whenever any input moves; the chart is recomputed from scratch
    // every time, there is no retained chart state to get stale.
    Effect::new(move |_| {
        let points = success_curve(ability.get(), difficulty.get(), rate.get(), MAX_PRACTICE);
        let marker = practice.get();
        draw_or_warn(canvas_ref.get(), &points, Some(marker));
    });

    let pause = move || {
        ticker.update_value(|t| t.pause());
        playing.set(false);
    };

    let play = move || {
        if playing.get_untracked() {
            return;
        }
        let mut started = Ok(());
        ticker.update_value(|t| {
            started = t.start(TICK_MS, move || {
                let next = practice.get_untracked() + 1;
                if next >= MAX_PRACTICE {
                    practice.set(MAX_PRACTICE);
                    // Terminal count: the schedule stops itself. `pause` (not
                    // `cancel`) because we are inside the tick.
                    ticker.update_value(|t| t.pause());
                    playing.set(false);
                } else {
                    practice.set(next);
                }
            });
        });
        match started {
            Ok(()) => playing.set(true),
            Err(e) => web_sys::console::warn_1(&format!("animation unavailable: {e}").into()),
        }
    };

    let reset = move || {
        pause();
        practice.set(0);
    };

    // Walking away pauses the run; a stale tick must never revive a slide
    // the user has left.
    let own_index = deck::index_of(SlideKind::CurveLab);
    Effect::new(move |_| {
        if ctx.nav.with(|n| n.current()) != own_index {
            pause();
        }
    });
    on_cleanup(move || ticker.update_value(|t| t.cancel()));

    view! {
        <div class="lab">
            <canvas node_ref=canvas_ref width="560" height="300" class="chart"></canvas>
            <div class="lab-controls">
                <button
                    class="btn"
                    on:click=move |_| if playing.get_untracked() { pause() } else { play() }
                >
                    {move || if playing.get() { "Pause" } else { "Play" }}
                </button>
                <button class="btn" on:click=move |_| reset()>"Reset"</button>
                <span class="subtle">{move || format!("T = {}", practice.get())}</span>
                <span class="subtle">
                    {move || {
                        let p = success_probability(
                            ability.get(),
                            difficulty.get(),
                            rate.get(),
                            practice.get(),
                        );
                        format!("p = {}", fmt_f64_fixed(p, 2))
                    }}
                </span>
            </div>
            <ParamSlider spec=params::ABILITY value=ability />
            <ParamSlider spec=params::DIFFICULTY value=difficulty />
            <ParamSlider spec=params::LEARNING_RATE value=rate />
            <div class="slide-actions">
                <button class="btn primary" on:click=move |_| ctx.go_to_kind(SlideKind::OutcomeQuiz)>
                    "Continue"
                </button>
            </div>
        </div>
    }
}

pub(super) fn outcome_lab(ctx: SlideCtx) -> impl IntoView {
    let success_gain = RwSignal::new(params::SUCCESS_GAIN.default);
    let failure_gain = RwSignal::new(params::FAILURE_GAIN.default);

    let canvas_ref: NodeRef<leptos::html::Canvas> = NodeRef::new();
    Effect::new(move |_| {
        let gains = OutcomeGains {
            success_gain: success_gain.get(),
            failure_gain: failure_gain.get(),
            hint_gain: 0.0,
        };
        let points = outcome_curve(LAB_ABILITY, LAB_DIFFICULTY, &gains, &MIXED_HISTORY);
        draw_or_warn(canvas_ref.get(), &points, None);
    });

    view! {
        <div class="lab">
            <canvas node_ref=canvas_ref width="560" height="300" class="chart"></canvas>
            <ParamSlider spec=params::SUCCESS_GAIN value=success_gain />
            <ParamSlider spec=params::FAILURE_GAIN value=failure_gain />
            <p class="subtle">
                "The history is fixed — 6 failures among 18 attempts — so every bend "
                "you see comes from the gains alone."
            </p>
            <div class="slide-actions">
                <button class="btn primary" on:click=move |_| ctx.go_to_kind(SlideKind::HintLab)>
                    "Continue"
                </button>
            </div>
        </div>
    }
}

pub(super) fn hint_lab(ctx: SlideCtx) -> impl IntoView {
    let success_gain = RwSignal::new(params::SUCCESS_GAIN.default);
    let failure_gain = RwSignal::new(params::FAILURE_GAIN.default);
    let hint_gain = RwSignal::new(params::HINT_GAIN.default);

    let canvas_ref: NodeRef<leptos::html::Canvas> = NodeRef::new();
    Effect::new(move |_| {
        let gains = OutcomeGains {
            success_gain: success_gain.get(),
            failure_gain: failure_gain.get(),
            hint_gain: hint_gain.get(),
        };
        let points = outcome_curve(LAB_ABILITY, LAB_DIFFICULTY, &gains, &HINTED_HISTORY);
        draw_or_warn(canvas_ref.get(), &points, None);
    });

    view! {
        <div class="lab">
            <canvas node_ref=canvas_ref width="560" height="300" class="chart"></canvas>
            <ParamSlider spec=params::SUCCESS_GAIN value=success_gain />
            <ParamSlider spec=params::FAILURE_GAIN value=failure_gain />
            <ParamSlider spec=params::HINT_GAIN value=hint_gain />
            <div class="slide-actions">
                <button class="btn primary" on:click=move |_| ctx.go_to_kind(SlideKind::Recap)>
                    "Wrap it up"
                </button>
            </div>
        </div>
    }
}
