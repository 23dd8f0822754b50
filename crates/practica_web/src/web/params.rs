//! Slider metadata and widget for the model parameters.
//!
//! One `ParamSpec` per term of the model; sliders clamp to the declared range
//! and reset to the declared default, so every lab gets identical behavior.

use leptos::prelude::*;

use super::float_fmt::{fmt_f64_fixed, fmt_f64_signed_fixed};

#[derive(Clone, Copy)]
pub(super) struct ParamSpec {
    pub(super) label: &'static str,
    pub(super) symbol: &'static str,
    pub(super) min: f64,
    pub(super) max: f64,
    pub(super) step: f64,
    pub(super) default: f64,
    pub(super) decimals: usize,
    pub(super) signed: bool,
    pub(super) description: &'static str,
}

pub(super) const ABILITY: ParamSpec = ParamSpec {
    label: "Ability",
    symbol: "θ",
    min: -3.0,
    max: 3.0,
    step: 0.1,
    default: 0.0,
    decimals: 1,
    signed: true,
    description: "The learner's baseline proficiency. 0 is average; negative means a weaker start.",
};

pub(super) const DIFFICULTY: ParamSpec = ParamSpec {
    label: "Difficulty",
    symbol: "β",
    min: 0.0,
    max: 3.0,
    step: 0.1,
    default: 1.0,
    decimals: 1,
    signed: false,
    description: "How hard the skill is. Subtracted from ability: bigger β pulls every prediction down.",
};

pub(super) const LEARNING_RATE: ParamSpec = ParamSpec {
    label: "Learning rate",
    symbol: "γ",
    min: 0.0,
    max: 1.0,
    step: 0.01,
    default: 0.2,
    decimals: 2,
    signed: false,
    description: "How much each practice opportunity adds to the logit.",
};

pub(super) const PRACTICE: ParamSpec = ParamSpec {
    label: "Practice so far",
    symbol: "T",
    min: 0.0,
    max: 30.0,
    step: 1.0,
    default: 0.0,
    decimals: 0,
    signed: false,
    description: "Opportunities the learner has already had on this skill.",
};

pub(super) const SUCCESS_GAIN: ParamSpec = ParamSpec {
    label: "Success gain",
    symbol: "γs",
    min: 0.0,
    max: 1.0,
    step: 0.01,
    default: 0.3,
    decimals: 2,
    signed: false,
    description: "Learning credited for each successful attempt.",
};

pub(super) const FAILURE_GAIN: ParamSpec = ParamSpec {
    label: "Failure gain",
    symbol: "γf",
    min: 0.0,
    max: 1.0,
    step: 0.01,
    default: 0.1,
    decimals: 2,
    signed: false,
    description: "Learning credited for each failed attempt. Usually smaller than the success gain.",
};

pub(super) const HINT_GAIN: ParamSpec = ParamSpec {
    label: "Hint gain",
    symbol: "γh",
    min: 0.0,
    max: 1.0,
    step: 0.01,
    default: 0.2,
    decimals: 2,
    signed: false,
    description: "Learning credited for attempts where the learner needed a hint.",
};

#[component]
pub(super) fn ParamSlider(spec: ParamSpec, value: RwSignal<f64>) -> impl IntoView {
    let readout = move || {
        if spec.signed {
            fmt_f64_signed_fixed(value.get(), spec.decimals)
        } else {
            fmt_f64_fixed(value.get(), spec.decimals)
        }
    };

    view! {
        <label class="param-slider" title=spec.description>
            <span class="param-name">{spec.label} " (" {spec.symbol} ")"</span>
            <input
                type="range"
                min=spec.min
                max=spec.max
                step=spec.step
                prop:value=move || fmt_f64_fixed(value.get(), spec.decimals)
                on:input=move |ev| {
                    if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                        value.set(v.clamp(spec.min, spec.max));
                    }
                }
            />
            <span class="param-value">{readout}</span>
            <button class="btn link" on:click=move |_| value.set(spec.default)>
                "Reset"
            </button>
        </label>
    }
}
