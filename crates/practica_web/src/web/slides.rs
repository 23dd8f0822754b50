//! Slide content units and their dispatch.
//!
//! One module per content family, one function per slide, dispatched with an
//! exhaustive match on [`SlideKind`] — adding a slide without a body is a
//! compile error, not a runtime hole.

mod concepts;
mod intro;
mod labs;
mod outro;
mod quiz;

use leptos::prelude::*;

use practica::answers::SharedAnswers;
use practica::deck::{self, SlideKind};
use practica::nav::NavState;

use super::markdown;
use crate::slide_copy;

/// Everything a slide content unit may touch: the shared state signals plus
/// the controller callbacks. Slides call back only at explicit transition
/// points ("continue", "submit", named jump targets).
#[derive(Clone, Copy)]
pub(super) struct SlideCtx {
    pub(super) nav: RwSignal<NavState>,
    pub(super) answers: RwSignal<SharedAnswers>,
    pub(super) go_to: Callback<isize>,
    pub(super) celebrate: Callback<()>,
}

impl SlideCtx {
    /// Continue to a named slide; the only way slides unlock new ground.
    pub(super) fn go_to_kind(&self, kind: SlideKind) {
        self.go_to.run(deck::index_of(kind) as isize);
    }

    /// Flags of the slide owning `kind`, tracked reactively.
    pub(super) fn flags_of(&self, kind: SlideKind) -> practica::nav::StepFlags {
        self.nav.with(|n| n.flags(deck::index_of(kind)))
    }

    /// Mark `kind` confirmed and revealed. Flag mutators are scoped to the
    /// current slide, so this first makes `kind` current; interacting with a
    /// slide means standing on it.
    pub(super) fn confirm_and_reveal(&self, kind: SlideKind) {
        self.nav.update(|n| {
            n.go_to(deck::index_of(kind) as isize);
            n.confirm_current();
            n.reveal_current();
        });
    }

    /// Mark `kind` revealed only.
    pub(super) fn reveal(&self, kind: SlideKind) {
        self.nav.update(|n| {
            n.go_to(deck::index_of(kind) as isize);
            n.reveal_current();
        });
    }
}

#[component]
pub(super) fn SlideBody(kind: SlideKind, ctx: SlideCtx) -> impl IntoView {
    let copy_html = markdown::render_markdown(slide_copy::body_markdown(kind));
    let body = match kind {
        SlideKind::Welcome => intro::welcome(ctx).into_any(),
        SlideKind::WarmupGuess => intro::warmup_guess(ctx).into_any(),
        SlideKind::TaskChoice => intro::task_choice(ctx).into_any(),
        SlideKind::FirstAttempt => quiz::first_attempt(ctx).into_any(),
        SlideKind::AbilityIntro => concepts::ability_intro(ctx).into_any(),
        SlideKind::DifficultyQuiz => quiz::difficulty_quiz(ctx).into_any(),
        SlideKind::DifficultyIntro => concepts::difficulty_intro(ctx).into_any(),
        SlideKind::PracticeIntro => concepts::practice_intro(ctx).into_any(),
        SlideKind::CurveLab => labs::curve_lab(ctx).into_any(),
        SlideKind::OutcomeQuiz => quiz::outcome_quiz(ctx).into_any(),
        SlideKind::OutcomeLab => labs::outcome_lab(ctx).into_any(),
        SlideKind::HintLab => labs::hint_lab(ctx).into_any(),
        SlideKind::Recap => outro::recap(ctx).into_any(),
        SlideKind::Finale => outro::finale(ctx).into_any(),
    };

    view! {
        <div class="slide-copy" inner_html=copy_html></div>
        {body}
    }
}
