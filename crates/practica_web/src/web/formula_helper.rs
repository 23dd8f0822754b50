//! The floating formula helper.
//!
//! Visibility and content are projections of the navigation state (see
//! `practica::reveal`); this component holds no state of its own.

use leptos::prelude::*;

use practica::nav::NavState;
use practica::reveal::{self, FormulaStage};

fn formula_text(stage: FormulaStage) -> &'static str {
    match stage {
        FormulaStage::Hidden => "",
        FormulaStage::Ability => "p = σ(θ)",
        FormulaStage::AbilityDifficulty => "p = σ(θ − β)",
        FormulaStage::FullPractice => "p = σ(θ − β + γ·T)",
        FormulaStage::OutcomeSplit => "p = σ(θ − β + γs·Ts + γf·Tf + γh·Th)",
    }
}

#[component]
pub(super) fn FormulaHelper(nav: RwSignal<NavState>) -> impl IntoView {
    let stage = Memo::new(move |_| {
        nav.with(|n| reveal::formula_stage(n.current(), n.current_flags()))
    });
    let visible = Memo::new(move |_| {
        nav.with(|n| reveal::helper_visible(n.current(), n.current_flags()))
    });

    view! {
        <Show when=move || visible.get()>
            <aside class="formula-helper" role="note" aria-label="The model so far">
                <div class="formula-helper-label">"The model so far"</div>
                <code class="formula">{move || formula_text(stage.get())}</code>
            </aside>
        </Show>
    }
}
