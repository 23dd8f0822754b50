use leptos::prelude::*;

use practica::deck::{self, SlideKind};
use practica::nav::NavState;

#[component]
pub(super) fn Topbar(nav: RwSignal<NavState>) -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="app-header-left">
                <button
                    class="icon-btn menu-toggle"
                    title="Contents (m)"
                    on:click=move |_| nav.update(NavState::toggle_menu)
                >
                    "☰"
                </button>
                <h1 class="brand">"Practica"</h1>
                <span class="subtle">"how practice apps predict mastery"</span>
            </div>
            <div class="app-header-right">
                <span class="progress">
                    {move || {
                        let (current, total) = nav.with(|n| (n.current() + 1, deck::count()));
                        format!("Slide {current} / {total}")
                    }}
                </span>
            </div>
        </header>
    }
}

/// The constrained quick-navigation overlay.
///
/// Exposes only the curated chapter heads; clicks funnel through the same
/// `go_to` as every other navigation source, which also closes the overlay.
#[component]
pub(super) fn NavMenu(nav: RwSignal<NavState>, go_to: Callback<isize>) -> impl IntoView {
    let menu_kinds: Vec<SlideKind> = SlideKind::all()
        .iter()
        .copied()
        .filter(|k| k.in_menu())
        .collect();

    view! {
        <Show when=move || nav.with(|n| n.menu_open())>
            <div class="menu-overlay" on:click=move |_| nav.update(NavState::toggle_menu)></div>
            <nav class="nav-menu" aria-label="Contents">
                <div class="nav-menu-title">"Contents"</div>
                {menu_kinds
                    .clone()
                    .into_iter()
                    .map(|kind| {
                        let index = deck::index_of(kind);
                        view! {
                            <button
                                class=move || {
                                    if nav.with(|n| n.current()) == index {
                                        "nav-menu-item active"
                                    } else {
                                        "nav-menu-item"
                                    }
                                }
                                on:click=move |_| go_to.run(index as isize)
                            >
                                {kind.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </Show>
    }
}
