//! Home Screen
//!
//! Dashboard with forward navigation into the app's features. Scanner and
//! Recipes are future screens; picking them stays on the dashboard.

use leptos::prelude::*;

use crate::router::{use_navigator, Route};

/// Dashboard menu entries: label and target route
const MENU: &[(&str, Route)] = &[
    ("Scan Barcode", Route::Scanner),
    ("Grocery List", Route::GroceryList),
    ("Recipes", Route::Recipes),
];

#[component]
pub fn HomeScreen() -> impl IntoView {
    let nav = use_navigator();

    view! {
        <div class="screen centered home-screen">
            <h1 class="screen-title">"NutriScan Dashboard"</h1>
            {MENU
                .iter()
                .map(|(label, route)| {
                    let route = *route;
                    view! {
                        <button class="menu-btn" on:click=move |_| nav.navigate(route)>
                            {*label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
