//! Welcome Screen
//!
//! Static entry screen with the app pitch and a single forward transition.

use leptos::prelude::*;

use crate::router::{use_navigator, Route};

#[component]
pub fn WelcomeScreen() -> impl IntoView {
    let nav = use_navigator();

    view! {
        <div class="screen centered welcome-screen">
            <h1 class="screen-title">"Welcome to NutriScan"</h1>
            <p class="screen-subtitle">"Your Personal Grocery Tracker"</p>
            <button class="primary-btn" on:click=move |_| nav.navigate(Route::Home)>
                "Get Started"
            </button>
        </div>
    }
}
