//! NutriScan App
//!
//! Root component: provides the navigator and mounts the screen for the
//! current route, one at a time.

use leptos::prelude::*;

use crate::components::{GroceryListScreen, HomeScreen, WelcomeScreen};
use crate::router::{Navigator, Route};

#[component]
pub fn App() -> impl IntoView {
    let nav = Navigator::new();
    provide_context(nav);

    view! {
        <div class="app-shell">
            {move || match nav.current() {
                Route::Welcome => view! { <WelcomeScreen /> }.into_any(),
                Route::Home => view! { <HomeScreen /> }.into_any(),
                Route::GroceryList => view! { <GroceryListScreen /> }.into_any(),
                // Unreachable while navigate() refuses routes without a screen
                Route::Scanner | Route::Recipes => view! { <HomeScreen /> }.into_any(),
            }}
        </div>
    }
}
