//! Screen Navigation
//!
//! A named-screen stack with a single active screen at a time, shared with
//! components via the Leptos context API. `RouteStack` holds the pure stack
//! discipline; `Navigator` wraps it in a signal for the UI.

use leptos::prelude::*;

/// Named screens of the app.
///
/// `Scanner` and `Recipes` are declared route names without an implemented
/// screen; navigating to them is refused until those screens exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Welcome,
    Home,
    GroceryList,
    Scanner,
    Recipes,
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Welcome => "Welcome",
            Route::Home => "Home",
            Route::GroceryList => "GroceryList",
            Route::Scanner => "Scanner",
            Route::Recipes => "Recipes",
        }
    }

    /// Whether a screen exists for this route in the current build
    pub fn is_implemented(&self) -> bool {
        !matches!(self, Route::Scanner | Route::Recipes)
    }
}

/// Non-empty stack of routes; the last entry is the visible screen
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStack {
    stack: Vec<Route>,
}

impl RouteStack {
    pub fn new(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    pub fn current(&self) -> Route {
        // Invariant: the stack is never empty
        *self.stack.last().unwrap_or(&Route::Welcome)
    }

    /// Push a forward transition. Unimplemented routes are refused and the
    /// visible screen stays put.
    pub fn push(&mut self, route: Route) -> bool {
        if !route.is_implemented() {
            return false;
        }
        self.stack.push(route);
        true
    }

    /// Pop back to the previous screen; a no-op at the root
    pub fn pop(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// App-wide navigation handle provided via context
#[derive(Clone, Copy)]
pub struct Navigator {
    stack: ReadSignal<RouteStack>,
    set_stack: WriteSignal<RouteStack>,
}

impl Navigator {
    pub fn new() -> Self {
        let (stack, set_stack) = signal(RouteStack::new(Route::Welcome));
        Self { stack, set_stack }
    }

    /// The visible screen; reactive when read inside a tracking scope
    pub fn current(&self) -> Route {
        self.stack.get().current()
    }

    pub fn navigate(&self, route: Route) {
        if !route.is_implemented() {
            web_sys::console::warn_1(
                &format!("[Nav] no screen registered for route {}", route.name()).into(),
            );
            return;
        }
        self.set_stack.update(|stack| {
            stack.push(route);
        });
    }

    pub fn go_back(&self) {
        self.set_stack.update(|stack| {
            stack.pop();
        });
    }
}

/// Get the navigator from context
pub fn use_navigator() -> Navigator {
    expect_context::<Navigator>()
}
