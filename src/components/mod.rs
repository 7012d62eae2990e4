//! UI Components
//!
//! Screens and the sub-views of the grocery list.

mod add_grocery_modal;
mod grocery_list_screen;
mod grocery_row;
mod home_screen;
mod welcome_screen;

pub use add_grocery_modal::AddGroceryModal;
pub use grocery_list_screen::GroceryListScreen;
pub use grocery_row::GroceryRow;
pub use home_screen::HomeScreen;
pub use welcome_screen::WelcomeScreen;
