//! Application store
//!
//! One reducer per module, combined over a shared [`AppState`]:
//!
//! - [`AppReducer`]: event, user, registration, locale, notifications
//! - [`AdminReducer`]: event editing and the registration list
//!
//! The store itself is the runtime [`Store`]; build one per request or
//! session with [`new_store`] and pass it explicitly.

pub mod actions;
pub mod admin;
pub mod environment;
pub mod reducer;
pub mod state;

pub use actions::{AdminAction, AppAction};
pub use admin::AdminReducer;
pub use environment::AppEnvironment;
pub use reducer::AppReducer;
pub use state::{AdminState, AppState};

use crate::i18n::Locale;
use eventos_core::composition::{CombinedReducer, combine_reducers};
use eventos_runtime::Store;

/// The application reducer: every module, in order
pub type AppRootReducer = CombinedReducer<AppState, AppAction, AppEnvironment>;

/// The application store
pub type AppStore = Store<AppState, AppAction, AppEnvironment, AppRootReducer>;

/// Combine the module reducers
#[must_use]
pub fn app_reducer() -> AppRootReducer {
    combine_reducers(vec![Box::new(AppReducer::new()), Box::new(AdminReducer::new())])
}

/// A fresh store in `locale`
#[must_use]
pub fn new_store(environment: AppEnvironment, locale: Locale) -> AppStore {
    Store::new(AppState::new(locale), app_reducer(), environment)
}
