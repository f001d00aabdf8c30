//! Admin module: event editing and the registration list

use super::actions::{AdminAction, AppAction};
use super::environment::AppEnvironment;
use super::state::AppState;
use eventos_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Reducer for [`AppAction::Admin`]; ignores every other action
#[derive(Clone, Debug, Default)]
pub struct AdminReducer;

impl AdminReducer {
    /// Creates a new `AdminReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for AdminReducer {
    type State = AppState;
    type Action = AppAction;
    type Environment = AppEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let AppAction::Admin(action) = action else {
            return smallvec![Effect::None];
        };

        match action {
            AdminAction::UpdateEvent { schedule } => {
                let Some(slug) = state.event_slug().map(str::to_owned) else {
                    tracing::warn!("No event loaded, nothing to update");
                    return smallvec![Effect::None];
                };
                let api = env.api.clone();
                smallvec![Effect::future(async move {
                    match api.events().update(&slug, &schedule).await {
                        Ok(()) => Some(AppAction::Admin(AdminAction::EventUpdated { slug })),
                        Err(error) => Some(AppAction::Admin(AdminAction::UpdateEventFailed { error })),
                    }
                })]
            },

            AdminAction::EventUpdated { slug } => {
                tracing::info!(%slug, "Event updated");
                smallvec![Effect::future(async move { Some(AppAction::FetchEvent { slug }) })]
            },

            AdminAction::UpdateEventFailed { error } => {
                tracing::warn!(%error, "Event update failed");
                smallvec![Effect::None]
            },

            AdminAction::FetchRegistrations => {
                let Some(slug) = state.event_slug().map(str::to_owned) else {
                    return smallvec![Effect::None];
                };
                let api = env.api.clone();
                smallvec![Effect::future(async move {
                    match api.events().list_registrations(&slug).await {
                        Ok(registrations) => Some(AppAction::Admin(AdminAction::RegistrationsLoaded {
                            registrations,
                        })),
                        Err(error) => Some(AppAction::Admin(AdminAction::RegistrationsFetchFailed {
                            error,
                        })),
                    }
                })]
            },

            AdminAction::RegistrationsLoaded { registrations } => {
                state.admin.registrations = registrations;
                smallvec![Effect::None]
            },

            AdminAction::RegistrationsFetchFailed { error } => {
                tracing::warn!(%error, "Could not load registrations");
                smallvec![Effect::None]
            },
        }
    }
}
