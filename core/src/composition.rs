//! Reducer composition
//!
//! [`combine_reducers`] runs several reducers over the same state and action,
//! in order, and concatenates their effects. Each feature keeps its own
//! reducer and ignores actions it does not own.
//!
//! # Examples
//!
//! ```
//! use eventos_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//! use eventos_core::composition::combine_reducers;
//!
//! #[derive(Clone, Default)]
//! struct PageState {
//!     visits: u32,
//!     locale: String,
//! }
//!
//! #[derive(Clone)]
//! enum PageAction {
//!     Visit,
//!     SetLocale(String),
//! }
//!
//! struct VisitReducer;
//! struct LocaleReducer;
//!
//! impl Reducer for VisitReducer {
//!     type State = PageState;
//!     type Action = PageAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut PageState, action: PageAction, _env: &()) -> SmallVec<[Effect<PageAction>; 4]> {
//!         if matches!(action, PageAction::Visit) {
//!             state.visits += 1;
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! impl Reducer for LocaleReducer {
//!     type State = PageState;
//!     type Action = PageAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut PageState, action: PageAction, _env: &()) -> SmallVec<[Effect<PageAction>; 4]> {
//!         if let PageAction::SetLocale(locale) = action {
//!             state.locale = locale;
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let combined = combine_reducers(vec![Box::new(VisitReducer), Box::new(LocaleReducer)]);
//!
//! let mut state = PageState::default();
//! let _ = combined.reduce(&mut state, PageAction::Visit, &());
//! let _ = combined.reduce(&mut state, PageAction::SetLocale("pt".to_string()), &());
//! assert_eq!(state.visits, 1);
//! assert_eq!(state.locale, "pt");
//! ```

use crate::effect::Effect;
use crate::reducer::Reducer;

/// Boxed reducer over a shared state, action and environment
pub type BoxedReducer<S, A, E> = Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>;

/// Combine reducers that share state, action and environment types.
///
/// Reducers run in the order given; each sees the state left by the
/// previous one.
#[must_use]
pub fn combine_reducers<S, A, E>(reducers: Vec<BoxedReducer<S, A, E>>) -> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    reducers: Vec<BoxedReducer<S, A, E>>,
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> smallvec::SmallVec<[Effect<Self::Action>; 4]> {
        let mut all_effects = smallvec::SmallVec::new();

        for reducer in &self.reducers {
            let effects = reducer.reduce(state, action.clone(), env);
            all_effects.extend(effects.into_iter().filter(|effect| !effect.is_none()));
        }

        all_effects
    }
}
