//! Given/When/Then harness for reducers
//!
//! Runs one action through a reducer without a store and hands the new
//! state and the effect descriptions to assertion closures. Effects are
//! never executed here; use [`run_effects`] to drive them.

#![allow(clippy::module_name_repetitions)]

use eventos_core::{effect::Effect, reducer::Reducer};

type StateCheck<S> = Box<dyn FnOnce(&S)>;
type EffectCheck<A> = Box<dyn FnOnce(&[Effect<A>])>;

/// One reducer step under test
///
/// # Example
///
/// ```ignore
/// use eventos_testing::{ReducerTest, assertions};
///
/// ReducerTest::new(AppReducer::new())
///     .with_env(environment)
///     .given_state(AppState::new(Locale::En))
///     .when_action(AppAction::SetLocale { locale: Locale::Pt })
///     .then_state(|state| assert_eq!(state.locale, Locale::Pt))
///     .then_effects(assertions::assert_no_effects)
///     .run();
/// ```
pub struct ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    reducer: R,
    environment: Option<E>,
    state: Option<S>,
    action: Option<A>,
    state_checks: Vec<StateCheck<S>>,
    effect_checks: Vec<EffectCheck<A>>,
}

impl<R, S, A, E> ReducerTest<R, S, A, E>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    /// Harness for `reducer`
    #[must_use]
    pub const fn new(reducer: R) -> Self {
        Self {
            reducer,
            environment: None,
            state: None,
            action: None,
            state_checks: Vec::new(),
            effect_checks: Vec::new(),
        }
    }

    /// Environment passed to the reducer
    #[must_use]
    pub fn with_env(mut self, env: E) -> Self {
        self.environment = Some(env);
        self
    }

    /// Given: state before the action
    #[must_use]
    pub fn given_state(mut self, state: S) -> Self {
        self.state = Some(state);
        self
    }

    /// When: the action to reduce
    #[must_use]
    pub fn when_action(mut self, action: A) -> Self {
        self.action = Some(action);
        self
    }

    /// Then: check the state after the action
    #[must_use]
    pub fn then_state(mut self, check: impl FnOnce(&S) + 'static) -> Self {
        self.state_checks.push(Box::new(check));
        self
    }

    /// Then: check the returned effects
    #[must_use]
    pub fn then_effects(mut self, check: impl FnOnce(&[Effect<A>]) + 'static) -> Self {
        self.effect_checks.push(Box::new(check));
        self
    }

    /// Reduce the action and run every check
    ///
    /// # Panics
    ///
    /// Panics when state, action or environment was not given, or when a
    /// check fails.
    #[allow(clippy::panic)]
    pub fn run(self) {
        let (Some(mut state), Some(action), Some(env)) = (self.state, self.action, self.environment)
        else {
            panic!("ReducerTest needs given_state(), when_action() and with_env()");
        };

        let effects = self.reducer.reduce(&mut state, action, &env);

        for check in self.state_checks {
            check(&state);
        }
        for check in self.effect_checks {
            check(&effects);
        }
    }
}

/// Checks for [`ReducerTest::then_effects`]
pub mod assertions {
    use eventos_core::effect::Effect;

    /// Nothing to run: no effects, or only `Effect::None`
    ///
    /// # Panics
    ///
    /// Panics when any effect would do work.
    pub fn assert_no_effects<A: std::fmt::Debug>(effects: &[Effect<A>]) {
        assert!(
            effects.iter().all(Effect::is_none),
            "expected no effects, got {effects:?}"
        );
    }

    /// Exactly `expected` effects that do work
    ///
    /// # Panics
    ///
    /// Panics when the count differs.
    pub fn assert_effects_count<A>(effects: &[Effect<A>], expected: usize) {
        let actual = effects.iter().filter(|effect| !effect.is_none()).count();
        assert_eq!(actual, expected, "expected {expected} effects, got {actual}");
    }

    /// At least one `Delay`
    ///
    /// # Panics
    ///
    /// Panics when no effect is delayed.
    pub fn assert_has_delay_effect<A>(effects: &[Effect<A>]) {
        assert!(
            effects.iter().any(|effect| matches!(effect, Effect::Delay { .. })),
            "expected a delayed effect"
        );
    }
}

/// Drive effects to completion without a store
///
/// Futures are awaited, parallel and sequential groups are flattened in
/// order, and delayed actions are returned immediately without sleeping.
/// Produced actions are returned; they are not fed back to any reducer.
pub async fn run_effects<A: Send + 'static>(effects: impl IntoIterator<Item = Effect<A>>) -> Vec<A> {
    let mut pending: Vec<Effect<A>> = effects.into_iter().collect();
    pending.reverse();
    let mut actions = Vec::new();

    while let Some(effect) = pending.pop() {
        match effect {
            Effect::None => {},
            Effect::Future(fut) => actions.extend(fut.await),
            Effect::Delay { action, .. } => actions.push(*action),
            Effect::Parallel(group) | Effect::Sequential(group) => {
                pending.extend(group.into_iter().rev());
            },
        }
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[derive(Clone, Debug, Default)]
    struct Banner {
        language: &'static str,
        shown: Vec<String>,
    }

    #[derive(Clone, Debug, PartialEq)]
    enum BannerAction {
        Translate(&'static str),
        Show(String),
        Hide,
    }

    struct BannerReducer;

    impl Reducer for BannerReducer {
        type State = Banner;
        type Action = BannerAction;
        type Environment = Duration;

        fn reduce(
            &self,
            state: &mut Banner,
            action: BannerAction,
            hide_after: &Duration,
        ) -> smallvec::SmallVec<[Effect<BannerAction>; 4]> {
            match action {
                BannerAction::Translate(language) => {
                    state.language = language;
                    smallvec::smallvec![Effect::None]
                },
                BannerAction::Show(message) => {
                    state.shown.push(message);
                    smallvec::smallvec![Effect::Delay {
                        duration: *hide_after,
                        action: Box::new(BannerAction::Hide),
                    }]
                },
                BannerAction::Hide => {
                    state.shown.clear();
                    smallvec::smallvec![Effect::None]
                },
            }
        }
    }

    #[test]
    fn state_change_without_effects() {
        ReducerTest::new(BannerReducer)
            .with_env(Duration::from_secs(5))
            .given_state(Banner::default())
            .when_action(BannerAction::Translate("pt"))
            .then_state(|banner| assert_eq!(banner.language, "pt"))
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn shown_message_schedules_hide() {
        ReducerTest::new(BannerReducer)
            .with_env(Duration::from_secs(5))
            .given_state(Banner::default())
            .when_action(BannerAction::Show("API error".to_string()))
            .then_state(|banner| assert_eq!(banner.shown, vec!["API error".to_string()]))
            .then_effects(assertions::assert_has_delay_effect)
            .then_effects(|effects| assertions::assert_effects_count(effects, 1))
            .run();
    }

    #[tokio::test]
    async fn run_effects_returns_delayed_action_without_waiting() {
        let effects = vec![
            Effect::future(async { Some(BannerAction::Translate("en")) }),
            Effect::Sequential(vec![
                Effect::None,
                Effect::Delay {
                    duration: Duration::from_secs(3600),
                    action: Box::new(BannerAction::Hide),
                },
            ]),
        ];

        let actions = run_effects(effects).await;

        assert_eq!(actions, vec![BannerAction::Translate("en"), BannerAction::Hide]);
    }
}
