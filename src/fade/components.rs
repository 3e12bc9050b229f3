use bevy::prelude::*;

use super::animation::OpacityAnimation;

/// Length of a show/hide fade used when no setting overrides it.
pub const FADE_DURATION: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FadeState {
    Hidden,
    FadingIn,
    Shown,
    FadingOut,
}

pub type FadeCallback = Box<dyn FnOnce() + Send + Sync>;

/// Show/hide state machine driving an opacity fade.
///
/// Requests that would not change the outcome are ignored. A request that
/// reverses an in-flight fade cancels it (its callback is dropped) and
/// starts from the current opacity, so the last request always wins.
pub struct Fader {
    state: FadeState,
    opacity: f32,
    duration: f32,
    animation: Option<OpacityAnimation>,
    on_finish: Option<FadeCallback>,
}

impl Fader {
    pub fn hidden(duration: f32) -> Self {
        Self {
            state: FadeState::Hidden,
            opacity: 0.0,
            duration,
            animation: None,
            on_finish: None,
        }
    }

    pub fn shown(duration: f32) -> Self {
        Self {
            state: FadeState::Shown,
            opacity: 1.0,
            ..Self::hidden(duration)
        }
    }

    pub fn state(&self) -> FadeState {
        self.state
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Enabled turns on as soon as a fade-in starts and off only once a fade-out completes.
    pub fn is_enabled(&self) -> bool {
        self.state != FadeState::Hidden
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Start fading in. Returns `false` if already shown or showing.
    pub fn show(&mut self, on_finish: Option<FadeCallback>) -> bool {
        match self.state {
            FadeState::Shown | FadeState::FadingIn => false,
            FadeState::Hidden | FadeState::FadingOut => {
                self.begin(FadeState::FadingIn, 1.0, on_finish);
                true
            }
        }
    }

    /// Start fading out. Returns `false` if already hidden or hiding.
    pub fn hide(&mut self, on_finish: Option<FadeCallback>) -> bool {
        match self.state {
            FadeState::Hidden | FadeState::FadingOut => false,
            FadeState::Shown | FadeState::FadingIn => {
                self.begin(FadeState::FadingOut, 0.0, on_finish);
                true
            }
        }
    }

    fn begin(&mut self, state: FadeState, target: f32, on_finish: Option<FadeCallback>) {
        self.state = state;
        self.animation = Some(OpacityAnimation::new(self.opacity, target, self.duration));
        self.on_finish = on_finish;
    }

    /// Step the running fade. Returns the settled state when a fade completes.
    pub fn advance(&mut self, dt: f32) -> Option<FadeState> {
        let animation = self.animation.as_mut()?;
        self.opacity = animation.advance(dt);
        if !animation.is_finished() {
            return None;
        }

        self.animation = None;
        self.state = match self.state {
            FadeState::FadingIn => FadeState::Shown,
            FadeState::FadingOut => FadeState::Hidden,
            settled => settled,
        };
        if let Some(callback) = self.on_finish.take() {
            callback();
        }
        Some(self.state)
    }
}

impl std::fmt::Debug for Fader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fader")
            .field("state", &self.state)
            .field("opacity", &self.opacity)
            .field("duration", &self.duration)
            .field("animation", &self.animation)
            .finish_non_exhaustive()
    }
}

/// Fades `target`'s material while toggling this entity's visibility.
#[derive(Component, Debug)]
pub struct Fadeable {
    pub fader: Fader,
    /// Child whose `StandardMaterial` alpha is animated.
    pub target: Entity,
}

impl Fadeable {
    pub fn hidden(target: Entity, duration: f32) -> Self {
        Self {
            fader: Fader::hidden(duration),
            target,
        }
    }

    pub fn shown(target: Entity, duration: f32) -> Self {
        Self {
            fader: Fader::shown(duration),
            target,
        }
    }

    pub fn show(&mut self) -> bool {
        self.fader.show(None)
    }

    pub fn hide(&mut self) -> bool {
        self.fader.hide(None)
    }
}

/// A fade finished on `entity` and settled in `state`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeFinished {
    pub entity: Entity,
    pub state: FadeState,
}
