use bevy::prelude::*;

/// Swipe direction delivered to gesture listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Swipe {
    /// A gesture too weak to classify.
    Ignore,
    Forward,
    Backward,
    Up,
    Down,
}

/// Edge produced by [`Focusable::set_focus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusChange {
    Gained,
    Lost,
}

pub type FocusCallback = Box<dyn FnMut(Entity) + Send + Sync>;
pub type ClickCallback = Box<dyn FnMut() + Send + Sync>;
pub type GestureCallback = Box<dyn FnMut(Swipe) + Send + Sync>;

/// Single-slot listeners; registering again replaces the previous one.
#[derive(Default)]
pub struct FocusListeners {
    pub on_gained_focus: Option<FocusCallback>,
    pub on_lost_focus: Option<FocusCallback>,
    pub on_in_focus: Option<FocusCallback>,
    pub on_click: Option<ClickCallback>,
    pub on_gesture: Option<GestureCallback>,
}

/// Focus capability for a scene entity.
///
/// Entities opt in by carrying this component; the pick dispatcher only
/// routes focus to entities that have it.
#[derive(Component)]
pub struct Focusable {
    focused: bool,
    /// Free-form label used in logs.
    pub tag: Option<String>,
    /// Switch the gaze cursor to its highlight look while focused.
    pub show_interactive_cursor: bool,
    /// Last point where the gaze ray hit this entity.
    pub hit_location: Option<Vec3>,
    listeners: FocusListeners,
}

impl Default for Focusable {
    fn default() -> Self {
        Self {
            focused: false,
            tag: None,
            show_interactive_cursor: true,
            hit_location: None,
            listeners: FocusListeners::default(),
        }
    }
}

impl Focusable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn without_interactive_cursor(mut self) -> Self {
        self.show_interactive_cursor = false;
        self
    }

    pub fn on_gained_focus(mut self, f: impl FnMut(Entity) + Send + Sync + 'static) -> Self {
        self.listeners.on_gained_focus = Some(Box::new(f));
        self
    }

    pub fn on_lost_focus(mut self, f: impl FnMut(Entity) + Send + Sync + 'static) -> Self {
        self.listeners.on_lost_focus = Some(Box::new(f));
        self
    }

    pub fn on_in_focus(mut self, f: impl FnMut(Entity) + Send + Sync + 'static) -> Self {
        self.listeners.on_in_focus = Some(Box::new(f));
        self
    }

    pub fn on_click(mut self, f: impl FnMut() + Send + Sync + 'static) -> Self {
        self.listeners.on_click = Some(Box::new(f));
        self
    }

    pub fn on_gesture(mut self, f: impl FnMut(Swipe) + Send + Sync + 'static) -> Self {
        self.listeners.on_gesture = Some(Box::new(f));
        self
    }

    pub fn listeners_mut(&mut self) -> &mut FocusListeners {
        &mut self.listeners
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Change focus state, notifying listeners only on an actual edge.
    pub fn set_focus(&mut self, entity: Entity, state: bool) -> Option<FocusChange> {
        match (self.focused, state) {
            (false, true) => {
                self.focused = true;
                if let Some(listener) = self.listeners.on_gained_focus.as_mut() {
                    listener(entity);
                }
                Some(FocusChange::Gained)
            }
            (true, false) => {
                self.focused = false;
                if let Some(listener) = self.listeners.on_lost_focus.as_mut() {
                    listener(entity);
                }
                Some(FocusChange::Lost)
            }
            _ => None,
        }
    }

    pub fn dispatch_in_focus(&mut self, entity: Entity) {
        if let Some(listener) = self.listeners.on_in_focus.as_mut() {
            listener(entity);
        }
    }

    /// Returns whether a click listener was registered.
    pub fn dispatch_click(&mut self) -> bool {
        match self.listeners.on_click.as_mut() {
            Some(listener) => {
                listener();
                true
            }
            None => false,
        }
    }

    /// Returns whether a gesture listener was registered.
    pub fn dispatch_gesture(&mut self, swipe: Swipe) -> bool {
        match self.listeners.on_gesture.as_mut() {
            Some(listener) => {
                listener(swipe);
                true
            }
            None => false,
        }
    }

    /// Name used in log lines.
    pub fn label(&self, entity: Entity) -> String {
        match &self.tag {
            Some(tag) => format!("{tag} ({entity})"),
            None => entity.to_string(),
        }
    }
}
