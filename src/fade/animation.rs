/// Linear opacity tween stepped by frame time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpacityAnimation {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
}

impl OpacityAnimation {
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: 0.0,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn value(&self) -> f32 {
        self.from + (self.to - self.from) * self.progress()
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Step by `dt` seconds and return the new opacity.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed += dt.max(0.0);
        self.value()
    }
}
