//=========================================================================
// Tween
//=========================================================================
//
// Scalar interpolation driven by the tick loop's `dt`.
//
// A tween owns no target. The caller advances it and applies the value,
// which keeps it usable for positions, alpha and anything else scalar.
//
//   Tween::new(370.0, 180.0, 3.0)                      // one-shot, linear
//   Tween::new(0.5, 1.0, 0.5).yoyo().repeat(Repeat::Forever)
//
//=========================================================================

//=== Ease ================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    #[default]
    Linear,
    SineInOut,
}

impl Ease {
    /// Maps normalized time `t ∈ [0, 1]` to normalized progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::SineInOut => 0.5 * (1.0 - (std::f32::consts::PI * t).cos()),
        }
    }
}

//=== Repeat ==============================================================

/// Additional runs after the first one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    #[default]
    Never,
    Times(u32),
    Forever,
}

//=== TweenStep ===========================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenStep {
    pub value: f32,
    /// True on exactly one step: the one that finished the tween.
    pub completed: bool,
}

//=== Tween ===============================================================

#[derive(Debug, Clone)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    ease: Ease,
    yoyo: bool,
    repeat: Repeat,

    elapsed: f32,
    runs_done: u32,
    reversing: bool,
    finished: bool,
}

impl Tween {
    //--- Construction -----------------------------------------------------

    /// Tween from `from` to `to` over `duration` seconds.
    pub fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            duration: duration.max(f32::EPSILON),
            ease: Ease::Linear,
            yoyo: false,
            repeat: Repeat::Never,
            elapsed: 0.0,
            runs_done: 0,
            reversing: false,
            finished: false,
        }
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Plays back to `from` after reaching `to` within each run.
    pub fn yoyo(mut self) -> Self {
        self.yoyo = true;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    //--- State ------------------------------------------------------------

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Current value without advancing.
    pub fn value(&self) -> f32 {
        if self.finished {
            return if self.yoyo { self.from } else { self.to };
        }
        let progress = self.ease.apply(self.elapsed / self.duration);
        let progress = if self.reversing { 1.0 - progress } else { progress };
        self.from + (self.to - self.from) * progress
    }

    //--- advance() --------------------------------------------------------

    /// Advances by `dt` seconds and returns the new value.
    ///
    /// After completion the tween holds its final value and reports
    /// `completed: false` on every further step.
    pub fn advance(&mut self, dt: f32) -> TweenStep {
        if self.finished {
            return TweenStep { value: self.value(), completed: false };
        }

        self.elapsed += dt.max(0.0);

        while self.elapsed >= self.duration {
            self.elapsed -= self.duration;

            if self.yoyo && !self.reversing {
                self.reversing = true;
                continue;
            }

            self.reversing = false;
            self.runs_done += 1;

            let more = match self.repeat {
                Repeat::Never => false,
                Repeat::Times(n) => self.runs_done <= n,
                Repeat::Forever => true,
            };

            if !more {
                self.finished = true;
                self.elapsed = 0.0;
                return TweenStep { value: self.value(), completed: true };
            }
        }

        TweenStep { value: self.value(), completed: false }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
