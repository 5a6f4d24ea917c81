use rand::prelude::*;
use smallvec::SmallVec;

/// Length of one spin, start to stop.
pub const SPIN_DURATION_MS: f64 = 6000.0;
/// Wheel angle that sits under the pointer (left edge, 9 o'clock).
pub const POINTER_ANGLE_DEG: f64 = 270.0;
/// Stop point may drift this fraction of a segment either side of its center.
pub const JITTER_FRACTION: f64 = 0.4;
pub const MIN_FULL_SPINS: u32 = 6;
pub const MAX_FULL_SPINS: u32 = 9;

/// Presentation tuning for a spin.
///
/// The defaults reproduce the shipped feel of the wheel; none of the values
/// carry meaning beyond that, so they stay adjustable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinConfig {
    pub duration_ms: f64,
    pub pointer_angle_deg: f64,
    pub jitter_fraction: f64,
    pub min_full_spins: u32,
    pub max_full_spins: u32,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            duration_ms: SPIN_DURATION_MS,
            pointer_angle_deg: POINTER_ANGLE_DEG,
            jitter_fraction: JITTER_FRACTION,
            min_full_spins: MIN_FULL_SPINS,
            max_full_spins: MAX_FULL_SPINS,
        }
    }
}

/// Angular width of one segment, or `None` for an empty wheel.
#[inline]
pub fn segment_angle(word_count: usize) -> Option<f64> {
    (word_count > 0).then(|| 360.0 / word_count as f64)
}

/// Quartic ease-out: fast start, zero slope at `t = 1`.
#[inline]
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(4)
}

/// The random draws behind one spin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinChoice {
    pub selected_index: usize,
    pub jitter_deg: f64,
    pub full_spins: u32,
}

impl SpinChoice {
    /// Draw a choice for a wheel of `word_count` segments.
    pub fn random<R: Rng>(rng: &mut R, word_count: usize, config: &SpinConfig) -> Option<Self> {
        let seg = segment_angle(word_count)?;
        let selected_index = rng.gen_range(0..word_count);
        let j = config.jitter_fraction.abs();
        // A single segment covers the whole wheel; its center is the only sane stop.
        let jitter_deg = if word_count > 1 && j > 0.0 {
            rng.gen_range(-j..=j) * seg
        } else {
            0.0
        };
        let lo = config.min_full_spins.min(config.max_full_spins);
        let hi = config.min_full_spins.max(config.max_full_spins);
        let full_spins = rng.gen_range(lo..=hi);
        Some(Self {
            selected_index,
            jitter_deg,
            full_spins,
        })
    }
}

/// Everything fixed at the moment a spin starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinPlan {
    pub start_rotation: f64,
    pub target_rotation: f64,
    pub start_ms: f64,
    pub selected_index: usize,
    pub duration_ms: f64,
    pub segment_angle: f64,
}

impl SpinPlan {
    /// Build the plan for `choice` starting from `current_rotation`.
    ///
    /// Returns `None` for an empty wheel or an index outside it. The target
    /// always lies at least `choice.full_spins` whole turns ahead of
    /// `current_rotation`, so the wheel never turns backwards.
    pub fn new(
        current_rotation: f64,
        word_count: usize,
        choice: SpinChoice,
        start_ms: f64,
        config: &SpinConfig,
    ) -> Option<Self> {
        let seg = segment_angle(word_count)?;
        if choice.selected_index >= word_count {
            return None;
        }
        let target_angle =
            config.pointer_angle_deg - choice.selected_index as f64 * seg - choice.jitter_deg;
        let forward = (target_angle - current_rotation).rem_euclid(360.0);
        let target_rotation = current_rotation + choice.full_spins as f64 * 360.0 + forward;
        Some(Self {
            start_rotation: current_rotation,
            target_rotation,
            start_ms,
            selected_index: choice.selected_index,
            duration_ms: config.duration_ms,
            segment_angle: seg,
        })
    }

    /// Normalized progress at `now_ms`, clamped to `0..=1`.
    #[inline]
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Interpolated rotation at `progress`.
    #[inline]
    pub fn rotation_at(&self, progress: f64) -> f64 {
        let r = self.start_rotation
            + (self.target_rotation - self.start_rotation) * ease_out_quart(progress);
        r.min(self.target_rotation)
    }

    #[inline]
    fn segment_index(&self, rotation: f64) -> i64 {
        (rotation / self.segment_angle).floor() as i64
    }

    /// Number of segment boundaries the pointer passes during the whole spin.
    pub fn expected_ticks(&self) -> u64 {
        (self.segment_index(self.target_rotation) - self.segment_index(self.start_rotation)) as u64
    }
}

/// What one animation frame produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpinFrame {
    pub rotation: f64,
    /// Segment boundaries crossed since the previous frame, in crossing order.
    pub ticks: SmallVec<[i64; 4]>,
    /// Set on the final frame only.
    pub outcome: Option<usize>,
}

impl SpinFrame {
    #[inline]
    pub fn is_done(&self) -> bool {
        self.outcome.is_some()
    }
}

/// An in-flight spin: the plan plus the tick bookkeeping.
#[derive(Clone, Debug)]
pub struct Spin {
    plan: SpinPlan,
    last_segment: i64,
    last_progress: f64,
}

/// Result of stepping a [`Spin`]; a running spin hands itself back.
#[derive(Debug)]
pub enum SpinStep {
    Running(Spin, SpinFrame),
    Finished(SpinFrame),
}

impl Spin {
    pub fn new(plan: SpinPlan) -> Self {
        Self {
            last_segment: plan.segment_index(plan.start_rotation),
            last_progress: 0.0,
            plan,
        }
    }

    #[inline]
    pub fn plan(&self) -> &SpinPlan {
        &self.plan
    }

    /// Step to `now_ms`, consuming the spin.
    pub fn advance(mut self, now_ms: f64) -> SpinStep {
        let progress = self.plan.progress(now_ms).max(self.last_progress);
        self.last_progress = progress;
        let done = progress >= 1.0;
        let rotation = if done {
            self.plan.target_rotation
        } else {
            self.plan.rotation_at(progress)
        };

        let segment = self.plan.segment_index(rotation);
        let mut ticks = SmallVec::new();
        while self.last_segment < segment {
            self.last_segment += 1;
            ticks.push(self.last_segment);
        }

        if done {
            SpinStep::Finished(SpinFrame {
                rotation,
                ticks,
                outcome: Some(self.plan.selected_index),
            })
        } else {
            SpinStep::Running(
                self,
                SpinFrame {
                    rotation,
                    ticks,
                    outcome: None,
                },
            )
        }
    }
}

/// Owns the wheel rotation and at most one live spin.
///
/// Typical usage:
/// - `start_spin(now)` on a spin request (rejected while spinning or empty)
/// - `advance(now)` once per animation frame until it reports an outcome
/// - `set_word_count` when the word pool changes
pub struct SpinAnimator {
    rotation: f64,
    word_count: usize,
    config: SpinConfig,
    active: Option<Spin>,
    rng: StdRng,
    retired: bool,
}

impl SpinAnimator {
    pub fn new(word_count: usize, config: SpinConfig, seed: u64) -> Self {
        Self::with_rng(word_count, config, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(word_count: usize, config: SpinConfig, rng: StdRng) -> Self {
        Self {
            rotation: 0.0,
            word_count,
            config,
            active: None,
            rng,
            retired: false,
        }
    }

    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    #[inline]
    pub fn is_spinning(&self) -> bool {
        self.active.is_some()
    }

    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    #[inline]
    pub fn is_retired(&self) -> bool {
        self.retired
    }

    /// The live plan, if a spin is in flight.
    pub fn plan(&self) -> Option<&SpinPlan> {
        self.active.as_ref().map(Spin::plan)
    }

    /// Takes effect from the next spin; a live spin keeps its own geometry.
    pub fn set_word_count(&mut self, word_count: usize) {
        self.word_count = word_count;
    }

    /// Start a spin with random draws. `None` if spinning, retired, or the wheel is empty.
    pub fn start_spin(&mut self, now_ms: f64) -> Option<SpinPlan> {
        if self.is_spinning() || self.retired {
            return None;
        }
        let choice = SpinChoice::random(&mut self.rng, self.word_count, &self.config)?;
        self.start_with(choice, now_ms)
    }

    /// Start a spin with predetermined draws.
    pub fn start_with(&mut self, choice: SpinChoice, now_ms: f64) -> Option<SpinPlan> {
        if self.is_spinning() || self.retired {
            return None;
        }
        let plan = SpinPlan::new(self.rotation, self.word_count, choice, now_ms, &self.config)?;
        self.active = Some(Spin::new(plan));
        Some(plan)
    }

    /// Advance the live spin to `now_ms`. `None` when idle.
    pub fn advance(&mut self, now_ms: f64) -> Option<SpinFrame> {
        let spin = self.active.take()?;
        let frame = match spin.advance(now_ms) {
            SpinStep::Running(spin, frame) => {
                self.active = Some(spin);
                frame
            }
            SpinStep::Finished(frame) => frame,
        };
        self.rotation = frame.rotation;
        Some(frame)
    }

    /// Drop the live spin, leaving the wheel where it is. Returns whether one was live.
    pub fn cancel(&mut self) -> bool {
        self.active.take().is_some()
    }

    /// Cancel the live spin and refuse every later one. Used on teardown, when
    /// no frame loop is left to drive a spin to its end.
    pub fn retire(&mut self) -> bool {
        self.retired = true;
        self.cancel()
    }
}
