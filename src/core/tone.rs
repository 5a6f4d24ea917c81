use thiserror::Error;

/// Oscillator shape for a sound effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Saw,
    Triangle,
}

/// One automation event on an audio parameter, timed from the effect start.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ramp {
    Set { value: f32, at_sec: f64 },
    Linear { value: f32, at_sec: f64 },
    Exponential { value: f32, at_sec: f64 },
}

impl Ramp {
    #[inline]
    pub fn at_sec(&self) -> f64 {
        match *self {
            Ramp::Set { at_sec, .. } | Ramp::Linear { at_sec, .. } | Ramp::Exponential { at_sec, .. } => at_sec,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        match *self {
            Ramp::Set { value, .. } | Ramp::Linear { value, .. } | Ramp::Exponential { value, .. } => value,
        }
    }
}

/// Static description of a one-shot oscillator + gain envelope.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToneSpec {
    pub waveform: Waveform,
    pub frequency: &'static [Ramp],
    pub gain: &'static [Ramp],
    pub stop_sec: f64,
}

pub const TICK: ToneSpec = ToneSpec {
    waveform: Waveform::Triangle,
    frequency: &[
        Ramp::Set { value: 1000.0, at_sec: 0.0 },
        Ramp::Exponential { value: 600.0, at_sec: 0.1 },
    ],
    gain: &[
        Ramp::Set { value: 0.3, at_sec: 0.0 },
        Ramp::Exponential { value: 0.001, at_sec: 0.1 },
    ],
    stop_sec: 0.1,
};

/// Rising C5 -> G5 pair.
pub const CORRECT: ToneSpec = ToneSpec {
    waveform: Waveform::Sine,
    frequency: &[
        Ramp::Set { value: 523.25, at_sec: 0.0 },
        Ramp::Set { value: 783.99, at_sec: 0.15 },
    ],
    gain: &[
        Ramp::Set { value: 0.0, at_sec: 0.0 },
        Ramp::Linear { value: 0.25, at_sec: 0.01 },
        Ramp::Linear { value: 0.0, at_sec: 0.15 },
        Ramp::Linear { value: 0.25, at_sec: 0.16 },
        Ramp::Linear { value: 0.0, at_sec: 0.3 },
    ],
    stop_sec: 0.4,
};

/// Falling buzz.
pub const INCORRECT: ToneSpec = ToneSpec {
    waveform: Waveform::Saw,
    frequency: &[
        Ramp::Set { value: 160.0, at_sec: 0.0 },
        Ramp::Exponential { value: 100.0, at_sec: 0.2 },
    ],
    gain: &[
        Ramp::Set { value: 0.2, at_sec: 0.0 },
        Ramp::Exponential { value: 0.001, at_sec: 0.2 },
    ],
    stop_sec: 0.2,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundEffect {
    Tick,
    Correct,
    Incorrect,
}

impl SoundEffect {
    #[inline]
    pub fn spec(self) -> &'static ToneSpec {
        match self {
            SoundEffect::Tick => &TICK,
            SoundEffect::Correct => &CORRECT,
            SoundEffect::Incorrect => &INCORRECT,
        }
    }
}

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio output is not supported here")]
    Unsupported,
    #[error("could not create audio output: {0}")]
    Init(String),
    #[error("could not build {node}: {reason}")]
    Node { node: &'static str, reason: String },
}

/// Platform audio output able to render a [`ToneSpec`].
pub trait ToneSink {
    /// Wake the output if the platform suspended it.
    fn resume(&self);
    fn render(&self, tone: &ToneSpec) -> Result<(), AudioError>;
}

/// Lazily opened audio output shared by the sound effects.
///
/// The sink is created on first use. A failed creation is logged once and
/// latched: every later effect is a silent no-op.
pub struct ToneSynthesizer<S, F>
where
    F: FnMut() -> Result<S, AudioError>,
{
    open: F,
    sink: Option<S>,
    unavailable: bool,
}

impl<S, F> ToneSynthesizer<S, F>
where
    S: ToneSink,
    F: FnMut() -> Result<S, AudioError>,
{
    pub fn new(open: F) -> Self {
        Self {
            open,
            sink: None,
            unavailable: false,
        }
    }

    #[inline]
    pub fn is_unavailable(&self) -> bool {
        self.unavailable
    }

    /// Open the output if needed and resume it.
    pub fn ensure_ready(&mut self) -> Option<&S> {
        if self.unavailable {
            return None;
        }
        if self.sink.is_none() {
            match (self.open)() {
                Ok(sink) => self.sink = Some(sink),
                Err(e) => {
                    log::warn!("[audio] sound disabled: {}", e);
                    self.unavailable = true;
                    return None;
                }
            }
        }
        let sink = self.sink.as_ref()?;
        sink.resume();
        Some(sink)
    }

    pub fn play(&mut self, effect: SoundEffect) {
        if let Some(sink) = self.ensure_ready() {
            if let Err(e) = sink.render(effect.spec()) {
                log::warn!("[audio] {:?} effect failed: {}", effect, e);
            }
        }
    }

    #[inline]
    pub fn tick(&mut self) {
        self.play(SoundEffect::Tick);
    }

    #[inline]
    pub fn correct(&mut self) {
        self.play(SoundEffect::Correct);
    }

    #[inline]
    pub fn incorrect(&mut self) {
        self.play(SoundEffect::Incorrect);
    }
}
