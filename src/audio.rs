use crate::core::{AudioError, Ramp, ToneSink, ToneSpec, ToneSynthesizer, Waveform};
use wasm_bindgen::JsValue;
use web_sys as web;

/// The page's sound effects, backed by one lazily created `AudioContext`.
pub type Synth = ToneSynthesizer<WebAudioSink, fn() -> Result<WebAudioSink, AudioError>>;

pub fn new_synth() -> Synth {
    ToneSynthesizer::new(WebAudioSink::open as fn() -> Result<WebAudioSink, AudioError>)
}

pub struct WebAudioSink {
    ctx: web::AudioContext,
}

impl WebAudioSink {
    pub fn open() -> Result<Self, AudioError> {
        let window = web::window().ok_or(AudioError::Unsupported)?;
        let has_ctor = js_sys::Reflect::has(&window, &JsValue::from_str("AudioContext"))
            .unwrap_or(false);
        if !has_ctor {
            return Err(AudioError::Unsupported);
        }
        let ctx = web::AudioContext::new().map_err(|e| AudioError::Init(format!("{:?}", e)))?;
        log::info!("[audio] context opened at {} Hz", ctx.sample_rate());
        Ok(Self { ctx })
    }
}

fn node_err(node: &'static str) -> impl Fn(JsValue) -> AudioError {
    move |e| AudioError::Node {
        node,
        reason: format!("{:?}", e),
    }
}

fn apply_ramps(param: &web::AudioParam, ramps: &[Ramp], t0: f64) -> Result<(), JsValue> {
    for ramp in ramps {
        let at = t0 + ramp.at_sec();
        match *ramp {
            Ramp::Set { value, .. } => param.set_value_at_time(value, at)?,
            Ramp::Linear { value, .. } => param.linear_ramp_to_value_at_time(value, at)?,
            Ramp::Exponential { value, .. } => {
                param.exponential_ramp_to_value_at_time(value, at)?
            }
        };
    }
    Ok(())
}

impl ToneSink for WebAudioSink {
    fn resume(&self) {
        if self.ctx.state() == web::AudioContextState::Suspended {
            _ = self.ctx.resume();
        }
    }

    // Each call gets its own oscillator/gain pair, so effects may overlap.
    fn render(&self, tone: &ToneSpec) -> Result<(), AudioError> {
        let src = web::OscillatorNode::new(&self.ctx).map_err(node_err("OscillatorNode"))?;
        match tone.waveform {
            Waveform::Sine => src.set_type(web::OscillatorType::Sine),
            Waveform::Saw => src.set_type(web::OscillatorType::Sawtooth),
            Waveform::Triangle => src.set_type(web::OscillatorType::Triangle),
        }
        let gain = web::GainNode::new(&self.ctx).map_err(node_err("GainNode"))?;
        let now = self.ctx.current_time();
        apply_ramps(&src.frequency(), tone.frequency, now).map_err(node_err("frequency ramp"))?;
        apply_ramps(&gain.gain(), tone.gain, now).map_err(node_err("gain ramp"))?;

        src.connect_with_audio_node(&gain)
            .map_err(node_err("OscillatorNode"))?;
        gain.connect_with_audio_node(&self.ctx.destination())
            .map_err(node_err("GainNode"))?;
        src.start_with_when(now).map_err(node_err("OscillatorNode"))?;
        src.stop_with_when(now + tone.stop_sec)
            .map_err(node_err("OscillatorNode"))?;
        Ok(())
    }
}
