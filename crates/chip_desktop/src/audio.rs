use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use anyhow::anyhow;
use tinyaudio::prelude::*;

const AMPLITUDE: f32 = 0.2;

/// Sine oscillator feeding the output callback
struct Tone {
    phase: f32,
    step: f32
}
impl Tone {
    fn new(frequency: f64, sample_rate: usize) -> Self {
        Tone {
            phase: 0.0,
            step: (frequency / sample_rate as f64) as f32 * std::f32::consts::TAU
        }
    }
    fn next_sample(&mut self) -> f32 {
        let val = self.phase.sin() * AMPLITUDE;
        self.phase = (self.phase + self.step) % std::f32::consts::TAU;
        val
    }
}

/// Output device that runs for the whole session; `play`/`stop` only gate the tone
pub struct Device {
    _inner: Box<dyn BaseAudioOutputDevice>,
    gate: Arc<AtomicBool>
}
impl Device {
    pub fn new(frequency: f64) -> anyhow::Result<Self> {
        let params = OutputDeviceParameters {
            channels_count: 2,
            sample_rate: 44100,
            channel_sample_count: 4410
        };
        let gate = Arc::new(AtomicBool::new(false));
        let device = run_output_device(
            params,
            {
                let gate = gate.clone();
                let mut tone = Tone::new(frequency, params.sample_rate);
                move |data| {
                    let on = gate.load(Ordering::Relaxed);
                    for samples in data.chunks_mut(params.channels_count) {
                        let val = if on { tone.next_sample() } else { 0.0 };
                        for sample in samples {
                            *sample = val;
                        }
                    }
                }
            }
        ).map_err(|e| anyhow!("failed to open audio output: {e}"))?;
        log::info!("audio output at {} Hz, tone {} Hz", params.sample_rate, frequency);
        Ok(Self {
            _inner: device,
            gate
        })
    }
    pub fn play(&self) {
        if !self.gate.swap(true, Ordering::Relaxed) {
            log::trace!("tone on");
        }
    }
    pub fn stop(&self) {
        if self.gate.swap(false, Ordering::Relaxed) {
            log::trace!("tone off");
        }
    }
}
