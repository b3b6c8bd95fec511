/// Fallback tone synthesis
///
/// A short sine burst with an exponential decay, higher for correct answers
/// than for wrong ones.
use std::f32::consts::PI;

use super::clip::SoundClip;
use crate::category::Category;

/// Tone length in seconds
pub const TONE_DURATION_SECS: f64 = 0.3;

/// Decay rate of the envelope `e^(-k t)`
pub const TONE_DECAY: f32 = 3.0;

/// Synthesize `sin(2π f t) · e^(-3t) · volume` as a mono clip
pub fn synthesize(frequency: f32, volume: f32, sample_rate: u32) -> SoundClip {
    let len = (sample_rate as f64 * TONE_DURATION_SECS).round() as usize;
    let rate = sample_rate as f32;

    let samples = (0..len)
        .map(|i| {
            let t = i as f32 / rate;
            (2.0 * PI * frequency * t).sin() * (-t * TONE_DECAY).exp() * volume
        })
        .collect();

    SoundClip::from_mono(sample_rate, samples)
}

/// Fallback tone for a category
pub fn fallback_tone(category: Category, volume: f32, sample_rate: u32) -> SoundClip {
    synthesize(category.tone_frequency(), volume, sample_rate)
}
