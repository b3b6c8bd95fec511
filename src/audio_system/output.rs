/// Audio outputs
///
/// An output plays one clip through `source -> gain(volume) -> device` and
/// returns immediately. Each play is independent; overlapping plays mix.
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Source};

use super::clip::SoundClip;
use crate::error::AudioError;

/// Something that can play decoded clips
pub trait AudioOutput {
    /// Start playing `clip` at gain `volume` (non-blocking)
    fn play(&self, clip: &SoundClip, volume: f32) -> Result<(), AudioError>;
}

/// Default output device through rodio
pub struct RodioOutput {
    _stream: OutputStream,
    stream_handle: OutputStreamHandle,
}

impl RodioOutput {
    /// Open the default output device
    pub fn try_default() -> Result<Self, AudioError> {
        let (stream, stream_handle) =
            OutputStream::try_default().map_err(|e| AudioError::StreamInitFailed(Box::new(e)))?;
        tracing::info!("✓ Audio output stream opened");

        Ok(Self {
            _stream: stream,
            stream_handle,
        })
    }
}

impl AudioOutput for RodioOutput {
    fn play(&self, clip: &SoundClip, volume: f32) -> Result<(), AudioError> {
        let source = SamplesBuffer::new(clip.channels, clip.sample_rate, clip.samples.to_vec())
            .amplify(volume.clamp(0.0, 1.0));

        self.stream_handle
            .play_raw(source)
            .map_err(|e| AudioError::PlaybackFailed(Box::new(e)))
    }
}
