/// Decoded sound clips
///
/// Clips are decoded once at load time into interleaved f32 PCM so that a play
/// only has to hand samples to the output.
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::{AssetError, AudioError};

/// Interleaved PCM audio held in memory
#[derive(Debug, Clone)]
pub struct SoundClip {
    pub channels: u16,
    pub sample_rate: u32,
    pub samples: Arc<[f32]>,
}

impl SoundClip {
    /// Wrap mono samples
    pub fn from_mono(sample_rate: u32, samples: Vec<f32>) -> Self {
        Self {
            channels: 1,
            sample_rate,
            samples: samples.into(),
        }
    }

    /// Number of frames (samples per channel)
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels.max(1) as usize
    }

    pub fn duration(&self) -> Duration {
        if self.sample_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.frames() as f64 / self.sample_rate as f64)
    }

    /// Decode an encoded clip (mp3, wav, ogg, m4a, ...).
    ///
    /// `location` is only used for its extension, which hints the format probe.
    pub fn decode(location: &str, bytes: Vec<u8>) -> Result<Self, AudioError> {
        let mss = MediaSourceStream::new(Box::new(Cursor::new(bytes)), Default::default());

        let mut hint = Hint::new();
        if let Some(ext) = Path::new(location).extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| AudioError::DecodeFailed(Box::new(e)))?;
        let mut format = probed.format;

        // Find the first audio track with a known (decodable) codec
        let (track_id, codec_params) = format
            .tracks()
            .iter()
            .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
            .map(|t| (t.id, t.codec_params.clone()))
            .ok_or_else(|| AudioError::InvalidFormat("no supported audio tracks".to_string()))?;

        let mut decoder = symphonia::default::get_codecs()
            .make(&codec_params, &DecoderOptions::default())
            .map_err(|e| AudioError::DecodeFailed(Box::new(e)))?;

        let mut sample_rate = codec_params.sample_rate;
        let mut channels = codec_params.channels.map(|c| c.count() as u16);
        let mut samples: Vec<f32> = Vec::new();

        loop {
            let packet = match format.next_packet() {
                Ok(packet) => packet,
                Err(SymphoniaError::IoError(err))
                    if err.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    // End of stream
                    break;
                }
                Err(SymphoniaError::ResetRequired) => break,
                Err(err) => return Err(AudioError::DecodeFailed(Box::new(err))),
            };

            if packet.track_id() != track_id {
                continue;
            }

            match decoder.decode(&packet) {
                Ok(decoded) => {
                    let spec = *decoded.spec();
                    sample_rate.get_or_insert(spec.rate);
                    channels.get_or_insert(spec.channels.count() as u16);

                    let mut buf = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
                    buf.copy_interleaved_ref(decoded);
                    samples.extend_from_slice(buf.samples());
                }
                // Damaged packets are skipped, the rest of the clip still plays
                Err(SymphoniaError::IoError(_)) | Err(SymphoniaError::DecodeError(_)) => continue,
                Err(err) => return Err(AudioError::DecodeFailed(Box::new(err))),
            }
        }

        let sample_rate =
            sample_rate.ok_or_else(|| AudioError::InvalidFormat("unknown sample rate".into()))?;
        let channels =
            channels.ok_or_else(|| AudioError::InvalidFormat("unknown channel count".into()))?;
        if samples.is_empty() {
            return Err(AudioError::InvalidFormat("clip contains no samples".into()));
        }

        Ok(Self {
            channels,
            sample_rate,
            samples: samples.into(),
        })
    }
}

/// Decoder used by asset discovery
pub fn decode_clip(location: &str, bytes: Vec<u8>) -> Result<SoundClip, AssetError> {
    SoundClip::decode(location, bytes).map_err(|e| AssetError::DecodeFailed {
        location: location.to_string(),
        source: Box::new(e),
    })
}
