// Integration tests for quiz-feedback
// These tests run the full load -> play -> show pipeline without hardware

use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use parking_lot::Mutex;

use quiz_feedback::error::{AssetError, AudioError};
use quiz_feedback::{
    AssetFetcher, AudioOutput, Category, Config, FeedbackSystem, MemorySurface, OverlaySurface,
    SoundClip,
};

/// Serves assets from memory, 404 for everything else
struct MemoryFetcher {
    files: HashMap<String, Vec<u8>>,
}

impl AssetFetcher for MemoryFetcher {
    fn fetch(&self, location: &str) -> Result<Vec<u8>, AssetError> {
        self.files
            .get(location)
            .cloned()
            .ok_or_else(|| AssetError::BadStatus {
                location: location.to_string(),
                status: 404,
            })
    }
}

#[derive(Clone, Default)]
struct CountingOutput {
    plays: Arc<Mutex<Vec<(usize, f32)>>>,
}

impl AudioOutput for CountingOutput {
    fn play(&self, clip: &SoundClip, volume: f32) -> Result<(), AudioError> {
        self.plays.lock().push((clip.frames(), volume));
        Ok(())
    }
}

fn wav(frames: usize) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16_000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        for i in 0..frames {
            writer.write_sample(((i % 32) as i16 - 16) * 512).unwrap();
        }
        writer.finalize().unwrap();
    }
    cursor.into_inner()
}

fn png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]));
    let mut cursor = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(img)
        .write_to(&mut cursor, ImageFormat::Png)
        .unwrap();
    cursor.into_inner()
}

fn fetcher(files: Vec<(&str, Vec<u8>)>) -> MemoryFetcher {
    MemoryFetcher {
        files: files
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
    }
}

#[test]
fn test_matching_sound_and_effect() {
    let fetcher = fetcher(vec![
        ("/assets/sounds/correct/a.mp3", b"not really mp3".to_vec()),
        ("/assets/sounds/correct/a.wav", wav(1600)),
        ("/assets/sounds/wrong/fail.ogg", wav(800)),
        ("/assets/effects/correct/a.png", png(300, 150)),
        ("/assets/effects/wrong/fail.png", png(50, 50)),
        ("/assets/effects/wrong/wrong.png", png(50, 50)),
    ]);
    let output = CountingOutput::default();
    let surface = Arc::new(MemorySurface::new());
    let overlay_surface: Arc<dyn OverlaySurface> = surface.clone();

    let mut system = FeedbackSystem::with_output(
        Config::default(),
        &fetcher,
        Some(Box::new(output.clone())),
        overlay_surface,
    );

    let outcome = system.correct();
    assert_eq!(outcome.sound.as_deref(), Some("a"));
    assert_eq!(outcome.effect.as_deref(), Some("a"));

    let outcome = system.wrong();
    assert_eq!(outcome.sound.as_deref(), Some("fail"));
    assert_eq!(outcome.effect.as_deref(), Some("fail"));

    let plays = output.plays.lock().clone();
    assert_eq!(plays, vec![(1600, 0.6), (800, 0.6)]);
    assert_eq!(surface.active_count(), 2);
}

#[test]
fn test_nothing_loaded_falls_back_everywhere() {
    let fetcher = fetcher(Vec::new());
    let output = CountingOutput::default();
    let surface = Arc::new(MemorySurface::new());
    let overlay_surface: Arc<dyn OverlaySurface> = surface.clone();

    let mut system = FeedbackSystem::with_output(
        Config::default(),
        &fetcher,
        Some(Box::new(output.clone())),
        overlay_surface,
    );

    let outcome = system.correct();
    assert_eq!(outcome.sound.as_deref(), Some("default"));
    assert_eq!(outcome.effect.as_deref(), Some("default"));
    assert_eq!(system.play_click_sound().as_deref(), Some("default"));

    let active = surface.active();
    assert!(active.iter().all(|o| o.is_glyph()));
    assert_eq!(active[0].category, Category::Correct);
}

#[test]
fn test_no_audio_output_still_shows_effects() {
    let fetcher = fetcher(vec![("/assets/effects/correct/b.png", png(10, 10))]);
    let surface = Arc::new(MemorySurface::new());
    let overlay_surface: Arc<dyn OverlaySurface> = surface.clone();

    let mut system =
        FeedbackSystem::with_output(Config::default(), &fetcher, None, overlay_surface);

    assert_eq!(system.play_correct_sound(), None);
    assert_eq!(system.play_wrong_sound(), None);
    assert_eq!(system.show_correct_effect().as_deref(), Some("b"));
    assert_eq!(system.show_wrong_effect().as_deref(), Some("default"));
}

#[test]
fn test_manifest_replaces_probing() {
    let json = r#"{
        "manifest": [
            { "kind": "sound", "category": "correct", "name": "yay", "path": "/media/yay.wav" },
            { "kind": "effect", "category": "correct", "name": "yay", "path": "/media/yay.png" }
        ]
    }"#;
    let config: Config = serde_json::from_str(json).unwrap();
    let fetcher = fetcher(vec![
        ("/media/yay.wav", wav(160)),
        ("/media/yay.png", png(20, 20)),
        // Ignored: probing is off when a manifest is configured
        ("/assets/sounds/correct/a.wav", wav(160)),
    ]);
    let surface: Arc<dyn OverlaySurface> = Arc::new(MemorySurface::new());

    let mut system = FeedbackSystem::with_output(
        config,
        &fetcher,
        Some(Box::new(CountingOutput::default())),
        surface,
    );

    assert_eq!(system.sounds().clip_names(Category::Correct), vec!["yay"]);
    let outcome = system.correct();
    assert_eq!(outcome.sound.as_deref(), Some("yay"));
    assert_eq!(outcome.effect.as_deref(), Some("yay"));
}
