/// Sound player
///
/// Owns the audio output and the clip pools. A play picks a random clip of the
/// requested category, falls back to a synthesized tone when there is none (or
/// when playback fails), and publishes what it played on the selection bus.
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::clip::{decode_clip, SoundClip};
use super::output::{AudioOutput, RodioOutput};
use super::tone;
use crate::assets::{load_manifest, probe_category, AssetFetcher, CategoryPools};
use crate::category::Category;
use crate::config::{AssetKind, Config};
use crate::messaging::events::DEFAULT_SELECTION;
use crate::messaging::{SelectionBus, SelectionEvent};

pub struct SoundPlayer {
    output: Option<Box<dyn AudioOutput>>,
    clips: CategoryPools<SoundClip>,
    bus: SelectionBus,
    rng: StdRng,
    config: Config,
}

impl SoundPlayer {
    /// Open the default audio output.
    ///
    /// If the output cannot be opened the player still works, but every play
    /// returns `None`.
    pub fn initialize(config: Config, bus: SelectionBus) -> Self {
        let output: Option<Box<dyn AudioOutput>> = match RodioOutput::try_default() {
            Ok(output) => Some(Box::new(output)),
            Err(e) => {
                tracing::error!("Audio output unavailable, sounds disabled: {}", e);
                None
            }
        };

        Self::with_output(output, config, bus)
    }

    /// Create a player around an explicit output (or none)
    pub fn with_output(
        output: Option<Box<dyn AudioOutput>>,
        config: Config,
        bus: SelectionBus,
    ) -> Self {
        Self {
            output,
            clips: CategoryPools::new(),
            bus,
            rng: StdRng::from_entropy(),
            config,
        }
    }

    /// Use a fixed seed for clip selection
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn has_output(&self) -> bool {
        self.output.is_some()
    }

    /// Probe `base_path` for clips of a category. Returns how many were added.
    pub fn load_category<F: AssetFetcher + ?Sized>(
        &mut self,
        category: Category,
        base_path: &str,
        fetcher: &F,
    ) -> usize {
        probe_category(
            fetcher,
            category,
            base_path,
            &self.config.candidate_names,
            &self.config.sound_extensions,
            self.clips.get_mut(category),
            decode_clip,
        )
    }

    /// Load both categories from the manifest, or probe the configured sound roots
    pub fn load_all<F: AssetFetcher + ?Sized>(&mut self, fetcher: &F) -> usize {
        let loaded = match self.config.manifest_entries(AssetKind::Sound) {
            Some(entries) => load_manifest(fetcher, &entries, &mut self.clips, decode_clip),
            None => {
                let mut loaded = 0;
                for category in Category::ALL {
                    let base = self.config.sound_base(category);
                    loaded += self.load_category(category, &base, fetcher);
                }
                loaded
            }
        };

        tracing::info!(
            "Sound clips loaded: {} ({} correct, {} wrong)",
            self.clips.total(),
            self.clip_count(Category::Correct),
            self.clip_count(Category::Wrong)
        );
        loaded
    }

    /// Add an already decoded clip. The first clip under a name wins.
    pub fn insert_clip(
        &mut self,
        category: Category,
        name: impl Into<String>,
        clip: SoundClip,
    ) -> bool {
        self.clips.get_mut(category).insert(name, clip)
    }

    pub fn clip_count(&self, category: Category) -> usize {
        self.clips.get(category).len()
    }

    pub fn clip_names(&self, category: Category) -> Vec<String> {
        self.clips
            .get(category)
            .names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Play a random clip of `category` at `volume`.
    ///
    /// Returns the clip name, `"default"` when the fallback tone played, or
    /// `None` when there is no audio output at all.
    pub fn play(&mut self, category: Category, volume: f32) -> Option<String> {
        let Some(output) = self.output.as_deref() else {
            tracing::warn!("No audio output, skipping {} sound", category);
            return None;
        };

        let outcome = self
            .clips
            .get(category)
            .choose(&mut self.rng)
            .map(|(name, clip)| (name.to_string(), output.play(clip, volume)));

        match outcome {
            None => {
                tracing::warn!("No {} clips loaded, using default tone", category);
                self.play_default_tone(category, volume)
            }
            Some((name, Ok(()))) => {
                tracing::info!("Playing sound: {}/{}", category, name);
                self.bus.publish(SelectionEvent::new(category, name.clone()));
                Some(name)
            }
            Some((name, Err(e))) => {
                tracing::error!("Failed to play {}/{}: {}", category, name, e);
                self.play_default_tone(category, volume)
            }
        }
    }

    /// Play the synthesized fallback tone for `category`.
    ///
    /// The volume is applied to the samples; the tone plays at unit gain.
    pub fn play_default_tone(&mut self, category: Category, volume: f32) -> Option<String> {
        let output = self.output.as_deref()?;

        let tone = tone::fallback_tone(category, volume, self.config.tone_sample_rate);
        if let Err(e) = output.play(&tone, 1.0) {
            tracing::error!("Failed to play default {} tone: {}", category, e);
            return None;
        }

        tracing::info!("Playing default {} tone", category);
        self.bus
            .publish(SelectionEvent::new(category, DEFAULT_SELECTION));
        Some(DEFAULT_SELECTION.to_string())
    }

    pub fn play_correct_sound(&mut self) -> Option<String> {
        self.play(Category::Correct, self.config.correct_volume)
    }

    pub fn play_wrong_sound(&mut self) -> Option<String> {
        self.play(Category::Wrong, self.config.wrong_volume)
    }

    /// Quieter play from the correct pool
    pub fn play_click_sound(&mut self) -> Option<String> {
        self.play(Category::Correct, self.config.click_volume)
    }
}
