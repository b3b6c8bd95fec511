/// Feedback system
///
/// Owns one sound player and one effect presenter wired to the same selection
/// bus. The presenter subscribes before anything is played, so no selection is
/// lost between the two.
use std::sync::Arc;

use crate::assets::AssetFetcher;
use crate::audio_system::{AudioOutput, SoundPlayer};
use crate::config::Config;
use crate::effects::{EffectPresenter, OverlaySurface};
use crate::messaging::SelectionBus;

/// What one answer produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackOutcome {
    pub sound: Option<String>,
    pub effect: Option<String>,
}

pub struct FeedbackSystem {
    bus: SelectionBus,
    sounds: SoundPlayer,
    effects: EffectPresenter,
}

impl FeedbackSystem {
    /// Open the default audio output and load every asset through `fetcher`
    pub fn initialize<F: AssetFetcher + ?Sized>(
        config: Config,
        fetcher: &F,
        surface: Arc<dyn OverlaySurface>,
    ) -> Self {
        let bus = SelectionBus::new();
        let effects = EffectPresenter::new(surface, config.clone(), bus.clone());
        let sounds = SoundPlayer::initialize(config, bus.clone());
        Self::assemble(bus, sounds, effects, fetcher)
    }

    /// Same as [`FeedbackSystem::initialize`] with an explicit audio output
    pub fn with_output<F: AssetFetcher + ?Sized>(
        config: Config,
        fetcher: &F,
        output: Option<Box<dyn AudioOutput>>,
        surface: Arc<dyn OverlaySurface>,
    ) -> Self {
        let bus = SelectionBus::new();
        let effects = EffectPresenter::new(surface, config.clone(), bus.clone());
        let sounds = SoundPlayer::with_output(output, config, bus.clone());
        Self::assemble(bus, sounds, effects, fetcher)
    }

    fn assemble<F: AssetFetcher + ?Sized>(
        bus: SelectionBus,
        mut sounds: SoundPlayer,
        mut effects: EffectPresenter,
        fetcher: &F,
    ) -> Self {
        sounds.load_all(fetcher);
        effects.load_all(fetcher);
        Self {
            bus,
            sounds,
            effects,
        }
    }

    pub fn bus(&self) -> &SelectionBus {
        &self.bus
    }

    pub fn sounds(&mut self) -> &mut SoundPlayer {
        &mut self.sounds
    }

    pub fn effects(&mut self) -> &mut EffectPresenter {
        &mut self.effects
    }

    pub fn play_correct_sound(&mut self) -> Option<String> {
        self.sounds.play_correct_sound()
    }

    pub fn play_wrong_sound(&mut self) -> Option<String> {
        self.sounds.play_wrong_sound()
    }

    pub fn play_click_sound(&mut self) -> Option<String> {
        self.sounds.play_click_sound()
    }

    pub fn show_correct_effect(&mut self) -> Option<String> {
        self.effects.show_correct_effect()
    }

    pub fn show_wrong_effect(&mut self) -> Option<String> {
        self.effects.show_wrong_effect()
    }

    /// Correct answer: sound first, then the effect that matches it
    pub fn correct(&mut self) -> FeedbackOutcome {
        let sound = self.play_correct_sound();
        let effect = self.show_correct_effect();
        FeedbackOutcome { sound, effect }
    }

    /// Wrong answer: sound first, then the effect that matches it
    pub fn wrong(&mut self) -> FeedbackOutcome {
        let sound = self.play_wrong_sound();
        let effect = self.show_wrong_effect();
        FeedbackOutcome { sound, effect }
    }
}
