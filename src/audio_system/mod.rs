/// Audio system module
///
/// Provides the sound half of the feedback effects:
/// - Clip decoding into in-memory PCM (symphonia)
/// - Fallback tone synthesis
/// - One-shot playback through an output (rodio)
/// - Random per-category selection with a selection event per play
///
/// ## Architecture
///
/// ```text
/// SoundPlayer
///   ├── CategoryPools<SoundClip>   correct / wrong
///   ├── AudioOutput                source -> gain -> device
///   └── SelectionBus               publishes {category, selected_name}
/// ```
///
/// ## Usage
///
/// ```rust,ignore
/// let bus = SelectionBus::new();
/// let mut player = SoundPlayer::initialize(Config::default(), bus.clone());
/// player.load_all(&HttpFetcher::new("http://localhost:8080", timeout));
///
/// // Some("a"), Some("default") or None
/// let played = player.play_correct_sound();
/// ```
pub mod clip;
pub mod output;
pub mod player;
pub mod tone;

// Re-export commonly used types
pub use clip::SoundClip;
pub use output::{AudioOutput, RodioOutput};
pub use player::SoundPlayer;
