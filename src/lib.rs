//! Sound and overlay feedback for quiz answers.
//!
//! A [`SoundPlayer`] plays a random clip for a correct or wrong answer and
//! publishes what it played; an [`EffectPresenter`] shows the matching image
//! as a short-lived overlay, a random one when nothing matches, or a ✓/✗ glyph
//! when no image is available. Both fall back instead of failing: callers get
//! the chosen asset name, `"default"`, or `None`.

pub mod assets;
pub mod audio_system;
pub mod category;
pub mod config;
pub mod effects;
pub mod error;
pub mod feedback;
pub mod logging;
pub mod messaging;

pub use assets::{AssetFetcher, DirFetcher, HttpFetcher};
pub use audio_system::{AudioOutput, RodioOutput, SoundClip, SoundPlayer};
pub use category::Category;
pub use config::Config;
pub use effects::{EffectImage, EffectPresenter, LogSurface, MemorySurface, OverlaySurface};
pub use feedback::{FeedbackOutcome, FeedbackSystem};
pub use messaging::{SelectionBus, SelectionEvent};
