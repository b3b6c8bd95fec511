/// Messaging between the sound player and the effect presenter
///
/// The sound player publishes a [`SelectionEvent`] every time it plays a clip
/// or a fallback tone. The effect presenter holds a subscription and reads the
/// latest event when it is asked to show an effect.
///
/// ```text
/// ┌─────────────┐  SelectionEvent  ┌──────────────┐  latest wins  ┌─────────────────┐
/// │ SoundPlayer │ ───────────────> │ SelectionBus │ ────────────> │ EffectPresenter │
/// └─────────────┘                  └──────────────┘               └─────────────────┘
/// ```
///
/// Delivery is fire-and-forget: no acknowledgment, no replay for late
/// subscribers.

pub mod bus;
pub mod events;

pub use bus::{SelectionBus, SubscriberId};
pub use events::SelectionEvent;
