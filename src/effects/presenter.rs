/// Effect presenter
///
/// Owns the effect image pools and a subscription to the selection bus. Each
/// show mounts one overlay and spawns a timer that removes exactly that
/// overlay, so overlapping effects stack and expire independently.
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::Receiver;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::effect_image::EffectImage;
use super::overlay::{Overlay, OverlayContent, OverlayId, OverlaySurface, GLYPH_FONT_SIZE};
use crate::assets::{load_manifest, probe_category, AssetFetcher, CategoryPools};
use crate::category::Category;
use crate::config::{AssetKind, Config};
use crate::error::{AssetError, OverlayError};
use crate::messaging::events::DEFAULT_SELECTION;
use crate::messaging::{SelectionBus, SelectionEvent, SubscriberId};

fn decode_image(location: &str, bytes: Vec<u8>) -> Result<Arc<EffectImage>, AssetError> {
    EffectImage::decode(location, &bytes).map(Arc::new)
}

pub struct EffectPresenter {
    surface: Arc<dyn OverlaySurface>,
    images: CategoryPools<Arc<EffectImage>>,
    bus: SelectionBus,
    subscription: SubscriberId,
    selections: Receiver<SelectionEvent>,
    last_selection: Option<SelectionEvent>,
    next_overlay: u64,
    rng: StdRng,
    config: Config,
}

impl EffectPresenter {
    /// Create a presenter and subscribe it to `bus` right away
    pub fn new(surface: Arc<dyn OverlaySurface>, config: Config, bus: SelectionBus) -> Self {
        let (selections, subscription) = bus.subscribe();

        Self {
            surface,
            images: CategoryPools::new(),
            bus,
            subscription,
            selections,
            last_selection: None,
            next_overlay: 0,
            rng: StdRng::from_entropy(),
            config,
        }
    }

    /// Create a presenter and load both image categories
    pub fn initialize<F: AssetFetcher + ?Sized>(
        surface: Arc<dyn OverlaySurface>,
        config: Config,
        bus: SelectionBus,
        fetcher: &F,
    ) -> Self {
        let mut presenter = Self::new(surface, config, bus);
        presenter.load_all(fetcher);
        presenter
    }

    /// Use a fixed seed for image selection
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Probe `base_path` for images of a category. Returns how many were added.
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
            &self.config.image_extensions,
            self.images.get_mut(category),
            decode_image,
        )
    }

    /// Load both categories from the manifest, or probe the configured effect roots
    pub fn load_all<F: AssetFetcher + ?Sized>(&mut self, fetcher: &F) -> usize {
        let loaded = match self.config.manifest_entries(AssetKind::Effect) {
            Some(entries) => load_manifest(fetcher, &entries, &mut self.images, decode_image),
            None => {
                let mut loaded = 0;
                for category in Category::ALL {
                    let base = self.config.effect_base(category);
                    loaded += self.load_category(category, &base, fetcher);
                }
                loaded
            }
        };

        tracing::info!(
            "Effect images loaded: {} ({} correct, {} wrong)",
            self.images.total(),
            self.image_count(Category::Correct),
            self.image_count(Category::Wrong)
        );
        loaded
    }

    /// Add an already decoded image. The first image under a name wins.
    pub fn insert_image(
        &mut self,
        category: Category,
        name: impl Into<String>,
        image: EffectImage,
    ) -> bool {
        self.images.get_mut(category).insert(name, Arc::new(image))
    }

    pub fn image_count(&self, category: Category) -> usize {
        self.images.get(category).len()
    }

    /// Latest selection event seen so far
    pub fn last_selection(&mut self) -> Option<&SelectionEvent> {
        self.drain_selections();
        self.last_selection.as_ref()
    }

    fn drain_selections(&mut self) {
        // Latest wins
        if let Some(latest) = self.selections.try_iter().last() {
            self.last_selection = Some(latest);
        }
    }

    /// Name of the last played sound if it can seed an effect of `category`
    fn matching_name(&self, category: Category) -> Option<&str> {
        let selection = self.last_selection.as_ref()?;
        // The fallback tone never names an image
        if selection.is_default() {
            return None;
        }
        if self.config.scoped_matching && selection.category != category {
            return None;
        }

        let name = selection.selected_name.as_str();
        self.images.get(category).contains(name).then_some(name)
    }

    /// Show the effect for `effect_type` (`"correct"`/`"success"` or anything else).
    ///
    /// Returns the image name, `"default"` for the glyph, or `None` when the
    /// surface refused the overlay.
    pub fn show_effect(&mut self, effect_type: &str) -> Option<String> {
        let category = Category::from_effect_type(effect_type);
        self.drain_selections();

        if self.images.get(category).is_empty() {
            tracing::warn!("No {} effect images loaded, using default effect", category);
            return self.show_default_effect(effect_type);
        }

        let picked = match self.matching_name(category) {
            Some(name) => self
                .images
                .get(category)
                .get(name)
                .map(|image| (name.to_string(), Arc::clone(image))),
            None => self
                .images
                .get(category)
                .choose(&mut self.rng)
                .map(|(name, image)| (name.to_string(), Arc::clone(image))),
        };

        let Some((name, image)) = picked else {
            return self.show_default_effect(effect_type);
        };

        let (display_width, display_height) = image.fit_within(self.config.max_image_size);
        let content = OverlayContent::Image {
            name: name.clone(),
            image,
            display_width,
            display_height,
        };

        match self.mount(category, content) {
            Ok(id) => {
                tracing::info!("Showing effect {}: {}/{}", id, effect_type, name);
                Some(name)
            }
            Err(e) => {
                tracing::error!("Failed to show {}/{}: {}", category, name, e);
                self.show_default_effect(effect_type)
            }
        }
    }

    /// Show the ✓ (green) or ✗ (red) glyph for `effect_type`
    pub fn show_default_effect(&mut self, effect_type: &str) -> Option<String> {
        let category = Category::from_effect_type(effect_type);
        let content = OverlayContent::Glyph {
            symbol: category.glyph(),
            color: category.color(),
            font_size: GLYPH_FONT_SIZE,
        };

        match self.mount(category, content) {
            Ok(id) => {
                tracing::info!("Showing default effect {}: {}", id, effect_type);
                Some(DEFAULT_SELECTION.to_string())
            }
            Err(e) => {
                tracing::error!("Failed to show default {} effect: {}", category, e);
                None
            }
        }
    }

    pub fn show_correct_effect(&mut self) -> Option<String> {
        self.show_effect("correct")
    }

    pub fn show_wrong_effect(&mut self) -> Option<String> {
        self.show_effect("wrong")
    }

    fn mount(
        &mut self,
        category: Category,
        content: OverlayContent,
    ) -> Result<OverlayId, OverlayError> {
        let id = OverlayId(self.next_overlay);
        self.next_overlay += 1;

        let lifetime = Duration::from_millis(self.config.overlay_lifetime_ms);
        let overlay = Overlay {
            id,
            category,
            content,
            lifetime,
        };
        self.surface.mount(&overlay)?;

        // Each overlay removes itself, whatever else is shown meanwhile
        let label = overlay.image_name().unwrap_or("glyph").to_string();
        let surface = Arc::clone(&self.surface);
        thread::spawn(move || {
            thread::sleep(lifetime);
            surface.remove(id);
            tracing::debug!("Effect {} ({}) expired", id, label);
        });

        Ok(id)
    }
}

impl Drop for EffectPresenter {
    fn drop(&mut self) {
        self.bus.unsubscribe(self.subscription);
    }
}
