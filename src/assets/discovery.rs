/// Asset discovery
///
/// Without a manifest every `name x extension` pair is tried in order and the
/// first one that fetches and decodes is kept for that name. With a manifest
/// each listed location is fetched once.
use crate::category::Category;
use crate::config::ManifestEntry;
use crate::error::AssetError;

use super::fetcher::AssetFetcher;
use super::pool::{AssetPool, CategoryPools};

/// Probe `base_path + name + ext` for every candidate name into `pool`.
///
/// Extensions are tried in the given order; the first one that both fetches and
/// decodes wins and the remaining extensions for that name are skipped. Misses
/// and decode failures are logged at debug level and never stop the probe.
/// Returns the number of assets added.
pub fn probe_category<T, F, D>(
    fetcher: &F,
    category: Category,
    base_path: &str,
    names: &[String],
    extensions: &[String],
    pool: &mut AssetPool<T>,
    mut decode: D,
) -> usize
where
    F: AssetFetcher + ?Sized,
    D: FnMut(&str, Vec<u8>) -> Result<T, AssetError>,
{
    let mut added = 0;

    for name in names {
        if pool.contains(name) {
            continue;
        }

        for ext in extensions {
            let location = format!("{}{}{}", base_path, name, ext);
            match fetch_and_decode(fetcher, &location, &mut decode) {
                Ok(asset) => {
                    pool.insert(name.clone(), asset);
                    added += 1;
                    tracing::info!("Loaded asset {}/{}{}", category, name, ext);
                    break;
                }
                Err(e) => {
                    tracing::debug!("Skipping {}: {}", location, e);
                }
            }
        }
    }

    added
}

/// Load explicitly listed assets into their category pools.
///
/// The first entry for a name wins. Returns the number of assets added.
pub fn load_manifest<T, F, D>(
    fetcher: &F,
    entries: &[ManifestEntry],
    pools: &mut CategoryPools<T>,
    mut decode: D,
) -> usize
where
    F: AssetFetcher + ?Sized,
    D: FnMut(&str, Vec<u8>) -> Result<T, AssetError>,
{
    let mut added = 0;

    for entry in entries {
        let pool = pools.get_mut(entry.category);
        if pool.contains(&entry.name) {
            tracing::debug!("Manifest entry {} shadowed by an earlier one", entry.path);
            continue;
        }

        match fetch_and_decode(fetcher, &entry.path, &mut decode) {
            Ok(asset) => {
                pool.insert(entry.name.clone(), asset);
                added += 1;
                tracing::info!(
                    "Loaded asset {}/{} from {}",
                    entry.category,
                    entry.name,
                    entry.path
                );
            }
            Err(e) => {
                tracing::warn!("Manifest asset {} unavailable: {}", entry.path, e);
            }
        }
    }

    added
}

fn fetch_and_decode<T, F, D>(fetcher: &F, location: &str, decode: &mut D) -> Result<T, AssetError>
where
    F: AssetFetcher + ?Sized,
    D: FnMut(&str, Vec<u8>) -> Result<T, AssetError>,
{
    let bytes = fetcher.fetch(location)?;
    decode(location, bytes)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::AssetKind;
    use parking_lot::Mutex;
    use std::collections::HashMap;

    /// In-memory fetcher that records every requested location
    #[derive(Default)]
    pub(crate) struct MapFetcher {
        pub files: HashMap<String, Vec<u8>>,
        pub requests: Mutex<Vec<String>>,
    }

    impl MapFetcher {
        pub fn with(files: &[(&str, &[u8])]) -> Self {
            Self {
                files: files
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_vec()))
                    .collect(),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    impl AssetFetcher for MapFetcher {
        fn fetch(&self, location: &str) -> Result<Vec<u8>, AssetError> {
            self.requests.lock().push(location.to_string());
            self.files
                .get(location)
                .cloned()
                .ok_or_else(|| AssetError::BadStatus {
                    location: location.to_string(),
                    status: 404,
                })
        }
    }

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn utf8(_: &str, bytes: Vec<u8>) -> Result<String, AssetError> {
        String::from_utf8(bytes).map_err(|e| AssetError::DecodeFailed {
            location: "test".to_string(),
            source: Box::new(e),
        })
    }

    #[test]
    fn test_probe_first_extension_wins() {
        let fetcher = MapFetcher::with(&[
            ("/s/correct/a.wav", &b"wav"[..]),
            ("/s/correct/a.ogg", &b"ogg"[..]),
        ]);
        let mut pool = AssetPool::new();

        let added = probe_category(
            &fetcher,
            Category::Correct,
            "/s/correct/",
            &names(&["a"]),
            &names(&[".mp3", ".wav", ".ogg", ".m4a"]),
            &mut pool,
            utf8,
        );

        assert_eq!(added, 1);
        assert_eq!(pool.get("a").map(String::as_str), Some("wav"));
        // .ogg and .m4a are never requested once .wav succeeded
        assert_eq!(
            *fetcher.requests.lock(),
            vec!["/s/correct/a.mp3".to_string(), "/s/correct/a.wav".to_string()]
        );
    }

    #[test]
    fn test_probe_requests_every_pair_when_nothing_exists() {
        let fetcher = MapFetcher::default();
        let mut pool: AssetPool<String> = AssetPool::new();

        let added = probe_category(
            &fetcher,
            Category::Wrong,
            "/s/wrong/",
            &names(&["a", "b", "c"]),
            &names(&[".mp3", ".wav"]),
            &mut pool,
            utf8,
        );

        assert_eq!(added, 0);
        assert!(pool.is_empty());
        assert_eq!(fetcher.requests.lock().len(), 6);
    }

    #[test]
    fn test_probe_decode_failure_tries_next_extension() {
        let fetcher = MapFetcher::with(&[
            ("/s/correct/b.mp3", &b"\xFF\xFE"[..]),
            ("/s/correct/b.wav", &b"ok"[..]),
        ]);
        let mut pool = AssetPool::new();

        probe_category(
            &fetcher,
            Category::Correct,
            "/s/correct/",
            &names(&["b"]),
            &names(&[".mp3", ".wav"]),
            &mut pool,
            utf8,
        );

        assert_eq!(pool.get("b").map(String::as_str), Some("ok"));
    }

    #[test]
    fn test_probe_skips_names_already_loaded() {
        let fetcher = MapFetcher::with(&[("/s/correct/a.mp3", &b"new"[..])]);
        let mut pool = AssetPool::new();
        pool.insert("a", "old".to_string());

        let added = probe_category(
            &fetcher,
            Category::Correct,
            "/s/correct/",
            &names(&["a"]),
            &names(&[".mp3"]),
            &mut pool,
            utf8,
        );

        assert_eq!(added, 0);
        assert_eq!(pool.get("a").map(String::as_str), Some("old"));
        assert!(fetcher.requests.lock().is_empty());
    }

    #[test]
    fn test_manifest_loading() {
        let fetcher = MapFetcher::with(&[("/x/one.wav", &b"one"[..]), ("/x/two.wav", &b"two"[..])]);
        let entries = vec![
            ManifestEntry {
                kind: AssetKind::Sound,
                category: Category::Correct,
                name: "a".to_string(),
                path: "/x/one.wav".to_string(),
            },
            ManifestEntry {
                kind: AssetKind::Sound,
                category: Category::Correct,
                name: "a".to_string(),
                path: "/x/two.wav".to_string(),
            },
            ManifestEntry {
                kind: AssetKind::Sound,
                category: Category::Wrong,
                name: "missing".to_string(),
                path: "/x/missing.wav".to_string(),
            },
        ];
        let mut pools = CategoryPools::new();

        let added = load_manifest(&fetcher, &entries, &mut pools, utf8);

        assert_eq!(added, 1);
        assert_eq!(pools.get(Category::Correct).get("a").map(String::as_str), Some("one"));
        assert!(pools.get(Category::Wrong).is_empty());
    }
}
