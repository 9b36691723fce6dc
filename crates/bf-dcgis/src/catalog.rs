use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::config::Config;
use crate::shops::{normalize, Barbershop, Feature};
use crate::submission::Submission;
use crate::{fetch, store};

/// Coordinates the fetch, fallback and persist pipeline. All cache
/// read-modify-write sequences are serialized behind one lock so concurrent
/// submissions cannot race on the generated identifiers.
///
/// Neither operation raises: fetch and store failures are absorbed and
/// logged here, and the caller gets the best-available data, possibly
/// empty. The worst outcome is serving an empty list.
#[derive(Debug)]
pub struct Catalog {
    config: Config,
    http: reqwest::Client,
    cache_lock: Mutex<()>,
}

impl Catalog {
    pub fn new(http: reqwest::Client, config: Config) -> Self {
        Self {
            config,
            http,
            cache_lock: Mutex::new(()),
        }
    }

    /// The configured mapping-service key, passed through unmodified for
    /// the rendering boundary.
    pub fn maps_api_key(&self) -> Option<&str> {
        self.config.maps_api_key.as_deref()
    }

    /// Refresh-for-display: a non-empty remote result is authoritative and
    /// replaces the cache; on a fetch failure or an empty result, fall back
    /// to the cached snapshot. The resolved snapshot is re-persisted either
    /// way, so repeated refreshes against a dead remote leave the cache
    /// content stable.
    pub async fn refresh(&self) -> Vec<Barbershop> {
        let fetched = match fetch::get(&self.http, Some(&self.config.query_url)).await {
            Ok(features) if !features.is_empty() => Some(features),
            Ok(_) => {
                debug!("geodata service returned no features, falling back to cache");
                None
            }
            Err(e) => {
                warn!(error = %e, "fetch failed, falling back to cache");
                None
            }
        };
        let _guard = self.cache_lock.lock().await;
        let features = match fetched {
            Some(features) => features,
            None => self.load_or_empty().await,
        };
        if let Err(e) = store::save(&self.config.cache_path, &features).await {
            warn!(error = %e, "failed to persist cache, serving in-memory data");
        }
        normalize(&features)
    }

    /// Append a validated submission to the cache and return the feature as
    /// stored. The identifier is derived from the cache length read under
    /// the lock.
    pub async fn add(&self, submission: &Submission) -> Feature {
        let _guard = self.cache_lock.lock().await;
        let mut features = self.load_or_empty().await;
        let feature = submission.to_feature(features.len());
        features.push(feature.clone());
        if let Err(e) = store::save(&self.config.cache_path, &features).await {
            warn!(error = %e, "failed to persist submission");
        }
        feature
    }

    async fn load_or_empty(&self) -> Vec<Feature> {
        match store::load(&self.config.cache_path).await {
            Ok(features) => features,
            Err(e) => {
                warn!(error = %e, "failed to load cache");
                Vec::new()
            }
        }
    }
}
