//! Feature resolver - Class features per class level, patched for known gaps
//!
//! Lookups go to the injected rules source under a timeout. Anything short
//! of a definitive answer degrades to an empty base list so a slow or dead
//! rules API never fails a sheet.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use crate::application::ports::outbound::{RulesLookup, RulesSourcePort};
use crate::domain::services::ClassCatalog;
use crate::domain::value_objects::ClassName;

/// Default bound on a single rules source call
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

type CacheKey = (ClassName, u8);

pub struct FeatureResolver {
    rules_source: Arc<dyn RulesSourcePort>,
    lookup_timeout: Duration,
    /// `None` when caching is disabled
    cache: Option<RwLock<HashMap<CacheKey, Vec<String>>>>,
}

impl FeatureResolver {
    pub fn new(rules_source: Arc<dyn RulesSourcePort>) -> Self {
        Self {
            rules_source,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
            cache: Some(RwLock::new(HashMap::new())),
        }
    }

    pub fn with_timeout(mut self, lookup_timeout: Duration) -> Self {
        self.lookup_timeout = lookup_timeout;
        self
    }

    pub fn without_cache(mut self) -> Self {
        self.cache = None;
        self
    }

    /// Feature names for `class` at its own `class_level`.
    ///
    /// Source features come first in the source's order, followed by the
    /// catalog's gap patches.
    #[instrument(skip(self), fields(class = %class))]
    pub async fn features_for(&self, class: ClassName, class_level: u8) -> Vec<String> {
        let key = (class, class_level);
        if let Some(cache) = &self.cache {
            if let Some(features) = cache.read().await.get(&key) {
                debug!("Feature cache hit");
                return features.clone();
            }
        }

        let (mut features, definitive) = self.fetch_base(class, class_level).await;
        features.extend(ClassCatalog::feature_gap_patch(class, class_level));

        // Degraded answers are retried on the next call rather than pinned
        if definitive {
            if let Some(cache) = &self.cache {
                cache.write().await.insert(key, features.clone());
            }
        }

        features
    }

    /// Base list from the rules source and whether it is a definitive answer
    async fn fetch_base(&self, class: ClassName, class_level: u8) -> (Vec<String>, bool) {
        let Some(index) = class.api_index() else {
            return (Vec::new(), true);
        };

        let outcome =
            match tokio::time::timeout(self.lookup_timeout, self.rules_source.lookup(index, class_level))
                .await
            {
                Ok(outcome) => outcome,
                Err(_) => RulesLookup::Unavailable(format!(
                    "timed out after {}ms",
                    self.lookup_timeout.as_millis()
                )),
            };

        match outcome {
            RulesLookup::Features(features) => (features, true),
            RulesLookup::NotFound => {
                debug!(class_level, "Rules source has no data for this level");
                (Vec::new(), true)
            }
            RulesLookup::Unavailable(reason) => {
                warn!(class_level, reason = %reason, "Feature lookup degraded");
                (Vec::new(), false)
            }
        }
    }
}
