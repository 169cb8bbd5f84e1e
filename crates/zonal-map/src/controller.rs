//! View controller: at most one fetch in flight per view, newest snapshot wins.
//!
//! Every [`ZoneView::activate`] and [`ZoneView::deactivate`] advances the
//! view's generation. A running activation races its fetch against that
//! generation moving on: a newer activation or a deactivation drops the older
//! fetch (aborting its request) instead of letting it run to completion. A
//! result is stored only while its generation is still current, so a late
//! response can never overwrite a newer snapshot.

use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::watch;
use zonal_client::{FetchError, ZoneClient};
use zonal_core::{MapView, Zone};

use crate::boundary::render_guarded;
use crate::view::{ViewOptions, build_view};

/// Anything that can produce a zone snapshot.
pub trait ZoneSource {
    fn fetch_zones(&self) -> impl Future<Output = Result<Vec<Zone>, FetchError>> + Send;
}

impl ZoneSource for ZoneClient {
    fn fetch_zones(&self) -> impl Future<Output = Result<Vec<Zone>, FetchError>> + Send {
        self.fetch_all()
    }
}

#[derive(Debug)]
pub struct ZoneView<S> {
    source: S,
    options: ViewOptions,
    generation: watch::Sender<u64>,
    current: RwLock<Option<Arc<MapView>>>,
}

impl<S: ZoneSource> ZoneView<S> {
    #[must_use]
    pub fn new(source: S, options: ViewOptions) -> Self {
        let (generation, _) = watch::channel(0);
        Self {
            source,
            options,
            generation,
            current: RwLock::new(None),
        }
    }

    /// Fetch a fresh snapshot and render it, cancelling any older fetch.
    ///
    /// Returns the rendered view, or `None` if a newer activation or a
    /// deactivation superseded it. Never fails: fetch errors become a
    /// `LoadFailed` view and render panics a `Faulted` one.
    pub async fn activate(&self) -> Option<Arc<MapView>> {
        let mut superseded = self.generation.subscribe();
        let generation = self.advance();
        tracing::debug!(generation, "activating zone view");

        let outcome = tokio::select! {
            outcome = self.source.fetch_zones() => outcome,
            _ = superseded.wait_for(|latest| *latest != generation) => {
                tracing::debug!(generation, "zone fetch cancelled");
                return None;
            }
        };

        let view = Arc::new(render_guarded(self.options.fallback_center, || {
            build_view(outcome, &self.options)
        }));

        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        if *self.generation.borrow() != generation {
            tracing::debug!(generation, "discarding stale zone snapshot");
            return None;
        }
        *current = Some(Arc::clone(&view));
        Some(view)
    }

    /// Cancel any in-flight fetch and clear the current view.
    pub fn deactivate(&self) {
        let generation = self.advance();
        tracing::debug!(generation, "deactivating zone view");
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// The most recently applied view, if any.
    #[must_use]
    pub fn current(&self) -> Option<Arc<MapView>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of activations and deactivations so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        *self.generation.borrow()
    }

    #[must_use]
    pub const fn options(&self) -> &ViewOptions {
        &self.options
    }

    fn advance(&self) -> u64 {
        let mut next = 0;
        self.generation.send_modify(|generation| {
            *generation += 1;
            next = *generation;
        });
        next
    }
}
