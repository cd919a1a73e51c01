//! Live-broadcast fallback.
//!
//! Enabling live mode asks the lookup service for the room's broadcast URLs
//! and, if any exist, plays one of them instead of the peer streams.
//! Every lookup is tagged with a generation number; completions whose
//! generation is no longer current are discarded.

use crate::infrastructure::LiveLookupError;
use rand::Rng;
use rand::seq::SliceRandom;

/// A lookup the caller must perform and report back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveLookupRequest {
    pub generation: u64,
    pub code: String,
}

#[derive(Debug, PartialEq)]
pub enum LiveOutcome {
    /// Live mode is on and playing `url`.
    Started(String),
    Failed(LiveLookupError),
    /// Live mode was toggled since the lookup was issued.
    Stale,
}

#[derive(Debug, Default)]
pub struct LiveFallback {
    active: bool,
    url: Option<String>,
    generation: u64,
    pending: Option<u64>,
}

impl LiveFallback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns live mode on or off.
    ///
    /// Disabling is immediate. Enabling returns the lookup to perform;
    /// `active` only becomes true once that lookup succeeds. No result is
    /// cached, so every enable triggers a fresh lookup.
    pub fn toggle_live(&mut self, enable: bool, code: &str) -> Option<LiveLookupRequest> {
        self.generation += 1;
        self.active = false;
        self.url = None;

        if !enable {
            self.pending = None;
            return None;
        }

        self.pending = Some(self.generation);
        Some(LiveLookupRequest {
            generation: self.generation,
            code: code.to_string(),
        })
    }

    /// Applies a lookup completion, picking one URL uniformly at random.
    pub fn on_lookup_result<R: Rng + ?Sized>(
        &mut self,
        generation: u64,
        result: Result<Vec<String>, LiveLookupError>,
        rng: &mut R,
    ) -> LiveOutcome {
        if self.pending != Some(generation) {
            return LiveOutcome::Stale;
        }
        self.pending = None;

        let urls = match result {
            Ok(urls) => urls,
            Err(e) => return LiveOutcome::Failed(e),
        };
        let Some(url) = urls.choose(rng).cloned() else {
            return LiveOutcome::Failed(LiveLookupError::NoStreams);
        };

        self.active = true;
        self.url = Some(url.clone());
        LiveOutcome::Started(url)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// True while a lookup is in flight.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}
