//! Progress reporting for the generation stages.
//!
//! A [`Progress`] wraps a callback that receives `(current, total, message)`.
//! Stages that have their own inner loop receive a [`Progress::stage`]
//! reporter, which rescales their steps into the slot the parent reserved for
//! them. The callback therefore only ever sees one growing fraction.
//!
//! # Example
//!
//! ```
//! use grotto::algo::Progress;
//! use grotto::CaveConfig;
//!
//! let progress = Progress::new(|current, total, message| {
//!     println!("[{}/{}] {}", current, total, message);
//! });
//!
//! let config = CaveConfig::new(24, 16);
//! let cave = grotto::generate_with_progress(&config, &progress).unwrap();
//! assert!(!cave.floor().is_empty());
//! ```

use std::sync::Arc;

/// Resolution of a stage slot. A stage's `current / total` is mapped onto
/// this many sub-steps of its parent step.
const STAGE_RESOLUTION: usize = 1000;

type Callback = dyn Fn(usize, usize, &str) + Send + Sync;

/// A progress callback that receives updates during generation.
///
/// The callback receives:
/// - `current`: steps done so far
/// - `total`: number of steps (never 0)
/// - `message`: what is running
#[derive(Clone)]
pub struct Progress {
    callback: Arc<Callback>,
}

impl Progress {
    /// Create a new progress reporter with the given callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(usize, usize, &str) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
        }
    }

    /// Create a no-op progress reporter that discards all updates.
    pub fn none() -> Self {
        Self::new(|_, _, _| {})
    }

    /// Report progress. Updates with `total == 0` are dropped.
    #[inline]
    pub fn report(&self, current: usize, total: usize, message: &str) {
        if total > 0 {
            (self.callback)(current, total, message);
        }
    }

    /// A reporter for step `index` of `count` steps of this one.
    ///
    /// Reporting `current / total` on the returned value forwards
    /// `index + current / total` out of `count` here. Stages nest: a stage of
    /// a stage lands inside its parent's slot.
    ///
    /// ```
    /// # use grotto::algo::Progress;
    /// # use std::sync::{Arc, Mutex};
    /// let seen = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&seen);
    /// let progress = Progress::new(move |current, total, _| {
    ///     sink.lock().unwrap().push((current, total));
    /// });
    ///
    /// // Halfway through the second of four stages.
    /// progress.stage(1, 4).report(5, 10, "Smoothing");
    /// assert_eq!(*seen.lock().unwrap(), vec![(1500, 4000)]);
    /// ```
    pub fn stage(&self, index: usize, count: usize) -> Progress {
        let parent = Arc::clone(&self.callback);
        Progress::new(move |current, total, message| {
            if count == 0 {
                return;
            }
            let within = current.min(total) * STAGE_RESOLUTION / total;
            parent(
                index * STAGE_RESOLUTION + within,
                count * STAGE_RESOLUTION,
                message,
            );
        })
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::none()
    }
}

impl std::fmt::Debug for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Progress").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recorder() -> (Progress, Arc<Mutex<Vec<(usize, usize)>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let progress = Progress::new(move |current, total, _| {
            sink.lock().unwrap().push((current, total));
        });
        (progress, log)
    }

    #[test]
    fn test_stage_scales_into_slot() {
        let (progress, log) = recorder();
        let stage = progress.stage(3, 5);
        stage.report(1, 2, "stage");
        stage.report(2, 2, "stage");
        // Overshooting is clamped to the end of the slot.
        stage.report(9, 2, "stage");
        assert_eq!(
            *log.lock().unwrap(),
            vec![(3500, 5000), (4000, 5000), (4000, 5000)]
        );
    }

    #[test]
    fn test_nested_stages() {
        let (progress, log) = recorder();
        progress.stage(1, 2).stage(1, 2).report(0, 1, "inner");
        // Second half of the second half: 3/4 of the way.
        let (current, total) = log.lock().unwrap()[0];
        assert_eq!(current * 4, total * 3);
    }

    #[test]
    fn test_zero_totals_are_dropped() {
        let (progress, log) = recorder();
        progress.report(0, 0, "empty");
        progress.stage(0, 3).report(0, 0, "empty stage");
        progress.stage(0, 0).report(1, 1, "empty parent");
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_none_discards() {
        Progress::none().stage(0, 2).report(1, 2, "nothing");
        assert!(format!("{:?}", Progress::default()).starts_with("Progress"));
    }
}
