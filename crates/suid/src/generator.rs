#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    RandSource, ResolvedOptions, Result, SuidOptions, SystemClock, ThreadRandom, TimeSource,
};

/// A SUID generator bound to a time source and a random source.
///
/// The generator holds no state besides its sources: each call resolves its
/// own options, so a single instance can be shared freely across threads when
/// `T` and `R` allow it. The sources are only consulted for options left at
/// [`TimestampSource::Now`] or a random source that asks for fresh bytes.
///
/// ## Recommended When
/// - You want to inject a fixed clock or RNG (tests, replay)
/// - You generate many SUIDs and want to avoid re-stating the sources
///
/// For one-off generation with system defaults, see
/// [`generate_suid`](crate::generate_suid).
///
/// [`TimestampSource::Now`]: crate::TimestampSource::Now
#[derive(Clone, Copy, Debug, Default)]
pub struct SuidGenerator<T = SystemClock, R = ThreadRandom> {
    time: T,
    rng: R,
}

impl<T, R> SuidGenerator<T, R>
where
    T: TimeSource,
    R: RandSource,
{
    /// Creates a new [`SuidGenerator`] with the provided time source and RNG.
    ///
    /// # Example
    /// ```
    /// use suid::{SuidGenerator, SystemClock, ThreadRandom};
    ///
    /// let generator = SuidGenerator::new(SystemClock, ThreadRandom);
    /// let suid = generator.next_suid().unwrap();
    /// assert_eq!(suid.split('.').count(), 3);
    /// ```
    pub const fn new(time: T, rng: R) -> Self {
        Self { time, rng }
    }

    /// Generates a SUID with default options.
    ///
    /// # Errors
    ///
    /// Only fails if the time source reports a timestamp the encoder rejects
    /// (for example a clock set before 1970).
    pub fn next_suid(&self) -> Result<String> {
        self.generate(SuidOptions::default())
    }

    /// Generates a SUID from `options`, filling defaults from this generator's
    /// sources.
    ///
    /// # Errors
    ///
    /// See [`SuidOptions::resolve`].
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self, options: SuidOptions) -> Result<String> {
        Ok(self.resolve(options)?.encode())
    }

    /// Resolves `options` against this generator's sources without encoding.
    ///
    /// # Errors
    ///
    /// See [`SuidOptions::resolve`].
    pub fn resolve(&self, options: SuidOptions) -> Result<ResolvedOptions> {
        let resolved = options.resolve(&self.time, &self.rng);
        #[cfg(feature = "tracing")]
        let resolved =
            resolved.inspect_err(|e| tracing::debug!(error = %e, "rejected suid options"));
        resolved
    }

    pub const fn time_source(&self) -> &T {
        &self.time
    }

    pub const fn rand_source(&self) -> &R {
        &self.rng
    }
}
