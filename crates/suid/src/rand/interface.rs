/// A trait for sources of random bytes.
///
/// This abstraction allows you to plug in a real random source or a mocked
/// random source in tests. Implementations used in production must be
/// cryptographically secure; the bytes become the unguessable part of a SUID.
///
/// # Example
/// ```
/// use suid::RandSource;
///
/// struct FixedRand;
/// impl RandSource for FixedRand {
///     fn fill(&self, dest: &mut [u8]) {
///         dest.fill(0xab);
///     }
/// }
///
/// let mut buf = [0; 4];
/// FixedRand.fill(&mut buf);
/// assert_eq!(buf, [0xab; 4]);
/// ```
pub trait RandSource {
    /// Fills `dest` entirely with random bytes.
    fn fill(&self, dest: &mut [u8]);

    /// Returns `len` freshly drawn random bytes.
    fn bytes(&self, len: usize) -> Vec<u8> {
        let mut buf = vec![0; len];
        self.fill(&mut buf);
        buf
    }
}

impl<R: RandSource + ?Sized> RandSource for &R {
    fn fill(&self, dest: &mut [u8]) {
        (**self).fill(dest);
    }
}
