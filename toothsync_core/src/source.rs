//! Seam for tick capture sources.

/// A source of captured inter-tooth intervals, in timer ticks.
///
/// A hardware capture unit, a recorded trace, or a synthetic generator all
/// sit behind this trait; the detector itself only ever sees the interval
/// values.
pub trait TickSource {
    /// Next captured interval, or `None` at end of stream.
    fn next_interval(&mut self) -> Option<u32>;
}

impl<T: TickSource + ?Sized> TickSource for Box<T> {
    fn next_interval(&mut self) -> Option<u32> {
        (**self).next_interval()
    }
}

impl<T: TickSource + ?Sized> TickSource for &mut T {
    fn next_interval(&mut self) -> Option<u32> {
        (**self).next_interval()
    }
}
