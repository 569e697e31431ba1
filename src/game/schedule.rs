use std::time::{Duration, Instant};

/// Identifies one requested frame so that it can be cancelled
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct FrameHandle(u64);

/// Something that can be asked to call the game loop back on the next frame.
///
/// Once a handle has been cancelled, the frame it names must never be
/// delivered.
pub(crate) trait FrameScheduler {
    fn schedule_next_frame(&mut self) -> FrameHandle;
    fn cancel(&mut self, handle: FrameHandle);
}

/// A [`FrameScheduler`] driven by the wall clock: at most one frame is
/// pending at a time, due one frame period after it was requested.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct FrameClock {
    period: Duration,
    pending: Option<(FrameHandle, Instant)>,
    next_id: u64,
}

impl FrameClock {
    pub(crate) fn new(period: Duration) -> FrameClock {
        FrameClock {
            period,
            pending: None,
            next_id: 0,
        }
    }

    /// Return how long until the pending frame is due, or `None` if no frame
    /// is pending
    pub(crate) fn wait(&self) -> Option<Duration> {
        self.pending
            .map(|(_, when)| when.saturating_duration_since(Instant::now()))
    }

    /// Consume the pending frame.  Returns `false` if there was none.
    pub(crate) fn fire(&mut self) -> bool {
        self.pending.take().is_some()
    }

    #[cfg(test)]
    pub(crate) fn armed(&self) -> bool {
        self.pending.is_some()
    }
}

impl FrameScheduler for FrameClock {
    fn schedule_next_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.pending = Some((handle, Instant::now() + self.period));
        handle
    }

    fn cancel(&mut self, handle: FrameHandle) {
        if self.pending.is_some_and(|(h, _)| h == handle) {
            self.pending = None;
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// A [`FrameScheduler`] that only keeps track of what it was asked to do
    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    pub(crate) struct RecordingScheduler {
        pub(crate) pending: Option<FrameHandle>,
        pub(crate) scheduled: usize,
        pub(crate) cancelled: usize,
        next_id: u64,
    }

    impl RecordingScheduler {
        /// Deliver the pending frame, if any.  Returns whether there was one.
        pub(crate) fn fire(&mut self) -> bool {
            self.pending.take().is_some()
        }
    }

    impl FrameScheduler for RecordingScheduler {
        fn schedule_next_frame(&mut self) -> FrameHandle {
            let handle = FrameHandle(self.next_id);
            self.next_id += 1;
            self.scheduled += 1;
            self.pending = Some(handle);
            handle
        }

        fn cancel(&mut self, handle: FrameHandle) {
            self.cancelled += 1;
            if self.pending == Some(handle) {
                self.pending = None;
            }
        }
    }
}
