use crate::{Error, Id, Layout, Result, SystemClock, TimeSource};
use portable_atomic::{AtomicU64, Ordering};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// A lock-free id generator for one node partition.
///
/// The entire mutable state is a single atomic word holding
/// `(timestamp << seq_bits) | sequence`, and every mutation goes through
/// one compare-and-swap. A `Generator` can therefore be shared freely
/// across threads: generation never takes a mutex and never suspends.
///
/// Uniqueness holds per node partition. Two generators that share a node
/// id can collide if they generate in the same microsecond with the same
/// sequence; assigning distinct node ids is the caller's responsibility.
pub struct Generator<C = SystemClock> {
    node: i64,
    state: AtomicU64,
    layout: Layout,
    clock: C,
}

impl Generator<SystemClock> {
    /// Creates a generator for `node` under `layout`, reading the system
    /// wall clock.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeOutOfRange`] if `node` is not within
    /// `[0, layout.max_node()]`. This is a caller bug, but it surfaces as
    /// an error rather than a panic so misconfiguration is reportable.
    pub fn new(layout: Layout, node: i64) -> Result<Self> {
        Self::with_clock(layout, node, SystemClock)
    }
}

impl<C: TimeSource> Generator<C> {
    /// Creates a generator with a custom [`TimeSource`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeOutOfRange`] if `node` is not within
    /// `[0, layout.max_node()]`.
    pub fn with_clock(layout: Layout, node: i64, clock: C) -> Result<Self> {
        let max = layout.max_node();
        if node < 0 || node > max {
            return Err(Error::NodeOutOfRange { node, max });
        }
        Ok(Self {
            node,
            state: AtomicU64::new(0),
            layout,
            clock,
        })
    }

    /// The node id embedded in every generated id.
    pub const fn node(&self) -> i64 {
        self.node
    }

    /// The layout this generator packs ids under.
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Returns the next id, spinning until one is available.
    ///
    /// Within one generator, the `(timestamp, sequence)` pair of returned
    /// ids is strictly increasing, so ids never repeat and timestamps never
    /// decrease.
    ///
    /// This never fails, but it only makes progress while the clock does:
    /// if the wall clock is set backward by more than the sequence space
    /// can absorb, or callers sustain more than `2^seq_bits` ids per
    /// microsecond, the spin lasts until real time re-passes the last
    /// recorded timestamp. That is an operational hazard to monitor, not a
    /// signaled error.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate(&self) -> Id {
        loop {
            match self.try_generate() {
                Some(id) => return id,
                None => core::hint::spin_loop(),
            }
        }
    }

    /// Runs one pass of the generation algorithm.
    ///
    /// Returns `None` when the sequence for the current microsecond is
    /// exhausted (the clock has not advanced past the last recorded
    /// timestamp) or when another thread won the compare-and-swap race.
    /// Callers that cannot spin indefinitely can retry on their own terms.
    pub fn try_generate(&self) -> Option<Id> {
        let layout = &self.layout;
        let now = self.clock.current_micros() - layout.epoch_micros();

        let current = self.state.load(Ordering::Relaxed);
        let last_ts = (current >> layout.seq_bits()) as i64;
        let last_seq = (current as i64) & layout.seq_mask();

        let (ts, seq) = if now > last_ts {
            // A new microsecond bucket.
            (now, 0)
        } else {
            // Same microsecond, or the clock went backward: stay on the
            // last recorded timestamp and claim the next sequence slot.
            let seq = last_seq + 1;
            if seq > layout.max_sequence() {
                return None;
            }
            (last_ts, seq)
        };

        let next = ((ts as u64) << layout.seq_bits()) | seq as u64;
        self.state
            .compare_exchange(current, next, Ordering::Relaxed, Ordering::Relaxed)
            .ok()
            .map(|_| {
                Id::from_raw(
                    (ts << layout.time_shift()) | (self.node << layout.node_shift()) | seq,
                )
            })
    }
}
