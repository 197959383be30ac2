/// Bit geometry and epoch for id generation and field extraction.
///
/// Ids are packed as `[timestamp:51][node:node_bits][seq:seq_bits]`, most
/// significant bits first, with the sign bit left clear. The timestamp
/// field counts microseconds elapsed since `epoch_micros`.
///
/// A `Layout` is an immutable value: construct it once at startup and pass
/// it to [`Generator`] construction and to the [`Id`] field accessors. An
/// id's meaning is only well-defined relative to the layout it was
/// generated under; extracting fields under a different layout silently
/// reinterprets the bits.
///
/// [`Generator`]: crate::Generator
/// [`Id`]: crate::Id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Layout {
    epoch_micros: i64,
    node_bits: u8,
    seq_bits: u8,
}

impl Default for Layout {
    /// The shipped layout: epoch 2025-12-16 UTC, 6 node bits (64 nodes),
    /// 6 sequence bits (64 ids per node per microsecond).
    fn default() -> Self {
        Self::new(1_765_947_799_213_000, 6, 6)
    }
}

impl Layout {
    /// Creates a layout with the given epoch (microseconds since the Unix
    /// epoch) and field widths.
    ///
    /// # Panics
    ///
    /// Panics if `node_bits + seq_bits` exceeds 12, which would narrow the
    /// timestamp field below 51 bits or push it into the sign bit.
    pub const fn new(epoch_micros: i64, node_bits: u8, seq_bits: u8) -> Self {
        assert!(
            node_bits + seq_bits <= 12,
            "node_bits + seq_bits must leave 51 bits for the timestamp"
        );
        Self {
            epoch_micros,
            node_bits,
            seq_bits,
        }
    }

    /// Microseconds since the Unix epoch at which the timestamp field is 0.
    pub const fn epoch_micros(&self) -> i64 {
        self.epoch_micros
    }

    /// Width of the node field in bits.
    pub const fn node_bits(&self) -> u8 {
        self.node_bits
    }

    /// Width of the sequence field in bits.
    pub const fn seq_bits(&self) -> u8 {
        self.seq_bits
    }

    /// Left shift that positions the timestamp field.
    pub const fn time_shift(&self) -> u32 {
        (self.node_bits + self.seq_bits) as u32
    }

    /// Left shift that positions the node field.
    pub const fn node_shift(&self) -> u32 {
        self.seq_bits as u32
    }

    /// Mask covering the node field after shifting.
    pub const fn node_mask(&self) -> i64 {
        (1 << self.node_bits) - 1
    }

    /// Mask covering the sequence field.
    pub const fn seq_mask(&self) -> i64 {
        (1 << self.seq_bits) - 1
    }

    /// Largest valid node id under this layout.
    pub const fn max_node(&self) -> i64 {
        self.node_mask()
    }

    /// Largest sequence value before a microsecond bucket is exhausted.
    pub const fn max_sequence(&self) -> i64 {
        self.seq_mask()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_geometry() {
        let layout = Layout::default();
        assert_eq!(layout.epoch_micros(), 1_765_947_799_213_000);
        assert_eq!(layout.node_bits(), 6);
        assert_eq!(layout.seq_bits(), 6);
        assert_eq!(layout.time_shift(), 12);
        assert_eq!(layout.node_shift(), 6);
        assert_eq!(layout.node_mask(), 63);
        assert_eq!(layout.seq_mask(), 63);
        assert_eq!(layout.max_node(), 63);
        assert_eq!(layout.max_sequence(), 63);
    }

    #[test]
    fn custom_widths() {
        let layout = Layout::new(0, 4, 8);
        assert_eq!(layout.time_shift(), 12);
        assert_eq!(layout.node_shift(), 8);
        assert_eq!(layout.max_node(), 15);
        assert_eq!(layout.max_sequence(), 255);
    }

    #[test]
    #[should_panic(expected = "51 bits")]
    fn rejects_oversized_fields() {
        let _ = Layout::new(0, 8, 8);
    }
}
