/// Fixed size bands used to bucket tile files for the histogram.
///
/// The nine bands are contiguous, half-open byte ranges that partition
/// `[0, u64::MAX]`. A size exactly on a boundary belongs to the upper band.
use serde::Serialize;

/// Number of size bands.
pub const BAND_COUNT: usize = 9;

/// Lower bounds of bands 2..=9. Band 1 starts at zero.
const UPPER_BOUNDS: [u64; BAND_COUNT - 1] = [
    1_024,
    16_384,
    32_768,
    65_536,
    131_072,
    262_144,
    524_288,
    1_048_576,
];

/// Display labels, indexed by band position. Ordered table, not a map, so
/// the report always prints bands in ascending order.
const LABELS: [&str; BAND_COUNT] = [
    "[       0KB - 1KB ]",
    "[      1KB - 16KB ]",
    "[     16KB - 32KB ]",
    "[     32KB - 64KB ]",
    "[    64KB - 128KB ]",
    "[   128KB - 256KB ]",
    "[   256KB - 512KB ]",
    "[     512KB - 1MB ]",
    "[ larger than 1MB ]",
];

/// One of the nine size bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SizeBand {
    UnderOneKb,
    OneToSixteenKb,
    SixteenToThirtyTwoKb,
    ThirtyTwoToSixtyFourKb,
    SixtyFourTo128Kb,
    From128To256Kb,
    From256To512Kb,
    From512KbTo1Mb,
    OverOneMb,
}

impl SizeBand {
    /// All bands in ascending order.
    pub const ALL: [SizeBand; BAND_COUNT] = [
        Self::UnderOneKb,
        Self::OneToSixteenKb,
        Self::SixteenToThirtyTwoKb,
        Self::ThirtyTwoToSixtyFourKb,
        Self::SixtyFourTo128Kb,
        Self::From128To256Kb,
        Self::From256To512Kb,
        Self::From512KbTo1Mb,
        Self::OverOneMb,
    ];

    /// Zero-based position, usable as an array index.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// One-based band number (1..=9).
    #[inline]
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Fixed-width label for the text report.
    pub fn label(self) -> &'static str {
        LABELS[self.index()]
    }

    /// Inclusive lower bound in bytes.
    pub fn lower(self) -> u64 {
        match self.index() {
            0 => 0,
            i => UPPER_BOUNDS[i - 1],
        }
    }

    /// Exclusive upper bound in bytes. `None` for the open-ended last band.
    pub fn upper(self) -> Option<u64> {
        UPPER_BOUNDS.get(self.index()).copied()
    }

    /// Returns true if `size` falls inside this band.
    pub fn contains(self, size: u64) -> bool {
        size >= self.lower() && self.upper().is_none_or(|upper| size < upper)
    }
}

/// Map a byte length to its size band. Total over all `u64` values.
pub fn classify(size: u64) -> SizeBand {
    let idx = UPPER_BOUNDS.partition_point(|&bound| bound <= size);
    SizeBand::ALL[idx]
}
