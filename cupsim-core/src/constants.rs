/// Number of ball/cup pairs created for the first round when the caller
/// does not configure one. Matches the classic statement of the problem:
/// 10,000 balls and 10,000 cups.
pub const DEFAULT_BALL_COUNT: usize = 10_000;

/// Upper end of the diameter draw when not configured.
///
/// Diameters are sampled uniformly from the closed range
/// [`MIN_DIAMETER`, max] with independent draws for balls and cups. The
/// range is deliberately coarse: with only ten distinct sizes, leftovers
/// collide often and the pool converges toward the impossibility state in
/// a reasonable number of rounds.
pub const DEFAULT_MAX_DIAMETER: u32 = 10;

/// Smallest possible diameter. The draw range is closed on both ends.
pub const MIN_DIAMETER: u32 = 1;
