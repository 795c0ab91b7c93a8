//! Level multiplier table
//!
//! Maps every half level from 1.0 to 40.0 to the combat multiplier the game
//! uses to scale base stats.

/// Lowest level
pub const MIN_LEVEL: f64 = 1.0;

/// Highest level
pub const MAX_LEVEL: f64 = 40.0;

/// Number of half-level steps between `MIN_LEVEL` and `MAX_LEVEL`, inclusive
pub const LEVEL_COUNT: usize = 79;

/// Combat multipliers indexed by `(level - 1.0) * 2`
pub const CP_MULTIPLIERS: [f64; LEVEL_COUNT] = [
    0.094,        // 1.0
    0.135137432,  // 1.5
    0.16639787,   // 2.0
    0.192650919,  // 2.5
    0.21573247,   // 3.0
    0.236572661,  // 3.5
    0.25572005,   // 4.0
    0.273530381,  // 4.5
    0.29024988,   // 5.0
    0.306057377,  // 5.5
    0.3210876,    // 6.0
    0.335445036,  // 6.5
    0.34921268,   // 7.0
    0.362457751,  // 7.5
    0.37523559,   // 8.0
    0.387592406,  // 8.5
    0.39956728,   // 9.0
    0.411193551,  // 9.5
    0.42250001,   // 10.0
    0.432926419,  // 10.5
    0.44310755,   // 11.0
    0.4530599578, // 11.5
    0.46279839,   // 12.0
    0.472336083,  // 12.5
    0.48168495,   // 13.0
    0.4908558,    // 13.5
    0.49985844,   // 14.0
    0.508701765,  // 14.5
    0.51739395,   // 15.0
    0.525942511,  // 15.5
    0.53435433,   // 16.0
    0.542635767,  // 16.5
    0.55079269,   // 17.0
    0.558830576,  // 17.5
    0.56675452,   // 18.0
    0.574569153,  // 18.5
    0.58227891,   // 19.0
    0.589887917,  // 19.5
    0.59740001,   // 20.0
    0.604818814,  // 20.5
    0.61215729,   // 21.0
    0.619399365,  // 21.5
    0.62656713,   // 22.0
    0.633644533,  // 22.5
    0.64065295,   // 23.0
    0.647576426,  // 23.5
    0.65443563,   // 24.0
    0.661214806,  // 24.5
    0.667934,     // 25.0
    0.674577537,  // 25.5
    0.68116492,   // 26.0
    0.687680648,  // 26.5
    0.69414365,   // 27.0
    0.700538673,  // 27.5
    0.70688421,   // 28.0
    0.713164996,  // 28.5
    0.71939909,   // 29.0
    0.725571552,  // 29.5
    0.7317,       // 30.0
    0.734741009,  // 30.5
    0.73776948,   // 31.0
    0.740785574,  // 31.5
    0.74378943,   // 32.0
    0.746781211,  // 32.5
    0.74976104,   // 33.0
    0.752729087,  // 33.5
    0.75568551,   // 34.0
    0.758630378,  // 34.5
    0.76156384,   // 35.0
    0.764486065,  // 35.5
    0.76739717,   // 36.0
    0.770297266,  // 36.5
    0.7731865,    // 37.0
    0.776064962,  // 37.5
    0.77893275,   // 38.0
    0.781790055,  // 38.5
    0.78463697,   // 39.0
    0.787473578,  // 39.5
    0.79030001,   // 40.0
];

/// Level for a table index
pub fn level_at(index: usize) -> f64 {
    MIN_LEVEL + index as f64 * 0.5
}

/// Multiplier for a level, `None` unless it is a half level within range
pub fn multiplier(level: f64) -> Option<f64> {
    let steps = (level - MIN_LEVEL) * 2.0;
    if steps < 0.0 || level > MAX_LEVEL || steps.fract() != 0.0 {
        return None;
    }
    CP_MULTIPLIERS.get(steps as usize).copied()
}

/// Iterate over `(level, multiplier)` pairs in ascending level order
pub fn levels() -> impl Iterator<Item = (f64, f64)> {
    CP_MULTIPLIERS
        .iter()
        .enumerate()
        .map(|(i, &m)| (level_at(i), m))
}

/// Multiplier at the top level
pub fn max_multiplier() -> f64 {
    CP_MULTIPLIERS[LEVEL_COUNT - 1]
}
