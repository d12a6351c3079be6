/// Random number generator (xorshift32)
#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Inclusive on both ends.
#[inline]
fn rand_between(state: &mut u32, min: u32, max: u32) -> u32 {
    min + xorshift32(state) % (max - min + 1)
}

/// Half-transparent colour. Very bright red+green pairs get no blue and very
/// dark ones get full blue, so fills stay visible on a light canvas.
pub(super) fn random_fill(state: &mut u32) -> String {
    let r = rand_between(state, 0, 255);
    let g = rand_between(state, 0, 255);
    let b = match r + g {
        s if s > 400 => 0,
        s if s < 100 => 255,
        _ => rand_between(state, 0, 255),
    };
    format!("rgba({}, {}, {}, 0.5)", r, g, b)
}
