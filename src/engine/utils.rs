// n! saturating at u128::MAX. 16! squared still fits comfortably
pub fn factorial(n: u32) -> u128 {
    (1..=n as u128).fold(1u128, |acc, i| acc.saturating_mul(i))
}

// upper bound on the number of (cell, piece) assignment orders left
// when `empty` cells remain
pub fn tree_complexity(empty: u32) -> u128 {
    let f = factorial(empty);
    f.saturating_mul(f)
}
