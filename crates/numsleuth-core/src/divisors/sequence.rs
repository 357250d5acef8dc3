//! Descending divisor enumeration.
//!
//! Divisors come in pairs `(i, n / i)`. Walking `i` down from `isqrt(n)`
//! yields the small half in descending order and the large half in
//! ascending order, so the large half only needs a reverse before the two
//! are concatenated. No heap, no sort.

/// All divisors of `n`, strictly descending, each exactly once.
///
/// `divisors(1) == [1]`. `n = 0` has no meaningful divisor set and yields an
/// empty vec.
pub fn divisors(n: u64) -> Vec<u64> {
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![1];
    }

    let root = n.isqrt();
    // Descending: root, ..., 2.
    let mut small: Vec<u64> = Vec::new();
    // Ascending cofactors: n / root, ..., n / 2.
    let mut large: Vec<u64> = Vec::new();

    for i in (2..=root).rev() {
        if n % i == 0 {
            let cofactor = n / i;
            // Perfect squares: (5, 5) for 25 must not be emitted twice.
            if cofactor != i {
                large.push(cofactor);
            }
            small.push(i);
        }
    }

    let mut out = Vec::with_capacity(large.len() + small.len() + 2);
    out.push(n);
    out.extend(large.into_iter().rev());
    out.extend(small);
    out.push(1);
    out
}
