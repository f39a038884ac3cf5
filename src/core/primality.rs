/// Integer square root: the largest `r` with `r * r <= n`.
///
/// Newton iteration starting from a power of two that is never below the
/// root, so the sequence decreases monotonically onto the answer.
pub fn isqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }

    let bits = u64::BITS - n.leading_zeros();
    let mut x = 1u64 << bits.div_ceil(2);
    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}

/// Trial division by odd candidates up to `isqrt(n)`.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }

    let n = n as u64;
    let limit = isqrt(n);
    let mut i = 3;
    while i <= limit {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// All primes `p` with `2 <= p <= n`, ascending.
///
/// Each candidate is tested on its own with [`is_prime`].
pub fn primes_up_to(n: i64) -> Vec<i64> {
    (2..=n).filter(|&i| is_prime(i)).collect()
}
