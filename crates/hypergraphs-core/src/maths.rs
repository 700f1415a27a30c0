//! Small combinatorial helpers

/// The n-th Fibonacci number with F(0)=0, F(1)=F(2)=1; `None` on overflow
pub fn fibonacci(n: u64) -> Option<u64> {
    if n == 0 {
        return Some(0);
    }
    let (mut a, mut b) = (0u64, 1u64);
    for _ in 1..n {
        let next = a.checked_add(b)?;
        a = b;
        b = next;
    }
    Some(b)
}

/// Binomial coefficient C(n, r); `None` on overflow
pub fn binomial(n: u64, r: u64) -> Option<u64> {
    if r > n {
        return Some(0);
    }
    let r = r.min(n - r);
    let mut result: u64 = 1;
    for i in 0..r {
        // result * (n - i) is always divisible by (i + 1)
        result = result.checked_mul(n - i)? / (i + 1);
    }
    Some(result)
}

/// Number of bits in which two states differ
pub fn hamming_distance(a: usize, b: usize) -> u32 {
    (a ^ b).count_ones()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fibonacci() {
        let first: Vec<u64> = (0..10).map(|n| fibonacci(n).unwrap()).collect();
        assert_eq!(first, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
        assert_eq!(fibonacci(93), Some(12_200_160_415_121_876_738));
        assert_eq!(fibonacci(94), None);
    }

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(5, 2), Some(10));
        assert_eq!(binomial(10, 0), Some(1));
        assert_eq!(binomial(10, 10), Some(1));
        assert_eq!(binomial(3, 4), Some(0));
        assert_eq!(binomial(62, 31), Some(465_428_353_255_261_088));
    }

    #[test]
    fn test_hamming_distance() {
        assert_eq!(hamming_distance(0b1010, 0b0101), 4);
        assert_eq!(hamming_distance(7, 7), 0);
        assert_eq!(hamming_distance(0, 0b1001), 2);
    }
}
