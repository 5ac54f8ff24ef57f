use crate::ring::Ring;

pub fn histogram(buf: &[u8]) -> [u32; 256] {
    let mut res = [0; 256];
    for &byte in buf {
        res[usize::from(byte)] += 1;
    }
    res
}

/// Size in bits of `buf` under a static order-0 model of the whole buffer
pub fn order0_entropy_bits(buf: &[u8]) -> f64 {
    let total = buf.len() as f64;
    histogram(buf)
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let count = f64::from(count);
            count * (total / count).log2()
        })
        .sum()
}

/// Sums the costs of logical positions `[pos, pos + len)` under `mask`
pub fn range_cost(cost: &[f32], pos: usize, len: usize, mask: usize) -> f64 {
    let ring = Ring::new(cost, pos, mask);
    (0..len).map(|i| f64::from(ring.get(i))).sum()
}

#[cfg(test)]
mod tests {
    use super::{histogram, order0_entropy_bits, range_cost};

    #[test]
    fn counts_bytes() {
        let res = histogram(b"hello");
        assert_eq!(res[usize::from(b'l')], 2);
        assert_eq!(res.iter().sum::<u32>(), 5);
    }

    #[test]
    fn static_entropy() {
        assert_eq!(order0_entropy_bits(b""), 0.0);
        assert_eq!(order0_entropy_bits(b"aaaa"), 0.0);
        // one bit per byte for two equiprobable symbols
        assert_eq!(order0_entropy_bits(b"abab"), 4.0);
        assert_eq!(order0_entropy_bits(&(0..=255).collect::<Vec<u8>>()), 2048.0);
    }

    #[test]
    fn sums_wrapped_range() {
        let cost = [1.0, 2.0, 4.0, 8.0];
        assert_eq!(range_cost(&cost, 3, 2, 3), 9.0);
        assert_eq!(range_cost(&cost, 1, 0, 3), 0.0);
        assert_eq!(range_cost(&cost, 0, 4, usize::MAX), 15.0);
    }
}
