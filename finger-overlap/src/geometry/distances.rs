//! Pairwise fingertip distances

use crate::hand::FINGERTIPS;

use super::NormalizedLandmarkSet;

/// Number of unordered fingertip pairs (5 choose 2)
pub const TIP_PAIR_COUNT: usize = 10;

/// Fingertip pairs in feature order: ascending first index, then second.
/// Consumers index the feature vector by this order.
pub const TIP_PAIRS: [(usize, usize); TIP_PAIR_COUNT] = tip_pairs();

const fn tip_pairs() -> [(usize, usize); TIP_PAIR_COUNT] {
    let mut pairs = [(0, 0); TIP_PAIR_COUNT];
    let mut k = 0;
    let mut i = 0;
    while i < FINGERTIPS.len() {
        let mut j = i + 1;
        while j < FINGERTIPS.len() {
            pairs[k] = (FINGERTIPS[i], FINGERTIPS[j]);
            k += 1;
            j += 1;
        }
        i += 1;
    }
    pairs
}

/// Euclidean distance for every fingertip pair, in `TIP_PAIRS` order
pub fn fingertip_distances(points: &NormalizedLandmarkSet) -> [f64; TIP_PAIR_COUNT] {
    TIP_PAIRS.map(|(a, b)| points[a].distance(points[b]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_order() {
        assert_eq!(
            TIP_PAIRS,
            [
                (4, 8), (4, 12), (4, 16), (4, 20),
                (8, 12), (8, 16), (8, 20),
                (12, 16), (12, 20),
                (16, 20),
            ]
        );
    }
}
