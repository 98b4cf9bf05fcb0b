/// Euclidean distance between `(x1, y1)` and `(x2, y2)`.
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (x2 - x1).hypot(y2 - y1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_pythagorean_triple() {
        assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
    }

    #[test]
    fn test_distance_same_point_is_zero() {
        assert_eq!(distance(12.5, -7.0, 12.5, -7.0), 0.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_distance_is_symmetric(
                x1 in -1000.0f64..1000.0,
                y1 in -1000.0f64..1000.0,
                x2 in -1000.0f64..1000.0,
                y2 in -1000.0f64..1000.0,
            ) {
                prop_assert_eq!(distance(x1, y1, x2, y2), distance(x2, y2, x1, y1));
                prop_assert!(distance(x1, y1, x2, y2) >= 0.0);
            }
        }
    }
}
