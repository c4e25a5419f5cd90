//! Rating capability shared by articles and whole publications.

use crate::deep_copy::DeepCopy;

/// Something that carries a numeric rating and can be deep-copied.
///
/// Statically dispatched: callers are generic over `T: Rated`.
pub trait Rated: DeepCopy {
    fn rating(&self) -> f64;
}

/// Mean rating of `items`, or `0.0` when there are none.
pub fn average_rating<'a, T, I>(items: I) -> f64
where
    T: Rated + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let (sum, count) = items
        .into_iter()
        .fold((0.0_f64, 0_u32), |(sum, count), item| (sum + item.rating(), count + 1));

    if count == 0 {
        0.0
    } else {
        sum / f64::from(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Score(f64);

    impl DeepCopy for Score {
        fn deep_copy(&self) -> Self {
            Score(self.0)
        }
    }

    impl Rated for Score {
        fn rating(&self) -> f64 {
            self.0
        }
    }

    #[test]
    fn average_of_nothing_is_zero() {
        let empty: Vec<Score> = Vec::new();
        assert_eq!(average_rating(&empty), 0.0);
    }

    #[test]
    fn average_of_two_scores() {
        let scores = vec![Score(4.5), Score(3.8)];
        assert!((average_rating(&scores) - 4.15).abs() < 1e-9);
    }

    #[test]
    fn deep_copy_keeps_rating() {
        let score = Score(2.5);
        assert_eq!(score.deep_copy().rating(), 2.5);
    }
}
