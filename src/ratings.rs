use serde::{Deserialize, Serialize};

/// Lowest rating `filter_by_rating` keeps.
pub const MIN_RATING: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub title: String,
    pub rating: f64,
}

impl Book {
    pub fn new(title: impl Into<String>, rating: f64) -> Self {
        Self {
            title: title.into(),
            rating,
        }
    }
}

/// Books rated at least `MIN_RATING`, in their original order.
pub fn filter_by_rating(items: &[Book]) -> Vec<Book> {
    filter_by_min_rating(items, MIN_RATING)
}

pub fn filter_by_min_rating(items: &[Book], min: f64) -> Vec<Book> {
    items
        .iter()
        .filter(|book| book.rating >= min)
        .cloned()
        .collect()
}

pub fn sample_books() -> Vec<Book> {
    vec![
        Book::new("Book A", 4.5),
        Book::new("Book B", 3.2),
        Book::new("Book C", 5.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sample_filter() {
        let kept = filter_by_rating(&sample_books());
        assert_eq!(kept, vec![Book::new("Book A", 4.5), Book::new("Book C", 5.0)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(filter_by_rating(&[]).is_empty());
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let books = vec![Book::new("Edge", 4.0), Book::new("Below", 3.999)];
        assert_eq!(filter_by_rating(&books), vec![Book::new("Edge", 4.0)]);
    }

    #[test]
    fn test_custom_threshold() {
        let kept = filter_by_min_rating(&sample_books(), 3.0);
        assert_eq!(kept.len(), 3);
        let kept = filter_by_min_rating(&sample_books(), 4.8);
        assert_eq!(kept, vec![Book::new("Book C", 5.0)]);
    }

    fn book_strategy() -> impl Strategy<Value = Book> {
        ("[A-Z][a-z]{0,8}", 0.0f64..=5.0).prop_map(|(title, rating)| Book::new(title, rating))
    }

    proptest! {
        #[test]
        fn prop_filter_partitions_by_threshold(books in prop::collection::vec(book_strategy(), 0..32)) {
            let kept = filter_by_rating(&books);
            prop_assert!(kept.iter().all(|book| book.rating >= MIN_RATING));

            // Walk the input by index, matching `kept` as an ordered subsequence;
            // every unmatched position is a dropped book.
            let mut next_kept = 0;
            let mut dropped = Vec::new();
            for (index, book) in books.iter().enumerate() {
                if kept.get(next_kept) == Some(book) {
                    next_kept += 1;
                } else {
                    dropped.push(index);
                }
            }
            prop_assert_eq!(next_kept, kept.len());
            prop_assert!(dropped.iter().all(|&index| books[index].rating < MIN_RATING));
        }
    }
}
