use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// The highest-priced product, or `None` for an empty slice.
///
/// A later product only replaces the current maximum when strictly more
/// expensive, so ties go to the first one seen.
pub fn most_expensive(products: &[Product]) -> Option<&Product> {
    products
        .iter()
        .reduce(|max, current| if current.price > max.price { current } else { max })
}

pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("Pen", 100.0),
        Product::new("Notebook", 25.0),
        Product::new("Bag", 50.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sample_max() {
        let products = sample_products();
        assert_eq!(most_expensive(&products), Some(&Product::new("Pen", 100.0)));
    }

    #[test]
    fn test_empty_is_none() {
        assert_eq!(most_expensive(&[]), None);
    }

    #[test]
    fn test_tie_keeps_first() {
        let products = vec![
            Product::new("Cheap", 1.0),
            Product::new("First", 9.0),
            Product::new("Second", 9.0),
        ];
        assert_eq!(most_expensive(&products).map(|p| p.name.as_str()), Some("First"));
    }

    #[test]
    fn test_single_item() {
        let products = vec![Product::new("Only", 0.0)];
        assert_eq!(most_expensive(&products), products.first());
    }

    proptest! {
        #[test]
        fn prop_max_is_first_maximal(prices in prop::collection::vec(0u32..50, 1..24)) {
            let products: Vec<Product> = prices
                .iter()
                .enumerate()
                .map(|(i, price)| Product::new(format!("item-{i}"), f64::from(*price)))
                .collect();

            let max = most_expensive(&products).expect("non-empty input");
            prop_assert!(products.iter().all(|p| p.price <= max.price));

            let first_index = products.iter().position(|p| p.price == max.price).unwrap();
            prop_assert_eq!(&max.name, &products[first_index].name);
        }
    }
}
