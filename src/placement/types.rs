//! Catalog records and the placement grid.

use std::sync::Arc;

use rand::Rng;

/// Number of shelves in the layout. Shelves are numbered `1..=NUM_SHELVES`.
pub const NUM_SHELVES: u8 = 7;

/// Number of columns per shelf. Columns are numbered `1..=NUM_COLUMNS`.
pub const NUM_COLUMNS: u8 = 7;

/// A catalog product.
///
/// Products are read once per optimization run and never mutated; placements
/// share them through [`Arc`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Product {
    /// Catalog identifier.
    pub id: u64,
    /// Display name. The first word is conventionally the product type.
    pub name: String,
    /// Unit weight. Carried for collaborators; no placement rule reads it.
    pub weight: i64,
    /// Demand as a percentage, typically in `0.0..=100.0`.
    pub demand_percent: f64,
}

impl Product {
    /// Creates a product record.
    pub fn new(id: u64, name: impl Into<String>, weight: i64, demand_percent: f64) -> Self {
        Self {
            id,
            name: name.into(),
            weight,
            demand_percent,
        }
    }
}

/// One persisted slot: which shelf and column a product occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotAssignment {
    pub product_id: u64,
    /// 1-based shelf number.
    pub shelf: u8,
    /// 1-based column number.
    pub column: u8,
}

/// A product sitting on a shelf at a given column.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedProduct {
    pub product: Arc<Product>,
    /// 1-based column number.
    pub column: u8,
}

/// A complete assignment of products to shelves and columns.
///
/// Always holds exactly [`NUM_SHELVES`] shelf lists. A placement built from
/// a catalog through [`Placement::random`] contains every catalog product
/// exactly once.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    shelves: Vec<Vec<PlacedProduct>>,
}

impl Default for Placement {
    fn default() -> Self {
        Self::new()
    }
}

impl Placement {
    /// Creates a placement with all shelves empty.
    pub fn new() -> Self {
        Self {
            shelves: vec![Vec::new(); NUM_SHELVES as usize],
        }
    }

    /// Places every product on a uniformly random shelf and column.
    ///
    /// For each product the shelf is drawn first, then the column.
    pub fn random<R: Rng>(products: &[Arc<Product>], rng: &mut R) -> Self {
        let mut placement = Self::new();
        for product in products {
            let shelf = rng.random_range(1..=NUM_SHELVES);
            let column = rng.random_range(1..=NUM_COLUMNS);
            placement.place(shelf, Arc::clone(product), column);
        }
        placement
    }

    /// Appends a product to the end of a shelf.
    ///
    /// # Panics
    ///
    /// Panics if `shelf` or `column` is outside the layout.
    pub fn place(&mut self, shelf: u8, product: Arc<Product>, column: u8) {
        assert!(
            (1..=NUM_SHELVES).contains(&shelf),
            "shelf {shelf} outside 1..={NUM_SHELVES}"
        );
        assert!(
            (1..=NUM_COLUMNS).contains(&column),
            "column {column} outside 1..={NUM_COLUMNS}"
        );
        self.shelves[usize::from(shelf - 1)].push(PlacedProduct { product, column });
    }

    /// Products on the given 1-based shelf, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `shelf` is outside the layout.
    pub fn shelf(&self, shelf: u8) -> &[PlacedProduct] {
        &self.shelves[usize::from(shelf - 1)]
    }

    /// Iterates shelves as `(shelf_number, products)`.
    pub fn shelves(&self) -> impl Iterator<Item = (u8, &[PlacedProduct])> {
        self.shelves
            .iter()
            .enumerate()
            .map(|(idx, shelf)| (idx as u8 + 1, shelf.as_slice()))
    }

    /// Mutable access to the shelf lists, for perturbing columns in place.
    pub(crate) fn shelves_mut(&mut self) -> impl Iterator<Item = &mut Vec<PlacedProduct>> {
        self.shelves.iter_mut()
    }

    /// Iterates every placed product as `(shelf_number, placed)`.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &PlacedProduct)> {
        self.shelves()
            .flat_map(|(shelf, list)| list.iter().map(move |p| (shelf, p)))
    }

    /// Total number of placed products.
    pub fn len(&self) -> usize {
        self.shelves.iter().map(Vec::len).sum()
    }

    /// Returns `true` if no product is placed.
    pub fn is_empty(&self) -> bool {
        self.shelves.iter().all(Vec::is_empty)
    }

    /// Flattens the placement into persisted slot records, shelf by shelf.
    pub fn assignments(&self) -> Vec<SlotAssignment> {
        self.iter()
            .map(|(shelf, placed)| SlotAssignment {
                product_id: placed.product.id,
                shelf,
                column: placed.column,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;
    use std::collections::HashMap;

    fn catalog(n: u64) -> Vec<Arc<Product>> {
        (1..=n)
            .map(|id| {
                let demand = (id * 7 % 100) as f64;
                Arc::new(Product::new(id, format!("ITEM {id}"), 100, demand))
            })
            .collect()
    }

    #[test]
    fn test_new_has_all_shelves_empty() {
        let placement = Placement::new();
        assert_eq!(placement.shelves().count(), NUM_SHELVES as usize);
        assert!(placement.is_empty());
        assert_eq!(placement.len(), 0);
    }

    #[test]
    fn test_place_and_read_back() {
        let products = catalog(2);
        let mut placement = Placement::new();
        placement.place(3, Arc::clone(&products[0]), 5);
        placement.place(3, Arc::clone(&products[1]), 1);

        let shelf = placement.shelf(3);
        assert_eq!(shelf.len(), 2);
        assert_eq!(shelf[0].product.id, 1);
        assert_eq!(shelf[0].column, 5);
        assert_eq!(shelf[1].product.id, 2);
        assert!(placement.shelf(1).is_empty());
    }

    #[test]
    #[should_panic(expected = "shelf 8")]
    fn test_place_rejects_shelf_out_of_range() {
        let products = catalog(1);
        Placement::new().place(8, Arc::clone(&products[0]), 1);
    }

    #[test]
    #[should_panic(expected = "column 0")]
    fn test_place_rejects_column_out_of_range() {
        let products = catalog(1);
        Placement::new().place(1, Arc::clone(&products[0]), 0);
    }

    #[test]
    fn test_assignments_match_layout() {
        let products = catalog(3);
        let mut placement = Placement::new();
        placement.place(7, Arc::clone(&products[2]), 7);
        placement.place(1, Arc::clone(&products[0]), 2);
        placement.place(1, Arc::clone(&products[1]), 4);

        let slots = placement.assignments();
        assert_eq!(
            slots,
            vec![
                SlotAssignment {
                    product_id: 1,
                    shelf: 1,
                    column: 2,
                },
                SlotAssignment {
                    product_id: 2,
                    shelf: 1,
                    column: 4,
                },
                SlotAssignment {
                    product_id: 3,
                    shelf: 7,
                    column: 7,
                },
            ]
        );
    }

    #[test]
    fn test_random_empty_catalog() {
        let mut rng = create_rng(1);
        let placement = Placement::random(&[], &mut rng);
        assert!(placement.is_empty());
    }

    proptest! {
        #[test]
        fn prop_random_covers_catalog_once(n in 0u64..120, seed in any::<u64>()) {
            let products = catalog(n);
            let mut rng = create_rng(seed);
            let placement = Placement::random(&products, &mut rng);

            let mut seen: HashMap<u64, usize> = HashMap::new();
            for slot in placement.assignments() {
                prop_assert!((1..=NUM_SHELVES).contains(&slot.shelf));
                prop_assert!((1..=NUM_COLUMNS).contains(&slot.column));
                *seen.entry(slot.product_id).or_default() += 1;
            }
            prop_assert_eq!(seen.len(), products.len());
            prop_assert!(seen.values().all(|&count| count == 1));
        }
    }
}
