//! Per-game item pool generation.
//!
//! The catalog is a numbered list `Item 1` .. `Item N`. Each game draws a
//! fixed-size sample of distinct entries and rolls a fresh integer weight and
//! value for each. The pool comes back in catalog-number order.

use crate::core::{ConfigError, GameConfig, GameRng};

use super::item::Item;

/// Display name of catalog entry `number` (1-based).
#[must_use]
pub fn catalog_name(number: usize) -> String {
    format!("Item {}", number)
}

/// Draw a game's item pool.
///
/// Fails when the catalog is smaller than the requested sample.
pub fn draw_pool(config: &GameConfig, rng: &mut GameRng) -> Result<Vec<Item>, ConfigError> {
    let mut numbers: Vec<usize> = rng
        .sample_indices(config.catalog_size, config.sample_size)
        .ok_or(ConfigError::CatalogTooSmall {
            catalog: config.catalog_size,
            sample: config.sample_size,
        })?
        .into_iter()
        .map(|index| index + 1)
        .collect();
    numbers.sort_unstable();

    let items = numbers
        .into_iter()
        .map(|number| {
            let weight = rng.gen_range_inclusive(config.weights());
            let value = rng.gen_range_inclusive(config.values());
            Item::new(catalog_name(number), weight, f64::from(value))
        })
        .collect();

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number_of(item: &Item) -> usize {
        item.name().trim_start_matches("Item ").parse().unwrap()
    }

    #[test]
    fn test_default_pool() {
        let config = GameConfig::default();
        let mut rng = GameRng::new(42);

        let pool = draw_pool(&config, &mut rng).unwrap();
        assert_eq!(pool.len(), 25);

        let numbers: Vec<_> = pool.iter().map(number_of).collect();
        assert!(numbers.windows(2).all(|w| w[0] < w[1]), "sorted and distinct");
        assert!(numbers.iter().all(|&n| (1..=50).contains(&n)));

        for item in &pool {
            assert!((1..=10).contains(&item.weight()));
            assert!((5.0..=25.0).contains(&item.value()));
            assert_eq!(item.weight(), item.original_weight());
        }
    }

    #[test]
    fn test_pool_is_deterministic() {
        let config = GameConfig::default();
        let a = draw_pool(&config, &mut GameRng::new(5)).unwrap();
        let b = draw_pool(&config, &mut GameRng::new(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_catalog_sample() {
        let config = GameConfig::default().with_catalog(6, 6);
        let pool = draw_pool(&config, &mut GameRng::new(1)).unwrap();
        let names: Vec<_> = pool.iter().map(|i| i.name().to_string()).collect();
        assert_eq!(names, (1..=6).map(catalog_name).collect::<Vec<_>>());
    }

    #[test]
    fn test_catalog_too_small() {
        let config = GameConfig::default().with_catalog(3, 4);
        assert_eq!(
            draw_pool(&config, &mut GameRng::new(1)),
            Err(ConfigError::CatalogTooSmall { catalog: 3, sample: 4 })
        );
    }
}
