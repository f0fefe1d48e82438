use indexmap::IndexMap;
use itertools::Itertools;

use crate::beverage::Beverage;
use crate::size::CupSize;

/// Returned by [`normalize_description`] when there are no condiments to group.
pub const INVALID_DESCRIPTION: &str = "Invalid product description";

/// Groups repeated condiment names into counted entries.
///
/// The first comma-separated item is the product and is kept as-is (trimmed).
/// Every other item is counted, and distinct names are listed in the order
/// they first appear:
///
/// ```
/// use beverage_decorator::normalize_description;
///
/// assert_eq!(
///     normalize_description("Small House Blend, Milk, Soy, Soy"),
///     "Small House Blend, 1 Milk, 2 Soy",
/// );
/// ```
///
/// A description with no comma at all (a beverage with no condiments) yields
/// [`INVALID_DESCRIPTION`]. Empty items, such as the one after a trailing
/// comma, are counted like any other name.
pub fn normalize_description(description: &str) -> String {
    let mut items = description.split(',').map(str::trim);

    let product = items.next().unwrap_or_default();
    let condiments: Vec<&str> = items.collect();
    if condiments.is_empty() {
        tracing::debug!(description, "nothing to normalize");
        return INVALID_DESCRIPTION.to_string();
    }

    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for condiment in condiments {
        *counts.entry(condiment).or_insert(0) += 1;
    }

    format!(
        "{product}, {}",
        counts
            .iter()
            .map(|(name, count)| format!("{count} {name}"))
            .join(", ")
    )
}

/// Outermost wrapper that tidies the description of everything inside it.
///
/// Cost and size pass straight through.
#[derive(Debug)]
pub struct DescriptionNormalizer<B = Box<dyn Beverage>> {
    wrapped: B,
}

impl<B: Beverage> DescriptionNormalizer<B> {
    pub fn new(wrapped: B) -> Self {
        DescriptionNormalizer { wrapped }
    }
}

impl<B: Beverage> Beverage for DescriptionNormalizer<B> {
    fn size(&self) -> CupSize {
        self.wrapped.size()
    }

    fn set_size(&mut self, size: CupSize) {
        self.wrapped.set_size(size);
    }

    fn description(&self) -> String {
        normalize_description(&self.wrapped.description())
    }

    fn cost(&self) -> f64 {
        self.wrapped.cost()
    }
}
