use std::fmt;

use crate::beverage::{Beverage, ConcreteBeverage};
use crate::condiment::CondimentKind;
use crate::normalizer::DescriptionNormalizer;
use crate::size::CupSize;

/// Wraps `base` in each condiment, in order. The first condiment sits
/// closest to the coffee.
pub fn compose<I>(base: ConcreteBeverage, condiments: I) -> Box<dyn Beverage>
where
    I: IntoIterator<Item = CondimentKind>,
{
    condiments
        .into_iter()
        .fold(Box::new(base) as Box<dyn Beverage>, |chain, kind| -> Box<dyn Beverage> {
            Box::new(kind.wrap(chain))
        })
}

/// Consuming builder that hides the wrapping order from callers.
#[derive(Debug, Clone)]
#[must_use = "an order does nothing until `build` is called"]
pub struct OrderBuilder {
    base: ConcreteBeverage,
    condiments: Vec<CondimentKind>,
    size: Option<CupSize>,
    normalized: bool,
}

impl OrderBuilder {
    pub fn new(base: ConcreteBeverage) -> Self {
        OrderBuilder {
            base,
            condiments: Vec::new(),
            size: None,
            normalized: false,
        }
    }

    pub fn with(mut self, condiment: CondimentKind) -> Self {
        self.condiments.push(condiment);
        self
    }

    pub fn with_all(mut self, condiments: impl IntoIterator<Item = CondimentKind>) -> Self {
        self.condiments.extend(condiments);
        self
    }

    pub fn size(mut self, size: CupSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn normalized(mut self) -> Self {
        self.normalized = true;
        self
    }

    pub fn build(self) -> Box<dyn Beverage> {
        tracing::debug!(
            base = self.base.name(),
            condiments = self.condiments.len(),
            normalized = self.normalized,
            "building order"
        );

        let chain = compose(self.base, self.condiments);
        let mut order: Box<dyn Beverage> = if self.normalized {
            Box::new(DescriptionNormalizer::new(chain))
        } else {
            chain
        };
        // Size goes on the outermost layer and reaches the coffee from there.
        if let Some(size) = self.size {
            order.set_size(size);
        }
        order
    }
}

/// One line of the receipt: `"<description>: $ <cost>"`.
pub struct PriceTag<'a, B: ?Sized>(&'a B);

impl<'a, B: Beverage + ?Sized> PriceTag<'a, B> {
    pub fn new(beverage: &'a B) -> Self {
        PriceTag(beverage)
    }
}

impl<B: Beverage + ?Sized> fmt::Display for PriceTag<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: $ {}", self.0.description(), self.0.cost())
    }
}

impl<B: Beverage + ?Sized> fmt::Debug for PriceTag<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PriceTag").field(&self.0).finish()
    }
}
