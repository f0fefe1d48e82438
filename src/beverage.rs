use std::fmt;

use crate::size::CupSize;

/// Anything that can be served: a plain coffee or a coffee wrapped in extras.
///
/// Wrappers forward [`size`](Beverage::size) and [`set_size`](Beverage::set_size)
/// to the beverage they own, so a whole chain shares one cup size no matter
/// which layer it is set through.
///
/// `cost()` is never negative.
pub trait Beverage: fmt::Debug {
    fn size(&self) -> CupSize;
    fn set_size(&mut self, size: CupSize);
    fn description(&self) -> String;
    fn cost(&self) -> f64;
}

// Lets `Box<dyn Beverage>` be wrapped exactly like a concrete type.
impl<B: Beverage + ?Sized> Beverage for Box<B> {
    fn size(&self) -> CupSize {
        (**self).size()
    }

    fn set_size(&mut self, size: CupSize) {
        (**self).set_size(size);
    }

    fn description(&self) -> String {
        (**self).description()
    }

    fn cost(&self) -> f64 {
        (**self).cost()
    }
}

/// A leaf beverage with a fixed name and a price that ignores the cup size.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcreteBeverage {
    name: String,
    price: f64,
    size: CupSize,
}

impl ConcreteBeverage {
    pub const HOUSE_BLEND: &'static str = "House Blend";
    pub const DARK_ROAST: &'static str = "Dark Roast";

    // Prices are checked by the menu loader; built-ins are known good.
    pub(crate) fn new(name: impl Into<String>, price: f64) -> Self {
        ConcreteBeverage {
            name: name.into(),
            price,
            size: CupSize::default(),
        }
    }

    pub fn house_blend() -> Self {
        Self::new(Self::HOUSE_BLEND, 3.0)
    }

    pub fn dark_roast() -> Self {
        Self::new(Self::DARK_ROAST, 2.0)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn with_size(mut self, size: CupSize) -> Self {
        self.size = size;
        self
    }
}

impl Beverage for ConcreteBeverage {
    fn size(&self) -> CupSize {
        self.size
    }

    fn set_size(&mut self, size: CupSize) {
        self.size = size;
    }

    fn description(&self) -> String {
        format!("{} {}", self.size, self.name)
    }

    fn cost(&self) -> f64 {
        self.price
    }
}
