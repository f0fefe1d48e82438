use std::fmt;

use crate::beverage::Beverage;
use crate::size::CupSize;

/// Surcharge a condiment adds for each cup size.
///
/// Only the medium rate is mandatory. A size without its own rate is charged
/// the medium rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurchargeTable {
    small: Option<f64>,
    medium: f64,
    large: Option<f64>,
}

impl SurchargeTable {
    pub(crate) const fn new(small: f64, medium: f64, large: f64) -> Self {
        SurchargeTable {
            small: Some(small),
            medium,
            large: Some(large),
        }
    }

    pub(crate) const fn partial(small: Option<f64>, medium: f64, large: Option<f64>) -> Self {
        SurchargeTable {
            small,
            medium,
            large,
        }
    }

    pub fn surcharge(&self, size: CupSize) -> f64 {
        let rate = match size {
            CupSize::Small => self.small,
            CupSize::Medium => Some(self.medium),
            CupSize::Large => self.large,
        };
        rate.unwrap_or_else(|| {
            tracing::debug!(%size, medium = self.medium, "no dedicated rate, charging medium");
            self.medium
        })
    }

    pub(crate) fn rates(&self) -> impl Iterator<Item = (CupSize, f64)> + '_ {
        [
            (CupSize::Small, self.small),
            (CupSize::Medium, Some(self.medium)),
            (CupSize::Large, self.large),
        ]
        .into_iter()
        .filter_map(|(size, rate)| rate.map(|rate| (size, rate)))
    }
}

/// The condiments the shop stocks out of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CondimentKind {
    Milk,
    Soy,
}

impl CondimentKind {
    pub const ALL: [CondimentKind; 2] = [CondimentKind::Milk, CondimentKind::Soy];

    pub fn name(&self) -> &'static str {
        match self {
            CondimentKind::Milk => "Milk",
            CondimentKind::Soy => "Soy",
        }
    }

    pub fn surcharges(&self) -> SurchargeTable {
        match self {
            CondimentKind::Milk => SurchargeTable::new(1.0, 1.5, 2.0),
            CondimentKind::Soy => SurchargeTable::new(0.5, 1.0, 1.5),
        }
    }

    pub fn wrap<B: Beverage>(self, beverage: B) -> Condiment<B> {
        Condiment::new(self.name(), self.surcharges(), beverage)
    }
}

impl fmt::Display for CondimentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Wraps a beverage, adds a size-dependent surcharge and appends its name
/// to the description.
///
/// The wrapped beverage is owned; nothing outside the chain can reach it
/// once it has been wrapped.
#[derive(Debug)]
pub struct Condiment<B = Box<dyn Beverage>> {
    name: String,
    surcharges: SurchargeTable,
    wrapped: B,
}

impl<B: Beverage> Condiment<B> {
    pub(crate) fn new(name: impl Into<String>, surcharges: SurchargeTable, wrapped: B) -> Self {
        Condiment {
            name: name.into(),
            surcharges,
            wrapped,
        }
    }

    pub fn milk(wrapped: B) -> Self {
        CondimentKind::Milk.wrap(wrapped)
    }

    pub fn soy(wrapped: B) -> Self {
        CondimentKind::Soy.wrap(wrapped)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surcharges(&self) -> &SurchargeTable {
        &self.surcharges
    }
}

impl<B: Beverage> Beverage for Condiment<B> {
    fn size(&self) -> CupSize {
        self.wrapped.size()
    }

    fn set_size(&mut self, size: CupSize) {
        self.wrapped.set_size(size);
    }

    fn description(&self) -> String {
        format!("{}, {}", self.wrapped.description(), self.name)
    }

    fn cost(&self) -> f64 {
        self.wrapped.cost() + self.surcharges.surcharge(self.size())
    }
}
