//! # Beverage Decorator
//!
//! A coffee-shop price calculator built around the Decorator pattern.
//!
//! ## Building Blocks
//!
//! 1. **Beverage** ([`Beverage`])
//!    - One trait for size, description and cost
//!    - Implemented by leaves and by every wrapper, so wrappers nest freely
//!
//! 2. **Concrete beverages** ([`ConcreteBeverage`])
//!    - House Blend, Dark Roast, or anything listed on a [`Menu`]
//!    - Fixed price, owns the cup size
//!
//! 3. **Condiments** ([`Condiment`])
//!    - Own the beverage they wrap
//!    - Forward size to it, add a size-dependent surcharge, append their name
//!
//! 4. **Description normalizer** ([`DescriptionNormalizer`])
//!    - Collapses `"Milk, Soy, Soy"` into `"1 Milk, 2 Soy"`
//!
//! ## Composing an Order
//!
//! ```
//! use beverage_decorator::{Beverage, CondimentKind, ConcreteBeverage, CupSize, OrderBuilder};
//!
//! let order = OrderBuilder::new(ConcreteBeverage::house_blend())
//!     .with(CondimentKind::Milk)
//!     .with(CondimentKind::Soy)
//!     .with(CondimentKind::Soy)
//!     .size(CupSize::Small)
//!     .normalized()
//!     .build();
//!
//! assert_eq!(order.description(), "Small House Blend, 1 Milk, 2 Soy");
//! assert_eq!(order.cost(), 5.0);
//! ```
//!
//! Run the demo with: `cargo run --bin coffee_shop`

pub mod beverage;
pub mod condiment;
pub mod error;
pub mod menu;
pub mod normalizer;
pub mod order;
pub mod size;

pub use beverage::{Beverage, ConcreteBeverage};
pub use condiment::{Condiment, CondimentKind, SurchargeTable};
pub use error::{MenuError, ParseSizeError};
pub use menu::{CondimentEntry, Menu};
pub use normalizer::{normalize_description, DescriptionNormalizer, INVALID_DESCRIPTION};
pub use order::{compose, OrderBuilder, PriceTag};
pub use size::CupSize;
