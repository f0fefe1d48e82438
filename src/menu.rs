//! The price book: which coffees and condiments exist and what they cost.
//!
//! A menu is either the built-in one ([`Menu::default`]) or loaded from a
//! TOML or JSON file shaped like this:
//!
//! ```toml
//! [[beverages]]
//! name = "House Blend"
//! price = 3.0
//!
//! [[condiments]]
//! name = "Milk"
//! small = 1.0
//! medium = 1.5
//! large = 2.0
//! ```
//!
//! Only `medium` is required for a condiment; the other sizes fall back to it.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::beverage::{Beverage, ConcreteBeverage};
use crate::condiment::{Condiment, CondimentKind, SurchargeTable};
use crate::error::MenuError;

#[derive(Debug, Clone, PartialEq)]
pub struct CondimentEntry {
    name: String,
    surcharges: SurchargeTable,
}

impl CondimentEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surcharges(&self) -> &SurchargeTable {
        &self.surcharges
    }

    pub fn wrap<B: Beverage>(&self, beverage: B) -> Condiment<B> {
        Condiment::new(self.name.clone(), self.surcharges, beverage)
    }
}

impl From<CondimentKind> for CondimentEntry {
    fn from(kind: CondimentKind) -> Self {
        CondimentEntry {
            name: kind.name().to_string(),
            surcharges: kind.surcharges(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Menu {
    beverages: Vec<ConcreteBeverage>,
    condiments: Vec<CondimentEntry>,
}

impl Default for Menu {
    fn default() -> Self {
        Menu {
            beverages: vec![ConcreteBeverage::house_blend(), ConcreteBeverage::dark_roast()],
            condiments: CondimentKind::ALL.into_iter().map(CondimentEntry::from).collect(),
        }
    }
}

// =============================================================================
// On-disk shape
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MenuFile {
    #[serde(default)]
    beverages: Vec<BeverageRecord>,
    #[serde(default)]
    condiments: Vec<CondimentRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BeverageRecord {
    name: String,
    price: f64,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CondimentRecord {
    name: String,
    small: Option<f64>,
    medium: Option<f64>,
    large: Option<f64>,
}

// =============================================================================
// Loading
// =============================================================================

impl Menu {
    pub fn from_toml_str(content: &str) -> Result<Self, MenuError> {
        let file: MenuFile = toml::from_str(content).map_err(|err| toml_error(content, &err))?;
        Self::validate(file)
    }

    pub fn from_json_str(content: &str) -> Result<Self, MenuError> {
        let file: MenuFile = serde_json::from_str(content)?;
        Self::validate(file)
    }

    /// Loads a menu file, picking the format from the extension and
    /// sniffing the content when the extension says nothing.
    pub fn from_path(path: &Path) -> Result<Self, MenuError> {
        let content = fs::read_to_string(path).map_err(|source| MenuError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let menu = match format.as_deref() {
            Some("json") => Self::from_json_str(&content),
            Some("toml") => Self::from_toml_str(&content),
            _ => {
                if content.trim_start().starts_with('{') {
                    Self::from_json_str(&content)
                } else {
                    Self::from_toml_str(&content)
                }
            }
        }?;

        tracing::debug!(
            path = %path.display(),
            beverages = menu.beverages.len(),
            condiments = menu.condiments.len(),
            "loaded menu"
        );
        Ok(menu)
    }

    fn validate(file: MenuFile) -> Result<Self, MenuError> {
        let mut beverages: Vec<ConcreteBeverage> = Vec::with_capacity(file.beverages.len());
        for record in file.beverages {
            check_price(&record.name, record.price)?;
            if beverages
                .iter()
                .any(|existing| existing.name().eq_ignore_ascii_case(&record.name))
            {
                return Err(MenuError::duplicate_item("beverages", record.name));
            }
            beverages.push(ConcreteBeverage::new(record.name, record.price));
        }

        let mut condiments: Vec<CondimentEntry> = Vec::with_capacity(file.condiments.len());
        for record in file.condiments {
            let Some(medium) = record.medium else {
                return Err(MenuError::MissingMediumRate {
                    condiment: record.name,
                });
            };
            let surcharges = SurchargeTable::partial(record.small, medium, record.large);
            for (size, rate) in surcharges.rates() {
                check_price(&format!("{} ({size})", record.name), rate)?;
            }
            if condiments
                .iter()
                .any(|existing| existing.name.eq_ignore_ascii_case(&record.name))
            {
                return Err(MenuError::duplicate_item("condiments", record.name));
            }
            condiments.push(CondimentEntry {
                name: record.name,
                surcharges,
            });
        }

        Ok(Menu {
            beverages,
            condiments,
        })
    }
}

fn check_price(item: &str, price: f64) -> Result<(), MenuError> {
    if price.is_finite() && price >= 0.0 {
        Ok(())
    } else {
        Err(MenuError::negative_price(item, price))
    }
}

fn toml_error(content: &str, err: &toml::de::Error) -> MenuError {
    let (line, col) = err
        .span()
        .map_or((0, 0), |span| line_and_column(content, span.start));
    MenuError::parse_error(line, col, err.message())
}

fn line_and_column(content: &str, offset: usize) -> (usize, usize) {
    let before = content.get(..offset).unwrap_or(content);
    let line = before.matches('\n').count() + 1;
    let col = before.rsplit('\n').next().map_or(0, |tail| tail.chars().count()) + 1;
    (line, col)
}

// =============================================================================
// Lookups
// =============================================================================

impl Menu {
    pub fn beverages(&self) -> &[ConcreteBeverage] {
        &self.beverages
    }

    pub fn condiments(&self) -> &[CondimentEntry] {
        &self.condiments
    }

    /// A fresh cup of the named coffee, in the default size.
    pub fn beverage(&self, name: &str) -> Result<ConcreteBeverage, MenuError> {
        self.beverages
            .iter()
            .find(|beverage| beverage.name().eq_ignore_ascii_case(name))
            .cloned()
            .ok_or_else(|| MenuError::UnknownBeverage(name.to_string()))
    }

    pub fn condiment(&self, name: &str) -> Result<&CondimentEntry, MenuError> {
        self.condiments
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| MenuError::UnknownCondiment(name.to_string()))
    }

    /// Same as [`compose`](crate::compose), but by name. Every name is
    /// resolved before anything is wrapped.
    pub fn compose<S: AsRef<str>>(
        &self,
        base: &str,
        condiments: &[S],
    ) -> Result<Box<dyn Beverage>, MenuError> {
        let base = self.beverage(base)?;
        let entries = condiments
            .iter()
            .map(|name| self.condiment(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries
            .into_iter()
            .fold(Box::new(base) as Box<dyn Beverage>, |chain, entry| -> Box<dyn Beverage> {
                Box::new(entry.wrap(chain))
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::CupSize;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE_TOML: &str = r#"
[[beverages]]
name = "Espresso"
price = 2.5

[[condiments]]
name = "Caramel"
medium = 0.75
large = 1.25
"#;

    #[test]
    fn test_default_menu_matches_built_ins() {
        let menu = Menu::default();
        assert_eq!(menu.beverage("House Blend").unwrap().price(), 3.0);
        assert_eq!(menu.beverage("dark roast").unwrap().price(), 2.0);
        assert_eq!(
            menu.condiment("milk").unwrap().surcharges(),
            &CondimentKind::Milk.surcharges()
        );
        assert_eq!(
            menu.condiment("Soy").unwrap().surcharges(),
            &CondimentKind::Soy.surcharges()
        );
    }

    #[test]
    fn test_bundled_menu_file_matches_default() {
        let bundled = include_str!("../menu.toml");
        assert_eq!(Menu::from_toml_str(bundled).unwrap(), Menu::default());
    }

    #[test]
    fn test_toml_menu_with_fallback_rates() {
        let menu = Menu::from_toml_str(SAMPLE_TOML).unwrap();
        let caramel = menu.condiment("Caramel").unwrap().surcharges();
        assert_eq!(caramel.surcharge(CupSize::Small), 0.75);
        assert_eq!(caramel.surcharge(CupSize::Large), 1.25);
    }

    #[test]
    fn test_json_menu() {
        let json = r#"{
            "beverages": [{ "name": "Decaf", "price": 1.75 }],
            "condiments": [{ "name": "Oat", "small": 0.5, "medium": 0.5, "large": 0.5 }]
        }"#;
        let menu = Menu::from_json_str(json).unwrap();
        let mut order = menu.compose("decaf", &["oat", "Oat"]).unwrap();
        order.set_size(CupSize::Large);
        assert_eq!(order.description(), "Large Decaf, Oat, Oat");
        assert_eq!(order.cost(), 2.75);
    }

    #[test]
    fn test_rejects_negative_price() {
        let err = Menu::from_toml_str("[[beverages]]\nname = \"Free\"\nprice = -1.0\n").unwrap_err();
        assert!(matches!(err, MenuError::NegativePrice { ref item, .. } if item == "Free"));
    }

    #[test]
    fn test_rejects_negative_surcharge() {
        let toml = "[[condiments]]\nname = \"Ice\"\nmedium = 0.5\nlarge = -0.5\n";
        let err = Menu::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, MenuError::NegativePrice { ref item, .. } if item == "Ice (Large)"));
    }

    #[test]
    fn test_rejects_non_finite_prices() {
        let err = Menu::from_toml_str("[[beverages]]\nname = \"Void\"\nprice = nan\n").unwrap_err();
        assert!(matches!(err, MenuError::NegativePrice { ref item, price } if item == "Void" && price.is_nan()));
        assert!(err.to_string().contains("finite"));

        let toml = "[[condiments]]\nname = \"Gold\"\nmedium = inf\n";
        let err = Menu::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, MenuError::NegativePrice { ref item, .. } if item == "Gold (Medium)"));
    }

    #[test]
    fn test_rejects_missing_medium_rate() {
        let toml = "[[condiments]]\nname = \"Whip\"\nsmall = 0.5\n";
        let err = Menu::from_toml_str(toml).unwrap_err();
        assert!(matches!(err, MenuError::MissingMediumRate { ref condiment } if condiment == "Whip"));
    }

    #[test]
    fn test_rejects_duplicates_ignoring_case() {
        let json = r#"{ "beverages": [
            { "name": "Mocha", "price": 3.0 },
            { "name": "MOCHA", "price": 3.5 }
        ] }"#;
        let err = Menu::from_json_str(json).unwrap_err();
        assert!(matches!(err, MenuError::DuplicateItem { ref section, .. } if section == "beverages"));
    }

    #[test]
    fn test_toml_parse_error_has_position() {
        let err = Menu::from_toml_str("[[beverages]]\nname = \"Latte\"\nprice = \n").unwrap_err();
        match err {
            MenuError::Parse { line, .. } => assert_eq!(line, 3),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let err = Menu::from_toml_str("[[beverages]]\nname = \"A\"\nprice = 1.0\ncolour = \"brown\"\n")
            .unwrap_err();
        assert!(matches!(err, MenuError::Parse { .. }));
    }

    #[test]
    fn test_unknown_names() {
        let menu = Menu::default();
        assert!(matches!(
            menu.compose("Flat White", &["Milk"]),
            Err(MenuError::UnknownBeverage(name)) if name == "Flat White"
        ));
        assert!(matches!(
            menu.compose("House Blend", &["Milk", "Honey"]),
            Err(MenuError::UnknownCondiment(name)) if name == "Honey"
        ));
    }

    #[test]
    fn test_from_path_sniffs_json_without_extension() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "beverages": [{{ "name": "Mocha", "price": 4.0 }}] }}"#).unwrap();

        let menu = Menu::from_path(file.path()).unwrap();
        assert_eq!(menu.beverages().len(), 1);
        assert!(menu.condiments().is_empty());
    }

    #[test]
    fn test_from_path_reads_toml_extension() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(SAMPLE_TOML.as_bytes()).unwrap();

        let menu = Menu::from_path(file.path()).unwrap();
        assert_eq!(menu.beverage("espresso").unwrap().name(), "Espresso");
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = Menu::from_path(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, MenuError::Io { .. }));
    }
}
