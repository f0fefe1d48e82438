use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown cup size '{input}': expected small, medium or large")]
pub struct ParseSizeError {
    input: String,
}

impl ParseSizeError {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Everything that can go wrong while loading or querying a [`Menu`](crate::Menu).
#[derive(Error, Debug)]
pub enum MenuError {
    #[error("failed to parse menu at line {line}, column {col}: {message}")]
    Parse {
        line: usize,
        col: usize,
        message: String,
    },

    #[error("failed to read menu file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown beverage: '{0}'")]
    UnknownBeverage(String),

    #[error("unknown condiment: '{0}'")]
    UnknownCondiment(String),

    #[error("condiment '{condiment}' has no medium rate")]
    MissingMediumRate { condiment: String },

    #[error("price {price} for '{item}' must be a finite, non-negative number")]
    NegativePrice { item: String, price: f64 },

    #[error("'{name}' appears more than once in [{section}]")]
    DuplicateItem { section: String, name: String },
}

impl MenuError {
    pub fn parse_error(line: usize, col: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            col,
            message: message.into(),
        }
    }

    pub fn negative_price(item: impl Into<String>, price: f64) -> Self {
        Self::NegativePrice {
            item: item.into(),
            price,
        }
    }

    pub fn duplicate_item(section: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateItem {
            section: section.into(),
            name: name.into(),
        }
    }
}

impl From<serde_json::Error> for MenuError {
    fn from(err: serde_json::Error) -> Self {
        MenuError::Parse {
            line: err.line(),
            col: err.column(),
            message: err.to_string(),
        }
    }
}
