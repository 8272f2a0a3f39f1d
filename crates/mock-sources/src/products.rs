//! Static product lookup.

use std::collections::HashMap;

use composition_core::{async_trait, ProductInfo, ProductLookup, SourceError};

/// Barcode lookup from a fixed table.
#[derive(Debug, Clone, Default)]
pub struct StaticProducts {
    products: HashMap<String, ProductInfo>,
    fail: bool,
}

impl StaticProducts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lookup that always fails with a timeout.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Add a product, keyed by its barcode.
    pub fn with_product(mut self, product: ProductInfo) -> Self {
        self.products.insert(product.barcode.clone(), product);
        self
    }
}

#[async_trait]
impl ProductLookup for StaticProducts {
    async fn lookup_barcode(&self, code: &str) -> Result<Option<ProductInfo>, SourceError> {
        if self.fail {
            return Err(SourceError::Timeout);
        }
        Ok(self.products.get(code.trim()).cloned())
    }
}
