use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

/// Outcome of removing a product from a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// One occurrence removed, the category still holds products.
    Removed,
    /// The last product was removed and the category key dropped with it.
    RemovedLast,
    CategoryMissing,
    ProductMissing,
}

/// Category name → product names, in insertion order.
///
/// A category only exists while it holds at least one product. Names are
/// compared byte for byte: "Placa Mãe" and "Placa Mae" are different categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    categories: IndexMap<String, Vec<String>>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock the shop starts with when nothing has been saved yet.
    pub fn seeded() -> Self {
        [
            ("Placa de vídeo", "RTX 5060 Ti"),
            ("Processador", "Ryzen 5 5600"),
            ("Placa Mãe", "Asus TUF B550M"),
            ("Memória RAM", "Corsair 16GB"),
            ("SSD", "Kingston 1TB"),
            ("Fonte", "XPG 650W"),
        ]
        .into_iter()
        .fold(Self::new(), |mut inv, (category, product)| {
            inv.add(category, product);
            inv
        })
    }

    pub fn add(&mut self, category: &str, product: &str) {
        self.categories
            .entry(category.to_string())
            .or_default()
            .push(product.to_string());
    }

    /// Removes the first occurrence of `product` from `category`.
    pub fn remove_first(&mut self, category: &str, product: &str) -> Removal {
        let Some(products) = self.categories.get_mut(category) else {
            return Removal::CategoryMissing;
        };
        let Some(pos) = products.iter().position(|p| p == product) else {
            return Removal::ProductMissing;
        };
        products.remove(pos);

        if products.is_empty() {
            self.categories.shift_remove(category);
            Removal::RemovedLast
        } else {
            Removal::Removed
        }
    }

    pub fn products(&self, category: &str) -> Option<&[String]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories
            .iter()
            .map(|(category, products)| (category.as_str(), products.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl<C, P> FromIterator<(C, Vec<P>)> for Inventory
where
    C: Into<String>,
    P: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (C, Vec<P>)>>(iter: I) -> Self {
        let categories = iter
            .into_iter()
            .map(|(c, ps)| (c.into(), ps.into_iter().map(Into::into).collect()))
            .collect();
        Self { categories }
    }
}
