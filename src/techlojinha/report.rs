//! Output-area text.
//!
//! A [`Report`] is what the presentation layer shows after a successful
//! operation: either the whole stock or the products of one category. The
//! `Display` impl produces the exact text the shop's staff are used to reading.

use crate::model::Inventory;
use std::fmt;

pub const STOCK_HEADER: &str = "📦 ESTOQUE ATUALIZADO:";
pub const SEARCH_HEADER: &str = "🔍 RESULTADO DA BUSCA:";
const RULE_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLine {
    pub category: String,
    pub products: Vec<String>,
}

impl CategoryLine {
    pub fn joined_products(&self) -> String {
        self.products.join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Every category that currently holds products.
    Stock(Vec<CategoryLine>),
    /// Search hit for a single category.
    Category(CategoryLine),
}

impl Report {
    pub fn stock(inventory: &Inventory) -> Self {
        let lines = inventory
            .iter()
            .filter(|(_, products)| !products.is_empty())
            .map(|(category, products)| CategoryLine {
                category: category.to_string(),
                products: products.to_vec(),
            })
            .collect();
        Report::Stock(lines)
    }

    pub fn category(category: &str, products: &[String]) -> Self {
        Report::Category(CategoryLine {
            category: category.to_string(),
            products: products.to_vec(),
        })
    }
}

fn rule(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", "-".repeat(RULE_WIDTH))
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Stock(lines) => {
                writeln!(f, "{STOCK_HEADER}")?;
                rule(f)?;
                for line in lines {
                    writeln!(f, "• {}: {}", line.category, line.joined_products())?;
                }
                Ok(())
            }
            Report::Category(line) => {
                writeln!(f, "{SEARCH_HEADER} [{}]", line.category)?;
                rule(f)?;
                writeln!(f, "• Produtos: {}", line.joined_products())
            }
        }
    }
}

/// Full listing of `inventory` as output-area text.
pub fn full_listing(inventory: &Inventory) -> String {
    Report::stock(inventory).to_string()
}
