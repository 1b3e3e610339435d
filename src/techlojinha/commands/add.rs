use crate::commands::CmdResult;
use crate::model::Inventory;
use crate::report::Report;

/// Appends `product` to `category`, creating the category if needed.
///
/// Blank input is ignored silently: the form simply does nothing.
pub fn run(inventory: &mut Inventory, category: &str, product: &str) -> CmdResult {
    if category.is_empty() || product.is_empty() {
        return CmdResult::default();
    }

    inventory.add(category, product);
    CmdResult::default()
        .with_report(Report::stock(inventory))
        .mutated()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_category_at_the_end() {
        let mut inv = Inventory::seeded();
        let result = run(&mut inv, "Teclado", "Logitech K120");

        assert!(result.mutated);
        assert_eq!(inv.products("Teclado").unwrap(), ["Logitech K120"]);
        assert_eq!(inv.iter().last().unwrap().0, "Teclado");
        assert_eq!(inv.len(), 7);
    }

    #[test]
    fn appends_to_existing_category() {
        let mut inv: Inventory = [("SSD", vec!["Kingston 1TB"])].into_iter().collect();
        run(&mut inv, "SSD", "Samsung 970");
        assert_eq!(inv.products("SSD").unwrap(), ["Kingston 1TB", "Samsung 970"]);
    }

    #[test]
    fn allows_duplicates() {
        let mut inv = Inventory::seeded();
        run(&mut inv, "SSD", "Kingston 1TB");
        assert_eq!(inv.products("SSD").unwrap(), ["Kingston 1TB", "Kingston 1TB"]);
    }

    #[test]
    fn blank_fields_are_a_noop() {
        let mut inv = Inventory::seeded();
        assert!(run(&mut inv, "", "Logitech K120").is_noop());
        assert!(run(&mut inv, "Teclado", "").is_noop());
        assert_eq!(inv, Inventory::seeded());
    }

    #[test]
    fn success_refreshes_listing() {
        let mut inv = Inventory::seeded();
        let result = run(&mut inv, "SSD", "Samsung 970");
        assert!(result.clears_inputs());
        assert!(result
            .render()
            .contains("• SSD: Kingston 1TB, Samsung 970"));
    }
}
