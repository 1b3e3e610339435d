use crate::commands::{list, CmdMessage, CmdResult};
use crate::model::Inventory;
use crate::report::Report;

fn not_found(category: &str) -> String {
    format!(
        "❌ A categoria '{category}' não foi encontrada no estoque.\n\n\
         Dica: Faça a busca com o campo vazio para ver tudo novamente."
    )
}

/// Looks up one category. A blank category shows the whole stock.
pub fn run(inventory: &Inventory, category: &str) -> CmdResult {
    if category.is_empty() {
        return list::run(inventory);
    }

    match inventory.products(category) {
        Some(products) => CmdResult::default().with_report(Report::category(category, products)),
        None => CmdResult::default().with_message(CmdMessage::error(not_found(category))),
    }
}
