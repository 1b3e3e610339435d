use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Inventory, Removal};
use crate::report::Report;

pub const MISSING_FIELDS: &str = "⚠️ ERRO: Digite a Categoria e o Produto para vender!";

fn category_not_found(category: &str) -> String {
    format!(
        "❌ ERRO: A categoria '{category}' não existe no estoque.\n\n\
         Dica: Verifique os acentos e as letras."
    )
}

fn product_not_found(category: &str, product: &str) -> String {
    format!(
        "❌ ERRO: O produto '{product}' não foi encontrado em '{category}'.\n\n\
         Dica: O nome deve ser escrito EXATAMENTE como está no estoque."
    )
}

/// Sells one unit: removes the first `product` entry from `category`.
pub fn run(inventory: &mut Inventory, category: &str, product: &str) -> CmdResult {
    if category.is_empty() || product.is_empty() {
        return CmdResult::default().with_message(CmdMessage::warning(MISSING_FIELDS));
    }

    match inventory.remove_first(category, product) {
        Removal::CategoryMissing => {
            CmdResult::default().with_message(CmdMessage::error(category_not_found(category)))
        }
        Removal::ProductMissing => CmdResult::default()
            .with_message(CmdMessage::error(product_not_found(category, product))),
        Removal::Removed | Removal::RemovedLast => CmdResult::default()
            .with_report(Report::stock(inventory))
            .mutated(),
    }
}
