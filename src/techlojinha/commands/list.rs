use crate::commands::CmdResult;
use crate::model::Inventory;
use crate::report::Report;

pub fn run(inventory: &Inventory) -> CmdResult {
    CmdResult::default().with_report(Report::stock(inventory))
}
