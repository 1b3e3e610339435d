use colored::Colorize;
use techlojinha::api::{CmdMessage, MessageLevel};
use techlojinha::commands::CmdResult;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_result(result: &CmdResult) {
    if let Some(report) = &result.report {
        print!("{}", report);
    }
    print_messages(&result.messages);
}
