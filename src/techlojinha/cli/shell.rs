//! Interactive form.
//!
//! Plays the part of the shop's desktop window: two input fields (category and
//! product), actions for add, sell and search, and an output area redrawn after
//! every action. Field values stick between actions and are cleared only after
//! a successful add or sell.

use std::io::{self, BufRead, Write};
use std::str::FromStr;
use techlojinha::api::StockApi;
use techlojinha::commands::CmdResult;
use techlojinha::store::DataStore;

const TITLE: &str = "Gerenciamento Techlojinha";
const ACTION_PROMPT: &str = "Ação [a]dicionar [v]ender [b]uscar [l]istar [s]air: ";
/// Typed at a field prompt to empty the field.
const CLEAR_FIELD: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    Sell,
    Search,
    List,
    Quit,
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" | "add" | "adicionar" => Ok(Action::Add),
            "v" | "sell" | "vender" => Ok(Action::Sell),
            "b" | "search" | "buscar" => Ok(Action::Search),
            "l" | "list" | "listar" => Ok(Action::List),
            "s" | "sair" | "q" | "quit" => Ok(Action::Quit),
            other => Err(format!("Ação desconhecida: '{}'", other)),
        }
    }
}

#[derive(Debug, Default)]
struct Form {
    category: String,
    product: String,
}

impl Form {
    fn clear(&mut self) {
        self.category.clear();
        self.product.clear();
    }
}

struct Session<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// `None` on end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Asks for a field value. Enter keeps the current value.
    fn edit_field(&mut self, name: &str, field: &mut String) -> io::Result<bool> {
        let label = if field.is_empty() {
            format!("{}: ", name)
        } else {
            format!("{} [{}]: ", name, field)
        };
        let Some(answer) = self.prompt(&label)? else {
            return Ok(false);
        };
        if answer == CLEAR_FIELD {
            field.clear();
        } else if !answer.trim().is_empty() {
            *field = answer;
        }
        Ok(true)
    }

    fn show(&mut self, result: &CmdResult) -> io::Result<()> {
        writeln!(self.out)?;
        let text = result.render();
        if !text.is_empty() {
            write!(self.out, "{}", text)?;
            if !text.ends_with('\n') {
                writeln!(self.out)?;
            }
        }
        writeln!(self.out)
    }
}

/// Runs the form until the user quits or input ends.
pub fn run<S, R, W>(api: &mut StockApi<S>, input: R, out: W) -> io::Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    let mut session = Session { input, out };
    let mut form = Form::default();

    writeln!(session.out, "{}", TITLE)?;
    session.show(&api.list())?;

    loop {
        let Some(answer) = session.prompt(ACTION_PROMPT)? else {
            break;
        };
        if answer.trim().is_empty() {
            continue;
        }
        let action = match answer.parse::<Action>() {
            Ok(action) => action,
            Err(msg) => {
                writeln!(session.out, "{}", msg)?;
                continue;
            }
        };

        let result = match action {
            Action::Quit => break,
            Action::List => api.list(),
            Action::Search => {
                if !session.edit_field("Categoria", &mut form.category)? {
                    break;
                }
                api.search(&form.category)
            }
            Action::Add | Action::Sell => {
                if !session.edit_field("Categoria", &mut form.category)?
                    || !session.edit_field("Produto", &mut form.product)?
                {
                    break;
                }
                if action == Action::Add {
                    api.add(&form.category, &form.product)
                } else {
                    api.sell(&form.category, &form.product)
                }
            }
        };

        if result.clears_inputs() {
            form.clear();
        }
        session.show(&result)?;
    }

    Ok(())
}
