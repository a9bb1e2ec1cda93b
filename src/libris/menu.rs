//! The interactive menu loop and its prompts. All terminal I/O lives here
//! and in `main.rs`; everything below the API facade is silent.

use colored::Colorize;
use console::Term;
use libris::api::LibrisApi;
use libris::catalog::Catalog;
use libris::commands::search::SearchKey;
use libris::commands::{CmdMessage, CmdResult, ListedEntry, MessageLevel};
use libris::error::{LibrisError, Result};
use libris::model::{Entry, Field};
use libris::store::CatalogStore;
use std::io::{self, BufRead, Write};
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

const LINE_WIDTH: usize = 100;

const MAIN_MENU: &str = "\
[1] Add new entry
[2] Display a list of all entries
[3] Find entries by title
[4] Find entries by author
[5] Find entries by publisher
[6] Edit an entry
[7] Delete an entry
[0] Exit";

const RESULT_MENU: &str = "\
[1] Edit found entry
[2] Delete found entry
[3] Display entry information
[0] Back";

const FIELD_MENU: &str = "\
What field do you wish to edit?
[ 1] Book title
[ 2] Author
[ 3] Pages
[ 4] Edition
[ 5] Language
[ 6] Publisher
[ 7] Publication date
[ 8] ISBN
[ 9] Description
[10] All fields
[ 0] Back";

fn read_line() -> Result<String> {
    let mut line = String::new();
    let n = io::stdin().lock().read_line(&mut line)?;
    if n == 0 {
        return Err(LibrisError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed",
        )));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub fn prompt_line(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    read_line()
}

/// Password prompt with terminal echo suppressed. Falls back to a plain
/// line read when stdin is not a terminal (pipes, tests).
pub fn prompt_password(label: &str) -> Result<String> {
    let term = Term::stdout();
    if term.is_term() {
        print!("{label}");
        io::stdout().flush()?;
        Ok(term.read_secure_line()?)
    } else {
        prompt_line(label)
    }
}

/// Numeric prompt; malformed input re-prompts instead of failing.
fn prompt_number(label: &str) -> Result<usize> {
    loop {
        let line = prompt_line(label)?;
        match line.trim().parse() {
            Ok(n) => return Ok(n),
            Err(_) => println!("{}", "Please enter a number.".yellow()),
        }
    }
}

/// 1-based index into a listing of `len` entries; out-of-range re-prompts.
fn prompt_index(len: usize) -> Result<usize> {
    loop {
        let n = prompt_number("Enter index from list: ")?;
        if (1..=len).contains(&n) {
            return Ok(n);
        }
        println!("{}", format!("Enter an index between 1 and {len}.").yellow());
    }
}

/// Prompts for all nine fields in order.
pub fn prompt_entry() -> Result<Entry> {
    let mut entry = Entry::new();
    for field in Field::ALL {
        let value = prompt_line(&format!("{}: ", field.label()))?;
        field.set(&mut entry, value);
    }
    Ok(entry)
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn print_listing(listed: &[ListedEntry]) {
    let index_width = listed.last().map_or(1, |le| le.index.to_string().len());

    for le in listed {
        let summary = le.entry.summary();
        let prefix = format!("{:>index_width$}. ", le.index);
        let available = LINE_WIDTH.saturating_sub(prefix.width());
        let summary = if summary.width() > available {
            truncate_to_width(&summary, available)
        } else {
            summary
        };
        println!("{prefix}{summary}");
    }
}

fn print_result(result: &CmdResult) {
    print_listing(&result.listed);
    if let Some(detail) = &result.detail {
        print!("{detail}");
    }
    print_messages(&result.messages);
}

/// The main menu loop. Returns when the user exits; the caller saves.
pub fn run<S: CatalogStore>(api: &mut LibrisApi<S>) -> Result<()> {
    loop {
        println!("{MAIN_MENU}");
        match prompt_number("--> ")? {
            0 => return Ok(()),
            1 => {
                let entry = prompt_entry()?;
                print_result(&api.add_entry(entry)?);
            }
            2 => print_result(&api.list()?),
            3 => search(api, SearchKey::Title)?,
            4 => search(api, SearchKey::Author)?,
            5 => search(api, SearchKey::Publisher)?,
            6 => edit_all(api)?,
            7 => delete(api)?,
            _ => println!("{}", "Unknown option.".yellow()),
        }
    }
}

fn search<S: CatalogStore>(api: &mut LibrisApi<S>, key: SearchKey) -> Result<()> {
    let term = prompt_line(&format!("Enter {}: ", key.label()))?;
    let hits = api.find(key, &term)?;

    if hits.view.is_empty() {
        print_messages(&hits.result.messages);
        return Ok(());
    }

    println!("List of entries found");
    print_result(&hits.result);
    result_menu(api, &hits.view)
}

fn edit_all<S: CatalogStore>(api: &mut LibrisApi<S>) -> Result<()> {
    let listing = api.list()?;
    if listing.listed.is_empty() {
        print_messages(&listing.messages);
        return Ok(());
    }

    print_listing(&listing.listed);
    let all = api.view_all();
    result_menu(api, &all)
}

fn delete<S: CatalogStore>(api: &mut LibrisApi<S>) -> Result<()> {
    let listing = api.list()?;
    if listing.listed.is_empty() {
        print_messages(&listing.messages);
        return Ok(());
    }

    print_listing(&listing.listed);
    let index = prompt_index(listing.listed.len())?;
    print_result(&api.delete_at(index - 1)?);
    Ok(())
}

/// Sub-menu over a result listing. Deletions resolve the picked record
/// back to the owning catalog by identity, so the view may go stale for
/// records already removed; that case reports an error and continues.
fn result_menu<S: CatalogStore>(api: &mut LibrisApi<S>, view: &Catalog) -> Result<()> {
    loop {
        println!("{RESULT_MENU}");
        match prompt_number("--> ")? {
            0 => return Ok(()),
            1 => {
                let index = prompt_index(view.len())?;
                field_menu(api, view, index - 1)?;
            }
            2 => {
                let index = prompt_index(view.len())?;
                let target = view
                    .entry(view.get(index - 1)?)
                    .expect("key from get() is live");
                match api.delete_record(&target) {
                    Ok(result) => print_result(&result),
                    Err(e) => print_messages(&[CmdMessage::error(e.to_string())]),
                }
            }
            3 => {
                let index = prompt_index(view.len())?;
                print_result(&api.view_entry(view, index - 1)?);
            }
            _ => println!("{}", "Unknown option.".yellow()),
        }
    }
}

fn field_menu<S: CatalogStore>(
    api: &mut LibrisApi<S>,
    view: &Catalog,
    index: usize,
) -> Result<()> {
    loop {
        println!("{FIELD_MENU}");
        match prompt_number("--> ")? {
            0 => return Ok(()),
            n @ 1..=9 => {
                let field = Field::ALL[n - 1];
                let value = prompt_line(&format!("Enter {}: ", field.label()))?;
                print_result(&api.edit_field(view, index, field, value)?);
            }
            10 => {
                let replacement = prompt_entry()?;
                print_result(&api.replace_entry(view, index, replacement)?);
            }
            _ => println!("{}", "Unknown option.".yellow()),
        }
    }
}
