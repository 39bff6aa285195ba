//! Interactive console session.
//!
//! The classic numbered menu over the lending service. Catalog and lending
//! errors are displayed and the loop continues; only console I/O failures
//! abort the session. Input is any `BufRead` so tests can script a session.

use std::io::BufRead;

use crate::application::LendingService;
use crate::cli::commands::{print_borrowed, print_listing, print_stats};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::domain::Book;

pub fn run<R: BufRead>(
    service: &mut LendingService,
    library_name: &str,
    mut input: R,
) -> CliResult<()> {
    output::header(&format!("=== {library_name} — catalog browser ==="));
    output::detail(&format!(
        "catalog initialized with {} book(s)",
        service.total()
    ));

    loop {
        print_menu();
        output::prompt("Select an option:");
        let Some(choice) = read_line(&mut input)? else {
            break;
        };

        match dispatch(service, &mut input, &choice) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e @ CliError::Io { .. }) => return Err(e),
            Err(e) => output::error(&e),
        }
    }

    output::info("Session closed.");
    Ok(())
}

/// Returns `Ok(false)` when the user chose to exit.
fn dispatch<R: BufRead>(
    service: &mut LendingService,
    input: &mut R,
    choice: &str,
) -> CliResult<bool> {
    match choice {
        "0" => return Ok(false),
        "1" => add_book(service, input)?,
        "2" => find_by_author(service, input)?,
        "3" => find_by_isbn(service, input)?,
        "4" => remove_book(service, input)?,
        "5" => {
            output::header("Catalog by author (inorder)");
            print_listing(&service.all_by_author());
        }
        "6" => {
            output::header("Catalog in tree order (preorder)");
            print_listing(&service.structure_order());
        }
        "7" => {
            output::header("Catalog in postorder");
            print_listing(&service.post_order());
        }
        "8" => loan_book(service, input)?,
        "9" => return_book(service, input)?,
        "10" => {
            output::header("Available books");
            let available = service.available();
            if available.is_empty() {
                output::detail("no books available");
            } else {
                print_listing(&available);
            }
        }
        "11" => {
            output::header("Books on loan");
            print_borrowed(service);
        }
        "12" => find_by_category(service, input)?,
        "13" => print_stats(service),
        "14" => find_by_fragment(service, input)?,
        "15" => {
            output::header("Tree shape (by author)");
            output::info(&service.render_tree());
        }
        other => output::warning(&format!("invalid option '{other}', expected 0-15")),
    }
    Ok(true)
}

fn add_book<R: BufRead>(service: &mut LendingService, input: &mut R) -> CliResult<()> {
    output::header("Register a new book");
    let isbn = require_line(input, "ISBN")?;
    let title = require_line(input, "Title")?;
    let author = require_line(input, "Author (Last, First)")?;
    let publisher = require_line(input, "Publisher")?;
    let year = require_number(input, "Year")?;
    let category = require_line(input, "Category")?;

    service.register(Book::new(isbn, title.clone(), author, publisher, year, category))?;
    output::success(&format!("registered '{title}'"));
    Ok(())
}

fn find_by_author<R: BufRead>(service: &mut LendingService, input: &mut R) -> CliResult<()> {
    let author = require_line(input, "Author")?;
    match service.find_by_author(&author)? {
        Some(book) => output::info(book),
        None => output::detail(&format!("no book by '{author}'")),
    }
    Ok(())
}

fn find_by_isbn<R: BufRead>(service: &mut LendingService, input: &mut R) -> CliResult<()> {
    let isbn = require_line(input, "ISBN")?;
    match service.find_by_isbn(&isbn)? {
        Some(book) => output::info(book),
        None => output::detail(&format!("no book with ISBN '{isbn}'")),
    }
    Ok(())
}

fn remove_book<R: BufRead>(service: &mut LendingService, input: &mut R) -> CliResult<()> {
    let author = require_line(input, "Author of the book to remove")?;
    output::prompt("Confirm removal? (y/n):");
    let confirmation = read_line(input)?.unwrap_or_default();
    if !confirmation.eq_ignore_ascii_case("y") {
        output::warning("removal cancelled");
        return Ok(());
    }
    if service.remove(&author)? {
        output::success("book removed from the catalog");
    } else {
        output::detail(&format!("no book by '{author}'"));
    }
    Ok(())
}

fn loan_book<R: BufRead>(service: &mut LendingService, input: &mut R) -> CliResult<()> {
    output::header("Register a loan");
    let author = require_line(input, "Author")?;
    let borrower = require_line(input, "Borrower")?;
    service.loan(&author, &borrower)?;
    output::success(&format!("loan registered to '{borrower}'"));
    Ok(())
}

fn return_book<R: BufRead>(service: &mut LendingService, input: &mut R) -> CliResult<()> {
    let author = require_line(input, "Author of the book to return")?;
    service.return_book(&author)?;
    output::success("return registered, book available again");
    Ok(())
}

fn find_by_category<R: BufRead>(service: &mut LendingService, input: &mut R) -> CliResult<()> {
    let category = require_line(input, "Category")?;
    let books = service.by_category(&category)?;
    if books.is_empty() {
        output::detail(&format!("no books in category '{category}'"));
    } else {
        print_listing(&books);
    }
    Ok(())
}

fn find_by_fragment<R: BufRead>(service: &mut LendingService, input: &mut R) -> CliResult<()> {
    // Blank input is valid here: the empty fragment matches every book.
    output::prompt("Author fragment (empty lists all):");
    let fragment = read_line(input)?.unwrap_or_default();
    let books = service.by_author_fragment(&fragment);
    if books.is_empty() {
        output::detail(&format!("no authors containing '{fragment}'"));
    } else {
        print_listing(&books);
    }
    Ok(())
}

fn print_menu() {
    println!();
    output::header("CATALOG");
    output::detail(" 1. Register a new book");
    output::detail(" 2. Find a book by author");
    output::detail(" 3. Find a book by ISBN");
    output::detail(" 4. Remove a book");
    output::header("LISTINGS");
    output::detail(" 5. List by author (inorder)");
    output::detail(" 6. List in tree order (preorder)");
    output::detail(" 7. List in postorder");
    output::header("LOANS");
    output::detail(" 8. Register a loan");
    output::detail(" 9. Register a return");
    output::detail("10. List available books");
    output::detail("11. List books on loan");
    output::header("SEARCH & DIAGNOSTICS");
    output::detail("12. Find books by category");
    output::detail("13. Catalog statistics");
    output::detail("14. Find authors by fragment");
    output::detail("15. Show tree shape");
    output::detail(" 0. Exit");
}

/// Read one trimmed line; `None` on end of input.
fn read_line<R: BufRead>(input: &mut R) -> CliResult<Option<String>> {
    let mut buf = String::new();
    let n = input.read_line(&mut buf).map_err(|e| CliError::Io {
        context: "read from console".to_string(),
        source: e,
    })?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

fn require_line<R: BufRead>(input: &mut R, label: &str) -> CliResult<String> {
    output::prompt(&format!("{label}:"));
    let line = read_line(input)?.unwrap_or_default();
    if line.is_empty() {
        return Err(CliError::InvalidArgs(format!("{label} must not be empty")));
    }
    Ok(line)
}

fn require_number<R: BufRead>(input: &mut R, label: &str) -> CliResult<i32> {
    let line = require_line(input, label)?;
    line.parse::<i32>().map_err(|_| {
        CliError::InvalidArgs(format!("{label} expects a whole number, got '{line}'"))
    })
}
