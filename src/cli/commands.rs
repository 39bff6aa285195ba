//! Command dispatch: one function per subcommand over a fresh service.
//!
//! The catalog has no persistence, so every invocation starts from the
//! configured seed (or empty with `--no-seed`); `menu` is the stateful
//! interactive session.

use std::io;
use std::sync::Arc;

use clap::CommandFactory;
use itertools::Itertools;
use tracing::debug;

use crate::application::{sample_books, LendingService};
use crate::cli::args::{Cli, Commands, Order};
use crate::cli::error::CliResult;
use crate::cli::{menu, output};
use crate::config::Settings;
use crate::domain::Book;
use crate::infrastructure::SystemClock;

pub fn execute_command(cli: Cli, settings: &Settings) -> CliResult<()> {
    let Some(command) = cli.command else {
        return Ok(());
    };

    match command {
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        command => {
            let mut service = build_service(cli.no_seed, settings)?;
            run_catalog_command(command, &mut service, settings)
        }
    }
}

fn build_service(no_seed: bool, settings: &Settings) -> CliResult<LendingService> {
    let clock = Arc::new(SystemClock);
    if no_seed || !settings.seed {
        debug!("starting with empty catalog");
        Ok(LendingService::new(clock))
    } else {
        debug!("seeding demo catalog");
        Ok(LendingService::with_books(sample_books(), clock)?)
    }
}

fn run_catalog_command(
    command: Commands,
    service: &mut LendingService,
    settings: &Settings,
) -> CliResult<()> {
    match command {
        Commands::Add {
            isbn,
            title,
            author,
            publisher,
            year,
            category,
        } => {
            service.register(Book::new(isbn, title.clone(), author, publisher, year, category))?;
            output::success(&format!("registered '{title}'"));
        }

        Commands::Find { author } => match service.find_by_author(&author)? {
            Some(book) => output::info(book),
            None => output::detail(&format!("no book by '{author}'")),
        },

        Commands::Isbn { isbn } => match service.find_by_isbn(&isbn)? {
            Some(book) => output::info(book),
            None => output::detail(&format!("no book with ISBN '{isbn}'")),
        },

        Commands::Remove { author } => {
            if service.remove(&author)? {
                output::success(&format!("removed the book by '{author}'"));
            } else {
                output::detail(&format!("no book by '{author}'"));
            }
        }

        Commands::Loan { author, borrower } => {
            service.loan(&author, &borrower)?;
            output::success(&format!("loan registered to '{}'", borrower.trim()));
        }

        Commands::Return { author } => {
            service.return_book(&author)?;
            output::success(&format!("return registered for '{author}'"));
        }

        Commands::List { order } => {
            let books = match order {
                Order::In => service.all_by_author(),
                Order::Pre => service.structure_order(),
                Order::Post => service.post_order(),
            };
            print_listing(&books);
        }

        Commands::Available => {
            let books = service.available();
            if books.is_empty() {
                output::detail("no books available");
            } else {
                print_listing(&books);
            }
        }

        Commands::Borrowed => print_borrowed(service),

        Commands::Category { category } => {
            let books = service.by_category(&category)?;
            if books.is_empty() {
                output::detail(&format!("no books in category '{category}'"));
            } else {
                print_listing(&books);
            }
        }

        Commands::Search { fragment } => {
            let books = service.by_author_fragment(&fragment);
            if books.is_empty() {
                output::detail(&format!("no authors containing '{fragment}'"));
            } else {
                print_listing(&books);
            }
        }

        Commands::Stats => print_stats(service),

        Commands::Tree => {
            output::header("Tree shape (by author)");
            output::info(&service.render_tree());
        }

        Commands::Menu => {
            let stdin = io::stdin();
            menu::run(service, &settings.library_name, stdin.lock())?;
        }

        // Handled before the service is built.
        Commands::Completion { .. } => unreachable!("completion handled in execute_command"),
    }
    Ok(())
}

/// Numbered table of books, one summary row each.
pub(crate) fn print_listing(books: &[&Book]) {
    if books.is_empty() {
        output::detail("no books to show");
        return;
    }
    output::detail(&format!(
        "{:<3} {:<30} | {:<20} | {:<15} | Status",
        "#", "Title", "Author", "Category"
    ));
    let rows = books
        .iter()
        .enumerate()
        .map(|(i, book)| format!("  {:<3} {}", i + 1, book.summary()))
        .join("\n");
    output::info(&rows);
    output::detail(&format!("total: {} book(s)", books.len()));
}

pub(crate) fn print_borrowed(service: &LendingService) {
    let borrowed = service.borrowed();
    if borrowed.is_empty() {
        output::detail("no books on loan");
        return;
    }
    output::detail(&format!("total: {} book(s) on loan", borrowed.len()));
    for book in borrowed {
        output::detail(&format!("{} — {}", book.title(), book.author()));
        if let (Some(borrower), Some(date)) = (book.borrower(), book.loan_date()) {
            output::detail(&format!("  borrower: {borrower} | since: {date}"));
        }
    }
}

pub(crate) fn print_stats(service: &LendingService) {
    if service.is_empty() {
        output::detail("the catalog is empty");
        return;
    }
    output::header("Catalog statistics");
    output::detail(&format!("total books  : {}", service.total()));
    output::detail(&format!("tree height  : {}", service.height()));
    output::detail(&format!("available    : {}", service.total_available()));
    output::detail(&format!("on loan      : {}", service.total_borrowed()));
    if let Some(first) = service.first_author() {
        output::detail(&format!("first author : {}", first.author()));
    }
    if let Some(last) = service.last_author() {
        output::detail(&format!("last author  : {}", last.author()));
    }
}
