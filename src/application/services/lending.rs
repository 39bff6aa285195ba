//! Lending service
//!
//! Orchestrates the catalog: registration, loans, returns and statistics.
//! The catalog itself knows nothing about lending rules; it only stores the
//! availability flag. All business rules live here.

use std::sync::Arc;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Book, Catalog};
use crate::infrastructure::traits::Clock;

/// Service managing a library catalog and its loans.
pub struct LendingService {
    catalog: Catalog,
    clock: Arc<dyn Clock>,
}

impl LendingService {
    /// Create a service over an empty catalog.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            catalog: Catalog::new(),
            clock,
        }
    }

    /// Create a service seeded with the given books.
    ///
    /// Any rejected book (blank or duplicate author) aborts construction.
    pub fn with_books(books: Vec<Book>, clock: Arc<dyn Clock>) -> ApplicationResult<Self> {
        let mut service = Self::new(clock);
        for book in books {
            service.register(book)?;
        }
        Ok(service)
    }

    /// Add a new book to the catalog.
    pub fn register(&mut self, book: Book) -> ApplicationResult<()> {
        debug!("register: author={}", book.author());
        self.catalog.insert(book)?;
        Ok(())
    }

    /// Exact author lookup. `Ok(None)` when absent.
    pub fn find_by_author(&self, author: &str) -> ApplicationResult<Option<&Book>> {
        Ok(self.catalog.find(author)?)
    }

    /// Full-scan ISBN lookup. `Ok(None)` when absent.
    pub fn find_by_isbn(&self, isbn: &str) -> ApplicationResult<Option<&Book>> {
        Ok(self.catalog.find_by_isbn(isbn)?)
    }

    /// Remove a book, refusing while it is on loan.
    ///
    /// Returns `Ok(false)` when no book by that author exists.
    pub fn remove(&mut self, author: &str) -> ApplicationResult<bool> {
        debug!("remove: author={author}");
        if let Some(book) = self.catalog.find(author)? {
            if !book.is_available() {
                return Err(ApplicationError::OnLoanRemoval {
                    author: book.author().to_string(),
                    borrower: book.borrower().unwrap_or("unknown").to_string(),
                });
            }
        }
        Ok(self.catalog.remove(author)?)
    }

    /// Record a loan to a borrower, dated with the injected clock.
    pub fn loan(&mut self, author: &str, borrower: &str) -> ApplicationResult<()> {
        debug!("loan: author={author}, borrower={borrower}");
        let borrower = borrower.trim();
        if borrower.is_empty() {
            return Err(ApplicationError::BlankBorrower);
        }

        let today = self.clock.today();
        let book = self
            .catalog
            .find_mut(author)?
            .ok_or_else(|| ApplicationError::UnknownAuthor(author.trim().to_string()))?;

        if !book.is_available() {
            return Err(ApplicationError::AlreadyOnLoan {
                author: book.author().to_string(),
                borrower: book.borrower().unwrap_or("unknown").to_string(),
                since: book.loan_date().unwrap_or(today),
            });
        }

        book.loan_to(borrower, today);
        Ok(())
    }

    /// Record a return, making the book available again.
    pub fn return_book(&mut self, author: &str) -> ApplicationResult<()> {
        debug!("return_book: author={author}");
        let book = self
            .catalog
            .find_mut(author)?
            .ok_or_else(|| ApplicationError::UnknownAuthor(author.trim().to_string()))?;

        if book.is_available() {
            return Err(ApplicationError::NotOnLoan(book.author().to_string()));
        }

        book.mark_returned();
        Ok(())
    }

    /// All books, ascending by author.
    pub fn all_by_author(&self) -> Vec<&Book> {
        self.catalog.in_order()
    }

    /// All books in tree-structural (preorder) order.
    pub fn structure_order(&self) -> Vec<&Book> {
        self.catalog.pre_order()
    }

    /// All books in postorder.
    pub fn post_order(&self) -> Vec<&Book> {
        self.catalog.post_order()
    }

    pub fn available(&self) -> Vec<&Book> {
        self.catalog.available_books()
    }

    pub fn borrowed(&self) -> Vec<&Book> {
        self.catalog.borrowed_books()
    }

    pub fn by_category(&self, category: &str) -> ApplicationResult<Vec<&Book>> {
        Ok(self.catalog.find_by_category(category)?)
    }

    pub fn by_author_fragment(&self, fragment: &str) -> Vec<&Book> {
        self.catalog.find_by_author_fragment(fragment)
    }

    pub fn total(&self) -> usize {
        self.catalog.len()
    }

    pub fn height(&self) -> usize {
        self.catalog.height()
    }

    pub fn first_author(&self) -> Option<&Book> {
        self.catalog.first()
    }

    pub fn last_author(&self) -> Option<&Book> {
        self.catalog.last()
    }

    pub fn total_available(&self) -> usize {
        self.catalog.available_books().len()
    }

    pub fn total_borrowed(&self) -> usize {
        self.catalog.borrowed_books().len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    /// Diagnostic rendering of the tree shape.
    pub fn render_tree(&self) -> String {
        self.catalog.render()
    }

    /// Direct read access to the underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
