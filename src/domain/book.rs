//! The catalog entry: one book and its lending state.

use std::fmt;

use chrono::NaiveDate;

/// A book in the catalog.
///
/// The author is the ordering key of the catalog and is immutable after
/// construction; there is deliberately no setter for it. Lending state only
/// changes through [`Book::loan_to`] and [`Book::mark_returned`], which keep
/// the invariant `available == true` iff borrower and loan date are unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    isbn: String,
    title: String,
    author: String,
    publisher: String,
    year: i32,
    category: String,
    available: bool,
    borrower: Option<String>,
    loan_date: Option<NaiveDate>,
}

impl Book {
    /// Create a new, available book.
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        publisher: impl Into<String>,
        year: i32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            publisher: publisher.into(),
            year,
            category: category.into(),
            available: true,
            borrower: None,
            loan_date: None,
        }
    }

    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The ordering key.
    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn borrower(&self) -> Option<&str> {
        self.borrower.as_deref()
    }

    pub fn loan_date(&self) -> Option<NaiveDate> {
        self.loan_date
    }

    /// Record a loan. Overwrites any previous loan state.
    pub fn loan_to(&mut self, borrower: impl Into<String>, date: NaiveDate) {
        self.available = false;
        self.borrower = Some(borrower.into());
        self.loan_date = Some(date);
    }

    /// Record a return, clearing all loan state.
    pub fn mark_returned(&mut self) {
        self.available = true;
        self.borrower = None;
        self.loan_date = None;
    }

    /// One-line table row: title, author, category, loan status.
    pub fn summary(&self) -> String {
        let status = if self.available {
            "Available".to_string()
        } else {
            format!(
                "On loan - {}",
                self.borrower.as_deref().unwrap_or("unknown")
            )
        };
        format!(
            "{:<30} | {:<20} | {:<15} | {}",
            truncate(&self.title, 28),
            truncate(&self.author, 18),
            self.category,
            status
        )
    }
}

/// Shorten to `max` characters, marking the cut with `..`.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max).collect();
        format!("{head}..")
    } else {
        s.to_string()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  ISBN      : {}", self.isbn)?;
        writeln!(f, "  Title     : {}", self.title)?;
        writeln!(f, "  Author    : {}", self.author)?;
        writeln!(f, "  Publisher : {}", self.publisher)?;
        writeln!(f, "  Year      : {}", self.year)?;
        writeln!(f, "  Category  : {}", self.category)?;
        write!(
            f,
            "  Status    : {}",
            if self.available { "Available" } else { "On loan" }
        )?;
        if let (Some(borrower), Some(date)) = (&self.borrower, &self.loan_date) {
            write!(f, "\n  Borrower  : {borrower}\n  Loan date : {date}")?;
        }
        Ok(())
    }
}
