//! Tests for LendingService

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use rstest::{fixture, rstest};

use libris::application::{sample_books, ApplicationError, LendingService};
use libris::domain::{Book, CatalogError};
use libris::infrastructure::FixedClock;

fn loan_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date")
}

#[fixture]
fn service() -> LendingService {
    libris::util::testing::init_test_setup();
    LendingService::with_books(sample_books(), Arc::new(FixedClock(loan_day())))
        .expect("seed catalog")
}

#[rstest]
fn given_seeded_catalog_then_eight_books_and_height_four(service: LendingService) {
    assert_eq!(service.total(), 8);
    assert_eq!(service.catalog().len(), 8);
    // Seed insertion order puts García at the root and builds depth 4 via
    // Neruda -> Vargas -> Rulfo.
    assert_eq!(service.height(), 4);
    assert!(!service.is_empty());
}

#[rstest]
fn given_seeded_catalog_then_inorder_sorted_and_bounds_match(service: LendingService) {
    // Act
    let sorted: Vec<&str> = service.all_by_author().iter().map(|b| b.author()).collect();

    // Assert
    let mut expected = sorted.clone();
    expected.sort_by_key(|a| a.to_lowercase());
    assert_eq!(sorted, expected);
    assert_eq!(service.first_author().map(|b| b.author()), Some("Allende, Isabel"));
    assert_eq!(service.last_author().map(|b| b.author()), Some("Vargas Ll., Mario"));
}

#[rstest]
fn given_available_book_when_loaning_then_loan_state_recorded(mut service: LendingService) {
    // Act - borrower name arrives untrimmed
    service.loan("Neruda, Pablo", "  Ada Lovelace  ").unwrap();

    // Assert
    let book = service.find_by_author("Neruda, Pablo").unwrap().unwrap();
    assert!(!book.is_available());
    assert_eq!(book.borrower(), Some("Ada Lovelace"));
    assert_eq!(book.loan_date(), Some(loan_day()));
}

#[rstest]
fn given_loaned_book_when_loaning_again_then_already_on_loan(mut service: LendingService) {
    // Arrange
    service.loan("Neruda, Pablo", "Ada Lovelace").unwrap();

    // Act
    let err = service.loan("Neruda, Pablo", "Grace Hopper").unwrap_err();

    // Assert - the failure names the current borrower and loan date
    assert_eq!(
        err,
        ApplicationError::AlreadyOnLoan {
            author: "Neruda, Pablo".to_string(),
            borrower: "Ada Lovelace".to_string(),
            since: loan_day(),
        }
    );
    let book = service.find_by_author("Neruda, Pablo").unwrap().unwrap();
    assert_eq!(book.borrower(), Some("Ada Lovelace"));
}

#[rstest]
fn given_unknown_author_when_loaning_then_unknown_author(mut service: LendingService) {
    let err = service.loan("Bolaño, Roberto", "Ada Lovelace").unwrap_err();

    assert_eq!(err, ApplicationError::UnknownAuthor("Bolaño, Roberto".to_string()));
}

#[rstest]
fn given_blank_borrower_when_loaning_then_rejected_before_lookup(mut service: LendingService) {
    let err = service.loan("Neruda, Pablo", "   ").unwrap_err();

    assert_eq!(err, ApplicationError::BlankBorrower);
    let book = service.find_by_author("Neruda, Pablo").unwrap().unwrap();
    assert!(book.is_available());
}

#[rstest]
fn given_loaned_book_when_returning_then_available_again(mut service: LendingService) {
    // Arrange
    service.loan("Mistral, Gabriela", "Ada Lovelace").unwrap();

    // Act
    service.return_book("Mistral, Gabriela").unwrap();

    // Assert - all loan state cleared
    let book = service.find_by_author("Mistral, Gabriela").unwrap().unwrap();
    assert!(book.is_available());
    assert!(book.borrower().is_none());
    assert!(book.loan_date().is_none());
}

#[rstest]
fn given_available_book_when_returning_then_not_on_loan(mut service: LendingService) {
    let err = service.return_book("Mistral, Gabriela").unwrap_err();

    assert_eq!(err, ApplicationError::NotOnLoan("Mistral, Gabriela".to_string()));
}

#[rstest]
fn given_unknown_author_when_returning_then_unknown_author(mut service: LendingService) {
    let err = service.return_book("Bolaño, Roberto").unwrap_err();

    assert_eq!(err, ApplicationError::UnknownAuthor("Bolaño, Roberto".to_string()));
}

#[rstest]
fn given_loaned_book_when_removing_then_refused_and_kept(mut service: LendingService) {
    // Arrange
    service.loan("Rulfo, Juan", "Ada Lovelace").unwrap();

    // Act
    let err = service.remove("Rulfo, Juan").unwrap_err();

    // Assert
    assert_eq!(
        err,
        ApplicationError::OnLoanRemoval {
            author: "Rulfo, Juan".to_string(),
            borrower: "Ada Lovelace".to_string(),
        }
    );
    assert_eq!(service.total(), 8);
    assert!(service.find_by_author("Rulfo, Juan").unwrap().is_some());
}

#[rstest]
fn given_returned_book_when_removing_then_removed(mut service: LendingService) {
    // Arrange
    service.loan("Rulfo, Juan", "Ada Lovelace").unwrap();
    service.return_book("Rulfo, Juan").unwrap();

    // Act
    let removed = service.remove("Rulfo, Juan").unwrap();

    // Assert
    assert!(removed);
    assert_eq!(service.total(), 7);
    assert!(service.find_by_author("Rulfo, Juan").unwrap().is_none());
}

#[rstest]
fn given_absent_author_when_removing_then_false(mut service: LendingService) {
    assert!(!service.remove("Bolaño, Roberto").unwrap());
    assert_eq!(service.total(), 8);
}

#[rstest]
fn given_duplicate_author_when_registering_then_catalog_error(mut service: LendingService) {
    let duplicate = Book::new("978-0-99", "Odas Elementales", "Neruda, Pablo", "Losada", 1954, "Poetry");

    let err = service.register(duplicate).unwrap_err();

    assert_eq!(
        err,
        ApplicationError::Catalog(CatalogError::DuplicateAuthor("Neruda, Pablo".to_string()))
    );
    assert_eq!(service.total(), 8);
}

#[rstest]
fn given_blank_author_when_finding_then_catalog_error(service: LendingService) {
    let err = service.find_by_author("  ").unwrap_err();

    assert_eq!(err, ApplicationError::Catalog(CatalogError::EmptyField("author")));
}

#[rstest]
fn given_seeded_catalog_when_filtering_by_category_then_case_insensitive_counts(
    service: LendingService,
) {
    assert_eq!(service.by_category("literature").unwrap().len(), 4);
    assert_eq!(service.by_category("Fiction").unwrap().len(), 2);
    assert_eq!(service.by_category("POETRY").unwrap().len(), 2);
    assert!(service.by_category("History").unwrap().is_empty());
}

#[rstest]
fn given_loans_when_partitioning_then_isbn_sets_disjoint_and_complete(
    mut service: LendingService,
) {
    // Arrange
    service.loan("Borges, Jorge L.", "Ada Lovelace").unwrap();
    service.loan("Allende, Isabel", "Grace Hopper").unwrap();

    // Act
    let available: HashSet<String> = service.available().iter().map(|b| b.isbn().to_string()).collect();
    let borrowed: HashSet<String> = service.borrowed().iter().map(|b| b.isbn().to_string()).collect();
    let all: HashSet<String> = service.all_by_author().iter().map(|b| b.isbn().to_string()).collect();

    // Assert
    assert!(available.is_disjoint(&borrowed));
    let union: HashSet<String> = available.union(&borrowed).cloned().collect();
    assert_eq!(union, all);
    assert_eq!(service.total_borrowed(), 2);
    assert_eq!(service.total_available(), 6);
}

#[rstest]
fn given_empty_fragment_when_searching_then_every_book(service: LendingService) {
    assert_eq!(service.by_author_fragment("").len(), 8);
}

#[rstest]
fn given_fragment_when_searching_then_matching_subset(service: LendingService) {
    let hits = service.by_author_fragment("gabriel");

    let mut names: Vec<&str> = hits.iter().map(|b| b.author()).collect();
    names.sort();
    assert_eq!(names, vec!["García M., Gabriel", "Mistral, Gabriela"]);
}

#[rstest]
fn given_seeded_catalog_when_finding_by_isbn_then_hit(service: LendingService) {
    let book = service.find_by_isbn("978-0-08").unwrap().unwrap();

    assert_eq!(book.title(), "Rayuela");
    assert!(service.find_by_isbn("978-9-99").unwrap().is_none());
}

#[rstest]
fn given_seeded_catalog_when_rendering_tree_then_root_is_first_inserted(service: LendingService) {
    let rendered = service.render_tree();

    assert!(rendered.starts_with("García M., Gabriel"));
}

#[test]
fn given_no_books_then_service_reports_empty() {
    let service = LendingService::new(Arc::new(FixedClock(loan_day())));

    assert!(service.is_empty());
    assert_eq!(service.total(), 0);
    assert!(service.first_author().is_none());
    assert_eq!(service.render_tree(), "(empty catalog)");
}
