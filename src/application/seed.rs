//! Demo catalog fixture.
//!
//! The seed is an explicit function rather than something the catalog loads
//! implicitly: callers (and tests) pass it to
//! [`LendingService::with_books`](crate::application::LendingService::with_books)
//! when they want a populated catalog.

use crate::domain::Book;

/// Eight Latin American classics used as demo and test fixture data.
pub fn sample_books() -> Vec<Book> {
    vec![
        Book::new("978-0-06", "Cien Años de Soledad", "García M., Gabriel", "Sudamericana", 1967, "Literature"),
        Book::new("978-0-07", "Ficciones", "Borges, Jorge L.", "Sur", 1944, "Fiction"),
        Book::new("978-0-08", "Rayuela", "Cortázar, Julio", "Sudamericana", 1963, "Literature"),
        Book::new("978-0-09", "La Casa de los Espíritus", "Allende, Isabel", "Plaza & Janés", 1982, "Fiction"),
        Book::new("978-0-10", "Veinte Poemas de Amor", "Neruda, Pablo", "Nascimento", 1924, "Poetry"),
        Book::new("978-0-11", "Desolación", "Mistral, Gabriela", "Instituto Hisp.", 1922, "Poetry"),
        Book::new("978-0-12", "La Ciudad y los Perros", "Vargas Ll., Mario", "Seix Barral", 1963, "Literature"),
        Book::new("978-0-13", "Pedro Páramo", "Rulfo, Juan", "FCE", 1955, "Literature"),
    ]
}
