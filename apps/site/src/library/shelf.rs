use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockWriteGuard};

use tracing::debug;

use crate::models::library::Book;

/// Least recently used shelves are dropped beyond this many.
const MAX_SHELVES: usize = 10_000;

struct Shelf {
    books: Vec<Book>,
    last_used: u64,
}

#[derive(Default)]
struct Shelves {
    by_token: HashMap<String, Shelf>,
    /// Bumped on every access; orders shelves by recency.
    clock: u64,
}

impl Shelves {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }
}

/// The dashboard's local copy of the book list, one per bearer token.
///
/// Records are only ever replaced wholesale by what the backend returns;
/// nothing here computes quantities. Sessions that are never logged out are
/// evicted once the store is full. An evicted shelf is simply fetched again.
#[derive(Clone)]
pub struct ShelfStore {
    inner: Arc<RwLock<Shelves>>,
    capacity: usize,
}

impl Default for ShelfStore {
    fn default() -> Self {
        Self::with_capacity(MAX_SHELVES)
    }
}

impl ShelfStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::default(),
            capacity: capacity.max(1),
        }
    }

    fn write(&self) -> RwLockWriteGuard<'_, Shelves> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn load(&self, token: &str, books: Vec<Book>) {
        let mut shelves = self.write();
        if !shelves.by_token.contains_key(token) && shelves.by_token.len() >= self.capacity {
            let idle = shelves
                .by_token
                .iter()
                .min_by_key(|(_, shelf)| shelf.last_used)
                .map(|(token, _)| token.clone());
            if let Some(idle) = idle {
                shelves.by_token.remove(&idle);
                debug!("Evicted idle shelf ({} held)", shelves.by_token.len());
            }
        }
        let last_used = shelves.tick();
        shelves
            .by_token
            .insert(token.to_string(), Shelf { books, last_used });
    }

    pub fn books(&self, token: &str) -> Option<Vec<Book>> {
        let mut shelves = self.write();
        let now = shelves.tick();
        let shelf = shelves.by_token.get_mut(token)?;
        shelf.last_used = now;
        Some(shelf.books.clone())
    }

    /// Swaps in the server's copy of one record. Returns false when the
    /// shelf or the record is not present.
    pub fn replace_book(&self, token: &str, book: Book) -> bool {
        let mut shelves = self.write();
        let now = shelves.tick();
        let Some(shelf) = shelves.by_token.get_mut(token) else {
            return false;
        };
        shelf.last_used = now;
        match shelf.books.iter_mut().find(|b| b.id == book.id) {
            Some(slot) => {
                *slot = book;
                true
            }
            None => false,
        }
    }

    /// Drops the shelf for a token (logout).
    pub fn clear(&self, token: &str) -> bool {
        self.write().by_token.remove(token).is_some()
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .by_token
            .len()
    }
}

/// Case-insensitive substring match on title or author. A blank term matches
/// everything.
pub fn search<'a>(books: &'a [Book], term: &str) -> Vec<&'a Book> {
    let term = term.trim().to_lowercase();
    books
        .iter()
        .filter(|b| {
            term.is_empty()
                || b.title.to_lowercase().contains(&term)
                || b.author.to_lowercase().contains(&term)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::mock::book;

    fn shelf() -> Vec<Book> {
        vec![
            book("b1", "Dune", "Frank Herbert", 2),
            book("b2", "Clean Code", "Robert Martin", 0),
            book("b3", "The Rust Book", "Klabnik", 5),
        ]
    }

    #[test]
    fn test_replace_swaps_matching_record_only() {
        let store = ShelfStore::new();
        store.load("t", shelf());
        assert!(store.replace_book("t", book("b1", "Dune", "Frank Herbert", 1)));
        let books = store.books("t").unwrap();
        assert_eq!(books[0].quantity, 1);
        assert_eq!(books[1].quantity, 0);
        assert_eq!(books[2].quantity, 5);
    }

    #[test]
    fn test_replace_unknown_record_is_noop() {
        let store = ShelfStore::new();
        store.load("t", shelf());
        assert!(!store.replace_book("t", book("zz", "X", "Y", 9)));
        assert_eq!(store.books("t").unwrap(), shelf());
        assert!(!store.replace_book("other", book("b1", "Dune", "Frank Herbert", 0)));
    }

    #[test]
    fn test_clear_forgets_shelf() {
        let store = ShelfStore::new();
        store.load("t", shelf());
        assert!(store.clear("t"));
        assert!(store.books("t").is_none());
        assert!(!store.clear("t"));
    }

    #[test]
    fn test_full_store_evicts_least_recently_used() {
        let store = ShelfStore::with_capacity(2);
        store.load("a", shelf());
        store.load("b", shelf());
        // touching "a" leaves "b" as the idle one
        assert!(store.books("a").is_some());
        store.load("c", shelf());

        assert_eq!(store.len(), 2);
        assert!(store.books("a").is_some());
        assert!(store.books("b").is_none());
        assert!(store.books("c").is_some());
    }

    #[test]
    fn test_reloading_a_held_shelf_does_not_evict() {
        let store = ShelfStore::with_capacity(2);
        store.load("a", shelf());
        store.load("b", shelf());
        store.load("a", vec![book("b1", "Dune", "Frank Herbert", 0)]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.books("a").unwrap().len(), 1);
        assert!(store.books("b").is_some());
    }

    #[test]
    fn test_search_title_or_author_case_insensitive() {
        let books = shelf();
        let hits: Vec<_> = search(&books, "RUST").iter().map(|b| b.id.as_str()).collect();
        assert_eq!(hits, vec!["b3"]);
        let hits: Vec<_> = search(&books, "martin").iter().map(|b| b.id.as_str()).collect();
        assert_eq!(hits, vec!["b2"]);
    }

    #[test]
    fn test_blank_search_returns_all_in_order() {
        let books = shelf();
        assert_eq!(search(&books, "  ").len(), 3);
    }

    #[test]
    fn test_search_without_match_is_empty() {
        assert!(search(&shelf(), "cobol").is_empty());
    }
}
