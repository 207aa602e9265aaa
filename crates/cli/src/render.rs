//! Terminal rendering of catalog pages.
//!
//! Everything here is formatting only: the numbers come from `PageView`.

use accounts::{Bookmark, BookmarkSystem, FavoritesSystem};
use browse::PageView;
use catalog::{Book, BookId};
use colored::Colorize;
use std::fmt::Write;

const PROGRESS_WIDTH: usize = 20;

/// Per-user markers shown on book cards
pub struct UserMarks<'a> {
    pub email: Option<&'a str>,
    pub favorites: &'a FavoritesSystem,
    pub bookmarks: &'a BookmarkSystem,
}

impl UserMarks<'_> {
    fn is_favorite(&self, id: BookId) -> bool {
        self.email
            .is_some_and(|email| self.favorites.is_favorite(email, id))
    }

    fn bookmark(&self, id: BookId) -> Option<&Bookmark> {
        self.bookmarks.get(self.email?, id)
    }
}

pub fn progress_bar(percent: u32) -> String {
    let filled = (percent.min(100) as usize * PROGRESS_WIDTH) / 100;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(PROGRESS_WIDTH - filled)
    )
}

/// One book card
pub fn book_card(book: &Book, marks: &UserMarks<'_>) -> String {
    let mut out = String::new();
    let star = if marks.is_favorite(book.id) {
        " ★".yellow().to_string()
    } else {
        String::new()
    };

    let _ = writeln!(
        out,
        "{} {} {}{}",
        book.cover,
        format!("[{}]", book.id).dimmed(),
        book.title.bold(),
        star
    );
    let _ = writeln!(out, "    {}", book.author.italic());
    let _ = writeln!(
        out,
        "    {} · {} · {} · {} pages · {}",
        book.year, book.language, book.format, book.pages, book.size
    );

    if let Some(mark) = marks.bookmark(book.id) {
        let percent = mark.progress_percent(book.pages);
        let _ = writeln!(
            out,
            "    {} {}% read (page {}/{})",
            progress_bar(percent).green(),
            percent,
            mark.current_page,
            book.pages
        );
    }

    let _ = writeln!(out, "    {}", book.description.dimmed());
    out
}

/// Pagination footer, or an empty string when everything fits on one page.
pub fn pagination_footer(view: &PageView<'_>) -> String {
    if view.total_pages <= 1 {
        return String::new();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Showing {}-{} of {} books",
        view.first_ordinal, view.last_ordinal, view.total_matches
    );

    let prev = if view.has_previous() {
        "← Prev".normal()
    } else {
        "← Prev".dimmed()
    };
    let next = if view.has_next() {
        "Next →".normal()
    } else {
        "Next →".dimmed()
    };
    let pages: Vec<String> = view
        .page_numbers()
        .map(|page| {
            if page == view.current_page {
                format!("[{}]", page).bold().cyan().to_string()
            } else {
                page.to_string()
            }
        })
        .collect();

    let _ = writeln!(out, "{}   {}   {}", prev, pages.join(" "), next);
    out
}

/// A whole page: cards then footer, or the "nothing found" message.
pub fn page(view: &PageView<'_>, marks: &UserMarks<'_>) -> String {
    if view.is_empty() {
        return format!(
            "{}\nTry changing the search terms or filters.\n",
            "No books found".bold()
        );
    }

    let mut out = String::new();
    for book in &view.books {
        out.push_str(&book_card(book, marks));
        out.push('\n');
    }
    out.push_str(&pagination_footer(view));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use accounts::MemoryStore;
    use browse::{CatalogBrowser, FilterKey};
    use catalog::Catalog;
    use std::sync::Arc;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0), "░".repeat(PROGRESS_WIDTH));
        assert_eq!(progress_bar(100), "█".repeat(PROGRESS_WIDTH));
        assert_eq!(progress_bar(50).chars().filter(|&c| c == '█').count(), 10);
    }

    #[test]
    fn test_footer_only_with_several_pages() {
        plain();
        let mut browser = CatalogBrowser::new(Arc::new(Catalog::demo()));

        let footer = pagination_footer(&browser.load(2));
        assert!(footer.contains("Showing 13-24 of 60 books"));
        assert!(footer.contains("1 [2] 3 4"));

        let view = browser.update_filter(FilterKey::Title, "Теория");
        assert_eq!(pagination_footer(&view), "");
    }

    #[test]
    fn test_page_marks_and_empty_message() {
        plain();
        let mut store = MemoryStore::new();
        let mut favorites = FavoritesSystem::load(&store).unwrap();
        let mut bookmarks = BookmarkSystem::load(&store).unwrap();
        let catalog = Arc::new(Catalog::demo());
        let book = catalog.get_book(1).unwrap();
        favorites.add(&mut store, "a@b.c", 1).unwrap();
        bookmarks.set(&mut store, "a@b.c", book, 100).unwrap();

        let marks = UserMarks {
            email: Some("a@b.c"),
            favorites: &favorites,
            bookmarks: &bookmarks,
        };
        let mut browser = CatalogBrowser::new(catalog.clone());
        let text = page(&browser.load(1), &marks);
        assert!(text.contains("★"));
        assert!(text.contains("29% read (page 100/345)"));

        let anonymous = UserMarks {
            email: None,
            ..marks
        };
        assert!(!page(&browser.load(1), &anonymous).contains("★"));

        let view = browser.update_filter(FilterKey::Year, "1999");
        assert!(page(&view, &anonymous).contains("No books found"));
    }
}
