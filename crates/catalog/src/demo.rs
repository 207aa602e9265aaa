//! Built-in demonstration catalog.
//!
//! Two hand-written titles followed by 58 generated ones, enough records
//! for several pages at the default page size.

use crate::types::{Book, Catalog};

const CATEGORIES: [&str; 4] = ["Учебник", "Монография", "Исследование", "Research"];
const COVERS: [&str; 6] = ["📘", "📗", "📕", "📙", "📓", "📒"];
const FORMATS: [&str; 3] = ["PDF", "EPUB", "DJVU"];
const GENERATED: usize = 58;

impl Catalog {
    /// The demonstration catalog (60 books, ids 1..=60)
    pub fn demo() -> Self {
        demo_books().into_iter().collect()
    }
}

/// Books of the demonstration catalog, in catalog order
pub fn demo_books() -> Vec<Book> {
    let mut books = vec![
        Book {
            id: 1,
            title: "Политическая наука: современные подходы".to_string(),
            author: "Иванов А.А., Петрова В.С.".to_string(),
            year: 2023,
            category: "Учебник".to_string(),
            language: "русский".to_string(),
            format: "PDF".to_string(),
            description: "Современный учебник по политической науке, охватывающий основные теории и методологии.".to_string(),
            pages: 345,
            size: "2.4 MB".to_string(),
            file: "books/polit_nauka.pdf".to_string(),
            cover: "📘".to_string(),
        },
        Book {
            id: 2,
            title: "Теория международных отношений".to_string(),
            author: "Сидоров К.М.".to_string(),
            year: 2022,
            category: "Монография".to_string(),
            language: "русский".to_string(),
            format: "PDF".to_string(),
            description: "Глубокий анализ современных международных отношений и политических процессов.".to_string(),
            pages: 412,
            size: "3.1 MB".to_string(),
            file: "books/mezhdunarodnye.pdf".to_string(),
            cover: "📗".to_string(),
        },
    ];

    books.extend((0..GENERATED).map(generated_book));
    books
}

fn initial(n: usize) -> char {
    char::from(b'A' + (n % 26) as u8)
}

fn generated_book(i: usize) -> Book {
    let id = i as u32 + 3;
    Book {
        id,
        title: format!("Политология. Книга {}", i + 1),
        author: format!("Автор {}.{}.", initial(i), initial(i + 1)),
        year: 2020 + (i % 5) as i32,
        category: CATEGORIES[i % CATEGORIES.len()].to_string(),
        language: if i % 3 == 0 { "english" } else { "русский" }.to_string(),
        format: FORMATS[i % FORMATS.len()].to_string(),
        description: format!(
            "Описание книги по политологии номер {}. Эта книга охватывает важные аспекты политической науки.",
            i + 1
        ),
        pages: 200 + ((i * 7) % 300) as u32,
        size: format!("{}.0 MB", 1 + i % 3),
        file: format!("books/book_{}.pdf", id),
        cover: COVERS[i % COVERS.len()].to_string(),
    }
}
