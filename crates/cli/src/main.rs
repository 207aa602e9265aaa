mod notify;
mod render;

use accounts::{BookmarkSystem, DownloadSystem, FavoritesSystem, JsonFileStore, UserSystem};
use anyhow::{Context, Result, anyhow};
use browse::{CatalogBrowser, FilterKey};
use catalog::{BookId, Catalog};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use notify::{Level, notify};
use render::UserMarks;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Book catalog - browse, filter and keep track of reading
#[derive(Parser)]
#[command(name = "book-catalog")]
#[command(about = "Browse a book catalog with filters, favorites and bookmarks", long_about = None)]
struct Cli {
    /// Path to a books.dat file (the built-in demo catalog is used if omitted)
    #[arg(short, long)]
    books: Option<PathBuf>,

    /// Path to the JSON file holding accounts, favorites, bookmarks and downloads
    #[arg(short, long, default_value = "catalog-state.json")]
    state: PathBuf,

    /// Books per page
    #[arg(long, default_value = "12")]
    page_size: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List books, optionally filtered, one page at a time
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Page to show (clamped to the available pages)
        #[arg(long, default_value = "1")]
        page: usize,
    },

    /// Show a single book
    Show { id: BookId },

    /// Show the values available for each filter
    Filters,

    /// Create an account
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
    },

    /// Log in
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Log out
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Manage favorites
    Favorite {
        #[command(subcommand)]
        action: FavoriteAction,
    },

    /// Manage bookmarks
    Bookmark {
        #[command(subcommand)]
        action: BookmarkAction,
    },

    /// Download a book and record it in the history
    Download { id: BookId },

    /// Show download history
    Downloads,
}

#[derive(Args)]
struct FilterArgs {
    /// Case-insensitive substring of the title
    #[arg(long)]
    title: Option<String>,

    /// Case-insensitive substring of the author
    #[arg(long)]
    author: Option<String>,

    /// Publication year
    #[arg(long)]
    year: Option<String>,

    /// Exact language, e.g. "english"
    #[arg(long)]
    language: Option<String>,

    /// Exact format, e.g. "PDF"
    #[arg(long)]
    format: Option<String>,

    /// Exact category
    #[arg(long)]
    category: Option<String>,
}

impl FilterArgs {
    fn criteria(self) -> Vec<(FilterKey, String)> {
        [
            (FilterKey::Title, self.title),
            (FilterKey::Author, self.author),
            (FilterKey::Year, self.year),
            (FilterKey::Language, self.language),
            (FilterKey::Format, self.format),
            (FilterKey::Category, self.category),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }
}

#[derive(Subcommand)]
enum FavoriteAction {
    /// Add a book to favorites
    Add { id: BookId },
    /// Remove a book from favorites
    Remove { id: BookId },
    /// Add the book if it is not a favorite, remove it otherwise
    Toggle { id: BookId },
    /// List favorites
    List,
    /// Remove all favorites
    Clear,
}

#[derive(Subcommand)]
enum BookmarkAction {
    /// Remember the page you are on
    Set { id: BookId, page: u32 },
    /// Forget the bookmark of a book
    Remove { id: BookId },
    /// List bookmarks with reading progress
    List,
}

/// Everything a command handler needs
struct App {
    catalog: Arc<Catalog>,
    page_size: NonZeroUsize,
    store: JsonFileStore,
    users: UserSystem,
    favorites: FavoritesSystem,
    bookmarks: BookmarkSystem,
    downloads: DownloadSystem,
}

impl App {
    fn open(cli: &Cli) -> Result<Self> {
        let catalog = match &cli.books {
            Some(path) => Catalog::load_from_file(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
            None => {
                info!("Using the built-in demo catalog");
                Catalog::demo()
            }
        };
        let page_size =
            NonZeroUsize::new(cli.page_size).ok_or_else(|| anyhow!("--page-size must be at least 1"))?;

        let store = JsonFileStore::open(&cli.state)
            .with_context(|| format!("Failed to open state file {}", cli.state.display()))?;
        let users = UserSystem::load(&store)?;
        let favorites = FavoritesSystem::load(&store)?;
        let bookmarks = BookmarkSystem::load(&store)?;
        let downloads = DownloadSystem::load(&store)?;

        Ok(Self {
            catalog: Arc::new(catalog),
            page_size,
            store,
            users,
            favorites,
            bookmarks,
            downloads,
        })
    }

    /// Email of the logged-in user, or a warning naming what needs a login
    fn logged_in_email(&self, action: &str) -> Option<String> {
        match self.users.current_user() {
            Some(user) => Some(user.email.clone()),
            None => {
                notify(Level::Warning, &format!("Log in to {}", action));
                None
            }
        }
    }

    fn book(&self, id: BookId) -> Result<&catalog::Book> {
        self.catalog
            .get_book(id)
            .ok_or_else(|| anyhow!("Book {} not found", id))
    }

    fn marks(&self) -> UserMarks<'_> {
        UserMarks {
            email: self.users.current_user().map(|u| u.email.as_str()),
            favorites: &self.favorites,
            bookmarks: &self.bookmarks,
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut app = App::open(&cli)?;

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List { filters, page } => handle_list(&app, filters, page),
        Commands::Show { id } => handle_show(&app, id)?,
        Commands::Filters => handle_filters(&app),
        Commands::Register {
            email,
            password,
            name,
        } => handle_register(&mut app, &email, &password, &name)?,
        Commands::Login { email, password } => handle_login(&mut app, &email, &password)?,
        Commands::Logout => {
            app.users.logout(&mut app.store)?;
            notify(Level::Info, "Logged out");
        }
        Commands::Whoami => handle_whoami(&app),
        Commands::Favorite { action } => handle_favorite(&mut app, action)?,
        Commands::Bookmark { action } => handle_bookmark(&mut app, action)?,
        Commands::Download { id } => handle_download(&mut app, id)?,
        Commands::Downloads => handle_downloads(&app),
    }

    Ok(())
}

/// Handle the 'list' command
fn handle_list(app: &App, filters: FilterArgs, page: usize) {
    let mut browser = CatalogBrowser::with_page_size(app.catalog.clone(), app.page_size);
    for (key, value) in filters.criteria() {
        browser.update_filter(key, value);
    }
    let view = browser.load(page);
    print!("{}", render::page(&view, &app.marks()));
}

/// Handle the 'show' command
fn handle_show(app: &App, id: BookId) -> Result<()> {
    let book = app.book(id)?;
    print!("{}", render::book_card(book, &app.marks()));
    println!("    File: {}", book.file);
    Ok(())
}

/// Handle the 'filters' command
fn handle_filters(app: &App) {
    let years: Vec<String> = app.catalog.years().iter().map(|y| y.to_string()).collect();
    println!("{} {}", "year:".bold(), years.join(", "));
    println!("{} {}", "language:".bold(), app.catalog.languages().join(", "));
    println!("{} {}", "format:".bold(), app.catalog.formats().join(", "));
    println!("{} {}", "category:".bold(), app.catalog.categories().join(", "));
}

/// Handle the 'register' command
fn handle_register(app: &mut App, email: &str, password: &str, name: &str) -> Result<()> {
    match app.users.register(&mut app.store, email, password, name) {
        Ok(user) => notify(Level::Success, &format!("Welcome, {}! You can log in now.", user.name)),
        Err(accounts::AccountError::UserExists { .. }) => {
            notify(Level::Error, "A user with this email already exists")
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Handle the 'login' command
fn handle_login(app: &mut App, email: &str, password: &str) -> Result<()> {
    match app.users.login(&mut app.store, email, password) {
        Ok(user) => notify(Level::Success, &format!("Logged in as {}", user.name)),
        Err(accounts::AccountError::InvalidCredentials) => {
            notify(Level::Error, "Invalid email or password")
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Handle the 'whoami' command
fn handle_whoami(app: &App) {
    match app.users.current_user() {
        Some(user) => {
            println!("{}", user.name.bold().blue());
            println!("{}Email: {}", "• ".green(), user.email);
            println!("{}Member since: {}", "• ".green(), user.joined.format("%Y-%m-%d"));
            println!(
                "{}Favorites: {}",
                "• ".cyan(),
                app.favorites.list(&user.email).len()
            );
            println!(
                "{}Bookmarks: {}",
                "• ".cyan(),
                app.bookmarks.list(&user.email).count()
            );
            println!(
                "{}Downloads: {}",
                "• ".cyan(),
                app.downloads.list(&user.email).len()
            );
        }
        None => notify(Level::Info, "Not logged in"),
    }
}

/// Handle the 'favorite' subcommands
fn handle_favorite(app: &mut App, action: FavoriteAction) -> Result<()> {
    let Some(email) = app.logged_in_email("manage favorites") else {
        return Ok(());
    };

    match action {
        FavoriteAction::Add { id } => {
            app.book(id)?;
            if app.favorites.add(&mut app.store, &email, id)? {
                notify(Level::Success, "Added to favorites");
            } else {
                notify(Level::Info, "Already in favorites");
            }
        }
        FavoriteAction::Remove { id } => {
            if app.favorites.remove(&mut app.store, &email, id)? {
                notify(Level::Info, "Removed from favorites");
            } else {
                notify(Level::Info, "Not in favorites");
            }
        }
        FavoriteAction::Toggle { id } => {
            app.book(id)?;
            if app.favorites.toggle(&mut app.store, &email, id)? {
                notify(Level::Success, "Added to favorites");
            } else {
                notify(Level::Info, "Removed from favorites");
            }
        }
        FavoriteAction::List => {
            let ids = app.favorites.list(&email);
            if ids.is_empty() {
                notify(Level::Info, "No favorites yet");
            }
            let marks = app.marks();
            for book in ids.iter().filter_map(|&id| app.catalog.get_book(id)) {
                println!("{}", render::book_card(book, &marks));
            }
        }
        FavoriteAction::Clear => {
            app.favorites.clear(&mut app.store, &email)?;
            notify(Level::Info, "All favorites removed");
        }
    }
    Ok(())
}

/// Handle the 'bookmark' subcommands
fn handle_bookmark(app: &mut App, action: BookmarkAction) -> Result<()> {
    let Some(email) = app.logged_in_email("use bookmarks") else {
        return Ok(());
    };

    match action {
        BookmarkAction::Set { id, page } => {
            let book = app
                .catalog
                .get_book(id)
                .ok_or_else(|| anyhow!("Book {} not found", id))?;
            let mark = app.bookmarks.set(&mut app.store, &email, book, page)?;
            notify(
                Level::Success,
                &format!(
                    "Bookmark saved: page {}/{} of \"{}\"",
                    mark.current_page, book.pages, book.title
                ),
            );
        }
        BookmarkAction::Remove { id } => {
            if app.bookmarks.remove(&mut app.store, &email, id)? {
                notify(Level::Info, "Bookmark removed");
            } else {
                notify(Level::Info, "No bookmark for this book");
            }
        }
        BookmarkAction::List => {
            let mut any = false;
            for (id, mark) in app.bookmarks.list(&email) {
                any = true;
                let Some(book) = app.catalog.get_book(id) else {
                    continue;
                };
                let percent = mark.progress_percent(book.pages);
                println!(
                    "{} {} {}% (page {}/{}, updated {})",
                    render::progress_bar(percent).green(),
                    book.title.bold(),
                    percent,
                    mark.current_page,
                    book.pages,
                    mark.updated_at.format("%Y-%m-%d %H:%M")
                );
            }
            if !any {
                notify(Level::Info, "No bookmarks yet");
            }
        }
    }
    Ok(())
}

/// Handle the 'download' command
fn handle_download(app: &mut App, id: BookId) -> Result<()> {
    let Some(email) = app.logged_in_email("download books") else {
        return Ok(());
    };
    let Some(book) = app.catalog.get_book(id) else {
        notify(Level::Error, "Book not found");
        return Ok(());
    };

    app.downloads.record(&mut app.store, &email, book)?;
    println!("{} {} ({})", "↓".green(), book.download_name(), book.file);
    notify(
        Level::Success,
        &format!("\"{}\" downloaded successfully", book.title),
    );
    Ok(())
}

/// Handle the 'downloads' command
fn handle_downloads(app: &App) {
    let Some(email) = app.logged_in_email("see your downloads") else {
        return;
    };
    let history = app.downloads.list(&email);
    if history.is_empty() {
        notify(Level::Info, "No downloads yet");
        return;
    }
    for record in history {
        println!(
            "{}  {} {}",
            record.timestamp.format("%Y-%m-%d %H:%M").to_string().dimmed(),
            record.book.cover,
            record.book.title
        );
    }
}
