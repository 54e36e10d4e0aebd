//! HTML views
//!
//! Each page is a [`View`] value naming its template and carrying its data;
//! handlers return views and [`View::render`] turns them into markup.
//!
//! Genre names are escaped once, when the form is validated, and are written
//! into pages as stored. Everything else (URLs, book text, messages) goes
//! through [`escape`] here.

use axum::http::StatusCode;
use catalog_core::{types::BookSummary, validation::FieldError, Genre};
use std::fmt::Write;

pub use catalog_core::validation::escape;

/// Genre list URL, also the landing page after a delete
pub const GENRE_LIST_URL: &str = "/catalog/genres";

/// URL of the genre create form
pub const GENRE_CREATE_URL: &str = "/catalog/genre/create";

/// A page to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// All genres, ordered by name
    GenreList { genres: Vec<Genre> },

    /// One genre and the books filed under it
    GenreDetail {
        genre: Genre,
        books: Vec<BookSummary>,
    },

    /// Create/update form, optionally pre-filled, with validation errors
    GenreForm {
        title: &'static str,
        name: Option<String>,
        errors: Vec<FieldError>,
    },

    /// Delete confirmation; non-empty `books` means the delete is blocked
    GenreDelete {
        genre: Genre,
        books: Vec<BookSummary>,
    },
}

impl View {
    /// Template name the view corresponds to
    pub fn template(&self) -> &'static str {
        match self {
            View::GenreList { .. } => "genre_list",
            View::GenreDetail { .. } => "genre_detail",
            View::GenreForm { .. } => "genre_form",
            View::GenreDelete { .. } => "genre_delete",
        }
    }

    /// Page title
    pub fn title(&self) -> &'static str {
        match self {
            View::GenreList { .. } => "Genre List",
            View::GenreDetail { .. } => "Genre Detail",
            View::GenreForm { title, .. } => *title,
            View::GenreDelete { .. } => "Delete Genre",
        }
    }

    /// Render the full HTML document
    pub fn render(&self) -> String {
        let mut body = String::new();
        match self {
            View::GenreList { genres } => render_list(&mut body, genres),
            View::GenreDetail { genre, books } => render_detail(&mut body, genre, books),
            View::GenreForm { name, errors, .. } => render_form(&mut body, name.as_deref(), errors),
            View::GenreDelete { genre, books } => render_delete(&mut body, genre, books),
        }
        layout(self.title(), &body)
    }
}

/// Generic error page used by the shared error responder
pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        "<p class=\"error-message\">{}</p>\n<p class=\"error-status\">{}</p>\n",
        escape(message),
        status.as_u16()
    );
    layout("Error", &body)
}

fn layout(title: &str, body: &str) -> String {
    let title = escape(title);
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         <nav>\n\
         <a href=\"{list}\">All genres</a>\n\
         <a href=\"{create}\">Create new genre</a>\n\
         </nav>\n\
         <main>\n\
         <h1>{title}</h1>\n\
         {body}\
         </main>\n\
         </body>\n\
         </html>\n",
        list = GENRE_LIST_URL,
        create = GENRE_CREATE_URL,
    )
}

fn render_list(out: &mut String, genres: &[Genre]) {
    if genres.is_empty() {
        out.push_str("<p>There are no genres.</p>\n");
        return;
    }
    out.push_str("<ul class=\"genres\">\n");
    for genre in genres {
        let _ = writeln!(
            out,
            "<li><a href=\"{}\">{}</a></li>",
            escape(&genre.url()),
            genre.name
        );
    }
    out.push_str("</ul>\n");
}

fn render_books(out: &mut String, books: &[BookSummary]) {
    out.push_str("<dl class=\"books\">\n");
    for book in books {
        let _ = writeln!(
            out,
            "<dt><a href=\"{}\">{}</a></dt>\n<dd>{}</dd>",
            escape(&book.url()),
            escape(&book.title),
            escape(&book.summary)
        );
    }
    out.push_str("</dl>\n");
}

fn render_detail(out: &mut String, genre: &Genre, books: &[BookSummary]) {
    let _ = writeln!(out, "<h2 class=\"genre-name\">{}</h2>", genre.name);
    out.push_str("<h3>Books</h3>\n");
    if books.is_empty() {
        out.push_str("<p>This genre has no books.</p>\n");
    } else {
        render_books(out, books);
    }
    let _ = writeln!(
        out,
        "<p><a href=\"{url}/update\">Update genre</a> <a href=\"{url}/delete\">Delete genre</a></p>",
        url = escape(&genre.url())
    );
}

/// `name` is already escaped, either by validation or as stored
fn render_form(out: &mut String, name: Option<&str>, errors: &[FieldError]) {
    let _ = writeln!(
        out,
        "<form method=\"POST\">\n\
         <label for=\"name\">Genre:</label>\n\
         <input id=\"name\" type=\"text\" name=\"name\" placeholder=\"Fantasy, Poetry etc.\" required value=\"{}\">\n\
         <button type=\"submit\">Submit</button>\n\
         </form>",
        name.unwrap_or_default()
    );
    if !errors.is_empty() {
        out.push_str("<ul class=\"errors\">\n");
        for error in errors {
            let _ = writeln!(out, "<li>{}</li>", escape(&error.message));
        }
        out.push_str("</ul>\n");
    }
}

fn render_delete(out: &mut String, genre: &Genre, books: &[BookSummary]) {
    let _ = writeln!(out, "<h2 class=\"genre-name\">{}</h2>", genre.name);
    if books.is_empty() {
        let _ = writeln!(
            out,
            "<p>Do you really want to delete this genre?</p>\n\
             <form method=\"POST\">\n\
             <input type=\"hidden\" name=\"genreid\" value=\"{}\">\n\
             <button type=\"submit\">Delete</button>\n\
             </form>",
            escape(genre.id.as_str())
        );
    } else {
        out.push_str("<p>Delete the following books before attempting to delete this genre.</p>\n");
        render_books(out, books);
    }
}
