//! Book list page

use super::{action_button, cover_image, escape_html, header, loading_page, loading_state, page};
use crate::router::Route;
use crate::screen::{BookListScreen, Branch};
use crate::strings::Strings;
use crate::theme::Theme;
use crate::types::BookSummary;

const CARD_COVER: (u32, u32) = (200, 300);

pub fn render_list(screen: &BookListScreen, theme: Theme, strings: &Strings) -> String {
    let mut body = String::from("<div class=\"book-list-container\">\n");
    body.push_str(&header(theme, strings, &Route::List));

    match screen.branch() {
        Branch::Loading => {
            body.push_str(&loading_state(strings.loading_books));
            body.push_str("</div>\n");
            return loading_page(theme, strings, &body);
        }
        Branch::Failed(message) => {
            body.push_str(&intro(0, strings));
            body.push_str(&format!(
                "<div class=\"error-section\">\n<p class=\"error-text\">{}</p>\n",
                escape_html(message)
            ));
            body.push_str(&action_button(
                &Route::List.retry_href(),
                "retry-button",
                strings.retry,
            ));
            body.push_str("</div>\n");
            body.push_str("<div class=\"books-grid\">\n</div>\n");
        }
        Branch::Ready { data: books, .. } => {
            body.push_str(&intro(books.len(), strings));
            body.push_str("<div class=\"books-grid\">\n");
            for book in books {
                body.push_str(&book_card(book, theme, strings));
            }
            body.push_str("</div>\n");
        }
    }

    body.push_str(&format!(
        "<footer class=\"footer\">\n<p class=\"footer-text\">{}</p>\n</footer>\n</div>\n",
        escape_html(strings.footer)
    ));
    page(theme, strings, strings.library_title, &body)
}

fn intro(count: usize, strings: &Strings) -> String {
    let mut text = strings.welcome.to_string();
    if count > 0 {
        text.push(' ');
        text.push_str(&Strings::fill(strings.books_available, count));
    }
    format!(
        "<div class=\"intro-section\">\n<p class=\"intro-text\">{}</p>\n</div>\n",
        escape_html(&text)
    )
}

fn book_card(book: &BookSummary, theme: Theme, strings: &Strings) -> String {
    let year = book
        .year
        .map(|y| format!("<span class=\"book-year\">📅 {y}</span>"))
        .unwrap_or_default();

    format!(
        "<a class=\"book-card\" href=\"{href}\" data-book-id=\"{id}\">\n\
         <div class=\"book-cover-wrapper\">{cover}</div>\n\
         <div class=\"book-info\">\n\
         <h3 class=\"book-title\">{title}</h3>\n\
         <p class=\"book-author\">{author_label} {author}</p>\n\
         <p class=\"book-description\">{description}</p>\n\
         <div class=\"book-meta\">{year}<span class=\"book-chapters\">{details}</span></div>\n\
         </div>\n</a>\n",
        href = escape_html(&Route::detail(&book.id).href()),
        id = escape_html(&book.id),
        cover = cover_image(&book.cover_url, &book.title, CARD_COVER, theme, strings),
        title = escape_html(&book.title),
        author_label = escape_html(strings.author_label),
        author = escape_html(&book.author),
        description = escape_html(&book.description),
        details = escape_html(strings.view_details),
    )
}
