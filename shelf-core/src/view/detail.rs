//! Book detail page

use super::{
    action_button, cover_image, escape_html, header, loading_page, loading_state, page, ChapterItem,
};
use crate::router::Route;
use crate::screen::{BookDetailScreen, Branch};
use crate::strings::Strings;
use crate::theme::Theme;
use crate::types::Book;

const DETAIL_COVER: (u32, u32) = (300, 400);

pub fn render_detail(screen: &BookDetailScreen, theme: Theme, strings: &Strings) -> String {
    let route = Route::detail(screen.book_id());

    match screen.branch() {
        Branch::Loading => {
            let mut body = String::from("<div class=\"book-detail-container\">\n");
            body.push_str(&header(theme, strings, &route));
            body.push_str(&loading_state(strings.loading_book));
            body.push_str("</div>\n");
            loading_page(theme, strings, &body)
        }
        Branch::Failed(message) => {
            let body = format!(
                "<div class=\"not-found\">\n<h2>📖 {}</h2>\n\
                 <a class=\"back-button\" href=\"{}\">{}</a>\n{}</div>\n",
                escape_html(message),
                escape_html(&Route::List.href()),
                escape_html(strings.back_to_library),
                action_button(&route.retry_href(), "retry-button", strings.retry),
            );
            page(theme, strings, message, &body)
        }
        Branch::Ready { data: book, banner } => {
            let mut body = String::from("<div class=\"book-detail-container\">\n");
            body.push_str(&header(theme, strings, &route));
            body.push_str(&book_header(book, theme, strings));
            body.push_str(&chapters(screen, book, banner, strings));
            body.push_str(&footer(book, strings));
            body.push_str("</div>\n");
            page(theme, strings, &book.title, &body)
        }
    }
}

fn book_header(book: &Book, theme: Theme, strings: &Strings) -> String {
    let year = book.year.map(|y| y.to_string()).unwrap_or_default();
    format!(
        "<div class=\"book-header\">\n\
         <div class=\"book-cover-container\">{cover}</div>\n\
         <div class=\"book-info\">\n\
         <h1 class=\"book-title\">{title}</h1>\n\
         <div class=\"book-meta\">\n\
         <div class=\"meta-item\"><span class=\"meta-label\">{author_label}</span><span class=\"meta-value book-author\">{author}</span></div>\n\
         <div class=\"meta-item\"><span class=\"meta-label\">{year_label}</span><span class=\"meta-value book-year\">{year}</span></div>\n\
         </div>\n\
         <div class=\"book-description\">\n<h3>{about}</h3>\n<p>{description}</p>\n</div>\n\
         </div>\n</div>\n",
        cover = cover_image(&book.cover_url, &book.title, DETAIL_COVER, theme, strings),
        title = escape_html(&book.title),
        author_label = escape_html(strings.author_label),
        author = escape_html(&book.author),
        year_label = escape_html(strings.year_label),
        about = escape_html(strings.about_book),
        description = escape_html(&book.description),
    )
}

fn chapters(
    screen: &BookDetailScreen,
    book: &Book,
    banner: Option<&str>,
    strings: &Strings,
) -> String {
    let mut html = format!(
        "<main class=\"content\">\n<div class=\"chapters-header\">\n\
         <h2 class=\"chapters-title\">{}</h2>\n<p class=\"chapters-subtitle\">{}</p>\n</div>\n",
        escape_html(strings.chapters_title),
        escape_html(strings.chapters_hint),
    );

    if let Some(message) = banner {
        html.push_str(&format!(
            "<div class=\"error-section\" role=\"alert\">\n<p class=\"error-text\">{} {}</p>\n{}</div>\n",
            escape_html(message),
            escape_html(strings.showing_saved_data),
            action_button(
                &Route::detail(screen.book_id()).retry_href(),
                "retry-button",
                strings.retry
            ),
        ));
    }

    html.push_str("<div class=\"chapters-list\">\n");
    for chapter in &book.chapters {
        let toggle_action = Route::chapter_toggle_href(screen.book_id(), &chapter.id);
        let item = ChapterItem {
            id: &chapter.id,
            title: &chapter.title,
            summary: &chapter.summary,
            audio_url: chapter.audio_url.as_deref(),
            expanded: screen.expansion().is_expanded(&chapter.id),
            toggle_action: &toggle_action,
        };
        html.push_str(&item.render(strings));
    }
    if book.chapters.is_empty() {
        html.push_str(&format!(
            "<div class=\"no-chapters\"><p>{}</p></div>\n",
            escape_html(strings.no_chapters)
        ));
    }
    html.push_str("</div>\n</main>\n");
    html
}

fn footer(book: &Book, strings: &Strings) -> String {
    let audio = if book.has_audio() {
        strings.has_audio
    } else {
        strings.no_audio
    };
    format!(
        "<footer class=\"footer\">\n\
         <a class=\"back-to-library\" href=\"{href}\">{back}</a>\n\
         <div class=\"book-stats\">\n\
         <span class=\"stat-item chapter-count\">{count}</span>\n\
         <span class=\"stat-item audio-status\">{audio}</span>\n\
         </div>\n</footer>\n",
        href = escape_html(&Route::List.href()),
        back = escape_html(strings.back_to_library),
        count = escape_html(&Strings::fill(strings.chapter_count, book.chapter_count())),
        audio = escape_html(audio),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use crate::types::Chapter;

    fn loaded_screen(strings: &Strings) -> BookDetailScreen {
        let mut book = Book::new("9", "Zero To Production");
        book.author = "Luca Palmieri".to_string();
        book.year = Some(2022);
        book.add_chapter(Chapter::new("a", "Getting Started").with_summary("Toolchain"));
        book.add_chapter(Chapter::new("b", "Sign Up").with_audio("https://cdn/b.mp3"));

        let mut screen = BookDetailScreen::new("9");
        let ticket = screen.begin_fetch();
        screen.finish(ticket, Ok(book), strings);
        screen
    }

    #[test]
    fn test_loading_view_refreshes() {
        let strings = Strings::english();
        let mut screen = BookDetailScreen::new("9");
        screen.begin_fetch();

        let html = render_detail(&screen, Theme::Light, &strings);
        assert!(html.contains(strings.loading_book));
        assert!(html.contains("http-equiv=\"refresh\""));
    }

    #[test]
    fn test_ready_view() {
        let strings = Strings::english();
        let mut screen = loaded_screen(&strings);
        screen.toggle_chapter("a");

        let html = render_detail(&screen, Theme::Light, &strings);
        assert!(html.contains("Zero To Production"));
        assert!(html.contains("Luca Palmieri"));
        assert_eq!(html.matches("class=\"chapter\"").count(), 2);
        assert_eq!(html.matches("<audio").count(), 1);
        assert!(html.contains("Toolchain"));
        assert!(html.contains("action=\"/books/book/9/chapters/b\""));
        assert!(html.contains("Chapters: 2"));
        assert!(html.contains(strings.has_audio));
        assert!(!html.contains(strings.showing_saved_data));
    }

    #[test]
    fn test_not_found_view() {
        let strings = Strings::english();
        let mut screen = BookDetailScreen::new("404");
        let ticket = screen.begin_fetch();
        screen.finish(ticket, Err(FetchError::NotFound), &strings);

        let html = render_detail(&screen, Theme::Light, &strings);
        assert!(html.contains(strings.book_not_found));
        assert!(html.contains("href=\"/books/\""));
        assert!(html.contains("action=\"/books/book/404/retry\""));
        assert!(!html.contains("chapters-list"));
    }

    #[test]
    fn test_stale_banner_alongside_chapters() {
        let strings = Strings::english();
        let mut screen = loaded_screen(&strings);
        let ticket = screen.begin_fetch();
        screen.finish(ticket, Err(FetchError::Status(500)), &strings);

        let html = render_detail(&screen, Theme::Light, &strings);
        assert!(html.contains(strings.book_load_failed));
        assert!(html.contains(strings.showing_saved_data));
        assert_eq!(html.matches("class=\"chapter\"").count(), 2);
    }

    #[test]
    fn test_empty_book() {
        let strings = Strings::english();
        let mut screen = BookDetailScreen::new("e");
        let ticket = screen.begin_fetch();
        screen.finish(ticket, Ok(Book::new("e", "Empty")), &strings);

        let html = render_detail(&screen, Theme::Light, &strings);
        assert!(html.contains(strings.no_chapters));
        assert!(html.contains("Chapters: 0"));
        assert!(html.contains(strings.no_audio));
    }
}
