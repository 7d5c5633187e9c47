//! HTML rendering for the screens
//!
//! Every function here is a pure mapping from state to markup. Interactions
//! are plain HTML forms that post to the routes in [`crate::router`].

mod chapter;
mod detail;
mod list;

pub use chapter::ChapterItem;
pub use detail::render_detail;
pub use list::render_list;

use crate::router::{Route, Screen};
use crate::strings::Strings;
use crate::theme::Theme;

/// Render whichever screen is mounted as a complete page
pub fn render_screen(screen: &Screen, theme: Theme, strings: &Strings) -> String {
    match screen {
        Screen::List(list) => render_list(list, theme, strings),
        Screen::Detail(detail) => render_detail(detail, theme, strings),
    }
}

/// Wrap a body in the document shell
///
/// The theme marker goes on the root element so styling can react to it.
pub fn page(theme: Theme, strings: &Strings, title: &str, body: &str) -> String {
    document(theme, strings, title, "", body)
}

/// Seconds before a page showing a fetch in flight reloads itself
pub const LOADING_REFRESH_SECS: u32 = 1;

/// Document shell for a screen whose fetch has not finished
///
/// Another request owns the fetch, so the page polls until it lands.
pub(crate) fn loading_page(theme: Theme, strings: &Strings, body: &str) -> String {
    let refresh = format!("<meta http-equiv=\"refresh\" content=\"{LOADING_REFRESH_SECS}\"/>\n");
    document(theme, strings, strings.library_title, &refresh, body)
}

fn document(theme: Theme, strings: &Strings, title: &str, head: &str, body: &str) -> String {
    let (attr, value) = theme.root_attribute();
    format!(
        "<!DOCTYPE html>\n<html lang=\"{lang}\" dir=\"{dir}\" {attr}=\"{value}\">\n<head>\n\
         <meta charset=\"utf-8\"/>\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\n\
         {head}<title>{title}</title>\n</head>\n<body>\n<div class=\"app\">\n{body}</div>\n</body>\n</html>\n",
        lang = strings.locale.tag(),
        dir = strings.locale.direction(),
        title = escape_html(title),
    )
}

/// Library header with the theme toggle
///
/// `return_to` is where the toggle sends the user back to.
pub fn header(theme: Theme, strings: &Strings, return_to: &Route) -> String {
    let (label, tooltip, glyph) = if theme.is_dark() {
        (strings.switch_to_light, strings.light_theme, "☀️")
    } else {
        (strings.switch_to_dark, strings.dark_theme, "🌓")
    };

    format!(
        "<header class=\"header\">\n\
         <h1 class=\"library-title\">{title}</h1>\n\
         <form method=\"post\" action=\"{action}\" class=\"theme-form\">\n\
         <input type=\"hidden\" name=\"return_to\" value=\"{back}\"/>\n\
         <button type=\"submit\" class=\"theme-toggle\" aria-label=\"{label}\" title=\"{tooltip}\">{glyph}</button>\n\
         </form>\n</header>\n",
        title = escape_html(strings.library_title),
        action = escape_html(&Route::theme_toggle_href()),
        back = escape_html(&return_to.href()),
        label = escape_html(label),
        tooltip = escape_html(tooltip),
    )
}

pub(crate) fn loading_state(message: &str) -> String {
    format!(
        "<div class=\"loading-state\">\n<div class=\"spinner\"></div>\n<p>{}</p>\n</div>\n",
        escape_html(message)
    )
}

/// A form with a single submit button posting to `action`
pub(crate) fn action_button(action: &str, class: &str, label: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{}\"><button type=\"submit\" class=\"{}\">{}</button></form>\n",
        escape_html(action),
        class,
        escape_html(label)
    )
}

/// `<img>` for a cover with a placeholder fallback when the image fails to load
pub(crate) fn cover_image(
    src: &str,
    title: &str,
    (width, height): (u32, u32),
    theme: Theme,
    strings: &Strings,
) -> String {
    let fallback = placeholder_cover_url(width, height, theme, title);
    format!(
        "<img src=\"{src}\" alt=\"{alt}\" class=\"book-cover\" onerror=\"{onerror}\"/>",
        src = escape_html(src),
        alt = escape_html(&format!("{} {}", strings.cover_alt_prefix, title)),
        onerror = escape_html(&format!("this.onerror=null;this.src='{fallback}';")),
    )
}

/// Placeholder image showing the first 30 characters of the title
pub fn placeholder_cover_url(width: u32, height: u32, theme: Theme, title: &str) -> String {
    let (background, foreground) = if theme.is_dark() {
        ("1e1e1e", "e0e0e0")
    } else {
        ("f5f5f5", "333333")
    };
    let text: String = title.chars().take(30).collect();
    format!(
        "https://via.placeholder.com/{width}x{height}/{background}/{foreground}?text={}",
        urlencoding::encode(&text)
    )
}

/// Escape text for HTML content and double-quoted attributes
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
