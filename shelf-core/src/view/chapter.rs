//! Expandable chapter item

use super::escape_html;
use crate::strings::Strings;

/// One chapter row; holds no state of its own
///
/// `toggle_action` is the form target that flips this chapter's expansion.
#[derive(Debug, Clone, Copy)]
pub struct ChapterItem<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub summary: &'a str,
    pub audio_url: Option<&'a str>,
    pub expanded: bool,
    pub toggle_action: &'a str,
}

impl ChapterItem<'_> {
    pub fn render(&self, strings: &Strings) -> String {
        let id = escape_html(self.id);
        let arrow = if self.expanded { "▲" } else { "▼" };

        let mut html = format!("<div class=\"chapter\" id=\"{id}\">\n");
        html.push_str(&format!(
            "<form method=\"post\" action=\"{action}\">\n\
             <button type=\"submit\" class=\"chapter-header\" aria-expanded=\"{expanded}\" aria-controls=\"{id}-content\">\
             <span class=\"chapter-title\">{title}</span><span class=\"arrow\">{arrow}</span></button>\n\
             </form>\n",
            action = escape_html(self.toggle_action),
            expanded = self.expanded,
            title = escape_html(self.title),
        ));

        if self.expanded {
            html.push_str(&format!(
                "<div id=\"{id}-content\" class=\"chapter-body\" role=\"region\" aria-labelledby=\"{id}\">\n\
                 <div class=\"summary-container\"><p class=\"summary-text\">{summary}</p></div>\n\
                 <audio controls class=\"audio-player\" preload=\"metadata\">\
                 <source src=\"{src}\" type=\"audio/mpeg\"/>{fallback}</audio>\n\
                 </div>\n",
                summary = escape_html(self.summary),
                src = escape_html(self.audio_url.unwrap_or_default()),
                fallback = escape_html(strings.audio_unsupported),
            ));
        }

        html.push_str("</div>\n");
        html
    }
}
