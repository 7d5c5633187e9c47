//! Fixed, localized user-facing text

use crate::error::ConfigError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Fa,
    En,
}

impl Locale {
    /// BCP 47 language tag for the `lang` attribute
    pub fn tag(self) -> &'static str {
        match self {
            Locale::Fa => "fa",
            Locale::En => "en",
        }
    }

    /// Text direction for the `dir` attribute
    pub fn direction(self) -> &'static str {
        match self {
            Locale::Fa => "rtl",
            Locale::En => "ltr",
        }
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "fa" | "fa-ir" => Ok(Locale::Fa),
            "en" | "en-us" | "en-gb" => Ok(Locale::En),
            other => Err(ConfigError::UnsupportedLocale(other.to_string())),
        }
    }
}

/// Every fixed string the views and screens display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strings {
    pub locale: Locale,
    pub library_title: &'static str,
    pub switch_to_light: &'static str,
    pub switch_to_dark: &'static str,
    pub light_theme: &'static str,
    pub dark_theme: &'static str,
    pub welcome: &'static str,
    /// Appended to the welcome line, `{}` replaced by the book count
    pub books_available: &'static str,
    pub loading_books: &'static str,
    pub loading_book: &'static str,
    pub list_load_failed: &'static str,
    pub book_not_found: &'static str,
    pub book_load_failed: &'static str,
    pub showing_saved_data: &'static str,
    pub retry: &'static str,
    pub back_to_library: &'static str,
    pub author_label: &'static str,
    pub year_label: &'static str,
    pub view_details: &'static str,
    pub cover_alt_prefix: &'static str,
    pub about_book: &'static str,
    pub chapters_title: &'static str,
    pub chapters_hint: &'static str,
    pub no_chapters: &'static str,
    /// `{}` replaced by the chapter count
    pub chapter_count: &'static str,
    pub has_audio: &'static str,
    pub no_audio: &'static str,
    pub audio_unsupported: &'static str,
    pub footer: &'static str,
}

impl Strings {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Fa => Self::persian(),
            Locale::En => Self::english(),
        }
    }

    pub fn persian() -> Self {
        Self {
            locale: Locale::Fa,
            library_title: "📚 کتابخانه برنامه‌نویسی",
            switch_to_light: "تغییر به تم روشن",
            switch_to_dark: "تغییر به تم تاریک",
            light_theme: "تم روشن",
            dark_theme: "تم تاریک",
            welcome: "به کتابخانه دیجیتال برنامه‌نویسی خوش آمدید.",
            books_available: "{} کتاب موجود است.",
            loading_books: "در حال بارگذاری کتاب‌ها...",
            loading_book: "در حال بارگذاری اطلاعات کتاب...",
            list_load_failed: "خطا در بارگذاری کتاب‌ها. لطفاً دوباره تلاش کنید.",
            book_not_found: "کتاب مورد نظر یافت نشد",
            book_load_failed: "خطا در بارگذاری اطلاعات کتاب",
            showing_saved_data: "(نمایش اطلاعات ذخیره شده)",
            retry: "تلاش مجدد",
            back_to_library: "بازگشت به کتابخانه",
            author_label: "نویسنده:",
            year_label: "سال انتشار:",
            view_details: "📖 مشاهده جزئیات",
            cover_alt_prefix: "جلد کتاب",
            about_book: "📝 درباره کتاب",
            chapters_title: "📖 فصول کتاب",
            chapters_hint: "روی عنوان هر فصل کلیک کنید تا خلاصه و فایل صوتی آن را مشاهده کنید",
            no_chapters: "هیچ فصلی برای این کتاب ثبت نشده است.",
            chapter_count: "تعداد فصل‌ها: {}",
            has_audio: "دارای فایل صوتی",
            no_audio: "بدون فایل صوتی",
            audio_unsupported: "مرورگر شما از پخش صوتی پشتیبانی نمی‌کند.",
            footer: "با ❤️ ساخته شد تا یادگیری را لذت‌بخش‌تر کنیم",
        }
    }

    pub fn english() -> Self {
        Self {
            locale: Locale::En,
            library_title: "📚 Programming Library",
            switch_to_light: "Switch to light theme",
            switch_to_dark: "Switch to dark theme",
            light_theme: "Light theme",
            dark_theme: "Dark theme",
            welcome: "Welcome to the digital programming library.",
            books_available: "{} books available.",
            loading_books: "Loading books...",
            loading_book: "Loading book details...",
            list_load_failed: "Could not load books. Please try again.",
            book_not_found: "Book not found",
            book_load_failed: "Could not load book details",
            showing_saved_data: "(showing saved data)",
            retry: "Try again",
            back_to_library: "Back to library",
            author_label: "Author:",
            year_label: "Published:",
            view_details: "📖 View details",
            cover_alt_prefix: "Cover of",
            about_book: "📝 About this book",
            chapters_title: "📖 Chapters",
            chapters_hint: "Select a chapter title to see its summary and audio",
            no_chapters: "No chapters have been recorded for this book.",
            chapter_count: "Chapters: {}",
            has_audio: "Has audio",
            no_audio: "No audio",
            audio_unsupported: "Your browser does not support audio playback.",
            footer: "Made with ❤️ to make learning more enjoyable",
        }
    }

    /// Fill the single `{}` slot of a template
    pub fn fill(template: &str, value: impl std::fmt::Display) -> String {
        template.replacen("{}", &value.to_string(), 1)
    }
}

impl Default for Strings {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}
