//! Page shell shared by every view: navigation, search box and flash.

use crate::presentation::http::flash::FlashMessage;
use crate::shared::html::escape;

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;color:#222;background:#fafafa}\
nav{background:#1f2937;padding:.75rem 1.5rem;display:flex;gap:1.25rem;align-items:center;flex-wrap:wrap}\
nav a{color:#f9fafb;text-decoration:none}\
nav form{margin-left:auto}\
main{max-width:960px;margin:0 auto;padding:1.5rem}\
.flash{padding:.75rem 1rem;border-radius:4px;margin-bottom:1rem}\
.flash.success{background:#dcfce7}\
.flash.error{background:#fee2e2}\
.genre{display:inline-block;background:#e5e7eb;border-radius:3px;padding:0 .4rem;margin-right:.3rem}\
.cards{display:flex;flex-wrap:wrap;gap:1rem}\
.card{background:#fff;border:1px solid #e5e7eb;border-radius:4px;padding:.75rem;width:200px}\
.thumb{max-width:100%}\
.field-error{color:#b91c1c;font-size:.9rem}\
.inline{display:inline}\
button.danger{background:#b91c1c;color:#fff;border:0;padding:.4rem .8rem;border-radius:3px}\
label{display:block;margin-top:.75rem}\
";

/// Where the nav search box submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchTarget {
    #[default]
    Venues,
    Artists,
}

impl SearchTarget {
    fn action(self) -> &'static str {
        match self {
            SearchTarget::Venues => "/venues/search",
            SearchTarget::Artists => "/artists/search",
        }
    }

    fn placeholder(self) -> &'static str {
        match self {
            SearchTarget::Venues => "Find a venue",
            SearchTarget::Artists => "Find an artist",
        }
    }
}

pub struct Page<'a> {
    pub title: &'a str,
    pub flash: Option<&'a FlashMessage>,
    pub search: SearchTarget,
}

impl<'a> Page<'a> {
    pub fn new(title: &'a str, flash: Option<&'a FlashMessage>) -> Self {
        Self {
            title,
            flash,
            search: SearchTarget::default(),
        }
    }

    pub fn searching(mut self, search: SearchTarget) -> Self {
        self.search = search;
        self
    }

    pub fn render(&self, body: &str) -> String {
        let flash = match self.flash {
            Some(f) => format!(
                r#"<div class="flash {}" role="status">{}</div>"#,
                f.level.as_str(),
                escape(&f.message)
            ),
            None => String::new(),
        };

        format!(
            r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | Booking Directory</title>
<style>{style}</style>
</head>
<body>
<nav>
<a href="/"><strong>Booking Directory</strong></a>
<a href="/venues">Venues</a>
<a href="/artists">Artists</a>
<a href="/shows">Shows</a>
<form method="post" action="{action}"><input type="search" name="search_term" placeholder="{placeholder}" aria-label="{placeholder}"></form>
</nav>
<main>
{flash}{body}
</main>
</body>
</html>"#,
            title = escape(self.title),
            style = STYLE,
            action = self.search.action(),
            placeholder = self.search.placeholder(),
            flash = flash,
            body = body
        )
    }
}
