use crate::core::{DashboardView, MenuItem, Profile};
use std::fmt::Write;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="id">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Dashboard Akun</title>
<style>
body { font-family: system-ui, sans-serif; margin: 0; background: #f4f6fb; color: #1d2433; }
main { max-width: 960px; margin: 0 auto; padding: 24px; }
.card { background: #fff; border-radius: 12px; padding: 20px; margin-bottom: 24px; box-shadow: 0 1px 3px rgba(0,0,0,.08); }
.profile dl { display: grid; grid-template-columns: max-content 1fr; gap: 8px 16px; margin: 0; }
.profile dt { color: #5b6478; }
.menu { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 16px; list-style: none; padding: 0; }
.menu li { background: #fff; border-radius: 12px; padding: 16px; box-shadow: 0 1px 3px rgba(0,0,0,.08); }
.menu .icon { font-size: 1.6em; }
.error { border-left: 4px solid #d64545; }
</style>
</head>
<body>
<main>
"#;

const PAGE_TAIL: &str = "</main>\n</body>\n</html>\n";

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Renders the full dashboard page.
pub fn render_dashboard(view: &DashboardView) -> String {
    let mut html = String::from(PAGE_HEAD);

    match &view.profile {
        Some(profile) => render_profile(&mut html, profile),
        None => html.push_str(
            "<section class=\"card profile\" id=\"profile\">\n<h1>Tidak ada akun aktif</h1>\n\
             <p>Silakan login terlebih dahulu melalui menu Login/Ganti akun.</p>\n</section>\n",
        ),
    }

    render_menu(&mut html, view.menu_items);
    html.push_str(PAGE_TAIL);
    html
}

fn render_profile(html: &mut String, profile: &Profile) {
    // write! 到 String 不會失敗
    let _ = write!(
        html,
        "<section class=\"card profile\" id=\"profile\">\n<h1>{number}</h1>\n<dl>\n\
         <dt>Tipe</dt><dd>{subscription_type}</dd>\n\
         <dt>Pulsa</dt><dd>Rp {balance}</dd>\n\
         <dt>Masa aktif</dt><dd>{expired_at}</dd>\n\
         <dt>Loyalty</dt><dd>{loyalty}</dd>\n</dl>\n</section>\n",
        number = escape_html(&profile.number),
        subscription_type = escape_html(profile.subscription_type.as_str()),
        balance = profile.balance,
        expired_at = escape_html(&profile.balance_expired_at),
        loyalty = escape_html(&profile.loyalty_summary()),
    );
}

fn render_menu(html: &mut String, items: &[MenuItem]) {
    html.push_str("<ul class=\"menu\" id=\"menu\">\n");
    for item in items {
        let _ = write!(
            html,
            "<li data-action=\"{id}\"><span class=\"icon\">{icon}</span>\n\
             <h2>{label}</h2>\n<p>{description}</p></li>\n",
            id = escape_html(item.id),
            icon = escape_html(item.icon),
            label = escape_html(item.label),
            description = escape_html(item.description),
        );
    }
    html.push_str("</ul>\n");
}

/// Generic page shown when the profile could not be built.
pub fn render_error_page() -> String {
    let mut html = String::from(PAGE_HEAD);
    html.push_str(
        "<section class=\"card error\">\n<h1>Terjadi kesalahan</h1>\n\
         <p>Data akun tidak dapat dimuat saat ini. Silakan coba lagi nanti.</p>\n</section>\n",
    );
    html.push_str(PAGE_TAIL);
    html
}
