//! HTML page assembly.
//!
//! Every page shares one shell ([`render_page`]): head with icon, stylesheet
//! and deferred script, a sticky header with the site brand and theme toggle,
//! `<main>` with the page `<h1>`, a footer stamped with the build time, and a
//! floating back-to-top button.
//!
//! ## Generated Pages
//!
//! - **Index page** (`/index.html`): one card per month, newest month first
//! - **Month pages** (`/{YYYYMM}/index.html`): filter box, table of contents,
//!   and one `<article>` per entry anchored by its `YYYYMMDD` id
//!
//! Markup is built with [maud](https://maud.lambda.xyz/), so every
//! interpolated string is escaped. Entry bodies come pre-rendered from
//! [`crate::render`] and go in as `PreEscaped`.

use crate::config::SiteConfig;
use crate::types::{Entry, Month, MonthSummary};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use maud::{DOCTYPE, Markup, PreEscaped, html};

const WEEKDAYS_JA: [&str; 7] = ["月", "火", "水", "木", "金", "土", "日"];

/// Per-page values that vary between the index and the month pages.
#[derive(Debug, Clone, Copy)]
pub struct PageMeta<'a> {
    pub title: &'a str,
    pub description: &'a str,
    /// Relative path from the page to the output root, e.g. `"./"` or `"../"`.
    pub asset_base: &'a str,
}

/// Ensure a non-empty asset base ends with `/` so it can be prefixed directly.
pub fn normalize_asset_base(base: &str) -> String {
    if base.is_empty() || base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    }
}

/// Build timestamp as shown in the footer, second precision.
pub fn format_timestamp(built_at: NaiveDateTime) -> String {
    built_at.format("%Y-%m-%dT%H:%M:%S").to_string()
}

fn weekday_ja(date: NaiveDate) -> &'static str {
    WEEKDAYS_JA[date.weekday().num_days_from_monday() as usize]
}

fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

// ============================================================================
// Shell
// ============================================================================

/// Wrap a body fragment in the shared page shell.
pub fn render_page(
    site: &SiteConfig,
    page: &PageMeta,
    built_at: NaiveDateTime,
    body: Markup,
) -> Markup {
    let base = normalize_asset_base(page.asset_base);

    html! {
        (DOCTYPE)
        html lang="ja" data-page-title=(page.title) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (page.title) }
                meta name="description" content=(page.description);
                link rel="icon" href={ (base) "assets/favicon.svg" };
                link rel="stylesheet" href={ (base) "assets/style.css" };
                script defer src={ (base) "assets/app.js" } {}
            }
            body {
                a.skip-link href="#main" { "本文へスキップ" }
                header.site {
                    div.container.site-inner {
                        div.brand {
                            a href={ (base) "index.html" } { (site.title) }
                        }
                        div.grow {}
                        div.toolbar {
                            button #theme-toggle.btn.theme-toggle aria-label="テーマ切り替え" {
                                span #theme-label { "テーマ" }
                            }
                        }
                    }
                }
                main #main.container {
                    h1.page-title { (page.title) }
                    (body)
                }
                footer.site {
                    div.container {
                        div { "最終更新: " (format_timestamp(built_at)) }
                        div { (site.credit) }
                    }
                }
                button #back-to-top.back-to-top aria-label="トップへ戻る" { "▲" }
            }
        }
    }
}

// ============================================================================
// Month page
// ============================================================================

fn render_entry(entry: &Entry) -> Markup {
    let iso = iso_date(entry.date);
    html! {
        article.card.entry id=(entry.id) {
            header {
                h2 {
                    a href={ "#" (entry.id) } { (iso) "（" (weekday_ja(entry.date)) "）" }
                }
                time datetime=(iso) { (iso) }
                div.tools {
                    button.btn.copy-link data-href={ "#" (entry.id) } { "リンクをコピー" }
                }
            }
            @if entry.content_html.is_empty() {
                p.empty-entry { "（本文なし）" }
            } @else {
                (PreEscaped(entry.content_html.as_str()))
            }
        }
    }
}

fn render_toc(entries: &[Entry]) -> Markup {
    html! {
        aside.toc {
            div.box.card {
                h3 { "この月の目次" }
                p #filter-stat.count { "全 " (entries.len()) " 件" }
                ul #toc-list {
                    @for entry in entries {
                        li { a href={ "#" (entry.id) } { (iso_date(entry.date)) } }
                    }
                }
            }
        }
    }
}

/// Render `/{YYYYMM}/index.html`.
pub fn render_month_page(site: &SiteConfig, month: &Month, built_at: NaiveDateTime) -> Markup {
    let label = month.label();
    let title = format!("{label}のブログ");
    let description = format!("{label}の記録");

    let body = html! {
        nav.breadcrumbs {
            a href="../index.html" { "トップ" }
            " » "
            (label)
        }
        div.filter {
            input #filter-input type="search" placeholder="この月の検索…（例: 雪 写真）" aria-label="この月の検索";
        }
        div.month-layout {
            (render_toc(&month.entries))
            section.entries aria-label="記事一覧" {
                @if month.entries.is_empty() {
                    div.notice { "まだ記事がありません。" }
                } @else {
                    @for entry in &month.entries {
                        (render_entry(entry))
                    }
                }
            }
        }
    };

    let page = PageMeta {
        title: &title,
        description: &description,
        asset_base: "../",
    };
    render_page(site, &page, built_at, body)
}

// ============================================================================
// Index page
// ============================================================================

/// Render `/index.html` from month summaries, in the order given.
pub fn render_index_page(
    site: &SiteConfig,
    months: &[MonthSummary],
    built_at: NaiveDateTime,
) -> Markup {
    let body = html! {
        @if months.is_empty() {
            div.notice {
                "まだ月別フォルダがありません。例: "
                code { "202501/20250101.txt" }
            }
        } @else {
            ul.grid.months-grid style="list-style:none; padding-left:0;" {
                @for month in months {
                    li.month-card.card {
                        a.month-link href={ "./" (month.token) "/" } {
                            div.title { (month.label) }
                            div.meta {
                                (month.entry_count) "件 ・ 最新 "
                                (month.newest.map(iso_date).unwrap_or_else(|| "—".to_string()))
                            }
                        }
                    }
                }
            }
        }
    };

    let page = PageMeta {
        title: &site.title,
        description: &site.description,
        asset_base: "./",
    };
    render_page(site, &page, built_at, body)
}

// ============================================================================
// Tests
// ============================================================================
