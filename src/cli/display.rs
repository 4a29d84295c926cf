// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering for castlens search results.
//!
//! Each cast renders as a boxed card: author line, Pacific timestamp, wrapped
//! text, embeds, counters, permalink. OneDark colors on dark terminals, One
//! Light on light ones. `NO_COLOR` and non-TTY stdout get plain text.
//!
//! # Theme detection order
//!
//! 1. `CASTLENS_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. Default to dark theme

use std::sync::OnceLock;

use castlens::facets::Facets;
use castlens::filter::parse_timestamp_ms;
use castlens::fuzzy::Suggestion;
use castlens::record::is_image_url;
use castlens::types::{AuthorRef, Cast, Embed, EmbeddedCast, PRIMARY_AUTHOR};
use chrono::{DateTime, Utc};
use chrono_tz::America::Los_Angeles;

/// Width between │ and │ (excluding border chars).
pub const BOX_WIDTH: usize = 78;

/// Usable text width inside a card row (one space of margin each side).
const TEXT_WIDTH: usize = BOX_WIDTH - 2;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(raw: &str) -> Option<Theme> {
    match raw.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// `COLORFGBG` is "fg;bg"; backgrounds 7 and 9-15 are light.
fn theme_from_colorfgbg(raw: &str) -> Option<Theme> {
    let bg: u8 = raw.split(';').next_back()?.parse().ok()?;
    (bg >= 7 && bg != 8).then_some(Theme::Light)
}

fn detect_theme() -> Theme {
    std::env::var("CASTLENS_THEME")
        .ok()
        .and_then(|raw| parse_theme(&raw))
        .or_else(|| {
            std::env::var("COLORFGBG")
                .ok()
                .and_then(|raw| theme_from_colorfgbg(&raw))
        })
        .unwrap_or(Theme::Dark)
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

/// OneDark
mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

/// One Light
mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            rgb(match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            })
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

static USE_COLORS: OnceLock<bool> = OnceLock::new();

/// Colors only on a TTY, and never with `NO_COLOR` set.
pub fn use_colors() -> bool {
    *USE_COLORS.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
    })
}

/// Apply a theme color plus modifiers, or nothing when colors are off.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, excluding ANSI escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Greedy word wrap on character counts. Blank lines in the input survive;
/// words longer than `width` (usually URLs) are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_len = 0;
        for word in paragraph.split_whitespace() {
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(width.max(1)) {
                let piece: String = chunk.iter().collect();
                let needed = if current_len == 0 { chunk.len() } else { current_len + 1 + chunk.len() };
                if needed > width && current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                if current_len > 0 {
                    current.push(' ');
                    current_len += 1;
                }
                current.push_str(&piece);
                current_len += chunk.len();
            }
        }
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
fn row(content: &str) -> String {
    let border = themed(GRAY, &[], "│");
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 1);
    format!("{} {}{}{}", border, content, " ".repeat(pad), border)
}

/// ┌─ LABEL ──────────┐
fn top(label: &str) -> String {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    format!(
        "{}{}{}",
        themed(GRAY, &[], "┌"),
        label_part,
        themed(GRAY, &[], &format!("{}┐", "─".repeat(remaining)))
    )
}

/// ├──────────────────┤
fn divider() -> String {
    themed(GRAY, &[], &format!("├{}┤", "─".repeat(BOX_WIDTH)))
}

/// └──────────────────┘
fn bottom() -> String {
    themed(GRAY, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH)))
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// "Display Name @username", with whatever parts are known.
pub fn author_label(author: AuthorRef<'_>) -> String {
    match (author.display_name, author.username) {
        (Some(name), Some(user)) => format!("{} @{}", name, user),
        (Some(name), None) => name.to_string(),
        (None, Some(user)) => format!("@{}", user),
        (None, None) => author
            .fid
            .map_or_else(|| "unknown".to_string(), |fid| format!("fid:{}", fid)),
    }
}

/// Timestamp as Pacific wall-clock time, e.g. "2024-03-10 11:11 PDT".
/// Unparseable timestamps print as given.
pub fn pacific_time(raw: &str) -> String {
    parse_timestamp_ms(raw)
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map(|utc| {
            utc.with_timezone(&Los_Angeles)
                .format("%Y-%m-%d %H:%M %Z")
                .to_string()
        })
        .unwrap_or_else(|| raw.to_string())
}

fn url_line(url: &str) -> String {
    if is_image_url(url) {
        format!("{} {}", themed(MAGENTA, &[BOLD], "image"), url)
    } else {
        format!("{} {}", themed(BLUE, &[BOLD], "link"), url)
    }
}

fn embedded_lines(inner: &EmbeddedCast, lines: &mut Vec<String>) {
    let bar = themed(GRAY, &[], "▌");
    lines.push(format!(
        "{} {}",
        bar,
        themed(YELLOW, &[BOLD], &author_label(inner.author_or_primary()))
    ));
    for line in wrap(inner.text(), TEXT_WIDTH - 2) {
        lines.push(format!("{} {}", bar, line));
    }
    for embed in &inner.embeds {
        match embed {
            Embed::Url { url } => lines.push(format!("{} {}", bar, url_line(url))),
            Embed::QuotedCastId { cast_id_hash } => {
                lines.push(format!("{} Quoted cast: {}", bar, cast_id_hash))
            }
            Embed::Cast { .. } => {}
        }
    }
}

/// Content rows of a cast card, without borders.
pub fn card_lines(cast: &Cast) -> Vec<String> {
    let mut lines = Vec::new();

    let mut header = themed(GREEN, &[BOLD], &author_label(PRIMARY_AUTHOR));
    if let Some(ts) = cast.timestamp.as_deref() {
        header.push_str(&format!("  {}", themed(GRAY, &[], &pacific_time(ts))));
    }
    lines.push(header);
    lines.extend(wrap(cast.text(), TEXT_WIDTH));

    for embed in &cast.embeds {
        match embed {
            Embed::Url { url } => lines.push(url_line(url)),
            Embed::Cast { cast: inner } => embedded_lines(inner, &mut lines),
            Embed::QuotedCastId { cast_id_hash } => lines.push(format!(
                "{} {}",
                themed(GRAY, &[], "Quoted cast:"),
                cast_id_hash
            )),
        }
    }

    lines.push(format!(
        "{} {}   {} {}   {} {}",
        themed(RED, &[], "♥"),
        cast.likes(),
        themed(GREEN, &[], "↻"),
        cast.recasts(),
        themed(BLUE, &[], "↩"),
        cast.replies()
    ));
    if let Some(link) = cast.permalink() {
        lines.push(themed(GRAY, &[DIM], &link));
    }
    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// PRINTERS
// ═══════════════════════════════════════════════════════════════════════════

/// One boxed card; `position` is the 1-based rank across all pages.
pub fn print_card(position: usize, cast: &Cast) {
    println!("{}", top(&format!("#{}", position)));
    for line in card_lines(cast) {
        println!("{}", row(&line));
    }
    println!("{}", bottom());
}

pub fn print_summary(total: usize, offset: usize, shown: usize) {
    let range = if shown == 0 {
        "none shown".to_string()
    } else {
        format!("showing {}-{}", offset + 1, offset + shown)
    };
    println!(
        "{} {}",
        themed(CYAN, &[BOLD], &format!("{} matching casts", total)),
        themed(GRAY, &[], &format!("({})", range))
    );
}

pub fn print_facets(facets: &Facets) {
    println!("{}", top("Facets"));
    let counts = format!(
        "quotes {}   images {}   links {}",
        facets.counts.quotes, facets.counts.images, facets.counts.links
    );
    println!("{}", row(&counts));
    if !facets.top_emojis.is_empty() {
        println!("{}", divider());
        let emojis: Vec<String> = facets
            .top_emojis
            .iter()
            .map(|e| format!("{} {}", e.emoji, e.count))
            .collect();
        for line in wrap(&emojis.join("   "), TEXT_WIDTH) {
            println!("{}", row(&line));
        }
    }
    println!("{}", bottom());
}

pub fn print_suggestions(suggestions: &[Suggestion]) {
    println!("{}", themed(YELLOW, &[BOLD], "No exact matches. Did you mean:"));
    for (i, suggestion) in suggestions.iter().enumerate() {
        println!(
            "{}",
            top(&format!("suggestion {} · score {:.2}", i + 1, suggestion.score))
        );
        for line in card_lines(&suggestion.cast) {
            println!("{}", row(&line));
        }
        println!("{}", bottom());
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
