// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the folio CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `FOLIO_THEME` first, then `COLORFGBG`, then defaults to dark. Respects
//! `NO_COLOR` and plain output when stdout is not a TTY.

use folio::{IndexStats, LiteralHit, PhraseHit, RankedHit};
use std::sync::OnceLock;

/// Width between the box borders.
pub const BOX_WIDTH: usize = 80;

/// Snippet lines shown per ranked hit before eliding.
const SNIPPET_LINES: usize = 6;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("FOLIO_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg": background colors 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
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

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
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

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers, or nothing when colors are off.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Length without ANSI escape sequences.
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

pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let border = themed(GRAY, &[], "│");
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border, content, " ".repeat(pad), border);
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        themed(GRAY, &[], "┌"),
        label_part,
        themed(GRAY, &[], &format!("{}┐", "─".repeat(remaining)))
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", themed(GRAY, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULT FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// TF-IDF scores are small; show enough digits to tell neighbours apart.
pub fn score_value(score: f64) -> String {
    let text = format!("{:>9.5}", score);
    if score >= 0.05 {
        themed(GREEN, &[BOLD], &text)
    } else if score >= 0.01 {
        themed(YELLOW, &[], &text)
    } else {
        themed(GRAY, &[], &text)
    }
}

/// "ACT III · SCENE I. … · HAMLET" or "Sonnet 116"; empty for front matter.
pub fn location_label(hit: &PhraseHit) -> String {
    if let Some(sonnet) = &hit.sonnet {
        return themed(MAGENTA, &[], &format!("Sonnet {}", sonnet));
    }
    let parts: Vec<&str> = [&hit.play, &hit.act, &hit.scene]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .collect();
    themed(BLUE, &[], &parts.join(" · "))
}

/// Truncate to `max` chars on a char boundary, with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

pub fn print_ranked(query: &str, hits: &[RankedHit], limit: usize) {
    section_top(&format!("RANKED · {} · {} hits", query, hits.len()));
    for (rank, hit) in hits.iter().take(limit).enumerate() {
        row(&format!(
            " {:>3}. {} {}",
            rank + 1,
            score_value(hit.score),
            themed(GRAY, &[DIM], &format!("doc {} · {} words", hit.document, hit.document_length))
        ));
        let lines: Vec<&str> = hit.snippet.lines().collect();
        for line in lines.iter().take(SNIPPET_LINES) {
            row(&format!("      {}", truncate(line, BOX_WIDTH - 7)));
        }
        if lines.len() > SNIPPET_LINES {
            row(&themed(GRAY, &[DIM], &format!("      … {} more lines", lines.len() - SNIPPET_LINES)));
        }
    }
    section_bot();
}

pub fn print_phrase(query: &str, hits: &[PhraseHit], limit: usize) {
    section_top(&format!("PHRASE · {} · {} hits", query, hits.len()));
    for hit in hits.iter().take(limit) {
        row(&format!(
            " {} {}",
            themed(GRAY, &[DIM], &format!("@{}", hit.offset)),
            location_label(hit)
        ));
        for line in &hit.lines {
            row(&format!("   {}", truncate(line, BOX_WIDTH - 4)));
        }
    }
    section_bot();
}

pub fn print_literal(query: &str, hits: &[LiteralHit], limit: usize) {
    section_top(&format!("LITERAL · {} · {} hits", query, hits.len()));
    for hit in hits.iter().take(limit) {
        row(&themed(GRAY, &[DIM], &format!(" @{}", hit.offset)));
        let flattened = hit.context.split_whitespace().collect::<Vec<_>>().join(" ");
        row(&format!("   {}", truncate(&flattened, BOX_WIDTH - 4)));
    }
    section_bot();
}

pub fn print_stats(stats: &IndexStats) {
    section_top("INDEX");
    let field = |name: &str, value: String| {
        row(&format!(" {:<14}{}", themed(CYAN, &[], name), value));
    };
    field("corpus", format_size(stats.corpus_bytes));
    field("documents", stats.documents.to_string());
    field("tokens", stats.tokens.to_string());
    field("vocabulary", stats.vocabulary.to_string());
    field("tf entries", stats.tf_entries.to_string());
    field("ngram order", stats.ngram_order.to_string());
    field("plays", stats.plays.to_string());
    field("acts", stats.acts.to_string());
    field("scenes", stats.scenes.to_string());
    field("sonnets", stats.sonnets.to_string());
    field("fingerprint", format!("{:08x}", stats.fingerprint));
    section_bot();
}
