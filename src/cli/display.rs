// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the savor CLI.
//!
//! OneDark on dark terminals, One Light on light ones. `SAVOR_THEME` forces a
//! theme, otherwise `COLORFGBG` is consulted, otherwise dark. Colour is off
//! when `NO_COLOR` is set or stdout is not a TTY.

use std::sync::OnceLock;
use std::time::Duration;

use savor::{BuildReport, ResultKind, SearchResult, VerificationReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SAVOR_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg", background 7+ (except 8) is light
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

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
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
theme_color!(GRAY);

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply a theme colour plus modifiers, or nothing when colour is off.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Length as printed, ignoring ANSI escapes.
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

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(pad))
}

pub fn type_badge(result: &SearchResult) -> String {
    match result.kind {
        ResultKind::Restaurant { .. } => themed(BLUE, &[BOLD], "restaurant"),
        ResultKind::Dish { .. } => themed(MAGENTA, &[], "dish"),
    }
}

/// Boosted scores stand out, unboosted ones fade.
pub fn score_value(score: f64) -> String {
    let text = format!("{:>5.0}", score);
    if score >= 50.0 {
        themed(GREEN, &[BOLD], &text)
    } else if score > 0.0 {
        themed(YELLOW, &[], &text)
    } else {
        themed(GRAY, &[], &text)
    }
}

/// Green under 5ms, yellow under 50ms, red beyond.
pub fn timing(elapsed: Duration) -> String {
    let ms = elapsed.as_secs_f64() * 1000.0;
    let text = format!("{:.3}ms", ms);
    if ms < 5.0 {
        themed(GREEN, &[], &text)
    } else if ms < 50.0 {
        themed(YELLOW, &[], &text)
    } else {
        themed(RED, &[], &text)
    }
}

pub fn print_results(query: &str, results: &[SearchResult], elapsed: Duration) {
    if results.is_empty() {
        println!("{}", themed(GRAY, &[], &format!("No results for '{}'", query)));
        return;
    }

    println!(
        "{} for '{}' in {}",
        themed(GREEN, &[BOLD], &format!("{} results", results.len())),
        query,
        timing(elapsed)
    );
    for (rank, result) in results.iter().enumerate() {
        println!(
            "{:>3}. {} {} {}",
            rank + 1,
            pad_right(&type_badge(result), 10),
            score_value(result.match_score()),
            themed(BLUE, &[BOLD], &result.title),
        );
        println!(
            "     {}  {}",
            themed(GRAY, &[], &result.subtitle),
            themed(GRAY, &[DIM], &result.url)
        );
    }
}

pub fn print_report(report: &BuildReport) {
    println!("{}", themed(BLUE, &[BOLD], "Build"));
    println!("  restaurants  {}", report.restaurants);
    println!("  dishes       {}", report.dishes);
    println!("  tokens       {}", report.tokens);
    println!("  trie nodes   {}", report.trie_nodes);
    println!("  elapsed      {}", timing(report.elapsed));

    if report.is_complete() {
        println!("  menus        {}", themed(GREEN, &[], "all loaded"));
        return;
    }
    println!(
        "  menus        {}",
        themed(YELLOW, &[], &format!("{} skipped", report.skipped.len()))
    );
    for skipped in &report.skipped {
        println!(
            "    {} {}",
            pad_right(&skipped.restaurant_id, 24),
            themed(GRAY, &[], &skipped.reason.to_string())
        );
    }
}

pub fn print_verification(verification: &VerificationReport) {
    println!("{}", themed(BLUE, &[BOLD], "Trie"));
    println!("  records      {}", verification.records);
    println!("  nodes        {}", verification.nodes);
    println!("  words        {}", verification.words);
    println!("  id refs      {}", verification.id_references);
    println!("  ids / node   {:.2}", verification.mean_fanout());
    println!("  max depth    {}", verification.max_depth);
    println!("  invariants   {}", themed(GREEN, &[], "ok"));
}
