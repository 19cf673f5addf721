// SPDX-FileCopyrightText: 2026 Architect Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Design tokens injected into every generation prompt, and the canned example prompts.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorToken {
    pub label: &'static str,
    pub hex: &'static str,
}

pub const TOKENS_NOTE: &str =
    "These tokens are injected into every generation prompt. All output is validated against them.";

pub const PALETTE: [ColorToken; 8] = [
    ColorToken { label: "Primary", hex: "#6366f1" },
    ColorToken { label: "Primary Dark", hex: "#4f46e5" },
    ColorToken { label: "Secondary", hex: "#0ea5e9" },
    ColorToken { label: "Accent", hex: "#f59e0b" },
    ColorToken { label: "Success", hex: "#10b981" },
    ColorToken { label: "Error", hex: "#ef4444" },
    ColorToken { label: "Neutral 50", hex: "#f8fafc" },
    ColorToken { label: "Neutral 900", hex: "#0f172a" },
];

/// Non-colour token constants as `(name, value)`.
pub const STYLE_TOKENS: [(&str, &str); 4] = [
    ("border-radius", "8px"),
    ("font", "Inter"),
    ("shadow-glow", "rgba(99,102,241,0.4)"),
    ("transition", "200ms ease"),
];

pub const EXAMPLE_PROMPTS: [&str; 5] = [
    "A login card with glassmorphism effect",
    "A pricing table with 3 tiers",
    "A dark-mode notification toast",
    "A file upload dropzone with drag support",
    "A user profile card with avatar and stats",
];

/// Example prompt by 1-based number, as listed by `/examples`.
pub fn example_prompt(number: usize) -> Option<&'static str> {
    number
        .checked_sub(1)
        .and_then(|i| EXAMPLE_PROMPTS.get(i))
        .copied()
}

/// Parse a `#rrggbb` token into its RGB channels.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
