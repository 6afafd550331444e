// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::Regex;

/// `#RRGGBB` 形式的颜色值
pub static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    // 字面量正则，编译不会失败
    Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap()
});

/// 去掉首尾空白后为空则视为未填写
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color() {
        assert!(HEX_COLOR.is_match("#3b82f6"));
        assert!(HEX_COLOR.is_match("#6B7280"));
        assert!(!HEX_COLOR.is_match("3b82f6"));
        assert!(!HEX_COLOR.is_match("#3b82f"));
        assert!(!HEX_COLOR.is_match("#3b82fg"));
    }

    #[test]
    fn test_normalize_optional() {
        assert_eq!(normalize_optional(Some("  ".to_string())), None);
        assert_eq!(normalize_optional(Some(" x ".to_string())), Some("x".to_string()));
        assert_eq!(normalize_optional(None), None);
    }
}
