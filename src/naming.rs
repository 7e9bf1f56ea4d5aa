//! Filename parsing for the `YYYYMM/YYYYMMDD.txt` content convention.
//!
//! Content lives in month folders named with six digits and day files named
//! with eight digits plus `.txt`:
//!
//! ```text
//! 202501/
//! ├── 20250101.txt
//! └── 20250105.txt
//! ```
//!
//! Both parsers check lexical shape only: exactly N ASCII digits, leading
//! `20`. They do not check calendar validity, so `202513` and `20250230.txt`
//! are accepted here. Turning a [`DayKey`] into a real date happens later in
//! [`DayKey::to_date`], and the scanner treats failure there as fatal.

use chrono::NaiveDate;

/// Extension every day file must carry.
pub const DAY_FILE_EXTENSION: &str = ".txt";

/// A parsed month folder name like `202501`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// The six-digit folder token, e.g. `"202501"`.
    pub fn token(&self) -> String {
        format!("{:04}{:02}", self.year, self.month)
    }

    /// Display label, e.g. `"2025年01月"`.
    pub fn label(&self) -> String {
        format!("{}年{:02}月", self.year, self.month)
    }
}

/// A parsed day file name like `20250105.txt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DayKey {
    /// The eight-digit token used as the entry anchor, e.g. `"20250105"`.
    pub fn token(&self) -> String {
        format!("{:04}{:02}{:02}", self.year, self.month, self.day)
    }

    /// The month this file claims to belong to, from its leading six digits.
    pub fn month_key(&self) -> MonthKey {
        MonthKey {
            year: self.year,
            month: self.month,
        }
    }

    /// Calendar date, or `None` for impossible dates like Feb 30.
    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

/// Parse a month folder name. Accepts exactly six ASCII digits starting with `20`.
///
/// - `"202501"` → `Some(MonthKey { year: 2025, month: 1 })`
/// - `"2025"`, `"20251"`, `"202513x"`, `"abcdef"`, `"199912"` → `None`
pub fn parse_month_dir(name: &str) -> Option<MonthKey> {
    let digits = fixed_digits(name, 6)?;
    Some(MonthKey {
        year: digits[..4].parse().ok()?,
        month: digits[4..].parse().ok()?,
    })
}

/// Parse a day file name. Accepts exactly eight ASCII digits starting with
/// `20`, followed by [`DAY_FILE_EXTENSION`].
///
/// - `"20250105.txt"` → `Some(DayKey { year: 2025, month: 1, day: 5 })`
/// - `"20250230.txt"` → `Some(..)` (shape is fine, the date is not)
/// - `"20250105.md"`, `"2025010.txt"`, `"20250105"` → `None`
pub fn parse_day_file(name: &str) -> Option<DayKey> {
    let stem = name.strip_suffix(DAY_FILE_EXTENSION)?;
    let digits = fixed_digits(stem, 8)?;
    Some(DayKey {
        year: digits[..4].parse().ok()?,
        month: digits[4..6].parse().ok()?,
        day: digits[6..].parse().ok()?,
    })
}

fn fixed_digits(s: &str, len: usize) -> Option<&str> {
    (s.len() == len && s.starts_with("20") && s.bytes().all(|b| b.is_ascii_digit())).then_some(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_dir_accepts_six_digits() {
        let key = parse_month_dir("202501").unwrap();
        assert_eq!(key, MonthKey { year: 2025, month: 1 });
        assert_eq!(key.token(), "202501");
    }

    #[test]
    fn month_dir_rejects_wrong_shapes() {
        for name in ["2025", "20251", "202513x", "abcdef", "2025011", "", "20250a"] {
            assert_eq!(parse_month_dir(name), None, "{name} should be rejected");
        }
    }

    #[test]
    fn month_dir_requires_20_prefix() {
        assert_eq!(parse_month_dir("199912"), None);
        assert_eq!(parse_month_dir("302501"), None);
    }

    #[test]
    fn month_dir_does_not_check_calendar() {
        let key = parse_month_dir("202513").unwrap();
        assert_eq!(key.month, 13);
    }

    #[test]
    fn month_dir_rejects_non_ascii_digits() {
        // Full-width digits are not ASCII
        assert_eq!(parse_month_dir("２０２５０１"), None);
    }

    #[test]
    fn month_label_is_zero_padded() {
        assert_eq!(MonthKey { year: 2025, month: 3 }.label(), "2025年03月");
        assert_eq!(MonthKey { year: 2024, month: 12 }.label(), "2024年12月");
    }

    #[test]
    fn day_file_accepts_eight_digits_with_extension() {
        let key = parse_day_file("20250105.txt").unwrap();
        assert_eq!(
            key,
            DayKey {
                year: 2025,
                month: 1,
                day: 5
            }
        );
        assert_eq!(key.token(), "20250105");
        assert_eq!(key.month_key().token(), "202501");
    }

    #[test]
    fn day_file_rejects_wrong_shapes() {
        for name in [
            "20250105",
            "20250105.md",
            "2025010.txt",
            "202501051.txt",
            "19990105.txt",
            "2025o105.txt",
            ".txt",
            "20250105.txt.bak",
        ] {
            assert_eq!(parse_day_file(name), None, "{name} should be rejected");
        }
    }

    #[test]
    fn day_file_accepts_impossible_date_but_to_date_fails() {
        let key = parse_day_file("20250230.txt").unwrap();
        assert_eq!(key.to_date(), None);
    }

    #[test]
    fn day_file_to_date() {
        let key = parse_day_file("20240229.txt").unwrap();
        assert_eq!(key.to_date(), NaiveDate::from_ymd_opt(2024, 2, 29));
    }
}
