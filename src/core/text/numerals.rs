//! Arabic numeral to Japanese reading conversion.
//!
//! Numbers are rewritten in a fixed precedence order so that counter
//! suffixes with irregular readings (月 → がつ, 日 → にち, ...) are handled
//! before the generic standalone-integer rule runs.
//!
//! Readings cover 1..=9999 by place-value decomposition. Anything else is left
//! as written.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// Only ASCII digits are converted; full-width digits pass through.
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)年").unwrap());
static MONTH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]{1,2})月").unwrap());
static DAY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]{1,2})日").unwrap());
static HOUR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]{1,2})時").unwrap());
static MINUTE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]{1,2})分").unwrap());
static PERCENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([0-9]+)%").unwrap());
static DIGIT_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// Largest value the standalone-integer rule will rewrite.
const MAX_STANDALONE_VALUE: u64 = 10_000;

const ONES: [&str; 10] = [
    "", "いち", "に", "さん", "よん", "ご", "ろく", "なな", "はち", "きゅう",
];

const TENS: [&str; 10] = [
    "",
    "じゅう",
    "にじゅう",
    "さんじゅう",
    "よんじゅう",
    "ごじゅう",
    "ろくじゅう",
    "ななじゅう",
    "はちじゅう",
    "きゅうじゅう",
];

const HUNDREDS: [&str; 10] = [
    "",
    "ひゃく",
    "にひゃく",
    "さんびゃく",
    "よんひゃく",
    "ごひゃく",
    "ろっぴゃく",
    "ななひゃく",
    "はっぴゃく",
    "きゅうひゃく",
];

const THOUSANDS: [&str; 10] = [
    "",
    "せん",
    "にせん",
    "さんぜん",
    "よんせん",
    "ごせん",
    "ろくせん",
    "ななせん",
    "はっせん",
    "きゅうせん",
];

/// Returns the Japanese reading of a string of ASCII digits.
///
/// `"0"` reads as `ゼロ`. Values above 9999, or strings that are not a plain
/// non-negative integer, are returned unchanged.
///
/// # Example
///
/// ```rust
/// use emotive_speech::core::text::read_number;
///
/// assert_eq!(read_number("2024"), "にせんにじゅうよん");
/// assert_eq!(read_number("800"), "はっぴゃく");
/// assert_eq!(read_number("12345"), "12345");
/// ```
pub fn read_number(digits: &str) -> String {
    match digits.parse::<u64>() {
        Ok(value) => read_value(value).unwrap_or_else(|| digits.to_string()),
        Err(_) => digits.to_string(),
    }
}

fn read_value(value: u64) -> Option<String> {
    let index = |n: u64| n as usize;

    match value {
        0 => Some("ゼロ".to_string()),
        1..=9 => Some(ONES[index(value)].to_string()),
        10..=99 => Some(format!("{}{}", TENS[index(value / 10)], ONES[index(value % 10)])),
        100..=999 => Some(format!(
            "{}{}",
            HUNDREDS[index(value / 100)],
            read_remainder(value % 100)
        )),
        1000..=9999 => Some(format!(
            "{}{}",
            THOUSANDS[index(value / 1000)],
            read_remainder(value % 1000)
        )),
        _ => None,
    }
}

/// Lower places of a compound number; zero contributes nothing.
fn read_remainder(remainder: u64) -> String {
    if remainder == 0 {
        String::new()
    } else {
        read_value(remainder).unwrap_or_default()
    }
}

fn replace_with_suffix(re: &Regex, text: &str, suffix: &str) -> String {
    re.replace_all(text, |caps: &Captures| format!("{}{}", read_number(&caps[1]), suffix))
        .into_owned()
}

/// Whether `c` counts as part of a word for boundary purposes (ASCII rules).
#[inline]
fn is_ascii_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Rewrites standalone integers of up to four digits.
///
/// A digit run is standalone when the characters on both sides are not ASCII
/// word characters. Japanese text around a number therefore counts as a
/// boundary, while `abc123` or `123px` are left alone.
fn replace_standalone(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut last = 0;

    for m in DIGIT_RUN_RE.find_iter(text) {
        let before = text[..m.start()].chars().next_back();
        let after = text[m.end()..].chars().next();
        let bounded = !before.is_some_and(is_ascii_word) && !after.is_some_and(is_ascii_word);

        let digits = m.as_str();
        let convertible = bounded
            && digits.len() <= 4
            && digits
                .parse::<u64>()
                .is_ok_and(|v| v <= MAX_STANDALONE_VALUE);

        result.push_str(&text[last..m.start()]);
        if convertible {
            result.push_str(&read_number(digits));
        } else {
            result.push_str(digits);
        }
        last = m.end();
    }

    result.push_str(&text[last..]);
    result
}

/// Converts numerals embedded in Japanese text to their readings.
///
/// Rules, applied in order:
/// 1. `N年` → reading + `年`
/// 2. `N月` → reading + `がつ`
/// 3. `N日` → reading + `にち`
/// 4. `N時` → reading + `じ`
/// 5. `N分` → reading + `ふん`
/// 6. `N%` → reading + `パーセント`
/// 7. standalone integers of 1–4 digits
///
/// # Example
///
/// ```rust
/// use emotive_speech::core::text::convert_numbers;
///
/// assert_eq!(convert_numbers("3時"), "さんじ");
/// assert_eq!(convert_numbers("50%"), "ごじゅうパーセント");
/// ```
pub fn convert_numbers(text: &str) -> String {
    let text = replace_with_suffix(&YEAR_RE, text, "年");
    let text = replace_with_suffix(&MONTH_RE, &text, "がつ");
    let text = replace_with_suffix(&DAY_RE, &text, "にち");
    let text = replace_with_suffix(&HOUR_RE, &text, "じ");
    let text = replace_with_suffix(&MINUTE_RE, &text, "ふん");
    let text = replace_with_suffix(&PERCENT_RE, &text, "パーセント");
    replace_standalone(&text)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_single_digits() {
        assert_eq!(read_number("0"), "ゼロ");
        assert_eq!(read_number("1"), "いち");
        assert_eq!(read_number("4"), "よん");
        assert_eq!(read_number("9"), "きゅう");
    }

    #[test]
    fn test_read_tens() {
        assert_eq!(read_number("10"), "じゅう");
        assert_eq!(read_number("11"), "じゅういち");
        assert_eq!(read_number("50"), "ごじゅう");
        assert_eq!(read_number("99"), "きゅうじゅうきゅう");
    }

    #[test]
    fn test_read_hundreds_irregular() {
        assert_eq!(read_number("100"), "ひゃく");
        assert_eq!(read_number("300"), "さんびゃく");
        assert_eq!(read_number("600"), "ろっぴゃく");
        assert_eq!(read_number("800"), "はっぴゃく");
        assert_eq!(read_number("305"), "さんびゃくご");
        assert_eq!(read_number("810"), "はっぴゃくじゅう");
    }

    #[test]
    fn test_read_thousands_irregular() {
        assert_eq!(read_number("1000"), "せん");
        assert_eq!(read_number("3000"), "さんぜん");
        assert_eq!(read_number("8000"), "はっせん");
        assert_eq!(read_number("2024"), "にせんにじゅうよん");
        assert_eq!(read_number("9999"), "きゅうせんきゅうひゃくきゅうじゅうきゅう");
        assert_eq!(read_number("1001"), "せんいち");
    }

    #[test]
    fn test_read_leading_zero() {
        assert_eq!(read_number("05"), "ご");
        assert_eq!(read_number("00"), "ゼロ");
    }

    #[test]
    fn test_read_out_of_range_falls_back() {
        assert_eq!(read_number("10000"), "10000");
        assert_eq!(read_number("123456"), "123456");
        assert_eq!(read_number("99999999999999999999999"), "99999999999999999999999");
        assert_eq!(read_number("abc"), "abc");
        assert_eq!(read_number(""), "");
    }

    #[test]
    fn test_convert_year() {
        assert_eq!(convert_numbers("2024年"), "にせんにじゅうよん年");
    }

    #[test]
    fn test_convert_month_day() {
        assert_eq!(convert_numbers("12月25日"), "じゅうにがつにじゅうごにち");
        assert_eq!(convert_numbers("4月1日"), "よんがついちにち");
    }

    #[test]
    fn test_convert_time() {
        assert_eq!(convert_numbers("3時"), "さんじ");
        assert_eq!(convert_numbers("10時30分"), "じゅうじさんじゅうふん");
    }

    #[test]
    fn test_convert_percent() {
        assert_eq!(convert_numbers("50%"), "ごじゅうパーセント");
        assert_eq!(convert_numbers("100%"), "ひゃくパーセント");
        assert_eq!(convert_numbers("12345%"), "12345パーセント");
    }

    #[test]
    fn test_convert_full_date() {
        assert_eq!(
            convert_numbers("2024年4月1日"),
            "にせんにじゅうよん年よんがついちにち"
        );
    }

    #[test]
    fn test_convert_standalone() {
        assert_eq!(convert_numbers("りんごが3個"), "りんごがさん個");
        assert_eq!(convert_numbers("残り 250 円"), "残り にひゃくごじゅう 円");
        assert_eq!(convert_numbers("0"), "ゼロ");
    }

    #[test]
    fn test_convert_standalone_bounds() {
        // Five digits are out of bounds for the standalone rule.
        assert_eq!(convert_numbers("12345人"), "12345人");
        // Embedded in ASCII words.
        assert_eq!(convert_numbers("abc123"), "abc123");
        assert_eq!(convert_numbers("123px"), "123px");
        assert_eq!(convert_numbers("v2_beta"), "v2_beta");
    }

    #[test]
    fn test_convert_full_width_digits_untouched() {
        assert_eq!(convert_numbers("３時"), "３時");
    }

    #[test]
    fn test_convert_no_numbers() {
        assert_eq!(convert_numbers("こんにちは"), "こんにちは");
        assert_eq!(convert_numbers(""), "");
    }

    #[test]
    fn test_convert_leaves_no_supported_numerals() {
        let out = convert_numbers("2024年、参加者は120人で、満足度は95%でした。");
        assert!(!out.chars().any(|c| c.is_ascii_digit()), "got {}", out);
    }
}
