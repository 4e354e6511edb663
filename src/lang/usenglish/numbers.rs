//! English number words

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [(u64, &str); 4] = [
    (1_000_000_000_000, "trillion"),
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
];

/// Largest value read as a cardinal; longer digit strings are read digit by digit
pub const MAX_CARDINAL: u64 = 999_999_999_999_999;

fn push_words(out: &mut Vec<String>, text: &str) {
    out.extend(text.split_whitespace().map(|s| s.to_string()));
}

fn below_thousand(n: u64, out: &mut Vec<String>) {
    let hundreds = n / 100;
    let rest = n % 100;
    if hundreds > 0 {
        push_words(out, ONES[hundreds as usize]);
        push_words(out, "hundred");
    }
    if rest >= 20 {
        push_words(out, TENS[(rest / 10) as usize]);
        if rest % 10 > 0 {
            push_words(out, ONES[(rest % 10) as usize]);
        }
    } else if rest > 0 {
        push_words(out, ONES[rest as usize]);
    }
}

/// Cardinal number words, e.g. 1234 -> "one thousand two hundred thirty four"
pub fn cardinal(n: u64) -> Vec<String> {
    if n == 0 {
        return vec!["zero".to_string()];
    }
    if n > MAX_CARDINAL {
        return digits(&n.to_string());
    }

    let mut out = Vec::new();
    let mut rest = n;
    for (scale, name) in SCALES {
        if rest >= scale {
            below_thousand(rest / scale, &mut out);
            push_words(&mut out, name);
            rest %= scale;
        }
    }
    below_thousand(rest, &mut out);
    out
}

/// Each digit read on its own, e.g. "007" -> "zero zero seven"
pub fn digits(text: &str) -> Vec<String> {
    text.chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| ONES[d as usize].to_string())
        .collect()
}

fn ordinal_word(word: &str) -> String {
    match word {
        "one" => "first".to_string(),
        "two" => "second".to_string(),
        "three" => "third".to_string(),
        "five" => "fifth".to_string(),
        "eight" => "eighth".to_string(),
        "nine" => "ninth".to_string(),
        "twelve" => "twelfth".to_string(),
        w if w.ends_with('y') => format!("{}ieth", &w[..w.len() - 1]),
        w => format!("{}th", w),
    }
}

/// Ordinal number words, e.g. 22 -> "twenty second"
pub fn ordinal(n: u64) -> Vec<String> {
    let mut words = cardinal(n);
    if let Some(last) = words.last_mut() {
        *last = ordinal_word(last);
    }
    words
}

/// Year reading: 1984 -> "nineteen eighty four", 1900 -> "nineteen hundred",
/// 1905 -> "nineteen oh five"
pub fn year(n: u64) -> Vec<String> {
    let (high, low) = (n / 100, n % 100);
    let mut out = cardinal(high);
    match low {
        0 => push_words(&mut out, "hundred"),
        1..=9 => {
            push_words(&mut out, "oh");
            push_words(&mut out, ONES[low as usize]);
        }
        _ => out.extend(cardinal(low)),
    }
    out
}

/// Is this four digit value normally read as a year
pub fn is_year(n: u64) -> bool {
    (1100..=1999).contains(&n) || (2010..=2099).contains(&n)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(words: Vec<String>) -> String {
        words.join(" ")
    }

    #[test]
    fn test_cardinal() {
        assert_eq!(joined(cardinal(0)), "zero");
        assert_eq!(joined(cardinal(13)), "thirteen");
        assert_eq!(joined(cardinal(40)), "forty");
        assert_eq!(joined(cardinal(105)), "one hundred five");
        assert_eq!(
            joined(cardinal(1_234)),
            "one thousand two hundred thirty four"
        );
        assert_eq!(joined(cardinal(2_000_001)), "two million one");
        assert_eq!(joined(cardinal(5_000_000_000_000)), "five trillion");
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(joined(ordinal(1)), "first");
        assert_eq!(joined(ordinal(22)), "twenty second");
        assert_eq!(joined(ordinal(40)), "fortieth");
        assert_eq!(joined(ordinal(12)), "twelfth");
        assert_eq!(joined(ordinal(100)), "one hundredth");
    }

    #[test]
    fn test_year() {
        assert_eq!(joined(year(1984)), "nineteen eighty four");
        assert_eq!(joined(year(1900)), "nineteen hundred");
        assert_eq!(joined(year(1905)), "nineteen oh five");
        assert_eq!(joined(year(2024)), "twenty twenty four");
        assert!(is_year(1776));
        assert!(!is_year(2005));
        assert!(!is_year(42));
    }

    #[test]
    fn test_digits() {
        assert_eq!(joined(digits("007")), "zero zero seven");
    }
}
