use std::sync::OnceLock;
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use regex::Regex;

const UNITS: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen",
    "seventeen", "eighteen", "nineteen",
];

// 索引即十位數，0 與 1 不使用
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

// 短級制，索引 k 代表 1000^k
const SCALES: [&str; 22] = [
    "", "thousand", "million", "billion", "trillion", "quadrillion", "quintillion",
    "sextillion", "septillion", "octillion", "nonillion", "decillion", "undecillion",
    "duodecillion", "tredecillion", "quattuordecillion", "quindecillion",
    "sexdecillion", "septendecillion", "octodecillion", "novemdecillion", "vigintillion",
];

/// 解析策略：成功回傳數值，無法辨識回傳 None
type TextStrategy = fn(&str) -> Option<BigUint>;

// 依序嘗試，第一個成功者勝出
const STRATEGIES: [(&str, TextStrategy); 3] = [
    ("exact", parse_exact_word),
    ("compound", parse_decade_unit),
    ("cardinal", parse_cardinal),
];

fn strip_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z\s-]").expect("valid regex"))
}

/// 轉小寫並移除字母、空白與連字號以外的字元
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    strip_regex().replace_all(&lowered, "").trim().to_string()
}

/// 將英文數字文字轉為整數，依序嘗試各策略
pub fn parse_text(text: &str) -> Option<BigUint> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return None;
    }
    STRATEGIES.iter().find_map(|(name, strategy)| {
        let value = strategy(&normalized);
        if value.is_some() {
            log::debug!("文字解析策略 {} 命中：'{}'", name, normalized);
        }
        value
    })
}

fn unit_value(word: &str) -> Option<u32> {
    UNITS.iter().position(|w| *w == word).map(|i| i as u32)
}

fn tens_value(word: &str) -> Option<u32> {
    TENS.iter().position(|w| !w.is_empty() && *w == word).map(|i| i as u32 * 10)
}

fn scale_index(word: &str) -> Option<usize> {
    SCALES.iter().position(|w| !w.is_empty() && *w == word)
}

fn parse_exact_word(text: &str) -> Option<BigUint> {
    let value = match text {
        "nil" => 0,
        "hundred" => 100,
        "thousand" => 1000,
        word => unit_value(word).or_else(|| tens_value(word))?,
    };
    Some(BigUint::from(value))
}

fn parse_decade_unit(text: &str) -> Option<BigUint> {
    let mut words = text.split_whitespace();
    let (decade, unit) = match (words.next(), words.next(), words.next()) {
        (Some(decade), Some(unit), None) => (decade, unit),
        _ => return None,
    };
    let decade = tens_value(decade)?;
    let unit = unit_value(unit).filter(|u| (1..=9).contains(u))?;
    Some(BigUint::from(decade + unit))
}

/// 一般英文基數詞解析，例如 "one hundred and twenty-three"
fn parse_cardinal(text: &str) -> Option<BigUint> {
    let words: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|w| !w.is_empty())
        .collect();
    if words == ["zero"] {
        return Some(BigUint::zero());
    }

    let mut total = BigUint::zero();
    // 目前正在累積、尚未乘上級數的三位數組
    let mut group: u32 = 0;
    let mut after_tens = false;
    let mut last_scale: Option<usize> = None;
    let mut seen_number = false;
    let mut pending_and = false;

    for word in words {
        if word == "and" {
            if !seen_number || pending_and {
                return None;
            }
            pending_and = true;
            continue;
        }
        pending_and = false;

        if let Some(n) = unit_value(word).filter(|n| *n > 0) {
            let low = group % 100;
            if n < 10 {
                if !(low == 0 || (after_tens && low % 10 == 0)) {
                    return None;
                }
            } else if low != 0 {
                return None;
            }
            group += n;
            after_tens = false;
        } else if let Some(n) = tens_value(word) {
            if group % 100 != 0 {
                return None;
            }
            group += n;
            after_tens = true;
            seen_number = true;
            continue;
        } else if word == "hundred" {
            // 出現級數詞後，每組必須維持在 999 以內
            if group == 0 || group >= 100 || (last_scale.is_some() && group >= 10) {
                return None;
            }
            group *= 100;
            after_tens = false;
        } else if let Some(k) = scale_index(word) {
            if group == 0 || last_scale.is_some_and(|last| k >= last || group > 999) {
                return None;
            }
            total += BigUint::from(group) * BigUint::from(1000u32).pow(k as u32);
            group = 0;
            after_tens = false;
            last_scale = Some(k);
        } else {
            return None;
        }
        seen_number = true;
    }

    if !seen_number || pending_and {
        return None;
    }
    Some(total + BigUint::from(group))
}

/// 可輸出的最大值（不含）：1000^(最大級數 + 1)
pub fn text_limit() -> BigUint {
    BigUint::from(1000u32).pow(SCALES.len() as u32)
}

/// 依英文基數詞慣例輸出，例如 123 → "one hundred and twenty-three"
///
/// 超出最大級數詞時回傳 None。
pub fn number_to_words(value: &BigUint) -> Option<String> {
    if value.is_zero() {
        return Some(UNITS[0].to_string());
    }
    if *value >= text_limit() {
        return None;
    }

    // 由低到高拆成三位數組
    let thousand = BigUint::from(1000u32);
    let mut groups: Vec<u32> = Vec::new();
    let mut rest = value.clone();
    while !rest.is_zero() {
        groups.push((&rest % &thousand).to_u32()?);
        rest /= &thousand;
    }

    let mut parts: Vec<String> = Vec::new();
    for (k, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        let words = group_to_words(group);
        let phrase = if k == 0 {
            words
        } else {
            format!("{} {}", words, SCALES[k])
        };
        parts.push(phrase);
    }

    // 最低組小於 100 且前面還有較高的組時以 "and" 連接，其餘以逗號分隔
    let lowest = groups[0];
    let mut out = String::new();
    let last_index = parts.len() - 1;
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            if i == last_index && lowest > 0 && lowest < 100 {
                out.push_str(" and ");
            } else {
                out.push_str(", ");
            }
        }
        out.push_str(part);
    }
    Some(out)
}

fn group_to_words(group: u32) -> String {
    let hundreds = group / 100;
    let below = group % 100;
    match (hundreds, below) {
        (0, b) => below_hundred(b),
        (h, 0) => format!("{} hundred", UNITS[h as usize]),
        (h, b) => format!("{} hundred and {}", UNITS[h as usize], below_hundred(b)),
    }
}

fn below_hundred(n: u32) -> String {
    if n < 20 {
        return UNITS[n as usize].to_string();
    }
    let tens = TENS[(n / 10) as usize];
    match n % 10 {
        0 => tens.to_string(),
        unit => format!("{}-{}", tens, UNITS[unit as usize]),
    }
}
