// ordinal.rs - English number words for step tooltips

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Powers of a thousand, enough for u64::MAX
const SCALES: [&str; 7] = [
    "",
    "thousand",
    "million",
    "billion",
    "trillion",
    "quadrillion",
    "quintillion",
];

fn push_below_thousand(n: u64, words: &mut Vec<String>) {
    let hundreds = (n / 100) as usize;
    let rest = (n % 100) as usize;

    if hundreds > 0 {
        words.push(ONES[hundreds].to_string());
        words.push("hundred".to_string());
    }

    if rest == 0 {
        return;
    }
    if rest < 20 {
        words.push(ONES[rest].to_string());
    } else if rest % 10 == 0 {
        words.push(TENS[rest / 10].to_string());
    } else {
        words.push(format!("{}-{}", TENS[rest / 10], ONES[rest % 10]));
    }
}

/// Spell out a number: 21 -> "twenty-one", 1023 -> "one thousand twenty-three"
pub fn cardinal_words(n: u64) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }

    let mut groups = Vec::new();
    let mut remaining = n;
    while remaining > 0 {
        groups.push(remaining % 1000);
        remaining /= 1000;
    }

    let mut words = Vec::new();
    for (scale, group) in groups.iter().enumerate().rev() {
        if *group == 0 {
            continue;
        }
        push_below_thousand(*group, &mut words);
        if scale > 0 {
            words.push(SCALES[scale].to_string());
        }
    }

    words.join(" ")
}

fn ordinal_suffix(word: &str) -> String {
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

/// Ordinal word for `n`: 1 -> "first", 22 -> "twenty-second", 100 -> "one hundredth"
pub fn ordinal_word(n: u64) -> String {
    let cardinal = cardinal_words(n);
    // only the final word (or the unit after a hyphen) takes the ordinal form
    let split = cardinal
        .rfind(|c: char| c == ' ' || c == '-')
        .map_or(0, |i| i + 1);
    let (head, last) = cardinal.split_at(split);
    format!("{}{}", head, ordinal_suffix(last))
}
