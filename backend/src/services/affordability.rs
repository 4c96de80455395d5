//! Affordability arithmetic over an already-computed average premium.

/// Premium the household pays after the employer contribution, floored at 0.
pub fn out_of_pocket_premium(average_premium: Option<f64>, contribution: f64) -> Option<f64> {
    average_premium.map(|premium| (premium - contribution).max(0.0))
}

/// Monthly budget left once the premium is paid. May be negative.
pub fn remaining_budget(
    average_premium: Option<f64>,
    salary: f64,
    contribution: f64,
) -> Option<f64> {
    average_premium.map(|premium| salary + contribution - premium)
}

/// Parse a free-form money field such as `"$1,234.50"`.
///
/// Every character other than ASCII digits and `.` is dropped, then the
/// longest numeric prefix is read (`"1.2.3"` reads as `1.2`). Input with no
/// digits yields `0`.
pub fn parse_currency_input(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let prefix = match cleaned.match_indices('.').nth(1) {
        Some((second_dot, _)) => &cleaned[..second_dot],
        None => cleaned.as_str(),
    };

    prefix.parse::<f64>().unwrap_or(0.0)
}

/// Render an amount as US dollars with up to two fraction digits:
/// `1234.5` → `"$1,234.5"`, `-100` → `"-$100"`, `None` → `"N/A"`.
pub fn format_currency(value: Option<f64>) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return "N/A".to_string();
    };

    let cents = (value.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let fraction = cents % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    match fraction {
        0 => format!("{sign}${grouped}"),
        f if f % 10 == 0 => format!("{sign}${grouped}.{}", f / 10),
        f => format!("{sign}${grouped}.{f:02}"),
    }
}
