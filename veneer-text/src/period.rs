//! Time-series period codes
//!
//! Machine period codes such as "2019 JAN-FEB" or "2010 Q1" become human
//! phrases ("Jan - Feb 2019", "Jan - Mar 2010"). The pipeline is
//! order-sensitive; each step feeds the next.

/// Format a time-series date period string into a human accessible phrase.
///
/// # Example
///
/// ```
/// use veneer_text::date_period_format;
///
/// assert_eq!(date_period_format("2019 JAN-FEB"), "Jan - Feb 2019");
/// assert_eq!(date_period_format("2010 Q1"), "Jan - Mar 2010");
/// ```
pub fn date_period_format(s: &str) -> String {
    let mut s = s.to_string();

    // 1. Add spaces around the first dash
    if let Some(i) = s.find('-') {
        s = format!("{} - {}", &s[..i], &s[i + 1..]);
    }

    // 2. Replace Q1..Q4 with their quarterly month ranges
    for (quarter, months) in [
        ("Q1", "Jan - Mar"),
        ("Q2", "Apr - Jun"),
        ("Q3", "Jul - Sep"),
        ("Q4", "Oct - Dec"),
    ] {
        if let Some(i) = s.find(quarter) {
            s.replace_range(i..i + quarter.len(), months);
        }
    }

    // 3. Move a leading year to the end, dropping the separator character.
    // Only applies when the string holds more than just the year.
    if s.len() > 5 {
        if let (Some(year), Some(rest)) = (s.get(..4), s.get(5..)) {
            if year.parse::<i32>().is_ok() {
                s = format!("{rest} {year}");
            }
        }
    }

    // 4. BLOCK CAPS to Title Caps
    title_case(&s.to_lowercase())
}

// Capitalizes every alphabetic character that follows a non-alphabetic one.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut boundary = true;
    for c in s.chars() {
        if boundary && c.is_alphabetic() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        boundary = !c.is_alphabetic();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_range_with_year() {
        assert_eq!(date_period_format("2019 JAN-FEB"), "Jan - Feb 2019");
    }

    #[test]
    fn test_quarter_with_year() {
        assert_eq!(date_period_format("2010 Q1"), "Jan - Mar 2010");
        assert_eq!(date_period_format("2010 Q2"), "Apr - Jun 2010");
        assert_eq!(date_period_format("2010 Q3"), "Jul - Sep 2010");
        assert_eq!(date_period_format("2010 Q4"), "Oct - Dec 2010");
    }

    #[test]
    fn test_year_only_is_not_rotated() {
        assert_eq!(date_period_format("2019"), "2019");
    }

    #[test]
    fn test_month_range_without_year() {
        assert_eq!(date_period_format("JAN-FEB"), "Jan - Feb");
    }

    #[test]
    fn test_single_month() {
        assert_eq!(date_period_format("2019 NOV"), "Nov 2019");
    }

    #[test]
    fn test_short_input_does_not_panic() {
        assert_eq!(date_period_format(""), "");
        assert_eq!(date_period_format("Q1"), "Jan - Mar");
    }
}
