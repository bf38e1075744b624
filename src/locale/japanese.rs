//! Japanese era calendar and traditional numerals.

use crate::types::{AlternateDigits, EraYearField, EraYears};

struct Era {
    name: &'static str,
    year: i32,
    month: u32,
    day: u32,
}

/// Imperial eras, most recent first. An era covers every date from its
/// start date (inclusive) until the next era begins.
const ERAS: [Era; 5] = [
    Era { name: "令和", year: 2019, month: 5, day: 1 },
    Era { name: "平成", year: 1989, month: 1, day: 8 },
    Era { name: "昭和", year: 1926, month: 12, day: 25 },
    Era { name: "大正", year: 1912, month: 7, day: 30 },
    Era { name: "明治", year: 1868, month: 10, day: 23 },
];

/// Label for dates before the era table; years stay Gregorian under it.
const WESTERN_CALENDAR: &str = "西暦";

/// Era-based year rendering for the Japanese locale.
pub(crate) struct JapaneseEras;

impl EraYears for JapaneseEras {
    fn era_year(&self, year: i32, month: u32, day: u32, field: EraYearField) -> String {
        let (name, era_year) = ERAS
            .iter()
            .find(|era| (year, month, day) >= (era.year, era.month, era.day))
            .map(|era| (era.name, year - era.year + 1))
            .unwrap_or((WESTERN_CALENDAR, year));

        match field {
            EraYearField::Century => name.to_string(),
            EraYearField::YearInEra => era_year.to_string(),
            EraYearField::FullYear => {
                if era_year == 1 {
                    // The first year of an era is written 元年, not 1年.
                    format!("{name}元年")
                } else {
                    format!("{name}{era_year}年")
                }
            }
        }
    }
}

const DIGITS: [&str; 10] = ["〇", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// Unit glyphs by descending value. Grouping is by 10,000 (万/億), not by
/// thousands.
const UNITS: [(&str, u64); 5] = [
    ("億", 100_000_000),
    ("万", 10_000),
    ("千", 1_000),
    ("百", 100),
    ("十", 10),
];

/// Traditional Japanese numerals, e.g. 42 → 四十二.
pub(crate) struct JapaneseNumerals;

impl AlternateDigits for JapaneseNumerals {
    fn append(&self, out: &mut String, value: i64) {
        if value < 0 {
            out.push('-');
        }
        append_units(out, value.unsigned_abs());
    }
}

fn append_units(out: &mut String, value: u64) {
    let mut rest = value;
    let mut wrote = false;

    for &(glyph, unit) in &UNITS {
        if rest >= unit {
            let quotient = rest / unit;
            if quotient >= 10 {
                append_units(out, quotient);
            } else if quotient > 1 {
                out.push_str(DIGITS[quotient as usize]);
            }
            // A quotient of exactly 1 is written as the unit glyph alone.
            out.push_str(glyph);
            rest -= quotient * unit;
            wrote = true;
        }
    }

    if rest > 0 || !wrote {
        out.push_str(DIGITS[rest as usize]);
    }
}
