//! Culture-specific date formatting.
//!
//! Patterns use the custom date/time specifiers common to documentation
//! tooling configuration: `d`, `M`, `y`, `h`, `H`, `m`, `s`, `t` (repeated to
//! select a width), `/` and `:` for the culture's separators, `'...'` or
//! `"..."` for literals and `\` to escape a single character. Any other
//! character is copied through. Fractional seconds, offsets and eras are not
//! supported and fail with [`Error::DateFormat`].

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Date formatting rules for one culture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Culture {
    /// Culture name (e.g., "en-US").
    pub name: String,
    /// Pattern used for short dates (e.g., "M/d/yyyy").
    pub short_date_pattern: String,
    pub date_separator: String,
    pub time_separator: String,
    pub am_designator: String,
    pub pm_designator: String,
    /// January first.
    pub month_names: Vec<String>,
    pub abbreviated_month_names: Vec<String>,
    /// Sunday first.
    pub day_names: Vec<String>,
    pub abbreviated_day_names: Vec<String>,
}

impl Default for Culture {
    fn default() -> Self {
        Self::en_us()
    }
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

impl Culture {
    /// The en-US culture.
    #[must_use]
    pub fn en_us() -> Self {
        Self {
            name: "en-US".into(),
            short_date_pattern: "M/d/yyyy".into(),
            date_separator: "/".into(),
            time_separator: ":".into(),
            am_designator: "AM".into(),
            pm_designator: "PM".into(),
            month_names: owned(&[
                "January", "February", "March", "April", "May", "June", "July", "August",
                "September", "October", "November", "December",
            ]),
            abbreviated_month_names: owned(&[
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
            ]),
            day_names: owned(&[
                "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
            ]),
            abbreviated_day_names: owned(&["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]),
        }
    }

    /// Formats `at` with this culture's short date pattern.
    pub fn format_short_date(&self, at: &DateTime<Utc>) -> Result<String> {
        self.format(at, &self.short_date_pattern)
    }

    /// Formats `at` with a custom `pattern`.
    pub fn format(&self, at: &DateTime<Utc>, pattern: &str) -> Result<String> {
        let invalid = |reason: String| Error::DateFormat {
            pattern: pattern.to_string(),
            reason,
        };

        let chars: Vec<char> = pattern.chars().collect();
        let mut out = String::with_capacity(pattern.len() + 8);
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            match c {
                '\'' | '"' => {
                    let close = chars[i + 1..]
                        .iter()
                        .position(|&ch| ch == c)
                        .ok_or_else(|| invalid(format!("unterminated literal at {i}")))?;
                    out.extend(&chars[i + 1..i + 1 + close]);
                    i += close + 2;
                }
                '\\' | '%' => {
                    let Some(&next) = chars.get(i + 1) else {
                        return Err(invalid(format!("dangling '{c}' at end of pattern")));
                    };
                    if c == '\\' {
                        out.push(next);
                        i += 2;
                    } else {
                        // `%x` is a lone custom specifier; format `x` on the next turn.
                        i += 1;
                    }
                }
                '/' => {
                    out.push_str(&self.date_separator);
                    i += 1;
                }
                ':' => {
                    out.push_str(&self.time_separator);
                    i += 1;
                }
                'd' | 'M' | 'y' | 'h' | 'H' | 'm' | 's' | 't' => {
                    let run = chars[i..].iter().take_while(|&&ch| ch == c).count();
                    self.push_field(&mut out, at, c, run).map_err(invalid)?;
                    i += run;
                }
                'f' | 'F' | 'z' | 'K' | 'g' => {
                    return Err(invalid(format!("unsupported specifier '{c}'")));
                }
                other => {
                    out.push(other);
                    i += 1;
                }
            }
        }

        Ok(out)
    }

    fn push_field(
        &self,
        out: &mut String,
        at: &DateTime<Utc>,
        specifier: char,
        run: usize,
    ) -> std::result::Result<(), String> {
        match (specifier, run) {
            ('d', 1) => out.push_str(&at.day().to_string()),
            ('d', 2) => out.push_str(&format!("{:02}", at.day())),
            ('d', 3) => out.push_str(name(&self.abbreviated_day_names, weekday(at), "day")?),
            ('d', _) => out.push_str(name(&self.day_names, weekday(at), "day")?),
            ('M', 1) => out.push_str(&at.month().to_string()),
            ('M', 2) => out.push_str(&format!("{:02}", at.month())),
            ('M', 3) => out.push_str(name(&self.abbreviated_month_names, at.month0() as usize, "month")?),
            ('M', _) => out.push_str(name(&self.month_names, at.month0() as usize, "month")?),
            ('y', 1) => out.push_str(&(at.year() % 100).to_string()),
            ('y', 2) => out.push_str(&format!("{:02}", at.year() % 100)),
            ('y', width) => out.push_str(&format!("{:0width$}", at.year())),
            ('h', 1) => out.push_str(&twelve_hour(at).to_string()),
            ('h', _) => out.push_str(&format!("{:02}", twelve_hour(at))),
            ('H', 1) => out.push_str(&at.hour().to_string()),
            ('H', _) => out.push_str(&format!("{:02}", at.hour())),
            ('m', 1) => out.push_str(&at.minute().to_string()),
            ('m', _) => out.push_str(&format!("{:02}", at.minute())),
            ('s', 1) => out.push_str(&at.second().to_string()),
            ('s', _) => out.push_str(&format!("{:02}", at.second())),
            ('t', run) => {
                let designator = if at.hour() < 12 {
                    &self.am_designator
                } else {
                    &self.pm_designator
                };
                if run == 1 {
                    out.extend(designator.chars().next());
                } else {
                    out.push_str(designator);
                }
            }
            (other, _) => return Err(format!("unsupported specifier '{other}'")),
        }
        Ok(())
    }
}

fn weekday(at: &DateTime<Utc>) -> usize {
    at.weekday().num_days_from_sunday() as usize
}

fn twelve_hour(at: &DateTime<Utc>) -> u32 {
    match at.hour() % 12 {
        0 => 12,
        hour => hour,
    }
}

fn name<'a>(names: &'a [String], index: usize, kind: &str) -> std::result::Result<&'a str, String> {
    names
        .get(index)
        .map(String::as_str)
        .ok_or_else(|| format!("culture has no {kind} name at index {index}"))
}
