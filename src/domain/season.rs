/// Calendar year. The unit every series is keyed by.
pub type Year = i32;

/// Winter season starting in `year`, e.g. `2010` -> `"2010-11"`.
pub fn season_label(year: Year) -> String {
    format!("{}-{:02}", year, (year + 1).rem_euclid(100))
}
