use {
    crate::{
        analysis::AnalogScore,
        domain::{Year, season_label},
        models::{AccuracyReport, AnalogSnowfall},
    },
    chrono::Local,
    std::fmt::Write,
    tabled::{Table, Tabled, settings::Style},
};

const RULE: &str = "⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯⎯";

#[derive(Tabled)]
struct AnalogRow {
    #[tabled(rename = "#")]
    rank: usize,
    #[tabled(rename = "Year")]
    year: Year,
    #[tabled(rename = "Fused Rank")]
    fused_score: String,
}

#[derive(Tabled)]
struct AccuracyRow {
    #[tabled(rename = "Season")]
    season: String,
    #[tabled(rename = "Analogs")]
    analogs: String,
    #[tabled(rename = "Predicted")]
    predicted: String,
    #[tabled(rename = "Actual")]
    actual: String,
    #[tabled(rename = "Accuracy")]
    accuracy: String,
}

/// Ranked analog years for `target` as a table.
pub fn format_analogs(target: Year, ranking: &[AnalogScore]) -> String {
    let rows = ranking.iter().enumerate().map(|(i, score)| AnalogRow {
        rank: i + 1,
        year: score.year,
        fused_score: format!("{:.1}", score.fused_score),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    format!("{RULE}\nTop analogs for {}:\n{}", season_label(target), table)
}

/// Prediction headline followed by every analog season's total.
pub fn format_analog_data(data: &AnalogSnowfall, target: Year) -> String {
    let specific_snowfalls: String = data
        .season_snowfalls
        .iter()
        .map(|s| format!("\n  ⚫ {}: {:.3}\"", s.season, s.snowfall_total))
        .collect();

    format!(
        "{RULE}\nTotal snowfall for the {} season at {} predicted to be: {:.2}\"\n{RULE}\nTop analogs for {} are:{}",
        season_label(target),
        data.airport,
        data.median,
        data.airport,
        specific_snowfalls
    )
}

/// Mean accuracy headline plus a per-season table.
pub fn format_accuracy(report: &AccuracyReport) -> String {
    let mut out = String::new();
    let generated = Local::now().format("%Y-%m-%d %H:%M:%S");

    let mean = report
        .mean_accuracy_pct
        .map(|m| format!("{:.1}%", m))
        .unwrap_or_else(|| "n/a".to_string());

    // Writing to a String cannot fail
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "% of snow predicted versus the actual snow that fell at {} from {} to {}: {}",
        report.airport,
        season_label(report.first_year),
        season_label(report.end_year - 1),
        mean
    );
    if let (Some(low), Some(high)) = (report.lowest, report.highest) {
        let _ = writeln!(
            out,
            "Lowest: {}   Highest: {}",
            season_label(low),
            season_label(high)
        );
    }
    let _ = writeln!(out, "{RULE}");

    let rows = report.seasons.iter().map(|s| AccuracyRow {
        season: s.season.clone(),
        analogs: s
            .analog_years
            .iter()
            .map(|y| y.to_string())
            .collect::<Vec<_>>()
            .join(" "),
        predicted: format!("{:.2}\"", s.predicted),
        actual: format!("{:.2}\"", s.actual),
        accuracy: s
            .accuracy_pct
            .map(|pct| format!("{:.1}%", pct))
            .unwrap_or_else(|| "n/a".to_string()),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let _ = writeln!(out, "{}", table);
    let _ = write!(out, "Generated {}", generated);
    out
}
