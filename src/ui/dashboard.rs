use eframe::egui::{self, Color32, RichText, ScrollArea, Stroke, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Bar, BarChart, Plot, PlotPoints, Polygon};

use crate::color::{generate_palette, heat_color};
use crate::data::model::CellValue;
use crate::data::report::DashboardReport;
use crate::data::stats::{Availability, DayOfWeek, Heatmap, PlayCount, TopList};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Dashboard (central panel)
// ---------------------------------------------------------------------------

/// Render every dashboard section in the central panel.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    let Some(report) = &state.report else {
        ui.centered_and_justified(|ui: &mut Ui| {
            match &state.status_message {
                Some(msg) => ui.heading(RichText::new(msg).color(Color32::RED)),
                None => ui.heading("Open a listening history to begin  (File → Open…)"),
            };
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Dataset snapshot");
            snapshot_table(ui, &report.columns, &report.preview);
            ui.separator();

            ui.heading("Top Artists");
            top_artists_section(ui, &report.top_artists, state.inputs.min_plays);
            ui.separator();

            ui.heading("Top Tracks");
            match &report.top_tracks {
                Availability::Available(list) => {
                    ranking_table(ui, "top_tracks", "track", list, state.inputs.min_plays)
                }
                Availability::Unavailable { missing } => unavailable(ui, missing),
            }
            ui.separator();

            ui.heading("Listening by Hour and Day");
            match &report.heatmap {
                Availability::Available(heat) => heatmap_plot(ui, heat),
                Availability::Unavailable { missing } => unavailable(ui, missing),
            }
            ui.separator();

            ui.heading("Mood Playlist Generator (fun, not live)");
            playlist_section(ui, report);
            ui.separator();

            ui.heading("Mini Stats");
            mini_stats(ui, report);
        });
}

fn unavailable(ui: &mut Ui, missing: &[String]) {
    let names: Vec<String> = missing.iter().map(|m| format!("'{m}'")).collect();
    ui.label(
        RichText::new(format!("No {} column found in dataset.", names.join("/")))
            .color(Color32::LIGHT_BLUE),
    );
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

fn snapshot_table(ui: &mut Ui, columns: &[String], rows: &[Vec<CellValue>]) {
    ui.push_id("snapshot", |ui: &mut Ui| {
        ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .vscroll(false)
                .columns(Column::auto().at_least(60.0).resizable(true), columns.len())
                .header(20.0, |mut header| {
                    for name in columns {
                        header.col(|ui: &mut Ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|mut body| {
                    for row in rows {
                        body.row(18.0, |mut table_row| {
                            for cell in row {
                                table_row.col(|ui: &mut Ui| {
                                    ui.label(cell.to_string());
                                });
                            }
                        });
                    }
                });
        });
    });
}

fn top_artists_section(ui: &mut Ui, artists: &Availability<TopList>, min_plays: u32) {
    let list = match artists {
        Availability::Available(list) => list,
        Availability::Unavailable { missing } => {
            unavailable(ui, missing);
            return;
        }
    };

    ui.columns(2, |cols| {
        ranking_table(&mut cols[0], "top_artists", "artist", list, min_plays);
        artist_bars(&mut cols[1], &list.entries);
    });

    if let Some(leader) = &list.leader {
        ui.label(RichText::new(format!("Most listened artist: {leader}")).strong());
    }
}

fn ranking_table(ui: &mut Ui, id: &str, key_header: &str, list: &TopList, min_plays: u32) {
    if list.entries.is_empty() {
        ui.label(format!(
            "None of the {} entries has at least {min_plays} plays.",
            list.distinct
        ));
        return;
    }

    egui::Grid::new(id)
        .striped(true)
        .num_columns(3)
        .show(ui, |ui: &mut Ui| {
            ui.strong("#");
            ui.strong(key_header);
            ui.strong("plays");
            ui.end_row();

            for (i, entry) in list.entries.iter().enumerate() {
                ui.label((i + 1).to_string());
                ui.label(&entry.name);
                ui.label(entry.plays.to_string());
                ui.end_row();
            }
        });
}

fn artist_bars(ui: &mut Ui, entries: &[PlayCount]) {
    let palette = generate_palette(entries.len());
    let bars: Vec<Bar> = entries
        .iter()
        .zip(palette)
        .enumerate()
        .map(|(i, (entry, color))| {
            Bar::new(i as f64, entry.plays as f64)
                .name(&entry.name)
                .fill(color)
        })
        .collect();

    Plot::new("artist_bars")
        .height(240.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_axes([false, true])
        .y_axis_label("plays")
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Rows run Monday (top) to Sunday (bottom); columns are hours 0–23.
fn heatmap_plot(ui: &mut Ui, heat: &Heatmap) {
    if heat.cells.is_empty() {
        ui.label("No plays with a readable day and hour.");
        return;
    }
    let max = heat.max_plays();

    Plot::new("hour_day_heatmap")
        .height(320.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_x(-0.5)
        .include_x(23.5)
        .include_y(-0.5)
        .include_y(6.5)
        .x_axis_label("Hour of day")
        .y_axis_label("Day of week")
        .y_axis_formatter(|mark, _range| day_label(mark.value))
        .show(ui, |plot_ui| {
            for cell in &heat.cells {
                let x = cell.hour as f64;
                let y = (6 - cell.day.index()) as f64;
                let points: PlotPoints = vec![
                    [x - 0.5, y - 0.5],
                    [x + 0.5, y - 0.5],
                    [x + 0.5, y + 0.5],
                    [x - 0.5, y + 0.5],
                ]
                .into_iter()
                .collect();
                let polygon = Polygon::new(points)
                    .fill_color(heat_color(cell.plays, max))
                    .stroke(Stroke::NONE)
                    .name(format!("{} {:02}:00: {} plays", cell.day, cell.hour, cell.plays));
                plot_ui.polygon(polygon);
            }
        });

    if heat.skipped_rows > 0 {
        ui.small(format!(
            "{} plays without a readable day/hour are not shown.",
            heat.skipped_rows
        ));
    }
}

fn day_label(value: f64) -> String {
    let row = value.round();
    if (value - row).abs() > 1e-6 || !(0.0..=6.0).contains(&row) {
        return String::new();
    }
    DayOfWeek::ALL[6 - row as usize].name().to_string()
}

fn playlist_section(ui: &mut Ui, report: &DashboardReport) {
    if report.playlist.is_empty() {
        ui.label("No tracks to pick from.");
        return;
    }
    ui.label(format!("Here's a playful playlist for {}:", report.mood));
    for (i, track) in report.playlist.iter().enumerate() {
        ui.label(format!("{}. {track}", i + 1));
    }
}

fn mini_stats(ui: &mut Ui, report: &DashboardReport) {
    let hours = report
        .total_hours
        .available()
        .map_or_else(|| "N/A".to_string(), |h| format!("{h:.2}"));
    let unique = report
        .unique_tracks
        .available()
        .map_or_else(|| "N/A".to_string(), ToString::to_string);

    ui.columns(3, |cols| {
        metric(&mut cols[0], "Total plays", report.total_plays.to_string());
        metric(&mut cols[1], "Total listening hours", hours);
        metric(&mut cols[2], "Unique tracks", unique);
    });
}

fn metric(ui: &mut Ui, label: &str, value: String) {
    ui.label(label);
    ui.label(RichText::new(value).size(28.0).strong());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_labels_follow_rows() {
        assert_eq!(day_label(6.0), "Monday");
        assert_eq!(day_label(0.0), "Sunday");
        assert_eq!(day_label(2.5), "");
        assert_eq!(day_label(7.0), "");
    }
}
