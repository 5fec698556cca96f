use std::path::Path;

use plotters::prelude::*;

use crate::error::AppResult;

const CHART_SIZE: (u32, u32) = (1600, 600);
const BAR_COLOR: RGBColor = RGBColor(52, 152, 219);

/// One labeled bar.
pub struct Bar {
    pub label: String,
    pub value: u64,
}

/// Draws a labeled bar chart. An empty series still renders the axes.
///
/// # Errors
///
/// Returns an error if the bitmap cannot be drawn or saved.
pub fn plot_bar_chart(path: &Path, title: &str, y_desc: &str, bars: &[Bar]) -> AppResult<()> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let x_max = u32::try_from(bars.len()).unwrap_or(u32::MAX).max(1);
    let y_max = bars.iter().map(|bar| bar.value).max().unwrap_or(0);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0u32..x_max, 0u64..y_max.saturating_add(1))?;

    let label_for = |index: &u32| -> String {
        usize::try_from(*index)
            .ok()
            .and_then(|idx| bars.get(idx))
            .map(|bar| bar.label.clone())
            .unwrap_or_default()
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bars.len().max(1))
        .x_label_formatter(&label_for)
        .y_desc(y_desc)
        .draw()?;

    chart.draw_series(bars.iter().enumerate().filter_map(|(index, bar)| {
        if bar.value == 0 {
            return None;
        }
        let x0 = u32::try_from(index).unwrap_or(u32::MAX);
        Some(Rectangle::new(
            [(x0, 0), (x0.saturating_add(1), bar.value)],
            BAR_COLOR.filled(),
        ))
    }))?;

    root.present()?;
    Ok(())
}
