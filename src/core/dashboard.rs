use super::animation::create_animation;
use super::commands::Command;
use super::error::RenderError;
use crate::gfx::{font, Color, FontSize, Point, Size};
use crate::graph::{generate_graph_values, scale_up_graph_values, smooth_graph_values};
use crate::sync::WallClock;

/// Height of the graph strip along the bottom edge.
pub const GRAPH_HEIGHT: u32 = 16;

pub const GRAPH_BACKGROUND: Color = Color::new(50, 50, 50);

#[derive(Debug, Clone, PartialEq)]
pub struct GraphSeries {
    pub label: String,
    pub samples: Vec<f64>,
    pub default_max: f64,
    pub default_min: f64,
    pub color: Color,
    /// Run a three-point average over the stretched series.
    pub smooth: bool,
}

impl GraphSeries {
    pub fn new(label: impl Into<String>, samples: Vec<f64>, color: Color) -> Self {
        let default_max = samples.iter().copied().fold(0.0, f64::max);
        Self {
            label: label.into(),
            samples,
            default_max,
            default_min: 0.0,
            color,
            smooth: false,
        }
    }

    /// Bar heights for a graph `width` columns wide and [`GRAPH_HEIGHT`] tall.
    ///
    /// A bar of value `v` covers `v + 1` rows, so the scale tops out one below
    /// the strip height to keep the tallest bar inside it.
    pub fn graph_values(&self, width: u32) -> Result<Vec<i32>, RenderError> {
        let scaled = generate_graph_values(&self.samples, self.default_max, self.default_min, GRAPH_HEIGHT - 1);
        let stretched = scale_up_graph_values(&scaled.data, width as usize)?;
        Ok(if self.smooth {
            smooth_graph_values(&stretched)
        } else {
            stretched
        })
    }
}

/// A day of made-up hourly readings, for previewing without a data source.
pub fn sample_series() -> Vec<GraphSeries> {
    let hourly = |f: &dyn Fn(f64) -> f64| (0..24).map(|h| f(h as f64)).collect::<Vec<_>>();

    let temperature = hourly(&|h| 52.0 + 14.0 * ((h - 9.0) * std::f64::consts::PI / 12.0).sin());
    let temp_min = temperature.iter().copied().fold(f64::INFINITY, f64::min);

    vec![
        GraphSeries {
            label: "Temp".into(),
            default_max: 100.0,
            default_min: temp_min - 10.0,
            color: Color::new(255, 150, 50),
            smooth: true,
            samples: temperature,
        },
        GraphSeries {
            label: "Cloud".into(),
            samples: hourly(&|h| (40.0 + 35.0 * (h / 4.0).cos()).max(0.0)),
            default_max: 100.0,
            default_min: 0.0,
            color: Color::new(120, 120, 120),
            smooth: false,
        },
        GraphSeries {
            label: "Wind".into(),
            samples: hourly(&|h| 8.0 + 6.0 * (h / 3.0).sin().abs()),
            default_max: 30.0,
            default_min: 0.0,
            color: Color::new(255, 250, 190),
            smooth: true,
        },
        GraphSeries {
            label: "Rain".into(),
            samples: hourly(&|h| if (14.0..20.0).contains(&h) { 60.0 - (h - 17.0).abs() * 15.0 } else { 5.0 }),
            default_max: 50.0,
            default_min: 0.0,
            color: Color::new(80, 100, 255),
            smooth: false,
        },
    ]
}

/// Build the dashboard command list for a `canvas`-sized display.
///
/// Time sits in the top left in the large font with the date under it. The
/// bottom [`GRAPH_HEIGHT`] rows hold the graph of one series at a time, with
/// its label just above, switching every `delay` milliseconds.
pub fn dashboard_commands(
    canvas: Size,
    series: &[GraphSeries],
    delay: u64,
    clock: &dyn WallClock,
) -> Result<Vec<Command>, RenderError> {
    let mut commands = vec![
        Command::time().at(Point::ORIGIN).font(FontSize::Lg).color(Color::WHITE),
        Command::date().at(Point::new(1, font::LG.height as i32)).font(FontSize::Sm),
    ];

    if series.is_empty() {
        return Ok(commands);
    }

    let graph_top = canvas.height as i32 - GRAPH_HEIGHT as i32;
    let label_top = graph_top - font::SM.height as i32;

    let frames = series
        .iter()
        .map(|s| {
            let values = s.graph_values(canvas.width)?;
            Ok(vec![
                Command::string(s.label.clone())
                    .at(Point::new(0, label_top))
                    .font(FontSize::Sm)
                    .color(Color::WHITE),
                Command::graph(Size::new(canvas.width, GRAPH_HEIGHT), values)
                    .at(Point::new(0, graph_top))
                    .color(s.color)
                    .background(GRAPH_BACKGROUND),
            ])
        })
        .collect::<Result<Vec<_>, RenderError>>()?;

    let animation = create_animation(Point::ORIGIN, canvas, delay, &frames, clock)?;
    commands.push(Command::Animation(animation));
    Ok(commands)
}
