use std::fmt;

use crate::gfx::line::round_half_up;

#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A graph needs at least one value per pixel column.
    InsufficientSamples { width: u32, samples: usize },
    /// A value falls outside `0..=height`.
    ValueOutOfRange { index: usize, value: i32, height: u32 },
    /// Scaling up cannot shrink a series.
    InvalidWidth { width: usize, samples: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::InsufficientSamples { width, samples } => write!(
                f,
                "graph is {} columns wide but only {} values were given",
                width, samples
            ),
            GraphError::ValueOutOfRange { index, value, height } => write!(
                f,
                "graph value {} at index {} is outside 0..={}",
                value, index, height
            ),
            GraphError::InvalidWidth { width, samples } => write!(
                f,
                "cannot scale {} samples into {} columns",
                samples, width
            ),
        }
    }
}

impl std::error::Error for GraphError {}

/// A scaled series plus the bounds it was scaled against.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphValues {
    pub data: Vec<i32>,
    pub scale_max: f64,
    pub scale_min: f64,
    /// Largest observed sample.
    pub max: f64,
    /// Smallest observed sample.
    pub min: f64,
}

/// Map samples linearly onto `0..=height`.
///
/// The scale spans at least `default_min..=default_max` and widens to include
/// any sample outside it. A flat scale maps everything to 0.
pub fn generate_graph_values(data: &[f64], default_max: f64, default_min: f64, height: u32) -> GraphValues {
    let observed_max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let observed_min = data.iter().copied().fold(f64::INFINITY, f64::min);

    let scale_max = observed_max.max(default_max);
    let scale_min = observed_min.min(default_min);
    let range = scale_max - scale_min;

    let scaled = data
        .iter()
        .map(|&sample| {
            if range <= 0.0 || !range.is_finite() {
                return 0;
            }
            let position = (sample - scale_min) / range;
            round_half_up(position * height as f64).clamp(0, height as i64) as i32
        })
        .collect();

    GraphValues {
        data: scaled,
        scale_max,
        scale_min,
        max: if data.is_empty() { scale_min } else { observed_max },
        min: if data.is_empty() { scale_max } else { observed_min },
    }
}

/// Stretch `data` across `width` columns by nearest-neighbour repetition.
pub fn scale_up_graph_values<T: Copy + Default>(data: &[T], width: usize) -> Result<Vec<T>, GraphError> {
    if width < data.len() {
        return Err(GraphError::InvalidWidth {
            width,
            samples: data.len(),
        });
    }

    Ok((0..width)
        .map(|column| {
            let idx = column * data.len() / width;
            data.get(idx).copied().unwrap_or_default()
        })
        .collect())
}

/// Three-point moving average. Edge samples stand in for their missing
/// neighbour; series shorter than three are returned as-is.
pub fn smooth_graph_values(data: &[i32]) -> Vec<i32> {
    if data.len() < 3 {
        return data.to_vec();
    }

    (0..data.len())
        .map(|idx| {
            let current = data[idx];
            let prev = if idx == 0 { current } else { data[idx - 1] };
            let next = data.get(idx + 1).copied().unwrap_or(current);
            round_half_up((prev + current + next) as f64 / 3.0) as i32
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_stays_in_range() {
        let data = [12.0, 55.5, -3.0, 140.0, 99.9, 0.0];
        let values = generate_graph_values(&data, 100.0, 0.0, 16);
        assert_eq!(values.data.len(), data.len());
        assert!(values.data.iter().all(|&v| (0..=16).contains(&v)));
        assert_eq!(values.scale_max, 140.0);
        assert_eq!(values.scale_min, -3.0);
        assert_eq!(values.max, 140.0);
        assert_eq!(values.min, -3.0);
        assert_eq!(values.data[2], 0);
        assert_eq!(values.data[3], 16);
    }

    #[test]
    fn test_generate_uses_default_bounds() {
        let values = generate_graph_values(&[25.0, 50.0, 75.0], 100.0, 0.0, 10);
        // 2.5 rounds up, 7.5 rounds up
        assert_eq!(values.data, vec![3, 5, 8]);
        assert_eq!(values.max, 75.0);
        assert_eq!(values.min, 25.0);
    }

    #[test]
    fn test_generate_all_at_default_min_is_zero() {
        let values = generate_graph_values(&[5.0; 6], 30.0, 5.0, 12);
        assert_eq!(values.data, vec![0; 6]);
    }

    #[test]
    fn test_generate_flat_scale_is_zero() {
        let values = generate_graph_values(&[4.0, 4.0], 4.0, 4.0, 8);
        assert_eq!(values.data, vec![0, 0]);
    }

    #[test]
    fn test_scale_up_same_width_is_identity() {
        let data = [3, 1, 4, 1, 5];
        assert_eq!(scale_up_graph_values(&data, 5).unwrap(), data.to_vec());
    }

    #[test]
    fn test_scale_up_repeats_samples() {
        assert_eq!(
            scale_up_graph_values(&[1, 2, 3], 7).unwrap(),
            vec![1, 1, 1, 2, 2, 3, 3]
        );
    }

    #[test]
    fn test_scale_up_rejects_narrower_width() {
        assert_eq!(
            scale_up_graph_values(&[1, 2, 3], 2),
            Err(GraphError::InvalidWidth { width: 2, samples: 3 })
        );
    }

    #[test]
    fn test_smooth_averages_neighbours() {
        assert_eq!(smooth_graph_values(&[0, 3, 6, 0]), vec![1, 3, 3, 2]);
    }

    #[test]
    fn test_smooth_short_series_untouched() {
        assert_eq!(smooth_graph_values(&[9, 1]), vec![9, 1]);
        assert!(smooth_graph_values(&[]).is_empty());
    }
}
