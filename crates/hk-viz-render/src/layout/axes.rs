/// Axis with tick generation and data→pixel mapping.
///
/// The axis range is taken exactly as given (bin edges and computed y-axis
/// maxima must not be widened); ticks land on "nice numbers" inside it.
#[derive(Debug, Clone)]
pub struct Axis {
    pub min: f64,
    pub max: f64,
    pub label: String,
    pub tick_positions: Vec<f64>,
    pub tick_labels: Vec<String>,
    pub minor_ticks: Vec<f64>,
}

impl Axis {
    /// Linear axis over exactly `[min, max]` with nice-number ticks inside.
    pub fn linear(min: f64, max: f64, target_ticks: usize) -> Self {
        let (min, max) =
            if (max - min).abs() < 1e-15 { (min - 1.0, max + 1.0) } else { (min, max) };
        let rough_step = (max - min) / (target_ticks.max(2) - 1) as f64;
        let step = nice_step(rough_step);

        let mut ticks = Vec::new();
        let mut labels = Vec::new();
        let mut v = (min / step).ceil() * step;
        while v <= max + step * 0.01 {
            ticks.push(v);
            labels.push(format_tick(v, step));
            v += step;
        }

        // Minor ticks: 5 subdivisions per major
        let minor_step = step / 5.0;
        let mut minor = Vec::new();
        let mut mv = (min / minor_step).ceil() * minor_step;
        while mv <= max + minor_step * 0.01 {
            if !ticks.iter().any(|t| (t - mv).abs() < minor_step * 0.01) {
                minor.push(mv);
            }
            mv += minor_step;
        }

        Self {
            min,
            max,
            label: String::new(),
            tick_positions: ticks,
            tick_labels: labels,
            minor_ticks: minor,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Map a data value to pixel coordinate.
    pub fn data_to_pixel(&self, value: f64, px_min: f64, px_max: f64) -> f64 {
        let frac = (value - self.min) / (self.max - self.min);
        px_min + frac * (px_max - px_min)
    }
}

/// Round a rough step to 1/2/5 × 10^k.
fn nice_step(rough: f64) -> f64 {
    let exp = rough.abs().log10().floor();
    let frac = rough / 10.0_f64.powf(exp);
    let nice_frac = if frac <= 1.5 {
        1.0
    } else if frac <= 3.5 {
        2.0
    } else if frac <= 7.5 {
        5.0
    } else {
        10.0
    };
    nice_frac * 10.0_f64.powf(exp)
}

fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 { 0 } else { (-step.log10().floor()) as usize };
    if decimals == 0 {
        // Avoid "-0"
        let v = if value.abs() < step * 0.01 { 0.0 } else { value };
        format!("{}", v.round() as i64)
    } else {
        format!("{:.prec$}", value, prec = decimals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_exact() {
        let ax = Axis::linear(0.0, 113.33, 5);
        assert_eq!(ax.min, 0.0);
        assert_eq!(ax.max, 113.33);
        assert!(!ax.tick_positions.is_empty());
        assert!(ax.tick_positions.iter().all(|&t| t >= 0.0 && t <= 113.34));
    }

    #[test]
    fn data_to_pixel_linear() {
        let ax = Axis::linear(0.0, 100.0, 5);
        let px = ax.data_to_pixel(50.0, 0.0, 500.0);
        assert!((px - 250.0).abs() < 1e-9);
    }

    #[test]
    fn inverted_pixel_range_flips() {
        // y axes map data upward onto decreasing pixel rows.
        let ax = Axis::linear(0.0, 10.0, 5);
        let top = ax.data_to_pixel(10.0, 400.0, 100.0);
        let bottom = ax.data_to_pixel(0.0, 400.0, 100.0);
        assert!(top < bottom);
    }

    #[test]
    fn negative_range_ticks() {
        let ax = Axis::linear(-4.0, 4.0, 6);
        assert!(ax.tick_positions.contains(&0.0));
        assert!(ax.tick_positions.iter().any(|&t| t < 0.0));
    }

    #[test]
    fn nice_step_values() {
        assert!((nice_step(3.2) - 2.0).abs() < 1e-9);
        assert!((nice_step(0.7) - 0.5).abs() < 1e-9);
        assert!((nice_step(15.0) - 10.0).abs() < 1e-9);
        assert!((nice_step(4.5) - 5.0).abs() < 1e-9);
        assert!((nice_step(1.2) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn fractional_ticks_keep_decimals() {
        let ax = Axis::linear(0.0, 1.0, 5);
        assert!(ax.tick_labels.iter().any(|l| l.contains('.')));
    }

    #[test]
    fn degenerate_range_widens() {
        let ax = Axis::linear(5.0, 5.0, 5);
        assert!(ax.max > ax.min);
    }
}
