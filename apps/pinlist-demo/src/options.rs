//! Command-line options for the demo.

use clap::Parser;
use pinlist_ui_layout::Axis;

/// Scrolls a list with pinned positions and prints every frame.
#[derive(Parser, Clone, Debug, PartialEq)]
#[command(name = "pinlist-demo", version, about)]
pub struct DemoOptions {
    /// Number of items in the list.
    #[arg(long, default_value_t = 10)]
    pub items: usize,

    /// Size of every item along the scroll axis.
    #[arg(long, default_value_t = 100.0, value_parser = parse_length)]
    pub item_size: f32,

    /// Size of the viewport along the scroll axis.
    #[arg(long, default_value_t = 500.0, value_parser = parse_length)]
    pub viewport: f32,

    /// Positions to pin, in stacking order.
    #[arg(long, value_delimiter = ',', default_values_t = [1usize, 3])]
    pub pinned: Vec<usize>,

    /// Scroll distance per frame; negative scrolls back.
    #[arg(long, default_value_t = 50.0, allow_negative_numbers = true)]
    pub step: f32,

    /// Number of scroll frames after the initial layout.
    #[arg(long, default_value_t = 10)]
    pub frames: usize,

    /// Lay the list out horizontally.
    #[arg(long)]
    pub horizontal: bool,
}

impl DemoOptions {
    pub fn axis(&self) -> Axis {
        if self.horizontal {
            Axis::Horizontal
        } else {
            Axis::Vertical
        }
    }
}

fn parse_length(value: &str) -> Result<f32, String> {
    let length: f32 = value
        .trim()
        .parse()
        .map_err(|err| format!("invalid length {:?}: {}", value, err))?;
    if !length.is_finite() || length < 0.0 {
        return Err(format!("expected a non-negative length, got {}", value));
    }
    Ok(length)
}
