//! Block layout: centering wrapped lines on the canvas.

/// Pixel size of a measured line.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Top-left draw position of a line. May be fractional or negative.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Origin {
    pub x: f32,
    pub y: f32,
}

impl Origin {
    /// Integer pixel position, rounding both axes down.
    pub fn to_pixel(self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }
}

/// A wrapped line with its measurement and position.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub extent: Extent,
    pub origin: Origin,
}

/// A quote's wrapped lines, measured and positioned on the canvas.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WrappedBlock {
    pub lines: Vec<PlacedLine>,
    /// Width of the widest line.
    pub width: f32,
    /// Sum of line heights plus the gaps between them.
    pub height: f32,
}

/// Measure and position `lines` so the block is centered on the canvas.
///
/// Every line shares the x origin of the widest line; narrower lines are
/// left-aligned to it rather than centered individually.
pub fn layout<F>(
    lines: Vec<String>,
    measure: F,
    canvas_width: u32,
    canvas_height: u32,
    spacing: u32,
) -> WrappedBlock
where
    F: Fn(&str) -> Extent,
{
    let spacing = spacing as f32;
    let extents: Vec<Extent> = lines.iter().map(|line| measure(line.as_str())).collect();

    let width = extents.iter().map(|e| e.width).fold(0.0, f32::max);
    let mut height: f32 = extents.iter().map(|e| e.height).sum();
    if extents.len() > 1 {
        height += spacing * (extents.len() - 1) as f32;
    }

    let x = (canvas_width as f32 - width) / 2.0;
    let mut y = (canvas_height as f32 - height) / 2.0;

    let lines = lines
        .into_iter()
        .zip(extents)
        .map(|(text, extent)| {
            let origin = Origin { x, y };
            y += extent.height + spacing;
            PlacedLine {
                text,
                extent,
                origin,
            }
        })
        .collect();

    tracing::trace!(width, height, "laid out block");

    WrappedBlock {
        lines,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// 10px per char, 20px tall.
    fn mono(text: &str) -> Extent {
        Extent::new(text.chars().count() as f32 * 10.0, 20.0)
    }

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_line_centered() {
        let block = layout(lines(&["HELLO"]), mono, 200, 100, 15);

        assert_eq!(block.width, 50.0);
        assert_eq!(block.height, 20.0);
        assert_eq!(block.lines[0].origin, Origin { x: 75.0, y: 40.0 });
    }

    #[test]
    fn test_height_includes_spacing_between_lines() {
        let block = layout(lines(&["A", "BB", "CCC"]), mono, 100, 200, 15);

        assert_eq!(block.height, 3.0 * 20.0 + 2.0 * 15.0);
        let ys: Vec<f32> = block.lines.iter().map(|l| l.origin.y).collect();
        assert_eq!(ys, vec![55.0, 90.0, 125.0]);
    }

    #[test]
    fn test_all_lines_share_widest_x() {
        let block = layout(lines(&["WIDEST LINE", "NARROW"]), mono, 300, 100, 0);

        assert_eq!(block.width, 110.0);
        for line in &block.lines {
            assert_eq!(line.origin.x, 95.0);
        }
    }

    #[test]
    fn test_height_law_with_uneven_lines() {
        let uneven = |text: &str| Extent::new(10.0, text.len() as f32 * 3.0);
        for count in 1..6 {
            let items: Vec<String> = (1..=count).map(|n| "x".repeat(n)).collect();
            let block = layout(items.clone(), uneven, 100, 100, 7);

            let expected: f32 = items
                .iter()
                .map(|t| uneven(t).height + 7.0)
                .sum::<f32>()
                - 7.0;
            assert_eq!(block.height, expected, "{count} lines");
        }
    }

    #[test]
    fn test_fractional_and_negative_origins() {
        let block = layout(lines(&["ABC"]), mono, 45, 15, 0);
        let origin = block.lines[0].origin;

        assert_eq!(origin, Origin { x: 7.5, y: -2.5 });
        assert_eq!(origin.to_pixel(), (7, -3));
    }

    #[test]
    fn test_empty_block() {
        let block = layout(Vec::new(), mono, 100, 100, 15);
        assert!(block.lines.is_empty());
        assert_eq!(block.height, 0.0);
    }
}
