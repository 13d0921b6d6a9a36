use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Group, Line, Path, Rectangle, Text};

const FONT_FAMILY: &str = "monospace";
const SPINE_COLOR: &str = "#000000";
const TICK_COLOR: &str = "#000000";
const TICK_LENGTH: f32 = 5.0;
const TICK_FONT_SIZE: f32 = 11.0;
const TICK_LABEL_GAP: f32 = 8.0;
const AXIS_LABEL_GAP: f32 = 40.0;
const COLORBAR_GAP: f32 = 14.0;
const COLORBAR_WIDTH: f32 = 12.0;
const COLORBAR_STEPS: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisSide {
    Bottom,
    Top,
}

/// A blank white SVG document to place [`Axes`] groups on.
pub fn new_document(width: f32, height: f32) -> Document {
    Document::new()
        .set("viewBox", (0, 0, width, height))
        .set("width", width)
        .set("height", height)
        .add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", width)
                .set("height", height)
                .set("fill", "#ffffff"),
        )
}

/// Evenly spaced round-number ticks covering `lo..hi`, one decade below
/// the span.
pub fn decimal_ticks(lo: f64, hi: f64) -> Vec<(f64, String)> {
    let span = hi - lo;
    if span <= 0.0 {
        return vec![];
    }
    let mut step = 1.0;
    while step * 10.0 < span {
        step *= 10.0;
    }
    let mut ticks = vec![];
    let mut value = (lo / step).ceil() * step;
    while value <= hi {
        ticks.push((value, format!("{value:.0}")));
        value += step;
    }
    ticks
}

/// The "copper" color ramp, reversed so small values render bright and
/// large ones dark. Channel weights approximate the matplotlib ramp.
pub fn copper_reversed_color(t: f64) -> String {
    let t = (1.0 - t).clamp(0.0, 1.0);
    let r = (255.0 * (1.2478 * t).min(1.0)).round() as u8;
    let g = (255.0 * 0.7812 * t).round() as u8;
    let b = (255.0 * 0.4954 * t).round() as u8;
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// A chart panel: a pixel rectangle plus data-coordinate ranges, drawing
/// SVG primitives into a group. Shapes are positioned in data space;
/// axis furniture (spines, ticks, labels) in pixel space around the
/// panel. Scatter points outside the ranges are dropped, which is all
/// the clipping the renderers rely on.
#[derive(Debug)]
pub struct Axes {
    left: f32,
    top: f32,
    width: f32,
    height: f32,
    x_range: (f64, f64),
    y_range: (f64, f64),
    y_inverted: bool,
    group: Group,
}

impl Axes {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Axes {
            left,
            top,
            width,
            height,
            x_range: (0.0, 1.0),
            y_range: (0.0, 1.0),
            y_inverted: false,
            group: Group::new(),
        }
    }

    pub fn set_x_range(&mut self, lo: f64, hi: f64) {
        self.x_range = (lo, hi);
    }

    pub fn set_y_range(&mut self, lo: f64, hi: f64) {
        self.y_range = (lo, hi);
    }

    /// Flip the y axis so larger values render lower down.
    pub fn invert_y(&mut self) {
        self.y_inverted = true;
    }

    #[inline(always)]
    pub fn left(&self) -> f32 {
        self.left
    }

    #[inline(always)]
    pub fn top(&self) -> f32 {
        self.top
    }

    #[inline(always)]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline(always)]
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn x_to_px(&self, x: f64) -> f32 {
        let (lo, hi) = self.x_range;
        let frac = ((x - lo) / (hi - lo)) as f32;
        self.left + frac * self.width
    }

    pub fn y_to_px(&self, y: f64) -> f32 {
        let (lo, hi) = self.y_range;
        let frac = ((y - lo) / (hi - lo)) as f32;
        if self.y_inverted {
            self.top + frac * self.height
        } else {
            self.top + (1.0 - frac) * self.height
        }
    }

    fn push<T>(&mut self, node: T)
    where
        T: svg::Node,
    {
        let group = std::mem::replace(&mut self.group, Group::new());
        self.group = group.add(node);
    }

    fn contains(&self, x: f64, y: f64) -> bool {
        let (x_lo, x_hi) = self.x_range;
        let (y_lo, y_hi) = self.y_range;
        x_lo <= x && x <= x_hi && y_lo <= y && y <= y_hi
    }

    pub fn scatter(&mut self, points: &[(f64, f64)], radius: f32, fill: &str) {
        for (x, y) in points {
            if !self.contains(*x, *y) {
                continue;
            }
            let circle = Circle::new()
                .set("cx", self.x_to_px(*x))
                .set("cy", self.y_to_px(*y))
                .set("r", radius)
                .set("fill", fill);
            self.push(circle);
        }
    }

    pub fn line_data(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        stroke: &str,
        stroke_width: f32,
    ) {
        let line = Line::new()
            .set("x1", self.x_to_px(from.0))
            .set("y1", self.y_to_px(from.1))
            .set("x2", self.x_to_px(to.0))
            .set("y2", self.y_to_px(to.1))
            .set("stroke", stroke)
            .set("stroke-width", stroke_width);
        self.push(line);
    }

    /// Filled rectangle spanning `x..x+width`, `y..y+height` in data
    /// coordinates.
    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: &str) {
        let rect = self.data_rect(x, y, width, height).set("fill", fill);
        self.push(rect);
    }

    /// Unfilled rectangle outline in data coordinates.
    pub fn outline_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        stroke: &str,
        stroke_width: f32,
    ) {
        let rect = self
            .data_rect(x, y, width, height)
            .set("fill", "none")
            .set("stroke", stroke)
            .set("stroke-width", stroke_width);
        self.push(rect);
    }

    fn data_rect(&self, x: f64, y: f64, width: f64, height: f64) -> Rectangle {
        let x1 = self.x_to_px(x);
        let x2 = self.x_to_px(x + width);
        let y1 = self.y_to_px(y);
        let y2 = self.y_to_px(y + height);
        Rectangle::new()
            .set("x", x1.min(x2))
            .set("y", y1.min(y2))
            .set("width", (x2 - x1).abs())
            .set("height", (y2 - y1).abs())
    }

    /// Text centered on a data point.
    pub fn text_data(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        anchor: &str,
        font_size: f32,
        fill: &str,
    ) {
        let (px, py) = (self.x_to_px(x), self.y_to_px(y));
        self.text_px(px, py, content, anchor, font_size, fill);
    }

    /// Text at a pixel position, vertically centered on it.
    pub fn text_px(
        &mut self,
        x: f32,
        y: f32,
        content: &str,
        anchor: &str,
        font_size: f32,
        fill: &str,
    ) {
        let text = Text::new(content)
            .set("x", x)
            .set("y", y)
            .set("text-anchor", anchor)
            .set("dominant-baseline", "middle")
            .set("font-family", FONT_FAMILY)
            .set("font-size", font_size)
            .set("fill", fill);
        self.push(text);
    }

    /// Text rotated to read bottom-to-top at a pixel position.
    pub fn vertical_text_px(
        &mut self,
        x: f32,
        y: f32,
        content: &str,
        anchor: &str,
        font_size: f32,
        fill: &str,
    ) {
        let text = Text::new(content)
            .set("x", x)
            .set("y", y)
            .set("text-anchor", anchor)
            .set("dominant-baseline", "middle")
            .set("font-family", FONT_FAMILY)
            .set("font-size", font_size)
            .set("fill", fill)
            .set("transform", format!("rotate(-90 {x} {y})"));
        self.push(text);
    }

    /// Shallow curved connector between two data points, leaving `from`
    /// horizontally.
    pub fn connector(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        stroke: &str,
        stroke_width: f32,
        opacity: f32,
    ) {
        let p1 = (self.x_to_px(from.0), self.y_to_px(from.1));
        let p2 = (self.x_to_px(to.0), self.y_to_px(to.1));
        let control = ((p1.0 + p2.0) / 2.0, p1.1);
        let data = Data::new()
            .move_to(p1)
            .quadratic_curve_to((control.0, control.1, p2.0, p2.1));
        let path = Path::new()
            .set("d", data)
            .set("fill", "none")
            .set("stroke", stroke)
            .set("stroke-width", stroke_width)
            .set("stroke-opacity", opacity);
        self.push(path);
    }

    pub fn draw_left_spine(&mut self) {
        let line = Line::new()
            .set("x1", self.left)
            .set("y1", self.top)
            .set("x2", self.left)
            .set("y2", self.top + self.height)
            .set("stroke", SPINE_COLOR)
            .set("stroke-width", 1);
        self.push(line);
    }

    pub fn draw_bottom_spine(&mut self) {
        let line = Line::new()
            .set("x1", self.left)
            .set("y1", self.top + self.height)
            .set("x2", self.left + self.width)
            .set("y2", self.top + self.height)
            .set("stroke", SPINE_COLOR)
            .set("stroke-width", 1);
        self.push(line);
    }

    pub fn x_ticks(&mut self, ticks: &[(f64, String)], side: AxisSide) {
        for (value, label) in ticks {
            let x = self.x_to_px(*value);
            let (y1, y2, label_y) = match side {
                AxisSide::Bottom => {
                    let edge = self.top + self.height;
                    (edge, edge + TICK_LENGTH, edge + TICK_LENGTH + TICK_LABEL_GAP)
                }
                AxisSide::Top => {
                    let edge = self.top;
                    (edge, edge - TICK_LENGTH, edge - TICK_LENGTH - TICK_LABEL_GAP)
                }
            };
            let line = Line::new()
                .set("x1", x)
                .set("y1", y1)
                .set("x2", x)
                .set("y2", y2)
                .set("stroke", TICK_COLOR)
                .set("stroke-width", 1);
            self.push(line);
            self.text_px(x, label_y, label, "middle", TICK_FONT_SIZE, TICK_COLOR);
        }
    }

    pub fn y_ticks(&mut self, ticks: &[(f64, String)]) {
        for (value, label) in ticks {
            let y = self.y_to_px(*value);
            let line = Line::new()
                .set("x1", self.left)
                .set("y1", y)
                .set("x2", self.left - TICK_LENGTH)
                .set("y2", y)
                .set("stroke", TICK_COLOR)
                .set("stroke-width", 1);
            self.push(line);
            self.text_px(
                self.left - TICK_LENGTH - 4.0,
                y,
                label,
                "end",
                TICK_FONT_SIZE,
                TICK_COLOR,
            );
        }
    }

    pub fn x_label(&mut self, label: &str, font_size: f32, side: AxisSide) {
        let x = self.left + self.width / 2.0;
        let y = match side {
            AxisSide::Bottom => self.top + self.height + AXIS_LABEL_GAP,
            AxisSide::Top => self.top - AXIS_LABEL_GAP,
        };
        self.text_px(x, y, label, "middle", font_size, SPINE_COLOR);
    }

    pub fn y_label(&mut self, label: &str, font_size: f32) {
        let x = self.left - AXIS_LABEL_GAP - 8.0;
        let y = self.top + self.height / 2.0;
        self.vertical_text_px(x, y, label, "middle", font_size, SPINE_COLOR);
    }

    /// Tick labels rotated upright across `labels.len()` equal slots on a
    /// mirrored top axis.
    pub fn top_axis_slot_labels(&mut self, labels: &[String], font_size: f32) {
        let slots = labels.len();
        if slots == 0 {
            return;
        }
        for (i, label) in labels.iter().enumerate() {
            let frac = (i as f32 + 0.5) / slots as f32;
            let x = self.left + frac * self.width;
            let y = self.top - TICK_LENGTH - TICK_LABEL_GAP;
            self.vertical_text_px(x, y, label, "start", font_size, TICK_COLOR);
        }
    }

    /// Vertical colorbar to the right of the panel, running from `vmin`
    /// at the bottom to `vmax` at the top.
    pub fn colorbar(&mut self, vmin: f64, vmax: f64, label: &str, color_of: fn(f64) -> String) {
        let bar_left = self.left + self.width + COLORBAR_GAP;
        let step_height = self.height / COLORBAR_STEPS as f32;
        for i in 0..COLORBAR_STEPS {
            let t = 1.0 - (i as f64 + 0.5) / COLORBAR_STEPS as f64;
            let rect = Rectangle::new()
                .set("x", bar_left)
                .set("y", self.top + i as f32 * step_height)
                .set("width", COLORBAR_WIDTH)
                .set("height", step_height + 0.5)
                .set("fill", color_of(t));
            self.push(rect);
        }
        let label_x = bar_left + COLORBAR_WIDTH + 4.0;
        self.text_px(
            label_x,
            self.top,
            &format!("{vmax:.0}"),
            "start",
            TICK_FONT_SIZE,
            TICK_COLOR,
        );
        self.text_px(
            label_x,
            self.top + self.height,
            &format!("{vmin:.0}"),
            "start",
            TICK_FONT_SIZE,
            TICK_COLOR,
        );
        self.vertical_text_px(
            bar_left + COLORBAR_WIDTH + 28.0,
            self.top + self.height / 2.0,
            label,
            "middle",
            TICK_FONT_SIZE,
            TICK_COLOR,
        );
    }

    pub fn into_group(self) -> Group {
        self.group
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_mapping() {
        let mut ax = Axes::new(10.0, 20.0, 100.0, 50.0);
        ax.set_x_range(0.0, 10.0);
        ax.set_y_range(0.0, 100.0);
        assert_eq!(ax.x_to_px(0.0), 10.0);
        assert_eq!(ax.x_to_px(10.0), 110.0);
        assert_eq!(ax.y_to_px(0.0), 70.0);
        assert_eq!(ax.y_to_px(100.0), 20.0);

        ax.invert_y();
        assert_eq!(ax.y_to_px(0.0), 20.0);
        assert_eq!(ax.y_to_px(100.0), 70.0);
    }

    #[test]
    fn test_scatter_drops_out_of_range_points() {
        let mut ax = Axes::new(0.0, 0.0, 100.0, 100.0);
        ax.set_x_range(0.0, 10.0);
        ax.set_y_range(0.0, 10.0);
        ax.scatter(&[(5.0, 5.0), (11.0, 5.0), (5.0, -1.0)], 3.0, "#000000");
        let svg = ax.into_group().to_string();
        assert_eq!(svg.matches("<circle").count(), 1);
    }

    #[test]
    fn test_decimal_ticks() {
        let ticks = decimal_ticks(0.0, 9717.0)
            .iter()
            .map(|(v, _)| *v)
            .collect::<Vec<_>>();
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&9000.0));
        assert_eq!(ticks.len(), 10);

        let labels = decimal_ticks(0.0, 8.0)
            .iter()
            .map(|(_, l)| l.clone())
            .collect::<Vec<_>>();
        assert_eq!(labels.len(), 9);
        assert_eq!(labels[0], "0");
        assert_eq!(labels[8], "8");
    }

    #[test]
    fn test_copper_ramp_ends() {
        // Bright at the low end, black at the high end.
        assert_eq!(copper_reversed_color(1.0), "#000000");
        assert_eq!(copper_reversed_color(0.0), "#ffc77e");
    }
}
