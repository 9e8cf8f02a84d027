//! Grouped line-scatter: several 3D series drawn as one scene object.
//!
//! Each series is an ordered list of points rendered as point markers
//! joined by a line strip. Series are colored uniformly or by cycling a
//! palette (see `color`).

use tracing::{debug, trace, warn};

use super::color::{ColorMode, Palette};
use super::drawable::{Drawable, SingleColorable};
use crate::core::{
    BoundingBox3d, ChangedField, Color, Coord3d, DrawableChanged, ListenerId, Listeners, Transform,
};
use crate::error::ScatterError;
use crate::render::{Camera, DepthFunc, Primitive, Renderer};

/// One ordered list of points
pub type Series = Vec<Coord3d>;

const DEFAULT_POINT_WIDTH: f32 = 1.0;
const DEFAULT_LINE_WIDTH: f32 = 1.0;

/// Box edges as line strips over `BoundingBox3d::corners` indices
const BOX_STRIPS: [&[usize]; 6] = [
    &[0, 1, 2, 3, 0],
    &[4, 5, 6, 7, 4],
    &[0, 4],
    &[1, 5],
    &[2, 6],
    &[3, 7],
];

fn check_width(name: &str, width: f32) -> Result<f32, ScatterError> {
    if !width.is_finite() || width < 0.0 {
        warn!(name, width, "Rejected width");
        return Err(ScatterError::InvalidConfiguration(format!(
            "{} must be a finite value >= 0, got {}",
            name, width
        )));
    }
    Ok(width)
}

/// Several point/line series drawn together.
///
/// The transform is borrowed, never owned: whoever builds it keeps it alive
/// for as long as this scatter references it.
#[derive(Debug)]
pub struct GroupedLineScatter<'t> {
    /// `None` after `clear`, distinct from an empty collection
    series: Option<Vec<Series>>,
    color_mode: ColorMode,
    /// 0 disables markers
    point_width: f32,
    /// 0 disables lines
    line_width: f32,
    transform: Option<&'t Transform>,
    bbox: BoundingBox3d,
    displayed: bool,
    bounds_displayed: bool,
    bounds_color: Color,
    listeners: Listeners<'t>,
}

impl Default for GroupedLineScatter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> GroupedLineScatter<'t> {
    /// No data, uniform black, default widths
    pub fn new() -> Self {
        Self {
            series: None,
            color_mode: ColorMode::default(),
            point_width: DEFAULT_POINT_WIDTH,
            line_width: DEFAULT_LINE_WIDTH,
            transform: None,
            bbox: BoundingBox3d::new(),
            displayed: true,
            bounds_displayed: false,
            bounds_color: Color::BLACK,
            listeners: Listeners::new(),
        }
    }

    /// All series in one color
    pub fn with_color(series: Vec<Series>, color: Color) -> Self {
        let mut scatter = Self::new();
        scatter.color_mode = ColorMode::Uniform(color);
        scatter.set_data(series);
        scatter
    }

    /// Series cycle through `colors`, which must not be empty
    pub fn with_palette(series: Vec<Series>, colors: Vec<Color>) -> Result<Self, ScatterError> {
        let mut scatter = Self::new();
        scatter.color_mode = ColorMode::Palette(Palette::new(colors)?);
        scatter.set_data(series);
        Ok(scatter)
    }

    pub fn with_point_width(mut self, width: f32) -> Result<Self, ScatterError> {
        self.set_point_width(width)?;
        Ok(self)
    }

    pub fn with_line_width(mut self, width: f32) -> Result<Self, ScatterError> {
        self.set_line_width(width)?;
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Series store
    // ------------------------------------------------------------------

    /// Replace every series at once and recompute the bounds
    pub fn set_data(&mut self, series: Vec<Series>) {
        self.series = Some(series);
        self.update_bounds();
        debug!(
            series = self.series_count(),
            points = self.point_count(),
            "Series data replaced"
        );
    }

    /// Drop all series and reset the bounds to empty
    pub fn clear(&mut self) {
        self.series = None;
        self.bbox.reset();
        debug!("Series data cleared");
    }

    /// `None` after `clear` or before any data was set
    pub fn data(&self) -> Option<&[Series]> {
        self.series.as_deref()
    }

    pub fn series_count(&self) -> usize {
        self.series.as_ref().map_or(0, |s| s.len())
    }

    pub fn point_count(&self) -> usize {
        self.series
            .iter()
            .flatten()
            .map(|s| s.len())
            .sum()
    }

    /// Absent data counts as empty
    fn update_bounds(&mut self) {
        self.bbox = self.series.iter().flatten().flatten().collect();
    }

    // ------------------------------------------------------------------
    // Colors and widths
    // ------------------------------------------------------------------

    /// Switch to palette coloring. An empty list is rejected and the
    /// current color mode is kept.
    pub fn set_palette(&mut self, colors: Vec<Color>) -> Result<(), ScatterError> {
        let palette = Palette::new(colors).inspect_err(|e| {
            warn!(error = %e, "Palette rejected");
        })?;
        debug!(colors = palette.len(), "Palette set");
        self.color_mode = ColorMode::Palette(palette);
        self.listeners
            .fire(DrawableChanged::new(ChangedField::Color));
        Ok(())
    }

    pub fn color_mode(&self) -> &ColorMode {
        &self.color_mode
    }

    /// Color series `i` is drawn with
    pub fn color_at(&self, i: usize) -> Color {
        self.color_mode.color_at(i)
    }

    pub fn point_width(&self) -> f32 {
        self.point_width
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    pub fn set_point_width(&mut self, width: f32) -> Result<(), ScatterError> {
        self.point_width = check_width("point width", width)?;
        Ok(())
    }

    pub fn set_line_width(&mut self, width: f32) -> Result<(), ScatterError> {
        self.line_width = check_width("line width", width)?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Transform, visibility, listeners
    // ------------------------------------------------------------------

    /// Reference an externally owned transform, or none.
    ///
    /// Bounds stay in model space, so they are left as they are.
    pub fn set_transform(&mut self, transform: Option<&'t Transform>) {
        self.transform = transform;
    }

    /// Bounds of every stored point after mapping it through the transform.
    /// Same as `bounds()` when no transform is set.
    pub fn transformed_bounds(&self) -> BoundingBox3d {
        let Some(transform) = self.transform else {
            return self.bbox;
        };
        let mut bbox = BoundingBox3d::new();
        for c in self.series.iter().flatten().flatten() {
            bbox.add(transform.compute(*c));
        }
        bbox
    }

    pub fn set_displayed(&mut self, displayed: bool) {
        self.displayed = displayed;
    }

    /// Also draw the bounding box edges after the series
    pub fn set_bounds_displayed(&mut self, displayed: bool) {
        self.bounds_displayed = displayed;
    }

    pub fn bounds_displayed(&self) -> bool {
        self.bounds_displayed
    }

    pub fn set_bounds_color(&mut self, color: Color) {
        self.bounds_color = color;
    }

    pub fn add_listener<F>(&mut self, f: F) -> ListenerId
    where
        F: FnMut(&DrawableChanged) + 't,
    {
        self.listeners.add(f)
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    // ------------------------------------------------------------------
    // Render pass
    // ------------------------------------------------------------------

    fn draw_bounds<R: Renderer>(&self, gl: &mut R) -> Result<(), R::Error> {
        let Some(corners) = self.bbox.corners() else {
            return Ok(());
        };
        gl.color(self.bounds_color)?;
        gl.line_width(if self.line_width > 0.0 { self.line_width } else { 1.0 })?;
        for strip in BOX_STRIPS {
            let vertices: Vec<Coord3d> = strip.iter().map(|&i| corners[i]).collect();
            gl.batch(Primitive::LineStrip, &vertices)?;
        }
        Ok(())
    }
}

impl Drawable for GroupedLineScatter<'_> {
    fn draw<R: Renderer>(&self, gl: &mut R, _camera: &Camera) -> Result<(), R::Error> {
        if !self.displayed {
            return Ok(());
        }

        if let Some(transform) = self.transform {
            transform.execute(gl)?;
        }

        let Some(series) = self.series.as_deref().filter(|s| !s.is_empty()) else {
            trace!("No series to draw");
            return Ok(());
        };

        gl.enable_depth_test(DepthFunc::Less)?;

        let mut cursor = self.color_mode.cursor();
        for (i, points) in series.iter().enumerate() {
            let color = cursor.next_color();
            trace!(series = i, points = points.len(), ?color, "Drawing series");
            gl.color(color)?;

            if self.point_width > 0.0 {
                gl.point_size(self.point_width)?;
                gl.batch(Primitive::Points, points)?;
            }
            if self.line_width > 0.0 {
                gl.line_width(self.line_width)?;
                gl.batch(Primitive::LineStrip, points)?;
            }
        }

        if self.bounds_displayed {
            self.draw_bounds(gl)?;
        }
        Ok(())
    }

    fn bounds(&self) -> &BoundingBox3d {
        &self.bbox
    }

    fn transform(&self) -> Option<&Transform> {
        self.transform
    }

    fn is_displayed(&self) -> bool {
        self.displayed
    }
}

impl SingleColorable for GroupedLineScatter<'_> {
    /// Uniform color, or the first palette entry in palette mode
    fn color(&self) -> Color {
        match &self.color_mode {
            ColorMode::Uniform(c) => *c,
            ColorMode::Palette(p) => p.first(),
        }
    }

    /// Switch to uniform coloring, dropping any palette
    fn set_color(&mut self, color: Color) {
        self.color_mode = ColorMode::Uniform(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, RecordingRenderer};
    use std::cell::RefCell;

    fn c(x: f64, y: f64, z: f64) -> Coord3d {
        Coord3d::new(x, y, z)
    }

    fn two_series() -> Vec<Series> {
        vec![
            vec![c(0.0, 0.0, 0.0), c(1.0, 1.0, 1.0)],
            vec![c(2.0, 0.0, 0.0), c(3.0, 1.0, 0.0)],
        ]
    }

    fn draw(scatter: &GroupedLineScatter<'_>) -> RecordingRenderer {
        let mut gl = RecordingRenderer::new();
        scatter.draw(&mut gl, &Camera::default()).unwrap();
        gl
    }

    /// Fails on the first `begin`
    struct FailingRenderer;

    impl Renderer for FailingRenderer {
        type Error = String;

        fn point_size(&mut self, _: f32) -> Result<(), String> {
            Ok(())
        }
        fn line_width(&mut self, _: f32) -> Result<(), String> {
            Ok(())
        }
        fn enable_depth_test(&mut self, _: DepthFunc) -> Result<(), String> {
            Ok(())
        }
        fn color(&mut self, _: Color) -> Result<(), String> {
            Ok(())
        }
        fn begin(&mut self, _: Primitive) -> Result<(), String> {
            Err("context lost".to_string())
        }
        fn vertex(&mut self, _: Coord3d) -> Result<(), String> {
            Ok(())
        }
        fn end(&mut self) -> Result<(), String> {
            Ok(())
        }
        fn translate(&mut self, _: Coord3d) -> Result<(), String> {
            Ok(())
        }
        fn rotate(&mut self, _: f64, _: Coord3d) -> Result<(), String> {
            Ok(())
        }
        fn scale(&mut self, _: Coord3d) -> Result<(), String> {
            Ok(())
        }
    }

    #[test]
    fn test_two_series_palette_scenario() {
        let scatter =
            GroupedLineScatter::with_palette(two_series(), vec![Color::RED, Color::GREEN])
                .unwrap()
                .with_point_width(8.0)
                .unwrap()
                .with_line_width(2.0)
                .unwrap();

        assert_eq!(scatter.bounds().min(), c(0.0, 0.0, 0.0));
        assert_eq!(scatter.bounds().max(), c(3.0, 1.0, 1.0));

        let gl = draw(&scatter);
        assert_eq!(gl.commands()[0], DrawCommand::EnableDepthTest(DepthFunc::Less));

        let batches = gl.batches();
        assert_eq!(batches.len(), 4);

        assert_eq!(batches[0].primitive, Primitive::Points);
        assert_eq!(batches[0].color, Color::RED);
        assert_eq!(batches[0].size, 8.0);
        assert_eq!(batches[1].primitive, Primitive::LineStrip);
        assert_eq!(batches[1].color, Color::RED);
        assert_eq!(batches[1].size, 2.0);
        assert_eq!(batches[1].vertices, vec![c(0.0, 0.0, 0.0), c(1.0, 1.0, 1.0)]);

        assert_eq!(batches[2].primitive, Primitive::Points);
        assert_eq!(batches[2].color, Color::GREEN);
        assert_eq!(batches[3].primitive, Primitive::LineStrip);
        assert_eq!(batches[3].color, Color::GREEN);
        assert_eq!(batches[3].vertices, vec![c(2.0, 0.0, 0.0), c(3.0, 1.0, 0.0)]);
    }

    #[test]
    fn test_palette_wraps_across_series() {
        let palette = vec![Color::RED, Color::GREEN, Color::BLUE];
        let series: Vec<Series> = (0..8).map(|i| vec![c(i as f64, 0.0, 0.0)]).collect();
        let scatter = GroupedLineScatter::with_palette(series, palette.clone())
            .unwrap()
            .with_line_width(0.0)
            .unwrap();

        let batches = draw(&scatter).batches();
        assert_eq!(batches.len(), 8);
        for (i, batch) in batches.iter().enumerate() {
            assert_eq!(batch.color, palette[i % palette.len()]);
            assert_eq!(scatter.color_at(i), palette[i % palette.len()]);
        }

        // Second pass starts again from the first color
        assert_eq!(draw(&scatter).batches()[0].color, Color::RED);
    }

    #[test]
    fn test_uniform_color_for_every_series() {
        let scatter = GroupedLineScatter::with_color(two_series(), Color::BLUE);
        assert!(draw(&scatter).batches().iter().all(|b| b.color == Color::BLUE));
    }

    #[test]
    fn test_bounds_follow_set_data_and_clear() {
        let mut scatter = GroupedLineScatter::new();
        assert!(scatter.bounds().is_empty());

        scatter.set_data(vec![
            vec![c(-1.0, 5.0, 2.0)],
            vec![c(4.0, -3.0, 0.5), c(0.0, 0.0, 9.0)],
        ]);
        assert_eq!(scatter.bounds().min(), c(-1.0, -3.0, 0.5));
        assert_eq!(scatter.bounds().max(), c(4.0, 5.0, 9.0));
        assert_eq!(scatter.point_count(), 3);

        scatter.clear();
        assert_eq!(*scatter.bounds(), BoundingBox3d::new());
        assert!(scatter.data().is_none());
        assert_eq!(scatter.series_count(), 0);
    }

    #[test]
    fn test_empty_collection_is_not_a_fault() {
        let mut scatter = GroupedLineScatter::new();
        scatter.set_data(vec![]);
        assert!(scatter.bounds().is_empty());
        assert_eq!(scatter.data().map(|s| s.len()), Some(0));
        assert!(draw(&scatter).commands().is_empty());
    }

    #[test]
    fn test_zero_point_width_skips_markers() {
        let scatter = GroupedLineScatter::with_color(two_series(), Color::BLACK)
            .with_point_width(0.0)
            .unwrap();
        let batches = draw(&scatter).batches();
        assert_eq!(batches.len(), 2);
        assert!(batches.iter().all(|b| b.primitive == Primitive::LineStrip));
    }

    #[test]
    fn test_zero_line_width_skips_lines() {
        let scatter = GroupedLineScatter::with_color(two_series(), Color::BLACK)
            .with_line_width(0.0)
            .unwrap();
        let batches = draw(&scatter).batches();
        assert_eq!(batches.len(), 2);
        assert!(batches.iter().all(|b| b.primitive == Primitive::Points));
    }

    #[test]
    fn test_both_widths_zero_still_applies_transform() {
        let transform = Transform::new().translate(c(1.0, 2.0, 3.0));
        let mut scatter = GroupedLineScatter::with_color(two_series(), Color::BLACK)
            .with_point_width(0.0)
            .unwrap()
            .with_line_width(0.0)
            .unwrap();
        scatter.set_transform(Some(&transform));

        let gl = draw(&scatter);
        assert_eq!(gl.commands()[0], DrawCommand::Translate(c(1.0, 2.0, 3.0)));
        assert!(gl.batches().is_empty());
        assert_eq!(gl.vertex_count(), 0);
    }

    #[test]
    fn test_transform_applied_once_before_geometry() {
        let transform = Transform::new()
            .scale(c(2.0, 2.0, 2.0))
            .rotate(90.0, c(0.0, 0.0, 1.0));
        let mut scatter = GroupedLineScatter::with_color(two_series(), Color::BLACK);
        scatter.set_transform(Some(&transform));

        let gl = draw(&scatter);
        let matrix_ops: Vec<usize> = gl
            .commands()
            .iter()
            .enumerate()
            .filter(|(_, cmd)| {
                matches!(cmd, DrawCommand::Scale(_) | DrawCommand::Rotate { .. })
            })
            .map(|(i, _)| i)
            .collect();
        assert_eq!(matrix_ops, vec![0, 1]);
        assert_eq!(gl.batches().len(), 4);
    }

    #[test]
    fn test_clear_then_draw_emits_nothing() {
        let transform = Transform::new().translate(c(0.0, 0.0, 1.0));
        let mut scatter = GroupedLineScatter::with_color(two_series(), Color::BLACK);
        scatter.set_transform(Some(&transform));
        scatter.clear();

        let gl = draw(&scatter);
        assert_eq!(gl.commands(), &[DrawCommand::Translate(c(0.0, 0.0, 1.0))]);
        assert_eq!(gl.vertex_count(), 0);
    }

    #[test]
    fn test_set_transform_after_clear_keeps_empty_bounds() {
        let transform = Transform::new().translate(c(5.0, 5.0, 5.0));
        let mut scatter = GroupedLineScatter::with_color(two_series(), Color::BLACK);
        scatter.clear();
        scatter.set_transform(Some(&transform));

        assert_eq!(*scatter.bounds(), BoundingBox3d::new());
        assert!(scatter.transformed_bounds().is_empty());
        assert_eq!(scatter.transform(), Some(&transform));

        scatter.set_transform(None);
        assert!(scatter.transform().is_none());
    }

    #[test]
    fn test_bounds_stay_in_model_space() {
        let transform = Transform::new().translate(c(10.0, 0.0, 0.0));
        let mut scatter = GroupedLineScatter::with_color(two_series(), Color::BLACK);
        scatter.set_transform(Some(&transform));

        assert_eq!(scatter.bounds().min(), c(0.0, 0.0, 0.0));
        let moved = scatter.transformed_bounds();
        assert_eq!(moved.min(), c(10.0, 0.0, 0.0));
        assert_eq!(moved.max(), c(13.0, 1.0, 1.0));
    }

    #[test]
    fn test_empty_palette_keeps_previous_color() {
        let mut scatter = GroupedLineScatter::with_color(two_series(), Color::BLUE);
        let err = scatter.set_palette(vec![]).unwrap_err();

        assert!(matches!(err, ScatterError::InvalidConfiguration(_)));
        assert_eq!(*scatter.color_mode(), ColorMode::Uniform(Color::BLUE));
        assert_eq!(scatter.color(), Color::BLUE);
        assert!(GroupedLineScatter::with_palette(two_series(), vec![]).is_err());
    }

    #[test]
    fn test_set_color_drops_palette() {
        let mut scatter =
            GroupedLineScatter::with_palette(two_series(), vec![Color::GREEN, Color::RED])
                .unwrap();
        assert_eq!(scatter.color(), Color::GREEN);

        scatter.set_color(Color::GRAY);
        assert_eq!(*scatter.color_mode(), ColorMode::Uniform(Color::GRAY));
        assert!(draw(&scatter).batches().iter().all(|b| b.color == Color::GRAY));
    }

    #[test]
    fn test_only_palette_change_notifies() {
        let fired = RefCell::new(Vec::new());
        let mut scatter = GroupedLineScatter::new();
        let id = scatter.add_listener(|e| fired.borrow_mut().push(e.field));

        scatter.set_data(two_series());
        scatter.set_color(Color::RED);
        scatter.set_point_width(3.0).unwrap();
        assert!(scatter.set_palette(vec![]).is_err());
        assert!(fired.borrow().is_empty());

        scatter.set_palette(vec![Color::RED]).unwrap();
        assert_eq!(*fired.borrow(), vec![ChangedField::Color]);

        assert!(scatter.remove_listener(id));
        scatter.set_palette(vec![Color::GREEN]).unwrap();
        drop(scatter);
        assert_eq!(fired.into_inner(), vec![ChangedField::Color]);
    }

    #[test]
    fn test_invalid_widths_rejected() {
        let mut scatter = GroupedLineScatter::new();
        assert!(scatter.set_point_width(-1.0).is_err());
        assert!(scatter.set_line_width(f32::NAN).is_err());
        assert_eq!(scatter.point_width(), DEFAULT_POINT_WIDTH);
        assert_eq!(scatter.line_width(), DEFAULT_LINE_WIDTH);
    }

    #[test]
    fn test_hidden_scatter_emits_nothing() {
        let transform = Transform::new().translate(c(1.0, 0.0, 0.0));
        let mut scatter = GroupedLineScatter::with_color(two_series(), Color::BLACK);
        scatter.set_transform(Some(&transform));
        scatter.set_displayed(false);

        assert!(!scatter.is_displayed());
        assert!(draw(&scatter).commands().is_empty());
    }

    #[test]
    fn test_bounds_box_drawn_after_series() {
        let mut scatter = GroupedLineScatter::with_color(two_series(), Color::BLACK)
            .with_point_width(0.0)
            .unwrap()
            .with_line_width(0.0)
            .unwrap();
        scatter.set_bounds_displayed(true);
        scatter.set_bounds_color(Color::GRAY);

        let batches = draw(&scatter).batches();
        assert_eq!(batches.len(), 6);
        assert!(batches
            .iter()
            .all(|b| b.primitive == Primitive::LineStrip && b.color == Color::GRAY));
        assert_eq!(batches[0].vertices.len(), 5);
        assert_eq!(batches[0].vertices[0], batches[0].vertices[4]);

        scatter.clear();
        assert!(draw(&scatter).batches().is_empty());
    }

    #[test]
    fn test_backend_error_propagates() {
        let scatter = GroupedLineScatter::with_color(two_series(), Color::BLACK);
        let err = scatter
            .draw(&mut FailingRenderer, &Camera::default())
            .unwrap_err();
        assert_eq!(err, "context lost");
    }
}
