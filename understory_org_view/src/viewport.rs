// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::pan::PanDrag;

/// Zoom limits and steps for a [`ChartViewport`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportConfig {
    /// Smallest allowed zoom factor.
    pub min_zoom: f64,
    /// Largest allowed zoom factor.
    pub max_zoom: f64,
    /// Additive change applied by one zoom step (button press or wheel notch).
    pub zoom_step: f64,
    /// Fraction of the view that fitted content may occupy on its limiting axis.
    pub fit_fraction: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0.2,
            max_zoom: 2.8,
            zoom_step: 0.12,
            fit_fraction: 0.8,
        }
    }
}

/// The uniform `(zoom, pan)` pair a renderer applies to the whole scene.
///
/// A scene point `p` is painted at `p * zoom + pan`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Uniform scale factor.
    pub zoom: f64,
    /// Translation in view pixels, applied after scaling.
    pub pan: Vec2,
}

impl ViewTransform {
    /// Scene → view transform.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.pan) * Affine::scale(self.zoom)
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
        }
    }
}

/// Zoomable, pannable view onto a chart scene.
///
/// `ChartViewport` keeps the view size, the content bounds of the current
/// scene, and a uniform zoom plus pan. Zooming always happens about an
/// anchor in view space so that the scene point under the anchor stays put.
#[derive(Clone, Debug)]
pub struct ChartViewport {
    view_size: Size,
    content_bounds: Rect,
    zoom: f64,
    pan: Vec2,
    config: ViewportConfig,
    world_to_view: Affine,
    view_to_world: Affine,
    drag: PanDrag,
}

impl ChartViewport {
    /// Creates a viewport of `view_size` pixels at zoom `1.0` and zero pan.
    #[must_use]
    pub fn new(view_size: Size, config: ViewportConfig) -> Self {
        let mut vp = Self {
            view_size,
            content_bounds: Rect::ZERO,
            zoom: 1.0,
            pan: Vec2::ZERO,
            config,
            world_to_view: Affine::IDENTITY,
            view_to_world: Affine::IDENTITY,
            drag: PanDrag::default(),
        };
        vp.rebuild_transforms();
        vp
    }

    /// Returns the zoom configuration.
    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Returns the view size in pixels.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view_size
    }

    /// Sets the view size. Zoom and pan are unchanged; callers usually
    /// follow up with [`ChartViewport::center_chart`].
    pub fn set_view_size(&mut self, size: Size) {
        self.view_size = size;
    }

    /// Returns the content bounds used for fitting and resetting.
    #[must_use]
    pub fn content_bounds(&self) -> Rect {
        self.content_bounds
    }

    /// Sets the content bounds, typically after every layout pass.
    pub fn set_content_bounds(&mut self, bounds: Rect) {
        self.content_bounds = bounds;
    }

    /// Returns the current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the current pan offset in view pixels.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    /// Returns the transform to paint the scene with.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        ViewTransform {
            zoom: self.zoom,
            pan: self.pan,
        }
    }

    /// Sets the pan offset directly.
    pub fn set_pan(&mut self, pan: Vec2) {
        self.pan = pan;
        self.rebuild_transforms();
    }

    /// Moves the pan offset by `delta` view pixels.
    pub fn pan_by(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.set_pan(self.pan + delta);
    }

    /// Sets the zoom to `new_zoom` (clamped) while keeping the scene point
    /// under the view-space `anchor` fixed.
    pub fn zoom_at_point(&mut self, new_zoom: f64, anchor: Point) {
        let new_zoom = new_zoom.clamp(self.config.min_zoom, self.config.max_zoom);
        let scale_factor = new_zoom / self.zoom;
        let anchor = anchor.to_vec2();
        self.pan = anchor - (anchor - self.pan) * scale_factor;
        self.zoom = new_zoom;
        self.rebuild_transforms();
    }

    /// Zooms in by one step about `anchor`.
    pub fn zoom_in_at(&mut self, anchor: Point) {
        self.zoom_at_point(self.zoom + self.config.zoom_step, anchor);
    }

    /// Zooms out by one step about `anchor`.
    pub fn zoom_out_at(&mut self, anchor: Point) {
        self.zoom_at_point(self.zoom - self.config.zoom_step, anchor);
    }

    /// Zooms in by one step about the view center (zoom buttons).
    pub fn zoom_in(&mut self) {
        self.zoom_in_at(self.view_center());
    }

    /// Zooms out by one step about the view center (zoom buttons).
    pub fn zoom_out(&mut self) {
        self.zoom_out_at(self.view_center());
    }

    /// Applies one wheel notch at `cursor`.
    ///
    /// Negative `delta_y` (wheel away from the user) zooms in, positive zooms
    /// out and zero is ignored. The magnitude does not matter: every notch
    /// is exactly one step.
    pub fn wheel(&mut self, delta_y: f64, cursor: Point) {
        if delta_y < 0.0 {
            self.zoom_in_at(cursor);
        } else if delta_y > 0.0 {
            self.zoom_out_at(cursor);
        }
    }

    /// Sets zoom back to `1.0` and centers the content.
    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0_f64.clamp(self.config.min_zoom, self.config.max_zoom);
        self.center_content();
    }

    /// Fits the content bounds into the view and centers them.
    ///
    /// The fitted zoom lets the content occupy at most
    /// [`ViewportConfig::fit_fraction`] of the view on its limiting axis,
    /// clamped into the zoom range. Returns `false` (and changes nothing)
    /// when the content or the view is empty.
    pub fn center_chart(&mut self) -> bool {
        let content = self.content_bounds;
        let view = self.view_size;
        if content.width() <= 0.0 || content.height() <= 0.0 {
            return false;
        }
        if view.width <= 0.0 || view.height <= 0.0 {
            return false;
        }
        let fraction = self.config.fit_fraction;
        let fit_zoom = (view.width * fraction / content.width())
            .min(view.height * fraction / content.height());
        self.zoom = fit_zoom.clamp(self.config.min_zoom, self.config.max_zoom);
        self.center_content();
        true
    }

    /// Pans so that the scene point `world_pt` sits at the view center,
    /// without changing zoom.
    pub fn center_on(&mut self, world_pt: Point) {
        let delta = self.view_center() - self.world_to_view_point(world_pt);
        self.pan_by(delta);
    }

    /// Starts a pan gesture at the view-space `pointer`.
    pub fn begin_pan(&mut self, pointer: Point) {
        self.drag.start(pointer, self.pan);
    }

    /// Moves an active pan gesture. Returns `false` when no gesture is active.
    pub fn drag_pan(&mut self, pointer: Point) -> bool {
        match self.drag.update(pointer) {
            Some(pan) => {
                self.set_pan(pan);
                true
            }
            None => false,
        }
    }

    /// Ends the active pan gesture, if any.
    pub fn end_pan(&mut self) {
        self.drag.end();
    }

    /// Returns `true` while a pan gesture is active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.drag.is_active()
    }

    /// Returns the scene-space rectangle currently visible.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        let min = self.view_to_world_point(Point::ORIGIN);
        let max = self.view_to_world_point(Point::new(self.view_size.width, self.view_size.height));
        Rect::from_points(min, max)
    }

    /// Converts a scene point into view coordinates.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        self.world_to_view * pt
    }

    /// Converts a view point into scene coordinates.
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point) -> Point {
        self.view_to_world * pt
    }

    fn view_center(&self) -> Point {
        Point::new(self.view_size.width / 2.0, self.view_size.height / 2.0)
    }

    fn center_content(&mut self) {
        let content = self.content_bounds;
        self.pan = if content.width() > 0.0 && content.height() > 0.0 {
            self.view_center().to_vec2() - content.center().to_vec2() * self.zoom
        } else {
            Vec2::ZERO
        };
        self.rebuild_transforms();
    }

    fn rebuild_transforms(&mut self) {
        // World → view: scale, then translate by pan.
        self.world_to_view = Affine::translate(self.pan) * Affine::scale(self.zoom);
        self.view_to_world = self.world_to_view.inverse();
    }
}
