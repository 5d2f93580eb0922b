// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan drag helper: derive the pan offset from pointer movement.
//!
//! ## Usage
//!
//! 1) When the pointer goes down on empty canvas, call [`PanDrag::start`]
//!    with the pointer position and the current pan.
//! 2) On each move, [`PanDrag::update`] returns the pan to apply:
//!    the pan at the start plus the total pointer offset.
//! 3) On pointer up, call [`PanDrag::end`].
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_org_view::PanDrag;
//!
//! let mut drag = PanDrag::default();
//! drag.start(Point::new(10.0, 20.0), Vec2::new(100.0, 0.0));
//! assert!(drag.is_active());
//!
//! let pan = drag.update(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(pan, Vec2::new(105.0, 5.0));
//! ```

use kurbo::{Point, Vec2};

/// Tracks one pan gesture.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanDrag {
    /// Pan offset when the gesture started.
    pub pan_origin: Option<Vec2>,
    /// Pointer position when the gesture started.
    pub pointer_start: Option<Point>,
}

impl PanDrag {
    /// Start tracking a gesture at `pointer`, remembering the current `pan`.
    pub fn start(&mut self, pointer: Point, pan: Vec2) {
        self.pan_origin = Some(pan);
        self.pointer_start = Some(pointer);
    }

    /// Returns the pan for the pointer now being at `pointer`, or `None`
    /// when no gesture is active.
    pub fn update(&self, pointer: Point) -> Option<Vec2> {
        let origin = self.pan_origin?;
        let start = self.pointer_start?;
        Some(origin + (pointer - start))
    }

    /// End the current gesture and reset state.
    pub fn end(&mut self) {
        self.pan_origin = None;
        self.pointer_start = None;
    }

    /// Returns `true` while a gesture is active
    pub fn is_active(&self) -> bool {
        self.pan_origin.is_some() && self.pointer_start.is_some()
    }
}
