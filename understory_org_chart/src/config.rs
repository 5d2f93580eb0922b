// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use understory_org_layout::LayoutConfig;
use understory_org_view::ViewportConfig;

/// Everything an [`OrgChart`](crate::OrgChart) needs besides its data.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    /// Card sizes, gaps and the default expansion depth.
    pub layout: LayoutConfig,
    /// Zoom range and steps.
    pub viewport: ViewportConfig,
    /// Initial view size in pixels.
    pub view_size: Size,
    /// Department shown first. When `None`, or not present in the
    /// collection, the first department in tab order is used.
    pub default_department: Option<String>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            viewport: ViewportConfig::default(),
            view_size: Size::new(1280.0, 800.0),
            default_department: None,
        }
    }
}

impl ChartConfig {
    /// Sets the department shown first.
    #[must_use]
    pub fn with_default_department(mut self, name: impl Into<String>) -> Self {
        self.default_department = Some(name.into());
        self
    }

    /// Sets the initial view size.
    #[must_use]
    pub fn with_view_size(mut self, size: Size) -> Self {
        self.view_size = size;
        self
    }
}
