// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;
use understory_org_tree::NodeId;

const PALETTE: [[u8; 3]; 8] = [
    [0x3b, 0x82, 0xf6],
    [0x10, 0xb9, 0x81],
    [0xf5, 0x9e, 0x0b],
    [0xef, 0x44, 0x44],
    [0x8b, 0x5c, 0xf6],
    [0x06, 0xb6, 0xd4],
    [0xec, 0x48, 0x99],
    [0x84, 0xcc, 0x16],
];

/// Number of distinct branch colors.
pub const PALETTE_LEN: usize = PALETTE.len();

/// Multiplicative string hash used to pick branch colors.
///
/// Only depends on the id's characters, so colors are stable across
/// re-renders and sessions.
#[must_use]
pub fn id_hash(id: &str) -> u32 {
    id.chars()
        .fold(0_u32, |h, ch| h.wrapping_mul(31).wrapping_add(u32::from(ch)))
}

/// Palette slot for the root at `root_index` with the given id.
#[must_use]
pub fn palette_index(id: &NodeId, root_index: usize) -> usize {
    (id_hash(id.as_str()) as usize).wrapping_add(root_index) % PALETTE_LEN
}

/// Branch color for the root at `root_index` with the given id.
///
/// Every node in that root's subtree inherits this color.
#[must_use]
pub fn branch_color(id: &NodeId, root_index: usize) -> Color {
    let [r, g, b] = PALETTE[palette_index(id, root_index)];
    Color::from_rgba8(r, g, b, 255)
}
