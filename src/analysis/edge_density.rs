//! Global "busyness" metric from a Canny edge map.
//!
//! Descriptive metadata only; nothing downstream scores or classifies on it.
//! The detector follows the classic formulation: 3x3 Sobel with replicated
//! borders, L1 gradient magnitude, 4-sector non-maximum suppression and
//! 8-connected hysteresis.

use serde::{Deserialize, Serialize};

use crate::config::EdgeSettings;
use crate::domain::GrayscaleGrid;
use crate::utils::maths_utils::round_to;

#[allow(unused_imports)]
use crate::config::DEBUG_FLAGS;

/// Value of an edge pixel in the edge map
pub const EDGE_VALUE: u8 = 255;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EdgeDensity {
    pub edge_pixels: usize,
    /// Sum of the edge map (`edge_pixels * 255`)
    pub edge_strength: f64,
    /// `edge_strength / (w * h) * 100`, rounded to 4 decimals
    pub norm_pct: f64,
}

// tan(22.5°) in 15-bit fixed point
const TG22: i64 = 13573;
const CANNY_SHIFT: u32 = 15;

struct Gradients {
    dx: Vec<i32>,
    dy: Vec<i32>,
    magnitude: Vec<i32>,
}

fn sobel(grid: &GrayscaleGrid) -> Gradients {
    let (w, h) = grid.shape();
    let px = |r: isize, c: isize| -> i32 {
        let r = r.clamp(0, h as isize - 1) as usize;
        let c = c.clamp(0, w as isize - 1) as usize;
        grid.get(r, c) as i32
    };

    let mut dx = vec![0i32; w * h];
    let mut dy = vec![0i32; w * h];
    let mut magnitude = vec![0i32; w * h];
    for r in 0..h as isize {
        for c in 0..w as isize {
            let gx = (px(r - 1, c + 1) + 2 * px(r, c + 1) + px(r + 1, c + 1))
                - (px(r - 1, c - 1) + 2 * px(r, c - 1) + px(r + 1, c - 1));
            let gy = (px(r + 1, c - 1) + 2 * px(r + 1, c) + px(r + 1, c + 1))
                - (px(r - 1, c - 1) + 2 * px(r - 1, c) + px(r - 1, c + 1));
            let idx = r as usize * w + c as usize;
            dx[idx] = gx;
            dy[idx] = gy;
            magnitude[idx] = gx.abs() + gy.abs();
        }
    }
    Gradients { dx, dy, magnitude }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    None,
    Weak,
    Strong,
}

/// Binary edge map (0 or [`EDGE_VALUE`]), row-major, same shape as `grid`.
pub fn canny(grid: &GrayscaleGrid, low_threshold: i32, high_threshold: i32) -> Vec<u8> {
    let (w, h) = grid.shape();
    let (low, high) = if low_threshold > high_threshold {
        (high_threshold, low_threshold)
    } else {
        (low_threshold, high_threshold)
    };

    let Gradients { dx, dy, magnitude } = sobel(grid);
    // Magnitude outside the image is zero
    let mag = |r: isize, c: isize| -> i32 {
        if r < 0 || c < 0 || r >= h as isize || c >= w as isize {
            0
        } else {
            magnitude[r as usize * w + c as usize]
        }
    };

    let mut marks = vec![Mark::None; w * h];
    let mut stack: Vec<usize> = Vec::new();

    for r in 0..h as isize {
        for c in 0..w as isize {
            let idx = r as usize * w + c as usize;
            let m = magnitude[idx];
            if m <= low {
                continue;
            }

            let xs = dx[idx] as i64;
            let ys = dy[idx] as i64;
            let x = xs.abs();
            let y = ys.abs() << CANNY_SHIFT;
            let tg22x = x * TG22;

            let is_max = if y < tg22x {
                // Mostly horizontal gradient
                m > mag(r, c - 1) && m >= mag(r, c + 1)
            } else {
                let tg67x = tg22x + (x << (CANNY_SHIFT + 1));
                if y > tg67x {
                    // Mostly vertical gradient
                    m > mag(r - 1, c) && m >= mag(r + 1, c)
                } else {
                    let s: isize = if (xs ^ ys) < 0 { -1 } else { 1 };
                    m > mag(r - 1, c - s) && m > mag(r + 1, c + s)
                }
            };

            if !is_max {
                continue;
            }
            if m > high {
                marks[idx] = Mark::Strong;
                stack.push(idx);
            } else {
                marks[idx] = Mark::Weak;
            }
        }
    }

    // Hysteresis: grow strong edges into 8-connected weak neighbours
    while let Some(idx) = stack.pop() {
        let r = (idx / w) as isize;
        let c = (idx % w) as isize;
        for dr in -1..=1isize {
            for dc in -1..=1isize {
                let (nr, nc) = (r + dr, c + dc);
                if nr < 0 || nc < 0 || nr >= h as isize || nc >= w as isize {
                    continue;
                }
                let n = nr as usize * w + nc as usize;
                if marks[n] == Mark::Weak {
                    marks[n] = Mark::Strong;
                    stack.push(n);
                }
            }
        }
    }

    marks
        .into_iter()
        .map(|m| if m == Mark::Strong { EDGE_VALUE } else { 0 })
        .collect()
}

pub fn measure_edge_density(grid: &GrayscaleGrid, settings: &EdgeSettings) -> EdgeDensity {
    let (w, h) = grid.shape();
    let edges = canny(grid, settings.low_threshold, settings.high_threshold);
    let edge_pixels = edges.iter().filter(|&&v| v == EDGE_VALUE).count();
    let edge_strength = (edge_pixels * EDGE_VALUE as usize) as f64;

    let area = (w * h) as f64;
    let density = if area > 0.0 { edge_strength / area } else { 0.0 };

    #[cfg(debug_assertions)]
    if DEBUG_FLAGS.print_edge_stats {
        log::info!(
            "edges: {} of {} pixels, density {:.4}",
            edge_pixels,
            w * h,
            density
        );
    }

    EdgeDensity {
        edge_pixels,
        edge_strength,
        norm_pct: round_to(density * 100.0, 4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ANALYSIS;

    fn grid_from_fn(w: usize, h: usize, f: impl Fn(usize, usize) -> u8) -> GrayscaleGrid {
        let pixels = (0..h)
            .flat_map(|r| (0..w).map(move |c| (r, c)))
            .map(|(r, c)| f(r, c))
            .collect();
        GrayscaleGrid::from_luma(w, h, pixels).unwrap()
    }

    #[test]
    fn test_uniform_has_no_edges() {
        let grid = grid_from_fn(30, 20, |_, _| 200);
        let density = measure_edge_density(&grid, &ANALYSIS.edges);
        assert_eq!(density.edge_pixels, 0);
        assert_eq!(density.edge_strength, 0.0);
        assert_eq!(density.norm_pct, 0.0);
    }

    #[test]
    fn test_vertical_step_gives_one_thin_edge() {
        // Dark left half, bright right half: step between columns 9 and 10
        let grid = grid_from_fn(20, 10, |_, c| if c < 10 { 0 } else { 255 });
        let edges = canny(&grid, 50, 150);
        for r in 0..10 {
            let row = &edges[r * 20..(r + 1) * 20];
            let cols: Vec<usize> = (0..20).filter(|&c| row[c] == EDGE_VALUE).collect();
            assert_eq!(cols, vec![9], "row {}", r);
        }
    }

    #[test]
    fn test_density_normalisation() {
        let grid = grid_from_fn(20, 10, |_, c| if c < 10 { 0 } else { 255 });
        let density = measure_edge_density(&grid, &ANALYSIS.edges);
        assert_eq!(density.edge_pixels, 10);
        assert_eq!(density.edge_strength, 2550.0);
        // 2550 / 200 * 100
        assert_eq!(density.norm_pct, 1275.0);
    }

    #[test]
    fn test_weak_gradient_below_low_threshold() {
        // Step of 10 gives Sobel magnitude 40 (< 50)
        let grid = grid_from_fn(20, 10, |_, c| if c < 10 { 100 } else { 110 });
        assert!(canny(&grid, 50, 150).iter().all(|&v| v == 0));
    }

    #[test]
    fn test_tiny_images() {
        for (w, h) in [(1, 1), (1, 5), (5, 1)] {
            let grid = grid_from_fn(w, h, |r, c| ((r * 7 + c * 13) % 256) as u8);
            let edges = canny(&grid, 50, 150);
            assert_eq!(edges.len(), w * h);
        }
    }
}
