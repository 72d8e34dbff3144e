//! Perceptual ordering of colors.
//!
//! Sorting colors so that neighbors look alike amounts to finding a short
//! open path through all colors, i.e., the traveling salesman problem without
//! the return trip. This module approximates a solution in three steps:
//!
//!  1. It computes a minimum spanning tree with Prim's algorithm, rooted at the
//!     color closest to black.
//!  2. It walks the tree in preorder, visiting nearer children first.
//!  3. It improves the walk with 2-opt passes, which reverse segments of the
//!     path whenever that shortens the path. The first color stays put.
//!
//! Each step takes O(N²) time and O(N) space. The number of 2-opt passes is
//! bounded by [`SortOptions::max_passes`]. The result is deterministic and
//! always a permutation of the input, even if some colors have non-finite
//! coordinates.
//!
//! # Example
//!
//! ```
//! # use prettyhue::Color;
//! # use prettyhue::sort::{path_length, sorted, SortMetric, SortOptions};
//! let colors = [
//!     Color::srgb(1.0, 0.0, 0.0),
//!     Color::srgb(0.0, 0.0, 1.0),
//!     Color::srgb(0.8, 0.1, 0.1),
//!     Color::srgb(0.1, 0.1, 0.8),
//! ];
//!
//! let ordered = sorted(&colors);
//! assert!(path_length(&ordered) < path_length(&colors));
//!
//! let options = SortOptions::builder()
//!     .metric(SortMetric::Luv)
//!     .max_passes(4)
//!     .build();
//! let also_ordered = prettyhue::sort::sorted_with(&colors, &options);
//! assert_eq!(also_ordered.len(), 4);
//! ```

use log::{debug, trace};

use crate::core::{euclidean, Accumulator};
use crate::{Color, Float};

/// The distance metric for sorting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortMetric {
    /// Euclidian distance in CIELAB.
    #[default]
    Lab,
    /// Euclidian distance in CIELUV.
    Luv,
}

impl SortMetric {
    /// Determine the coordinates used for measuring distance.
    fn coordinates(&self, color: &Color) -> [Float; 3] {
        match *self {
            Self::Lab => color.lab(),
            Self::Luv => color.luv(),
        }
    }

    /// Compute the distance between the two colors.
    pub fn distance(&self, color1: &Color, color2: &Color) -> Float {
        euclidean(&self.coordinates(color1), &self.coordinates(color2))
    }
}

#[derive(Clone, Debug)]
struct SortOptionData {
    metric: SortMetric,
    max_passes: usize,
}

impl SortOptionData {
    pub const fn new() -> Self {
        Self {
            metric: SortMetric::Lab,
            max_passes: 16,
        }
    }
}

/// A builder of sort options.
#[derive(Debug)]
pub struct SortOptionBuilder(SortOptionData);

impl SortOptionBuilder {
    /// Set the distance metric.
    pub fn metric(&mut self, metric: SortMetric) -> &mut Self {
        self.0.metric = metric;
        self
    }

    /// Set the maximum number of 2-opt passes. Zero disables 2-opt.
    pub fn max_passes(&mut self, max_passes: usize) -> &mut Self {
        self.0.max_passes = max_passes;
        self
    }

    /// Instantiate the options.
    pub fn build(&self) -> SortOptions {
        SortOptions(self.0.clone())
    }
}

/// The options for sorting colors.
#[derive(Clone, Debug)]
pub struct SortOptions(SortOptionData);

impl Default for SortOptions {
    fn default() -> Self {
        SortOptions(SortOptionData::new())
    }
}

impl SortOptions {
    /// Create a new builder with the default option values.
    pub fn builder() -> SortOptionBuilder {
        SortOptionBuilder(SortOptionData::new())
    }

    /// Get the distance metric.
    pub fn metric(&self) -> SortMetric {
        self.0.metric
    }

    /// Get the maximum number of 2-opt passes.
    pub fn max_passes(&self) -> usize {
        self.0.max_passes
    }
}

// ====================================================================================================================

/// Compute the minimum spanning tree with Prim's algorithm. The result lists
/// each node's children with their distances from the parent.
fn spanning_tree(points: &[[Float; 3]], root: usize) -> Vec<Vec<(Float, usize)>> {
    let n = points.len();
    let mut in_tree = vec![false; n];
    let mut key = vec![Float::INFINITY; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut children = vec![Vec::new(); n];
    key[root] = 0.0;
    let mut previous: Option<usize> = None;

    for _ in 0..n {
        let mut next: Option<usize> = None;
        for v in 0..n {
            if in_tree[v] {
                continue;
            }
            let closer = match next {
                None => true,
                Some(u) => key[v] < key[u],
            };
            if closer {
                next = Some(v);
            }
        }

        let Some(u) = next else { break };
        in_tree[u] = true;

        // Points with non-finite coordinates never get closer than infinity.
        // They hang off the most recently added point instead.
        if u != root && parent[u].is_none() {
            parent[u] = previous;
        }
        if let Some(p) = parent[u] {
            children[p].push((key[u], u));
        }
        previous = Some(u);

        for v in 0..n {
            if !in_tree[v] {
                let distance = euclidean(&points[u], &points[v]);
                if distance < key[v] {
                    key[v] = distance;
                    parent[v] = Some(u);
                }
            }
        }
    }

    children
}

/// Walk the tree in preorder, visiting nearer children first.
fn preorder(mut children: Vec<Vec<(Float, usize)>>, root: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(children.len());
    let mut stack = vec![root];

    while let Some(u) = stack.pop() {
        order.push(u);
        let kids = &mut children[u];
        kids.sort_by(|(d1, i1), (d2, i2)| d1.total_cmp(d2).then(i1.cmp(i2)));
        stack.extend(kids.iter().rev().map(|(_, v)| *v));
    }

    order
}

/// Improve the open path with 2-opt passes, keeping the first node in place.
/// This function returns the number of passes.
fn two_opt(points: &[[Float; 3]], order: &mut [usize], max_passes: usize) -> usize {
    let n = order.len();
    let distance = |i: usize, j: usize| euclidean(&points[i], &points[j]);
    let mut passes = 0;

    while passes < max_passes {
        passes += 1;
        let mut improved = false;

        for i in 0..n.saturating_sub(2) {
            for j in i + 2..n {
                let (a, b, c) = (order[i], order[i + 1], order[j]);
                let mut before = distance(a, b);
                let mut after = distance(a, c);
                if j + 1 < n {
                    let d = order[j + 1];
                    before += distance(c, d);
                    after += distance(b, d);
                }

                if after < before - 1e-12 {
                    trace!("reversing path from {} to {}", i + 1, j);
                    order[i + 1..=j].reverse();
                    improved = true;
                }
            }
        }

        if !improved {
            break;
        }
    }

    passes
}

/// Compute the length of the open path through the points in the given order.
fn length(points: &[[Float; 3]], order: &[usize]) -> Float {
    order
        .windows(2)
        .map(|pair| euclidean(&points[pair[0]], &points[pair[1]]))
        .sum::<Accumulator>()
        .total()
}

/// Determine a perceptually smooth order for the colors, as indexes into the
/// slice.
fn order(colors: &[Color], options: &SortOptions) -> Vec<usize> {
    let n = colors.len();
    if n < 2 {
        return (0..n).collect();
    }

    let metric = options.metric();
    let points: Vec<[Float; 3]> = colors.iter().map(|c| metric.coordinates(c)).collect();
    debug!("sorting {} colors by {:?} distance", n, metric);

    let black = metric.coordinates(&Color::default());
    let mut root = 0;
    let mut nearest = Float::INFINITY;
    for (index, point) in points.iter().enumerate() {
        let distance = euclidean(point, &black);
        if distance < nearest {
            nearest = distance;
            root = index;
        }
    }
    debug!("rooting spanning tree at color #{}", root);

    let mut order = preorder(spanning_tree(&points, root), root);
    debug!("tree walk has length {:.5}", length(&points, &order));

    let passes = two_opt(&points, &mut order, options.max_passes());
    debug!(
        "2-opt took {} passes, path has length {:.5}",
        passes,
        length(&points, &order)
    );

    order
}

/// Sort the colors with default options, returning a new vector.
pub fn sorted(colors: &[Color]) -> Vec<Color> {
    sorted_with(colors, &SortOptions::default())
}

/// Sort the colors with the given options, returning a new vector.
pub fn sorted_with(colors: &[Color], options: &SortOptions) -> Vec<Color> {
    order(colors, options)
        .into_iter()
        .map(|index| colors[index])
        .collect()
}

/// Sort the colors in place with default options.
pub fn sort(colors: &mut [Color]) {
    sort_with(colors, &SortOptions::default())
}

/// Sort the colors in place with the given options.
pub fn sort_with(colors: &mut [Color], options: &SortOptions) {
    let ordered = sorted_with(colors, options);
    colors.copy_from_slice(&ordered);
}

/// Compute the sum of CIELAB distances between adjacent colors.
///
/// Smaller is smoother. This is the quantity [`sorted`] tries to minimize.
pub fn path_length(colors: &[Color]) -> Float {
    path_length_with(colors, SortMetric::Lab)
}

/// Compute the sum of distances between adjacent colors with the given
/// metric.
pub fn path_length_with(colors: &[Color], metric: SortMetric) -> Float {
    colors
        .windows(2)
        .map(|pair| metric.distance(&pair[0], &pair[1]))
        .sum::<Accumulator>()
        .total()
}
