//! Pixel scanner: recovers per-color bounding boxes from a rendered cloud.
//!
//! The renderer draws straight onto the raster and never reports where each
//! word landed. Every word was drawn in its own palette color, so grouping
//! opaque pixels by exact color gives one box per color, which the resolver
//! then maps back to words.
//!
//! Only every `stride`-th pixel on each axis is sampled (stride 2 by
//! default), so boxes are accurate to within `stride - 1` pixels. Grouping
//! is by exact RGB: anti-aliased glyph edges produce many near-miss colors,
//! and each becomes its own small cluster.

use std::collections::HashMap;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::color::Rgb;
use crate::raster::Raster;
use crate::types::Bounds;

/// Exact color of a cluster, displayed as `"r,g,b"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorKey(pub Rgb);

impl ColorKey {
    #[must_use]
    pub const fn rgb(self) -> Rgb {
        self.0
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.0.r, self.0.g, self.0.b)
    }
}

impl Serialize for ColorKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// All sampled pixels sharing one exact color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelCluster {
    pub color_key: ColorKey,
    pub bounds: Bounds,
    /// Number of sampled pixels that contributed.
    pub samples: u32,
}

/// Clusters keyed by color, iterated in first-discovery (raster) order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterMap {
    clusters: Vec<PixelCluster>,
    index: HashMap<ColorKey, usize>,
}

impl ClusterMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an opaque sample, opening a new cluster on first sight.
    pub fn add_sample(&mut self, key: ColorKey, x: u32, y: u32) {
        if let Some(cluster) = self
            .index
            .get(&key)
            .and_then(|&i| self.clusters.get_mut(i))
        {
            cluster.bounds.include(x, y);
            cluster.samples = cluster.samples.saturating_add(1);
            return;
        }
        self.index.insert(key, self.clusters.len());
        self.clusters.push(PixelCluster {
            color_key: key,
            bounds: Bounds::point(x, y),
            samples: 1,
        });
    }

    #[must_use]
    pub fn get(&self, key: ColorKey) -> Option<&PixelCluster> {
        self.index.get(&key).and_then(|&i| self.clusters.get(i))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PixelCluster> {
        self.clusters.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}

impl<'a> IntoIterator for &'a ClusterMap {
    type Item = &'a PixelCluster;
    type IntoIter = std::slice::Iter<'a, PixelCluster>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Scan `raster` on a `stride` grid and cluster opaque pixels by exact color.
///
/// A stride of 0 is treated as 1.
#[must_use]
pub fn scan(raster: &Raster, stride: u32) -> ClusterMap {
    let step = usize::try_from(stride.max(1)).unwrap_or(1);
    let mut clusters = ClusterMap::new();

    for y in (0..raster.height()).step_by(step) {
        for x in (0..raster.width()).step_by(step) {
            let Some([r, g, b, a]) = raster.pixel(x, y) else {
                continue;
            };
            if a == 0 {
                continue;
            }
            clusters.add_sample(ColorKey(Rgb::new(r, g, b)), x, y);
        }
    }

    log::debug!(
        "scanned {}x{} raster at stride {}: {} color clusters",
        raster.width(),
        raster.height(),
        step,
        clusters.len()
    );
    clusters
}
