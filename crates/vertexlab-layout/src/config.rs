//! Plain-data layout settings. All of them deserialize with defaults for missing fields so hosts
//! can keep partial JSON presets.

use crate::error::{Error, Result};
use crate::geom::{Size, point};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForceConfig {
    pub area_width: f64,
    pub area_height: f64,
    /// Minimum distance kept between a node and the area border.
    pub paddings: f64,
    pub power_of_repulsion: f64,
    pub multiplier_of_repulsion: f64,
    pub power_of_connection: f64,
    pub multiplier_of_connection: f64,
}

impl Default for ForceConfig {
    fn default() -> Self {
        Self {
            area_width: 40.0,
            area_height: 20.0,
            paddings: 0.3,
            power_of_repulsion: 2.0,
            multiplier_of_repulsion: 1.0,
            power_of_connection: 1.0,
            multiplier_of_connection: 0.006,
        }
    }
}

impl ForceConfig {
    pub fn area_size(&self) -> Size {
        Size::new(self.area_width, self.area_height)
    }

    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("areaWidth", self.area_width),
            ("areaHeight", self.area_height),
            ("paddings", self.paddings),
            ("powerOfRepulsion", self.power_of_repulsion),
            ("multiplierOfRepulsion", self.multiplier_of_repulsion),
            ("powerOfConnection", self.power_of_connection),
            ("multiplierOfConnection", self.multiplier_of_connection),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::InvalidConfig {
                message: format!("{name} must be finite"),
            });
        }
        if self.paddings < 0.0 {
            return Err(Error::InvalidConfig {
                message: "paddings must not be negative".to_string(),
            });
        }
        if self.area_width <= 2.0 * self.paddings || self.area_height <= 2.0 * self.paddings {
            return Err(Error::InvalidConfig {
                message: format!(
                    "area {}x{} leaves no room inside paddings {}",
                    self.area_width, self.area_height, self.paddings
                ),
            });
        }
        Ok(())
    }

    /// Clamps a coordinate pair into the padded area.
    pub(crate) fn clamp(&self, x: f64, y: f64) -> crate::geom::Point {
        point(
            x.clamp(self.paddings, self.area_width - self.paddings),
            y.clamp(self.paddings, self.area_height - self.paddings),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TreeLayoutConfig {
    pub root_x: f64,
    pub root_y: f64,
    /// Vertical distance between consecutive layers; layer `n` sits at `root_y - n * spacing`.
    pub layer_spacing: f64,
    /// Width reserved for a node without materialized children.
    pub min_distance_between_nodes: f64,
}

impl Default for TreeLayoutConfig {
    fn default() -> Self {
        Self {
            root_x: 0.0,
            root_y: 0.0,
            layer_spacing: 2.0,
            min_distance_between_nodes: 1.5,
        }
    }
}

impl TreeLayoutConfig {
    pub fn validate(&self) -> Result<()> {
        let finite = [
            self.root_x,
            self.root_y,
            self.layer_spacing,
            self.min_distance_between_nodes,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite || self.min_distance_between_nodes < 0.0 {
            return Err(Error::InvalidConfig {
                message: "tree layout values must be finite and the node distance non-negative"
                    .to_string(),
            });
        }
        Ok(())
    }
}
