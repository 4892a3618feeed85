//! Canvas configuration.
//!
//! Every field has a default, so a partial JSON document (or `{}`) is a valid config.

use std::path::Path;

use serde::{Deserialize, Serialize};
use stratoband_geom::BandOptions;
use stratoband_graph::EdgeTag;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub layout: LayoutConfig,
    pub band: BandOptions,
    pub colors: ColorConfig,
}

impl Config {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Space between packed blocks and between blocks joined by split links.
    pub gutter: f64,
    pub min_block_width: f64,
    pub min_block_height: f64,
    /// Size given to blocks that arrive without one.
    pub default_block_width: f64,
    pub default_block_height: f64,
    /// Upper bound on passes per `Canvas::layout` call.
    pub max_passes: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            gutter: 40.0,
            min_block_width: 40.0,
            min_block_height: 40.0,
            default_block_width: 160.0,
            default_block_height: 120.0,
            max_passes: 4,
        }
    }
}

/// 8-bit RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub fn alpha(self) -> f64 {
        f64::from(self.3) / 255.0
    }

    /// CSS `rgba()` notation, alpha rounded to three decimals.
    pub fn to_css(self) -> String {
        let a = (self.alpha() * 1000.0).round() / 1000.0;
        format!("rgba({},{},{},{})", self.0, self.1, self.2, a)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorConfig {
    pub band: Rgba,
    pub parent_child: Rgba,
    pub sibling: Rgba,
    /// Fill of the sub-ribbon drawn for the current selection.
    pub highlight: Rgba,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            band: Rgba(200, 200, 200, 128),
            parent_child: Rgba(220, 50, 47, 96),
            sibling: Rgba(60, 170, 70, 96),
            highlight: Rgba(255, 165, 0, 160),
        }
    }
}

impl ColorConfig {
    /// Ribbon colour for an edge kind; rigid kinds draw no ribbon.
    pub fn for_tag(&self, tag: EdgeTag) -> Option<Rgba> {
        match tag {
            EdgeTag::Band => Some(self.band),
            EdgeTag::ParentChild => Some(self.parent_child),
            EdgeTag::Sibling => Some(self.sibling),
            EdgeTag::Magnetic | EdgeTag::Beam => None,
        }
    }
}
