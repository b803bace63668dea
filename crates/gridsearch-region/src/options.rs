//! Region analysis options

use gridsearch_core::ConnectivityType;

/// Which pixels [`crop`](crate::RegionAnalyzer::crop) treats as outside
/// the crop rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CropMode {
    /// Two scan regions only: `x < y_start && y < x_start`, and
    /// `x > y_end && y > x_end`. Black pixels elsewhere outside the
    /// rectangle are left alone, and the bounds are applied with the x/y
    /// roles swapped as shown.
    #[default]
    CornerRegions,
    /// Every pixel with `x` outside `x_start..=x_end` or `y` outside
    /// `y_start..=y_end`.
    Complement,
}

/// Options for region analysis
#[derive(Debug, Clone, Default)]
pub struct RegionOptions {
    /// Connectivity of black blocks (default 8-way)
    pub connectivity: ConnectivityType,
    /// Crop geometry
    pub crop_mode: CropMode,
}

impl RegionOptions {
    /// Create options with the specified connectivity
    pub fn new(connectivity: ConnectivityType) -> Self {
        Self {
            connectivity,
            ..Default::default()
        }
    }

    /// Set the crop geometry
    pub fn with_crop_mode(mut self, mode: CropMode) -> Self {
        self.crop_mode = mode;
        self
    }
}
