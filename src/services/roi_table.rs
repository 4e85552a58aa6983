use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::models::resolution::Resolution;
use crate::models::roi::{HeightBand, WidthWindow};

/// One curated table row: shop name-label geometry for an exact resolution.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoiTableEntry {
    pub width: u32,
    pub height: u32,
    pub band: HeightBand,
    pub window: WidthWindow,
}

/// Exact-match mapping from screenshot resolution to shop ROI geometry.
///
/// Hand-curated: shop layout scales non-linearly across aspect ratios and UI
/// scaling rules, so unknown resolutions are never extrapolated. Both lookups
/// return `None` for an absent key. The table is immutable once built.
#[derive(Debug, Clone)]
pub struct RoiTable {
    bands: HashMap<Resolution, HeightBand>,
    windows: HashMap<Resolution, WidthWindow>,
}

/// Curated entries: `(width, height, band_top, band_bottom, left, right, interval)`.
const BUILTIN_ENTRIES: &[(u32, u32, u32, u32, u32, u32, u32)] = &[
    (1024, 768, 740, 758, 174, 276, 141),
    (1152, 864, 833, 854, 195, 311, 160),
    (1280, 720, 694, 710, 322, 418, 134),
    (1280, 768, 740, 758, 301, 405, 142),
    (1280, 800, 771, 790, 287, 394, 150),
    (1280, 960, 925, 950, 217, 346, 179),
    (1280, 1001, 965, 991, 199, 333, 186),
    (1360, 768, 740, 758, 340, 446, 143),
    (1366, 768, 740, 758, 340, 446, 143),
    (1440, 900, 867, 890, 324, 446, 166),
    (1600, 900, 867, 890, 404, 524, 166),
    (1600, 1001, 965, 991, 359, 494, 186),
    (1680, 1001, 965, 991, 398, 535, 186),
    (1904, 1001, 965, 991, 511, 647, 186),
];

static BUILTIN: Lazy<RoiTable> = Lazy::new(|| {
    RoiTable::from_entries(BUILTIN_ENTRIES.iter().map(|&(w, h, top, bottom, left, right, interval)| {
        RoiTableEntry {
            width: w,
            height: h,
            band: HeightBand::new(top, bottom),
            window: WidthWindow::new(left, right, interval),
        }
    }))
});

impl RoiTable {
    /// Build a table from explicit entries. Later duplicates win.
    pub fn from_entries(entries: impl IntoIterator<Item = RoiTableEntry>) -> Self {
        let mut bands = HashMap::new();
        let mut windows = HashMap::new();
        for entry in entries {
            let key = Resolution::new(entry.width, entry.height);
            bands.insert(key, entry.band);
            windows.insert(key, entry.window);
        }
        Self { bands, windows }
    }

    /// The built-in curated table, constructed once per process.
    pub fn builtin() -> &'static RoiTable {
        &BUILTIN
    }

    /// Load a table override from its JSON representation (an array of
    /// entries, see [`RoiTableEntry`]).
    pub fn from_json(json: &str) -> Result<Self, String> {
        let entries: Vec<RoiTableEntry> =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse ROI table: {}", e))?;
        Ok(Self::from_entries(entries))
    }

    /// Serialize the table as a JSON array of entries, sorted by resolution
    /// for stable output.
    pub fn to_json(&self) -> Result<String, String> {
        let mut entries: Vec<RoiTableEntry> = self
            .bands
            .iter()
            .filter_map(|(res, band)| {
                self.windows.get(res).map(|window| RoiTableEntry {
                    width: res.width,
                    height: res.height,
                    band: *band,
                    window: *window,
                })
            })
            .collect();
        entries.sort_by_key(|e| (e.width, e.height));
        serde_json::to_string_pretty(&entries)
            .map_err(|e| format!("Failed to serialize ROI table: {}", e))
    }

    /// Vertical bounds of the champion name row, shared by all five slots.
    ///
    /// Exact-match only; `None` for an unmapped resolution.
    pub fn height_band_for(&self, resolution: Resolution) -> Option<HeightBand> {
        self.bands.get(&resolution).copied()
    }

    /// Horizontal bounds of the first champion name plus the slot stride.
    ///
    /// Exact-match only; `None` for an unmapped resolution.
    pub fn width_window_for(&self, resolution: Resolution) -> Option<WidthWindow> {
        self.windows.get(&resolution).copied()
    }

    /// Number of mapped resolutions.
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }
}
