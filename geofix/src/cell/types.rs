//! Cell identity keys, lookups and datastore records.

/// Radio access technology of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RadioType {
    Gsm,
    Cdma,
    Wcdma,
    Lte,
}

/// Identity of one specific cell: the full radio/mcc/mnc/lac/cid tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellKey {
    pub radio: RadioType,
    pub mcc: u16,
    pub mnc: u16,
    pub lac: u16,
    pub cid: u32,
}

/// Identity of the lac-level area containing a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AreaKey {
    pub radio: RadioType,
    pub mcc: u16,
    pub mnc: u16,
    pub lac: u16,
}

/// One candidate cell observed by the querying device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellLookup {
    pub radio: RadioType,
    pub mcc: u16,
    pub mnc: u16,
    pub lac: u16,
    pub cid: u32,
}

impl CellLookup {
    /// Identity key of this specific cell.
    pub fn cell_key(&self) -> CellKey {
        CellKey {
            radio: self.radio,
            mcc: self.mcc,
            mnc: self.mnc,
            lac: self.lac,
            cid: self.cid,
        }
    }

    /// Identity key of the lac-level area this cell belongs to.
    pub fn area_key(&self) -> AreaKey {
        AreaKey {
            radio: self.radio,
            mcc: self.mcc,
            mnc: self.mnc,
            lac: self.lac,
        }
    }
}

/// Persisted estimate for one cell id.
///
/// The gateway contract guarantees coordinates are present, so records
/// carry plain floats rather than options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellRecord {
    pub lat: f64,
    pub lon: f64,
    /// Uncertainty radius in meters.
    pub radius: f64,
    pub area_key: AreaKey,
}

/// Persisted estimate for one lac-level area; coarser than a [`CellRecord`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaRecord {
    pub lat: f64,
    pub lon: f64,
    /// Uncertainty radius in meters.
    pub radius: f64,
    pub area_key: AreaKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_keys_share_the_area_tuple() {
        let lookup = CellLookup {
            radio: RadioType::Lte,
            mcc: 234,
            mnc: 15,
            lac: 42,
            cid: 1337,
        };
        let cell_key = lookup.cell_key();
        let area_key = lookup.area_key();
        assert_eq!(cell_key.cid, 1337);
        assert_eq!(
            area_key,
            AreaKey {
                radio: RadioType::Lte,
                mcc: 234,
                mnc: 15,
                lac: 42
            }
        );
    }

    #[test]
    fn test_cells_in_same_lac_map_to_same_area() {
        let a = CellLookup {
            radio: RadioType::Gsm,
            mcc: 310,
            mnc: 410,
            lac: 7,
            cid: 1,
        };
        let b = CellLookup { cid: 2, ..a };
        assert_ne!(a.cell_key(), b.cell_key());
        assert_eq!(a.area_key(), b.area_key());
    }
}
