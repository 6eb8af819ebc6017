// Region layout of the Moroccan national identity card (front side).
// Coordinates were measured on a 515x321 scan and are stored as fractions
// so they apply to any image resized to the canonical geometry.

use serde::{Deserialize, Serialize};
use crate::processing::cleaning::FieldClass;
use crate::utils::ConfigError;

const LAYOUT_WIDTH: f32 = 515.0;
const LAYOUT_HEIGHT: f32 = 321.0;

/// Script a region is printed in. Selects the recognizer model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Latin,
    Arabic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionField {
    #[serde(rename = "last_name_fr")]
    LastNameLatin,
    #[serde(rename = "first_name_fr")]
    FirstNameLatin,
    #[serde(rename = "last_name_ar")]
    LastNameArabic,
    #[serde(rename = "first_name_ar")]
    FirstNameArabic,
    #[serde(rename = "birth_date")]
    BirthDate,
    #[serde(rename = "birth_place_fr")]
    BirthPlace,
    #[serde(rename = "card_id")]
    CardId,
    #[serde(rename = "expiry_date")]
    ExpiryDate,
}

impl RegionField {
    pub fn name(&self) -> &'static str {
        match self {
            RegionField::LastNameLatin => "last_name_fr",
            RegionField::FirstNameLatin => "first_name_fr",
            RegionField::LastNameArabic => "last_name_ar",
            RegionField::FirstNameArabic => "first_name_ar",
            RegionField::BirthDate => "birth_date",
            RegionField::BirthPlace => "birth_place_fr",
            RegionField::CardId => "card_id",
            RegionField::ExpiryDate => "expiry_date",
        }
    }

    pub fn script(&self) -> Script {
        match self {
            RegionField::LastNameArabic | RegionField::FirstNameArabic => Script::Arabic,
            _ => Script::Latin,
        }
    }

    pub fn field_class(&self) -> FieldClass {
        match self {
            RegionField::LastNameLatin | RegionField::FirstNameLatin => FieldClass::LatinName,
            RegionField::BirthPlace => FieldClass::LatinPlace,
            RegionField::LastNameArabic | RegionField::FirstNameArabic => FieldClass::Arabic,
            RegionField::CardId => FieldClass::IdCode,
            RegionField::BirthDate | RegionField::ExpiryDate => FieldClass::Date,
        }
    }

    /// Latin names are mirrored into Arabic through the translator.
    pub fn is_translated(&self) -> bool {
        matches!(self, RegionField::LastNameLatin | RegionField::FirstNameLatin)
    }
}

/// A named rectangle of the card layout in fractional coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub field: RegionField,
    pub x_start: f32,
    pub y_start: f32,
    pub x_end: f32,
    pub y_end: f32,
}

impl Region {
    pub fn new(field: RegionField, x_start: f32, y_start: f32, x_end: f32, y_end: f32) -> Self {
        Region {
            field,
            x_start,
            y_start,
            x_end,
            y_end,
        }
    }

    /// Builds a region from pixel coordinates measured on the reference layout.
    fn from_layout(field: RegionField, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Region::new(
            field,
            x1 / LAYOUT_WIDTH,
            y1 / LAYOUT_HEIGHT,
            x2 / LAYOUT_WIDTH,
            y2 / LAYOUT_HEIGHT,
        )
    }

    pub fn is_well_formed(&self) -> bool {
        let in_unit = |v: f32| (0.0..=1.0).contains(&v);
        in_unit(self.x_start)
            && in_unit(self.y_start)
            && in_unit(self.x_end)
            && in_unit(self.y_end)
            && self.x_start < self.x_end
            && self.y_start < self.y_end
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.is_well_formed() {
            Ok(())
        } else {
            Err(ConfigError::InvalidRegion {
                name: self.field.name().to_string(),
                reason: format!(
                    "coordinates ({}, {})-({}, {}) must lie in [0,1] with start < end",
                    self.x_start, self.y_start, self.x_end, self.y_end
                ),
            })
        }
    }
}

/// The hand-tuned region table used by the region strategy.
pub fn default_regions() -> Vec<Region> {
    vec![
        Region::from_layout(RegionField::LastNameLatin, 175.0, 60.0, 300.0, 100.0),
        Region::from_layout(RegionField::FirstNameLatin, 175.0, 100.0, 300.0, 140.0),
        Region::from_layout(RegionField::LastNameArabic, 370.0, 50.0, 510.0, 90.0),
        Region::from_layout(RegionField::FirstNameArabic, 370.0, 90.0, 510.0, 130.0),
        Region::from_layout(RegionField::BirthDate, 295.0, 117.0, 381.0, 144.0),
        Region::from_layout(RegionField::BirthPlace, 185.0, 152.0, 346.0, 183.0),
        Region::from_layout(RegionField::CardId, 50.0, 275.0, 200.0, 310.0),
        Region::from_layout(RegionField::ExpiryDate, 339.0, 270.0, 460.0, 310.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_well_formed() {
        let regions = default_regions();
        assert_eq!(regions.len(), 8);
        for region in &regions {
            assert!(region.validate().is_ok(), "{} is malformed", region.field.name());
        }
    }

    #[test]
    fn test_inverted_region_is_rejected() {
        let region = Region::new(RegionField::CardId, 0.5, 0.1, 0.2, 0.3);
        assert!(!region.is_well_formed());
        assert!(region.validate().is_err());

        let outside = Region::new(RegionField::CardId, 0.1, 0.1, 1.2, 0.3);
        assert!(!outside.is_well_formed());
    }

    #[test]
    fn test_scripts_follow_region_names() {
        assert_eq!(RegionField::FirstNameArabic.script(), Script::Arabic);
        assert_eq!(RegionField::LastNameArabic.script(), Script::Arabic);
        assert_eq!(RegionField::CardId.script(), Script::Latin);
        assert_eq!(RegionField::BirthPlace.script(), Script::Latin);
    }

    #[test]
    fn test_region_deserializes_by_name() {
        let region: Region = serde_json::from_str(
            r#"{"field":"card_id","x_start":0.1,"y_start":0.85,"x_end":0.38,"y_end":0.96}"#,
        )
        .unwrap();
        assert_eq!(region.field, RegionField::CardId);
    }
}
