//! Type-safe domain types for pallets and chargeable weight
//!
//! This module replaces stringly-typed pallet handling with proper Rust enums
//! that provide compile-time validation and exhaustive matching.

use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Standard air-freight volumetric divisor (cm³ per kg).
pub const VOLUMETRIC_DIVISOR: f64 = 6000.0;

/// Standard pallet footprint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
pub enum PalletType {
    /// UK standard pallet, 120cm x 100cm
    Uk,
    /// EU standard pallet, 120cm x 80cm
    Eu,
}

/// Fixed footprint template for a standard pallet type.
///
/// Templates are immutable and defined once in the static catalog; a
/// [`Pallet`] always copies its length/width from the template it was
/// created from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PalletTemplate {
    pub pallet_type: PalletType,
    pub length_cm: f64,
    pub width_cm: f64,
}

const UK_PALLET: PalletTemplate = PalletTemplate {
    pallet_type: PalletType::Uk,
    length_cm: 120.0,
    width_cm: 100.0,
};

const EU_PALLET: PalletTemplate = PalletTemplate {
    pallet_type: PalletType::Eu,
    length_cm: 120.0,
    width_cm: 80.0,
};

impl PalletTemplate {
    /// Get the template for a pallet type.
    pub fn for_type(pallet_type: PalletType) -> Self {
        match pallet_type {
            PalletType::Uk => UK_PALLET,
            PalletType::Eu => EU_PALLET,
        }
    }

    /// Catalog lookup by type code.
    ///
    /// Matching is case-insensitive with surrounding whitespace trimmed.
    /// Returns `None` for anything other than "UK" or "EU".
    pub fn lookup(code: &str) -> Option<Self> {
        let pallet_type = code.trim().parse::<PalletType>().ok()?;
        Some(Self::for_type(pallet_type))
    }

    /// All templates in the catalog, in display order.
    pub fn catalog() -> impl Iterator<Item = Self> {
        PalletType::iter().map(Self::for_type)
    }
}

/// A single pallet entry with measured height and weight.
///
/// Length and width always match the template the pallet was created from;
/// only height and weight vary per entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pallet {
    pub pallet_type: PalletType,
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl Pallet {
    /// Create a pallet from a template plus measured height and weight.
    pub fn from_template(template: &PalletTemplate, height_cm: f64, weight_kg: f64) -> Self {
        Self {
            pallet_type: template.pallet_type,
            length_cm: template.length_cm,
            width_cm: template.width_cm,
            height_cm,
            weight_kg,
        }
    }

    /// Volumetric weight in kg: (length x width x height) / 6000.
    pub fn volumetric_weight(&self) -> f64 {
        (self.length_cm * self.width_cm * self.height_cm) / VOLUMETRIC_DIVISOR
    }

    /// Chargeable weight in kg: the greater of actual and volumetric weight.
    pub fn chargeable_weight(&self) -> f64 {
        self.weight_kg.max(self.volumetric_weight())
    }

    /// Which weight the chargeable figure is based on, for display.
    ///
    /// Exact equality with the actual weight labels as actual weight, so a
    /// tie resolves to [`WeightBasis::Actual`].
    pub fn weight_basis(&self) -> WeightBasis {
        if self.chargeable_weight() == self.weight_kg {
            WeightBasis::Actual
        } else {
            WeightBasis::Volumetric
        }
    }
}

/// Display label for the winning side of the chargeable-weight comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum WeightBasis {
    #[strum(serialize = "Actual Weight")]
    Actual,
    #[strum(serialize = "Volumetric Weight")]
    Volumetric,
}
