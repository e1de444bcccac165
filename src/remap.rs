//! Symbolic button names and per-layout remap tables.
//!
//! A [`RemapTable`] translates a symbolic [`Button`] into whatever the
//! backend natively speaks: an index into an analog button array, or a bit
//! position inside a packed mask. It also carries the native axis
//! permutation. The table variant is picked by an explicit [`Layout`] value
//! at construction — never inferred from the ambient platform — and is
//! immutable afterwards.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Symbolic controller button.
///
/// `Any` matches every button on the pad.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    A,
    B,
    X,
    Y,
    L1,
    R1,
    Select,
    Start,
    Home,
    TL,
    TR,
    Any,
}

#[derive(Debug, Error)]
#[error("unknown button name: {0}")]
pub struct UnknownButton(String);

impl FromStr for Button {
    type Err = UnknownButton;

    /// Case-insensitive, with the historical aliases: `C`→`X`, `D`→`Y`,
    /// `L`/`LB`→`L1`, `R`/`RB`→`R1`, `BACK`→`Select`, `GUIDE`→`Home`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(Button::A),
            "B" => Ok(Button::B),
            "X" | "C" => Ok(Button::X),
            "Y" | "D" => Ok(Button::Y),
            "L1" | "L" | "LB" => Ok(Button::L1),
            "R1" | "R" | "RB" => Ok(Button::R1),
            "SELECT" | "BACK" => Ok(Button::Select),
            "START" => Ok(Button::Start),
            "HOME" | "GUIDE" => Ok(Button::Home),
            "TL" => Ok(Button::TL),
            "TR" => Ok(Button::TR),
            "ANY" => Ok(Button::Any),
            other => Err(UnknownButton(other.to_string())),
        }
    }
}

/// Which remap table variant a controller uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Identity axis order, default bit/index assignments.
    #[default]
    Standard,
    /// The ordering one platform family reports: axes rotated by two and
    /// mask bits shifted into the high group.
    Alternate,
}

/// Fixed translation from symbolic buttons to backend-native codes, plus
/// the native axis permutation. Selected once per controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemapTable {
    layout: Layout,
}

impl RemapTable {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Index of a button within an analog button array, or `None` for
    /// [`Button::Any`].
    ///
    /// Live-poll devices report the standard ordering on every platform, so
    /// this mapping does not vary by layout.
    pub fn analog_index(&self, button: Button) -> Option<usize> {
        match button {
            Button::A => Some(0),
            Button::B => Some(1),
            Button::X => Some(2),
            Button::Y => Some(3),
            Button::L1 => Some(4),
            Button::R1 => Some(5),
            Button::Select => Some(6),
            Button::Start => Some(7),
            Button::Home => Some(8),
            Button::TL => Some(9),
            Button::TR => Some(10),
            Button::Any => None,
        }
    }

    /// Bit(s) for a button within a packed bitmask. [`Button::Any`] yields
    /// the layout's all-buttons mask.
    pub fn mask_bits(&self, button: Button) -> u32 {
        match self.layout {
            Layout::Standard => match button {
                Button::A => 0x1,
                Button::B => 0x2,
                Button::X => 0x4,
                Button::Y => 0x8,
                Button::L1 => 0x10,
                Button::R1 => 0x20,
                Button::Select => 0x40,
                Button::Start => 0x80,
                Button::Home => 0x100,
                Button::TL => 0x200,
                Button::TR => 0x400,
                Button::Any => 0xFF_FFFF,
            },
            Layout::Alternate => match button {
                Button::A => 0x800,
                Button::B => 0x1000,
                Button::X => 0x2000,
                Button::Y => 0x4000,
                Button::L1 => 0x100,
                Button::R1 => 0x200,
                Button::Select => 0x20,
                Button::Start => 0x10,
                Button::Home => 0x400,
                Button::TL => 0x40,
                Button::TR => 0x80,
                Button::Any => 0xFFF_FFF0,
            },
        }
    }

    /// Native axis index for an engine-facing axis index. Indices beyond
    /// the six remapped axes pass through unchanged.
    pub fn axis_index(&self, axis: usize) -> usize {
        match self.layout {
            Layout::Standard => axis,
            Layout::Alternate => match axis {
                0 => 2,
                1 => 3,
                2 => 4,
                3 => 5,
                4 => 0,
                5 => 1,
                n => n,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_aliases_parse() {
        assert_eq!("c".parse::<Button>().unwrap(), Button::X);
        assert_eq!("D".parse::<Button>().unwrap(), Button::Y);
        assert_eq!("LB".parse::<Button>().unwrap(), Button::L1);
        assert_eq!("back".parse::<Button>().unwrap(), Button::Select);
        assert_eq!("GUIDE".parse::<Button>().unwrap(), Button::Home);
        assert!("Z".parse::<Button>().is_err());
    }

    #[test]
    fn standard_mask_bits_are_disjoint_per_button() {
        let table = RemapTable::new(Layout::Standard);
        assert_eq!(table.mask_bits(Button::A), 0x1);
        assert_eq!(table.mask_bits(Button::Start), 0x80);
        assert_eq!(table.mask_bits(Button::TR), 0x400);
        assert_eq!(
            table.mask_bits(Button::A) & table.mask_bits(Button::B),
            0
        );
    }

    #[test]
    fn alternate_layout_shifts_mask_bits() {
        let table = RemapTable::new(Layout::Alternate);
        assert_eq!(table.mask_bits(Button::A), 0x800);
        assert_eq!(table.mask_bits(Button::Start), 0x10);
        assert_eq!(table.mask_bits(Button::Any), 0xFFF_FFF0);
    }

    #[test]
    fn alternate_layout_rotates_axes() {
        let table = RemapTable::new(Layout::Alternate);
        assert_eq!(table.axis_index(0), 2);
        assert_eq!(table.axis_index(4), 0);
        assert_eq!(table.axis_index(7), 7);

        let identity = RemapTable::new(Layout::Standard);
        for n in 0..8 {
            assert_eq!(identity.axis_index(n), n);
        }
    }
}
