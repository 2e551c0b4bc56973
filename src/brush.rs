use core::fmt;
use std::str::FromStr;

/// Weight of an unpainted cell.
pub const DEFAULT_WEIGHT: u32 = 1;
pub const LIGHT_WEIGHT: u32 = 5;
pub const MEDIUM_WEIGHT: u32 = 10;
pub const HEAVY_WEIGHT: u32 = 15;

/// The kinds of paint an editor can put on a cell. Walls remove the cell from the graph,
/// the weight brushes make entering the cell more expensive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Brush {
    Wall,
    LightWeight,
    MediumWeight,
    HeavyWeight,
}

impl Brush {
    pub const ALL: [Brush; 4] = [
        Brush::Wall,
        Brush::LightWeight,
        Brush::MediumWeight,
        Brush::HeavyWeight,
    ];

    /// The weight stored on a cell painted with this brush. Walls keep the default weight.
    pub fn weight(self) -> u32 {
        match self {
            Brush::Wall => DEFAULT_WEIGHT,
            Brush::LightWeight => LIGHT_WEIGHT,
            Brush::MediumWeight => MEDIUM_WEIGHT,
            Brush::HeavyWeight => HEAVY_WEIGHT,
        }
    }

    /// The weight brush matching `weight` exactly, if any.
    pub fn from_weight(weight: u32) -> Option<Brush> {
        match weight {
            LIGHT_WEIGHT => Some(Brush::LightWeight),
            MEDIUM_WEIGHT => Some(Brush::MediumWeight),
            HEAVY_WEIGHT => Some(Brush::HeavyWeight),
            _ => None,
        }
    }
}

impl fmt::Display for Brush {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Brush::Wall => "Wall",
            Brush::LightWeight => "Light Weight",
            Brush::MediumWeight => "Medium Weight",
            Brush::HeavyWeight => "Heavy Weight",
        };
        f.write_str(name)
    }
}

impl FromStr for Brush {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Brush::ALL
            .into_iter()
            .find(|b| b.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown brush: {s}"))
    }
}
