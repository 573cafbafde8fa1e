//! Hex grid geometry with axial coordinates
//!
//! A hex is stored as `(q, r)`; the third cube coordinate `s` is always
//! derived as `-q - r`, so `q + r + s == 0` holds for every value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::BoardSize;
use crate::error::EngineError;

/// Axial hex coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Derived cube coordinate, widened so it exists for every `(q, r)`
    pub const fn s(&self) -> i64 {
        -(self.q as i64) - self.r as i64
    }

    /// Check if this hex lies inside the rectangular playable region
    pub fn in_bounds(&self, size: BoardSize) -> bool {
        (0..size.height()).contains(&self.q) && (0..size.width()).contains(&self.r)
    }

    /// Distance between two hexes, saturating at `i32::MAX`
    pub fn distance_to(&self, other: Hex) -> i32 {
        let dq = (i64::from(self.q) - i64::from(other.q)).abs();
        let dr = (i64::from(self.r) - i64::from(other.r)).abs();
        let ds = (self.s() - other.s()).abs();
        i32::try_from(dq.max(dr).max(ds)).unwrap_or(i32::MAX)
    }

    /// Get neighbor in direction (0-5)
    ///
    /// Steps past the `i32` range wrap around.
    pub fn neighbor(&self, direction: usize) -> Hex {
        let (dq, dr) = DIRECTIONS[direction % 6];
        Hex::new(self.q.wrapping_add(dq), self.r.wrapping_add(dr))
    }

    /// All six adjacent hexes, in `DIRECTIONS` order
    pub fn neighbors(&self) -> [Hex; 6] {
        std::array::from_fn(|direction| self.neighbor(direction))
    }

    /// All hexes at exactly `radius` from this one (none for radius 0)
    pub fn ring(self, radius: i32) -> impl Iterator<Item = Hex> {
        (0..6).flat_map(move |side| {
            let (dq, dr) = DIRECTIONS[side];
            let (cq, cr) = DIRECTIONS[(side + 4) % 6];
            (0..radius).map(move |step| {
                // Corner of the ring for this side, then walk along the edge
                Hex::new(
                    self.q.wrapping_add(radius * cq + step * dq),
                    self.r.wrapping_add(radius * cr + step * dr),
                )
            })
        })
    }
}

/// Direction vectors in axial coordinates (dq, dr)
/// Cube form: (1,0,-1), (1,-1,0), (0,-1,1), (-1,0,1), (-1,1,0), (0,1,-1)
pub const DIRECTIONS: [(i32, i32); 6] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
];

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.q, self.r)
    }
}

impl FromStr for Hex {
    type Err = EngineError;

    /// Parse a `"q,r"` key
    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidHexKey(key.to_string());
        let (q, r) = key.split_once(',').ok_or_else(invalid)?;
        let q = q.trim().parse().map_err(|_| invalid())?;
        let r = r.trim().parse().map_err(|_| invalid())?;
        Ok(Hex::new(q, r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_in_bounds() {
        let size = BoardSize::new(7, 5).unwrap();
        assert!(Hex::new(0, 0).in_bounds(size));
        assert!(Hex::new(4, 6).in_bounds(size));
        assert!(!Hex::new(5, 0).in_bounds(size)); // q limited by height
        assert!(!Hex::new(0, 7).in_bounds(size)); // r limited by width
        assert!(!Hex::new(-1, 3).in_bounds(size));
        assert!(!Hex::new(2, -1).in_bounds(size));
    }

    #[test]
    fn test_distance() {
        let origin = Hex::new(0, 0);
        assert_eq!(origin.distance_to(origin), 0);
        assert_eq!(origin.distance_to(Hex::new(1, 0)), 1);
        assert_eq!(origin.distance_to(Hex::new(1, -1)), 1);
        assert_eq!(origin.distance_to(Hex::new(1, 1)), 2);
        assert_eq!(origin.distance_to(Hex::new(2, -1)), 2);
        assert_eq!(Hex::new(3, 1).distance_to(Hex::new(0, 0)), 4);
    }

    #[test]
    fn test_distance_matches_half_manhattan() {
        let a = Hex::new(2, -5);
        for q in -4..=4 {
            for r in -4..=4 {
                let b = Hex::new(q, r);
                let half = ((a.q - b.q).abs() + (a.r - b.r).abs()) as i64 + (a.s() - b.s()).abs();
                assert_eq!(i64::from(a.distance_to(b)), half / 2);
                assert_eq!(a.distance_to(b), b.distance_to(a));
            }
        }
    }

    #[test]
    fn test_extreme_coordinates() {
        let low = Hex::new(i32::MIN, 0);
        let high = Hex::new(i32::MAX, i32::MAX);
        assert_eq!(low.s(), 1 << 31);
        assert_eq!(high.s(), -2 * i64::from(i32::MAX));
        assert_eq!(low.distance_to(Hex::new(0, 0)), i32::MAX);
        assert_eq!(low.distance_to(high), i32::MAX);
        assert_eq!(Hex::new(i32::MAX, 0).distance_to(Hex::new(i32::MAX - 2, 1)), 2);
        assert_eq!(high.neighbors().len(), 6);
    }

    #[test]
    fn test_neighbors() {
        let center = Hex::new(3, 3);
        let neighbors = center.neighbors();
        assert_eq!(neighbors.len(), 6);
        for n in neighbors {
            assert_eq!(center.distance_to(n), 1);
            assert_eq!(i64::from(n.q) + i64::from(n.r) + n.s(), 0);
        }
        assert!(neighbors.contains(&Hex::new(2, 4)));
        assert!(!neighbors.contains(&Hex::new(2, 2))); // distance 2 diagonal
    }

    #[test]
    fn test_hex_ring() {
        let center = Hex::new(0, 0);
        assert_eq!(center.ring(0).count(), 0);

        let ring1: Vec<_> = center.ring(1).collect();
        assert_eq!(ring1.len(), 6);
        for dir in 0..6 {
            assert!(ring1.contains(&center.neighbor(dir)));
        }

        let ring2: Vec<_> = center.ring(2).collect();
        assert_eq!(ring2.len(), 12);
        assert!(ring2.iter().all(|h| center.distance_to(*h) == 2));
    }

    #[test]
    fn test_key_parse() {
        let hex: Hex = "3,-2".parse().unwrap();
        assert_eq!(hex, Hex::new(3, -2));
        assert_eq!(hex.to_string(), "3,-2");
        assert_eq!(" 1, 4".parse::<Hex>().unwrap(), Hex::new(1, 4));

        assert!(matches!("3-2".parse::<Hex>(), Err(EngineError::InvalidHexKey(_))));
        assert!(matches!("a,1".parse::<Hex>(), Err(EngineError::InvalidHexKey(_))));
    }
}
