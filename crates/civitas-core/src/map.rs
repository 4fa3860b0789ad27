use civitas_protocol::{Position, Terrain};
use rand::Rng;

use crate::GameRng;

/// Rectangular terrain grid, row-major. Bounds are fixed for the session.
#[derive(Clone, Debug)]
pub struct GameMap {
    width: u32,
    height: u32,
    tiles: Vec<Terrain>,
}

impl GameMap {
    pub fn filled(width: u32, height: u32, terrain: Terrain) -> Self {
        Self {
            width,
            height,
            tiles: vec![terrain; (width as usize) * (height as usize)],
        }
    }

    /// Uniform terrain draw per tile, in row-major order.
    pub fn generate(width: u32, height: u32, rng: &mut GameRng) -> Self {
        let len = (width as usize) * (height as usize);
        let tiles = (0..len)
            .map(|_| Terrain::ALL[rng.gen_range(0..Terrain::ALL.len())])
            .collect();
        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn center(&self) -> Position {
        Position::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.index_of(pos).is_some()
    }

    /// Pull `pos` back onto the grid along each axis independently.
    pub fn clamp(&self, pos: Position) -> Position {
        let max_x = self.width.saturating_sub(1) as i32;
        let max_y = self.height.saturating_sub(1) as i32;
        Position::new(pos.x.clamp(0, max_x), pos.y.clamp(0, max_y))
    }

    pub fn terrain_at(&self, pos: Position) -> Option<Terrain> {
        self.index_of(pos).and_then(|i| self.tiles.get(i).copied())
    }

    pub fn set_terrain(&mut self, pos: Position, terrain: Terrain) -> bool {
        let Some(tile) = self.index_of(pos).and_then(|i| self.tiles.get_mut(i)) else {
            return false;
        };
        *tile = terrain;
        true
    }

    fn index_of(&self, pos: Position) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let (x, y) = (pos.x as u32, pos.y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_positions_on_grid() {
        let map = GameMap::filled(20, 15, Terrain::Plains);
        assert_eq!(map.clamp(Position::new(-1, 7)), Position::new(0, 7));
        assert_eq!(map.clamp(Position::new(20, 15)), Position::new(19, 14));
        assert_eq!(map.center(), Position::new(10, 7));
    }

    #[test]
    fn terrain_lookup_rejects_out_of_bounds() {
        let mut map = GameMap::filled(3, 2, Terrain::Ocean);
        assert!(map.set_terrain(Position::new(2, 1), Terrain::Hills));
        assert_eq!(map.terrain_at(Position::new(2, 1)), Some(Terrain::Hills));
        assert_eq!(map.terrain_at(Position::new(3, 0)), None);
        assert!(!map.set_terrain(Position::new(0, -1), Terrain::Hills));
    }

    #[test]
    fn generation_is_seed_stable() {
        let a = GameMap::generate(8, 8, &mut GameRng::seed_from_u64(11));
        let b = GameMap::generate(8, 8, &mut GameRng::seed_from_u64(11));
        assert_eq!(a.tiles, b.tiles);
    }
}
