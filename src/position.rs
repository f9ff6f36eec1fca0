use crate::ParsePositionError;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// All eight surrounding positions, diagonals included. Bounds are not checked.
    pub fn neighbors(&self) -> impl Iterator<Item = Position> + '_ {
        (-1..=1).flat_map(move |dy| {
            (-1..=1).filter_map(move |dx| {
                if dx == 0 && dy == 0 {
                    None
                } else {
                    Some(Position::new(self.x + dx, self.y + dy))
                }
            })
        })
    }

    /// The four orthogonal positions in flood order: left, right, up, down.
    pub fn orthogonal(&self) -> [Position; 4] {
        [
            Position::new(self.x - 1, self.y),
            Position::new(self.x + 1, self.y),
            Position::new(self.x, self.y - 1),
            Position::new(self.x, self.y + 1),
        ]
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError(s.to_string());
        let (x, y) = s.split_once(',').ok_or_else(err)?;
        let x = x.trim().parse().map_err(|_| err())?;
        let y = y.trim().parse().map_err(|_| err())?;
        Ok(Position::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_creation() {
        let pos = Position::new(5, 10);
        assert_eq!(pos.x, 5);
        assert_eq!(pos.y, 10);
    }

    #[test]
    fn test_neighbors() {
        let pos = Position::new(1, 1);
        let neighbors: Vec<Position> = pos.neighbors().collect();

        assert_eq!(neighbors.len(), 8);
        assert!(neighbors.contains(&Position::new(0, 0))); // Top-left
        assert!(neighbors.contains(&Position::new(1, 0))); // Top
        assert!(neighbors.contains(&Position::new(2, 0))); // Top-right
        assert!(neighbors.contains(&Position::new(0, 1))); // Left
        assert!(neighbors.contains(&Position::new(2, 1))); // Right
        assert!(neighbors.contains(&Position::new(0, 2))); // Bottom-left
        assert!(neighbors.contains(&Position::new(1, 2))); // Bottom
        assert!(neighbors.contains(&Position::new(2, 2))); // Bottom-right
        assert!(!neighbors.contains(&pos));
    }

    #[test]
    fn test_orthogonal_order() {
        let pos = Position::new(3, 3);
        assert_eq!(
            pos.orthogonal(),
            [
                Position::new(2, 3),
                Position::new(4, 3),
                Position::new(3, 2),
                Position::new(3, 4),
            ]
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("3,4".parse::<Position>(), Ok(Position::new(3, 4)));
        assert_eq!(" 0 , 12 ".parse::<Position>(), Ok(Position::new(0, 12)));
        assert!("3".parse::<Position>().is_err());
        assert!("a,b".parse::<Position>().is_err());
    }
}
