//! A player's board: the ordered line of units that fights.

use serde::{Deserialize, Serialize};

use crate::core::GameError;
use crate::units::UnitInstance;

/// Ordered units plus the base slot count.
///
/// The effective limit is the base plus every `BoardLimitBonus` on the
/// board, so it can change as units come and go.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    units: Vec<UnitInstance>,
    base_limit: usize,
}

impl Board {
    #[must_use]
    pub fn new(base_limit: usize) -> Self {
        Self {
            units: Vec::new(),
            base_limit,
        }
    }

    #[must_use]
    pub fn units(&self) -> &[UnitInstance] {
        &self.units
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&UnitInstance> {
        self.units.get(slot)
    }

    /// Current slot count.
    #[must_use]
    pub fn limit(&self) -> usize {
        let bonus: i64 = self
            .units
            .iter()
            .map(|u| i64::from(u.modifiers.board_limit_bonus))
            .sum();
        let limit = i64::try_from(self.base_limit).unwrap_or(i64::MAX).saturating_add(bonus);
        usize::try_from(limit.max(0)).unwrap_or(0)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.units.len() >= self.limit()
    }

    /// Add a unit at the back.
    pub fn push(&mut self, unit: UnitInstance) -> Result<(), GameError> {
        if self.is_full() {
            return Err(GameError::BoardFull { limit: self.limit() });
        }
        self.units.push(unit);
        Ok(())
    }

    pub fn remove(&mut self, slot: usize) -> Result<UnitInstance, GameError> {
        if slot >= self.units.len() {
            return Err(GameError::InvalidBoardSlot(slot));
        }
        Ok(self.units.remove(slot))
    }

    /// Replace two slots with one unit at the back of the line.
    ///
    /// The fused unit takes no extra slot, so this never fails on a full board.
    pub fn fuse(&mut self, first: usize, second: usize, result: UnitInstance) -> Result<(), GameError> {
        if first == second {
            return Err(GameError::SameSlot);
        }
        let len = self.units.len();
        if first >= len {
            return Err(GameError::InvalidBoardSlot(first));
        }
        if second >= len {
            return Err(GameError::InvalidBoardSlot(second));
        }
        self.units.remove(first.max(second));
        self.units.remove(first.min(second));
        self.units.push(result);
        Ok(())
    }

    pub fn move_to_back(&mut self, slot: usize) -> Result<(), GameError> {
        let unit = self.remove(slot)?;
        self.units.push(unit);
        Ok(())
    }

    /// Swap in the survivors of a battle.
    pub fn replace_units(&mut self, units: Vec<UnitInstance>) {
        self.units = units;
    }

    /// Drop units past the current limit from the back. Returns them.
    pub fn truncate_to_limit(&mut self) -> Vec<UnitInstance> {
        let mut removed = Vec::new();
        while self.units.len() > self.limit() {
            if let Some(unit) = self.units.pop() {
                removed.push(unit);
            }
        }
        removed
    }

    /// First two slots holding units with the same name.
    #[must_use]
    pub fn find_duplicate(&self) -> Option<(usize, usize)> {
        self.units.iter().enumerate().find_map(|(i, unit)| {
            self.units[i + 1..]
                .iter()
                .position(|other| other.name == unit.name)
                .map(|offset| (i, i + 1 + offset))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Modifiers, UnitClass};

    fn unit(name: &str) -> UnitInstance {
        UnitInstance::new(name, UnitClass::Tech, 1, 1)
    }

    fn processor() -> UnitInstance {
        unit("Processor").with_modifiers(Modifiers { board_limit_bonus: 1, ..Modifiers::default() })
    }

    #[test]
    fn test_push_respects_limit() {
        let mut board = Board::new(2);
        board.push(unit("A")).unwrap();
        board.push(unit("B")).unwrap();
        assert!(board.is_full());
        assert_eq!(board.push(unit("C")), Err(GameError::BoardFull { limit: 2 }));
    }

    #[test]
    fn test_limit_bonus() {
        let mut board = Board::new(2);
        board.push(processor()).unwrap();
        assert_eq!(board.limit(), 3);
        board.push(unit("A")).unwrap();
        board.push(unit("B")).unwrap();
        assert!(board.is_full());

        // Losing the processor shrinks the limit back to the base.
        board.remove(0).unwrap();
        assert_eq!(board.limit(), 2);
        assert_eq!(board.truncate_to_limit().len(), 0);
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_truncate_drops_from_back() {
        let mut board = Board::new(1);
        board.replace_units(vec![unit("A"), unit("B"), unit("C")]);
        let removed = board.truncate_to_limit();
        assert_eq!(board.units()[0].name, "A");
        assert_eq!(removed.len(), 2);
    }

    #[test]
    fn test_fuse_appends_result() {
        let mut board = Board::new(5);
        board.replace_units(vec![unit("A"), unit("B"), unit("C")]);
        board.fuse(2, 0, unit("AC")).unwrap();
        let names: Vec<_> = board.units().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["B", "AC"]);
        assert_eq!(board.fuse(1, 1, unit("X")), Err(GameError::SameSlot));
        assert_eq!(board.fuse(0, 7, unit("X")), Err(GameError::InvalidBoardSlot(7)));
    }

    #[test]
    fn test_move_and_duplicates() {
        let mut board = Board::new(5);
        board.replace_units(vec![unit("A"), unit("B"), unit("A")]);
        assert_eq!(board.find_duplicate(), Some((0, 2)));
        board.move_to_back(0).unwrap();
        assert_eq!(board.units()[0].name, "B");
        assert_eq!(board.find_duplicate(), Some((1, 2)));
        assert_eq!(board.move_to_back(9), Err(GameError::InvalidBoardSlot(9)));
    }
}
