//! Registry of independent courts
//!
//! A fixed number of numbered slots, one of which is selected. Lifecycle
//! operations (create, destroy, save, load) act on the selected slot; the
//! tick driver advances every occupied slot in index order.

use std::path::Path;

use crate::error::SlotError;
use crate::persistence::Snapshot;
use crate::settings::CourtConfig;
use crate::sim::{Court, CourtEvent};

/// Maximum number of simultaneously active courts
pub const MAX_SLOTS: usize = 4;

#[derive(Debug)]
pub struct CourtSlots {
    slots: [Option<Court>; MAX_SLOTS],
    selected: Option<usize>,
}

impl Default for CourtSlots {
    fn default() -> Self {
        Self::new()
    }
}

impl CourtSlots {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
            selected: None,
        }
    }

    /// Make `index` the target of lifecycle operations
    pub fn select(&mut self, index: usize) -> Result<(), SlotError> {
        if index >= MAX_SLOTS {
            log::warn!("Rejected selection of slot {}", index);
            return Err(SlotError::OutOfRange {
                index,
                max: MAX_SLOTS,
            });
        }
        self.selected = Some(index);
        Ok(())
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn get(&self, index: usize) -> Option<&Court> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Indices of slots holding a court
    pub fn occupied(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|_| i))
    }

    /// Build a fresh court in the selected slot
    pub fn create(&mut self, config: &CourtConfig) -> Result<usize, SlotError> {
        let index = self.free_selected()?;
        let court = config.build()?;
        self.slots[index] = Some(court);
        log::info!("Created court in slot {} (seed {})", index, config.seed);
        Ok(index)
    }

    /// Remove the selected slot's court and hand it back
    pub fn destroy(&mut self) -> Result<Court, SlotError> {
        let index = self.selected.ok_or(SlotError::NoneSelected)?;
        let court = self.slots[index].take().ok_or(SlotError::Empty(index))?;
        log::info!("Destroyed court in slot {}", index);
        Ok(court)
    }

    /// Snapshot the selected court to `path`, then remove it
    ///
    /// The court stays in its slot if writing fails.
    pub fn save_and_destroy(&mut self, path: &Path) -> Result<Court, SlotError> {
        let index = self.selected.ok_or(SlotError::NoneSelected)?;
        let court = self.slots[index].as_ref().ok_or(SlotError::Empty(index))?;
        Snapshot::capture(court).save(path)?;
        log::info!("Saved court from slot {} to {}", index, path.display());
        self.destroy()
    }

    /// Restore a snapshot from `path` into the selected slot
    pub fn load_into(&mut self, path: &Path) -> Result<usize, SlotError> {
        let index = self.free_selected()?;
        let court = Snapshot::load(path)?.restore()?;
        self.slots[index] = Some(court);
        log::info!("Loaded court into slot {} from {}", index, path.display());
        Ok(index)
    }

    /// Tick every occupied slot once
    pub fn advance_all(&mut self) -> Vec<(usize, Vec<CourtEvent>)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_mut().map(|court| (i, court.advance())))
            .collect()
    }

    fn free_selected(&self) -> Result<usize, SlotError> {
        let index = self.selected.ok_or(SlotError::NoneSelected)?;
        if self.slots[index].is_some() {
            log::warn!("Slot {} is already occupied", index);
            return Err(SlotError::Occupied(index));
        }
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_out_of_range() {
        let mut slots = CourtSlots::new();
        assert!(matches!(
            slots.select(MAX_SLOTS),
            Err(SlotError::OutOfRange { index: 4, max: 4 })
        ));
        assert_eq!(slots.selected(), None);
    }

    #[test]
    fn test_lifecycle_requires_selection() {
        let mut slots = CourtSlots::new();
        assert!(matches!(
            slots.create(&CourtConfig::default()),
            Err(SlotError::NoneSelected)
        ));
        assert!(matches!(slots.destroy(), Err(SlotError::NoneSelected)));
    }

    #[test]
    fn test_create_destroy() {
        let mut slots = CourtSlots::new();
        slots.select(2).unwrap();
        assert_eq!(slots.create(&CourtConfig::default()).unwrap(), 2);
        assert!(matches!(
            slots.create(&CourtConfig::default()),
            Err(SlotError::Occupied(2))
        ));
        assert_eq!(slots.occupied().collect::<Vec<_>>(), vec![2]);

        slots.destroy().unwrap();
        assert!(slots.get(2).is_none());
        assert!(matches!(slots.destroy(), Err(SlotError::Empty(2))));
    }

    #[test]
    fn test_create_rejects_bad_config() {
        let mut slots = CourtSlots::new();
        slots.select(0).unwrap();
        let config = CourtConfig {
            width: 0,
            ..Default::default()
        };
        assert!(matches!(slots.create(&config), Err(SlotError::Config(_))));
        assert!(slots.get(0).is_none());
    }

    #[test]
    fn test_courts_advance_independently() {
        let mut slots = CourtSlots::new();
        slots.select(0).unwrap();
        slots.create(&CourtConfig::with_seed(1)).unwrap();
        slots.select(3).unwrap();
        slots.create(&CourtConfig::with_seed(2)).unwrap();

        for _ in 0..10 {
            let ticked: Vec<usize> = slots.advance_all().into_iter().map(|(i, _)| i).collect();
            assert_eq!(ticked, vec![0, 3]);
        }
        assert_eq!(slots.get(0).unwrap().ticks(), 10);
        assert_eq!(slots.get(3).unwrap().ticks(), 10);
    }

    #[test]
    fn test_save_and_load_between_slots() {
        let path = std::env::temp_dir().join(format!("ball_court_slot_{}.json", std::process::id()));
        let mut slots = CourtSlots::new();
        slots.select(1).unwrap();
        slots.create(&CourtConfig::with_seed(5)).unwrap();
        for _ in 0..30 {
            slots.advance_all();
        }

        let saved = slots.save_and_destroy(&path).unwrap();
        assert!(slots.get(1).is_none());

        slots.select(0).unwrap();
        slots.load_into(&path).unwrap();
        let loaded = slots.get(0).unwrap();
        assert_eq!(loaded.ticks(), 30);
        assert_eq!(loaded.ball(), saved.ball());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_failed_save_keeps_court() {
        let path = std::env::temp_dir()
            .join("ball_court_no_such_dir")
            .join("slot.json");
        let mut slots = CourtSlots::new();
        slots.select(0).unwrap();
        slots.create(&CourtConfig::default()).unwrap();
        assert!(matches!(
            slots.save_and_destroy(&path),
            Err(SlotError::Persistence(_))
        ));
        assert!(slots.get(0).is_some());
    }
}
