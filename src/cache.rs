//! This module provides a local, file-backed store for activities

use std::path::PathBuf;
use std::path::Path;
use std::error::Error;

use serde::{Deserialize, Serialize};
use async_trait::async_trait;
use chrono::NaiveDate;

use crate::traits::ActivitySource;
use crate::traits::SearchFilter;
use crate::Activity;
#[cfg(any(test, feature = "mock_behaviour"))]
use std::sync::{Arc, Mutex};
#[cfg(any(test, feature = "mock_behaviour"))]
use crate::mock_behaviour::MockBehaviour;


/// An activity source that stores its activities in a local file
#[derive(Debug)]
pub struct ActivityCache {
    backing_file: PathBuf,
    data: CachedData,

    #[cfg(any(test, feature = "mock_behaviour"))]
    mock_behaviour: Option<Arc<Mutex<MockBehaviour>>>,
}

#[derive(Default, Debug, PartialEq, Serialize, Deserialize)]
struct CachedData {
    activities: Vec<Activity>,
}

impl ActivityCache {
    /// Initialize a cache from the content of a valid backing file if it exists.
    /// Returns an error otherwise
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let data = match std::fs::File::open(path) {
            Err(err) => {
                return Err(format!("Unable to open file {:?}: {}", path, err).into());
            },
            Ok(file) => serde_json::from_reader(file)?,
        };

        Ok(Self{
            backing_file: PathBuf::from(path),
            data,
            #[cfg(any(test, feature = "mock_behaviour"))]
            mock_behaviour: None,
        })
    }

    /// Initialize a cache with the default contents
    pub fn new(path: &Path) -> Self {
        Self{
            backing_file: PathBuf::from(path),
            data: CachedData::default(),
            #[cfg(any(test, feature = "mock_behaviour"))]
            mock_behaviour: None,
        }
    }

    /// Set a mock behaviour, that can make queries fail on demand
    #[cfg(any(test, feature = "mock_behaviour"))]
    pub fn set_mock_behaviour(&mut self, mock_behaviour: Option<Arc<Mutex<MockBehaviour>>>) {
        self.mock_behaviour = mock_behaviour;
    }

    /// Store the current cache to its backing file
    pub fn save_to_file(&self) -> Result<(), Box<dyn Error>> {
        let path = &self.backing_file;
        let file = std::fs::File::create(path)
            .map_err(|err| format!("Unable to save file {:?}: {}", path, err))?;

        serde_json::to_writer(file, &self.data)?;
        log::debug!("Saved {} activities to {:?}", self.data.activities.len(), path);
        Ok(())
    }

    pub fn backing_file(&self) -> &Path {
        &self.backing_file
    }

    pub fn add_activity(&mut self, activity: Activity) {
        self.data.activities.push(activity);
    }

    /// Every activity of this cache, in insertion order
    pub fn activities(&self) -> &[Activity] {
        &self.data.activities
    }

    #[cfg(any(test, feature = "mock_behaviour"))]
    fn check_mock_behaviour(&self) -> Result<(), Box<dyn Error>> {
        match &self.mock_behaviour {
            None => Ok(()),
            Some(mb) => match mb.lock() {
                Ok(mut mb) => mb.can_find_by_date_range(),
                Err(_) => Err("Mock behaviour is poisoned".into()),
            },
        }
    }
}

#[async_trait]
impl ActivitySource for ActivityCache {
    async fn find_by_date_range(&self, start: NaiveDate, end: NaiveDate, filter: &SearchFilter) -> Result<Vec<Activity>, Box<dyn Error>> {
        #[cfg(any(test, feature = "mock_behaviour"))]
        self.check_mock_behaviour()?;

        let mut found: Vec<Activity> = self.data.activities.iter()
            .filter(|act| start <= act.date() && act.date() <= end)
            .filter(|act| filter.matches(act))
            .cloned()
            .collect();
        // Stable sort: activities that start at the same time keep their insertion order
        found.sort_by_key(|act| *act.start());

        log::debug!("Found {} activities between {} and {}", found.len(), start, end);
        Ok(found)
    }
}
