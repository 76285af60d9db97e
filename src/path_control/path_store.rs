use super::{Path, RecordingBuffer, RecordingState};
use crate::error::PilotError;
use crate::hardware::ConfigStore;
use crate::persistence::{CustomData, decode_point, encode_point};
use crate::util::Point;
use crate::{info, log, warn};
use itertools::Itertools;

/// Owner of the recorded paths, the home point and the recording in progress.
///
/// Paths keep their insertion order, which is the order "fly all" visits them in.
/// Names are `Path<index>`. Indices only grow: a deleted path's index is not handed
/// out again, and the survivors are not renumbered.
#[derive(Debug, Default)]
pub struct PathStore {
    home: Point,
    paths: Vec<Path>,
    buffer: RecordingBuffer,
    recording: RecordingState,
    /// Lowest index never handed out or loaded.
    issued: usize,
}

impl PathStore {
    /// Prefix of every generated path name.
    pub const PATH_PREFIX: &'static str = "Path";
    /// Key of the home point record.
    pub const HOME_VAR: &'static str = "HOME";
    /// Key of the live path count, kept for readers of the older format.
    pub const PATH_COUNT_VAR: &'static str = "PathCount";
    /// Key of the comma separated list of live path names.
    pub const PATH_NAMES_VAR: &'static str = "PathNames";

    pub fn new() -> Self { Self::default() }

    pub fn home(&self) -> Point { self.home }
    pub fn paths(&self) -> &[Path] { &self.paths }
    pub fn get(&self, name: &str) -> Option<&Path> { self.paths.iter().find(|p| p.name() == name) }
    pub fn contains(&self, name: &str) -> bool { self.get(name).is_some() }
    pub fn names(&self) -> impl Iterator<Item = &str> { self.paths.iter().map(Path::name) }
    pub fn len(&self) -> usize { self.paths.len() }
    pub fn is_empty(&self) -> bool { self.paths.is_empty() }
    pub fn buffer(&self) -> &RecordingBuffer { &self.buffer }
    pub fn recording_state(&self) -> RecordingState { self.recording }
    pub fn is_recording(&self) -> bool { self.recording == RecordingState::On }

    /// Starts (or keeps) recording. The buffer is left as it is.
    pub fn begin_recording(&mut self) {
        if !self.is_recording() {
            info!("Started recording path.");
        }
        self.recording = RecordingState::On;
    }

    /// Offers a position sample, stored only while recording and only if it moved.
    pub fn record_sample(&mut self, pos: Point) -> bool {
        self.is_recording() && self.buffer.push(pos)
    }

    /// Stops recording and commits a non-empty buffer as a new path.
    ///
    /// # Returns
    /// The name of the committed path, or `None` if nothing was recorded. In that case
    /// the store is not written.
    ///
    /// # Errors
    /// [`PilotError::Storage`] if the new path could not be persisted. The path stays
    /// in memory.
    pub fn stop_recording(
        &mut self,
        store: &mut dyn ConfigStore,
    ) -> Result<Option<String>, PilotError> {
        self.recording = RecordingState::Off;
        if self.buffer.is_empty() {
            log!("Stopped recording, nothing was recorded.");
            return Ok(None);
        }
        let idx = self.next_index();
        self.issued = idx + 1;
        let name = format!("{}{idx}", Self::PATH_PREFIX);
        let path = Path::new(name.clone(), self.buffer.take());
        info!("Stopped recording path: {name} with {} waypoints.", path.len());
        let encoded = path.waypoints().iter().map(encode_point).collect_vec();
        self.paths.push(path);
        let (count, names) = self.index_records();
        CustomData::update(store, |data| {
            data.set_all(&name, &encoded);
            data.set(Self::PATH_COUNT_VAR, &count);
            data.set(Self::PATH_NAMES_VAR, &names);
        })?;
        Ok(Some(name))
    }

    /// Removes a path from memory and from the store.
    ///
    /// # Errors
    /// [`PilotError::NotFound`] if no path has this name, [`PilotError::Storage`] if the
    /// removal could not be persisted.
    pub fn delete(&mut self, name: &str, store: &mut dyn ConfigStore) -> Result<(), PilotError> {
        let Some(idx) = self.paths.iter().position(|p| p.name() == name) else {
            return Err(PilotError::NotFound(name.to_string()));
        };
        self.paths.remove(idx);
        info!("Deleted path: {name}");
        let (count, names) = self.index_records();
        CustomData::update(store, |data| {
            data.set(name, "");
            data.set(Self::PATH_COUNT_VAR, &count);
            data.set(Self::PATH_NAMES_VAR, &names);
        })
    }

    /// Forgets home, all paths and the recording buffer. The store is left untouched.
    pub fn wipe_all(&mut self) {
        self.home = Point::zero();
        self.paths.clear();
        self.buffer.clear();
        info!("All data wiped.");
    }

    /// Sets and persists the home point.
    ///
    /// # Errors
    /// [`PilotError::Storage`] if the store could not be written.
    pub fn save_home(&mut self, pos: Point, store: &mut dyn ConfigStore) -> Result<(), PilotError> {
        self.home = pos;
        info!("Home location set to: {pos}");
        CustomData::update(store, |data| data.set(Self::HOME_VAR, &encode_point(&pos)))
    }

    /// Replaces home and all paths with what the store holds.
    ///
    /// Unreadable points are loaded as the origin; the errors are handed back so the
    /// caller can show them.
    ///
    /// # Errors
    /// [`PilotError::Storage`] if the store could not be read at all.
    pub fn load(&mut self, store: &dyn ConfigStore) -> Result<Vec<PilotError>, PilotError> {
        let data = CustomData::read(store)?;
        let mut recovered = Vec::new();

        let names: Vec<String> = if let Some(list) = data.first(Self::PATH_NAMES_VAR) {
            list.split(',').map(str::trim).filter(|n| !n.is_empty()).map(String::from).collect()
        } else {
            let count = data.first(Self::PATH_COUNT_VAR).map_or(0, |raw| {
                raw.trim().parse::<usize>().unwrap_or_else(|_| {
                    warn!("Malformed path count '{raw}', assuming no paths.");
                    recovered.push(PilotError::Parse(raw.to_string()));
                    0
                })
            });
            (0..count).map(|i| format!("{}{i}", Self::PATH_PREFIX)).collect()
        };

        let mut decode = |raw: &str| {
            decode_point(raw).unwrap_or_else(|e| {
                warn!("{e}, using origin instead.");
                recovered.push(e);
                Point::zero()
            })
        };
        self.home = data.first(Self::HOME_VAR).map_or_else(Point::zero, &mut decode);

        self.paths.clear();
        self.issued =
            names.iter().filter_map(|n| Self::index_of(n)).map(|i| i + 1).max().unwrap_or(0);
        for name in names.into_iter().unique() {
            let waypoints = data.values(&name).map(&mut decode).collect_vec();
            if waypoints.is_empty() {
                warn!("No waypoints stored for {name}, skipping it.");
                continue;
            }
            self.paths.push(Path::new(name, waypoints));
        }
        log!("Loaded {} paths, home is {}.", self.paths.len(), self.home);
        Ok(recovered)
    }

    /// The smallest index above every one issued so far whose name is free.
    fn next_index(&self) -> usize {
        let start = self.issued.max(self.paths.len());
        (start..).find(|i| !self.contains(&format!("{}{i}", Self::PATH_PREFIX))).unwrap_or(start)
    }

    fn index_of(name: &str) -> Option<usize> {
        name.strip_prefix(Self::PATH_PREFIX)?.parse().ok()
    }

    fn index_records(&self) -> (String, String) {
        (self.paths.len().to_string(), self.names().join(","))
    }
}
