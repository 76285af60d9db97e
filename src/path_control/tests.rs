use super::{PathStore, RecordingBuffer, RecordingState};
use crate::error::PilotError;
use crate::hardware::mock::MemoryStore;
use crate::persistence::CustomData;
use crate::util::Point;

fn record(store: &mut PathStore, cfg: &mut MemoryStore, points: &[Point]) -> Option<String> {
    store.begin_recording();
    for p in points {
        store.record_sample(*p);
    }
    store.stop_recording(cfg).unwrap()
}

#[test]
fn test_buffer_drops_consecutive_duplicates() {
    let mut buffer = RecordingBuffer::default();
    let a = Point::new(1.0, 2.0, 3.0);
    let b = Point::new(1.0, 2.0, 4.0);
    assert!(buffer.push(a));
    assert!(!buffer.push(a));
    assert!(buffer.push(b));
    assert!(buffer.push(a));
    assert_eq!(buffer.samples(), &[a, b, a]);
    assert_eq!(buffer.take(), vec![a, b, a]);
    assert!(buffer.is_empty());
}

#[test]
fn test_samples_ignored_while_not_recording() {
    let mut store = PathStore::new();
    assert!(!store.record_sample(Point::new(1.0, 0.0, 0.0)));
    assert!(store.buffer().is_empty());
    store.begin_recording();
    assert_eq!(store.recording_state(), RecordingState::On);
    assert!(store.record_sample(Point::new(1.0, 0.0, 0.0)));
    assert!(!store.record_sample(Point::new(1.0, 0.0, 0.0)));
    assert_eq!(store.buffer().len(), 1);
}

#[test]
fn test_empty_recording_writes_nothing() {
    let mut store = PathStore::new();
    let mut cfg = MemoryStore::default();
    store.begin_recording();
    assert_eq!(store.stop_recording(&mut cfg).unwrap(), None);
    assert!(!store.is_recording());
    assert!(store.is_empty());
    assert_eq!(cfg.writes, 0);
}

#[test]
fn test_commit_persists_path_and_index() {
    let mut store = PathStore::new();
    let mut cfg = MemoryStore::with("unrelated line");
    let pts = [Point::new(0.0, 0.0, 0.0), Point::new(10.0, 0.0, 0.0), Point::new(20.0, 0.5, -1.0)];
    assert_eq!(record(&mut store, &mut cfg, &pts), Some("Path0".to_string()));
    assert_eq!(cfg.writes, 1);

    let data = CustomData::parse(&cfg.blob);
    assert_eq!(data.values("Path0").count(), 3);
    assert_eq!(data.first(PathStore::PATH_COUNT_VAR), Some("1"));
    assert_eq!(data.first(PathStore::PATH_NAMES_VAR), Some("Path0"));
    assert!(cfg.blob.starts_with("unrelated line"));

    let mut reloaded = PathStore::new();
    assert!(reloaded.load(&cfg).unwrap().is_empty());
    assert_eq!(reloaded.get("Path0").unwrap().waypoints(), &pts);
}

#[test]
fn test_deleted_path_stays_deleted() {
    let mut store = PathStore::new();
    let mut cfg = MemoryStore::default();
    for i in 0..3 {
        let p = f64::from(i);
        record(&mut store, &mut cfg, &[Point::new(p, p, p), Point::new(p + 1.0, p, p)]);
    }
    store.delete("Path1", &mut cfg).unwrap();
    assert_eq!(store.names().collect::<Vec<_>>(), ["Path0", "Path2"]);

    let mut reloaded = PathStore::new();
    reloaded.load(&cfg).unwrap();
    assert_eq!(reloaded.names().collect::<Vec<_>>(), ["Path0", "Path2"]);
    assert!(!CustomData::parse(&cfg.blob).values("Path1").any(|_| true));
}

#[test]
fn test_delete_unknown_path() {
    let mut store = PathStore::new();
    let mut cfg = MemoryStore::default();
    let res = store.delete("Path7", &mut cfg);
    assert!(matches!(res, Err(PilotError::NotFound(name)) if name == "Path7"));
    assert_eq!(cfg.writes, 0);
}

#[test]
fn test_names_are_not_reused() {
    let mut store = PathStore::new();
    let mut cfg = MemoryStore::default();
    record(&mut store, &mut cfg, &[Point::new(1.0, 0.0, 0.0)]);
    record(&mut store, &mut cfg, &[Point::new(2.0, 0.0, 0.0)]);
    store.delete("Path0", &mut cfg).unwrap();
    let name = record(&mut store, &mut cfg, &[Point::new(3.0, 0.0, 0.0)]);
    assert_eq!(name.as_deref(), Some("Path2"));
    assert_eq!(store.get("Path1").unwrap().waypoints(), &[Point::new(2.0, 0.0, 0.0)]);
}

#[test]
fn test_trailing_index_is_not_reissued() {
    let mut store = PathStore::new();
    let mut cfg = MemoryStore::default();
    for i in 0..3 {
        record(&mut store, &mut cfg, &[Point::new(f64::from(i), 0.0, 0.0)]);
    }
    store.delete("Path2", &mut cfg).unwrap();
    let name = record(&mut store, &mut cfg, &[Point::new(9.0, 0.0, 0.0)]);
    assert_eq!(name.as_deref(), Some("Path3"));
    assert_eq!(store.names().collect::<Vec<_>>(), ["Path0", "Path1", "Path3"]);

    let mut reloaded = PathStore::new();
    reloaded.load(&cfg).unwrap();
    let next = record(&mut reloaded, &mut cfg, &[Point::new(7.0, 0.0, 0.0)]);
    assert_eq!(next.as_deref(), Some("Path4"));
}

#[test]
fn test_legacy_layout_with_gaps() {
    let cfg = MemoryStore::with(
        "HOME={X:5 Y:6 Z:7}\nPathCount=3\nPath0=1,1,1\nPath0=2,2,2\nPath2=3 3 3",
    );
    let mut store = PathStore::new();
    assert!(store.load(&cfg).unwrap().is_empty());
    assert_eq!(store.home(), Point::new(5.0, 6.0, 7.0));
    assert_eq!(store.names().collect::<Vec<_>>(), ["Path0", "Path2"]);
    assert_eq!(store.get("Path0").unwrap().len(), 2);
}

#[test]
fn test_unreadable_points_load_as_origin() {
    let cfg = MemoryStore::with("HOME=garbage\nPathNames=Path0\nPath0=1,2\nPath0=4,5,6");
    let mut store = PathStore::new();
    let recovered = store.load(&cfg).unwrap();
    assert_eq!(recovered.len(), 2);
    assert!(recovered.iter().all(|e| matches!(e, PilotError::Parse(_))));
    assert_eq!(store.home(), Point::zero());
    assert_eq!(store.get("Path0").unwrap().waypoints(), &[Point::zero(), Point::new(4.0, 5.0, 6.0)]);
}

#[test]
fn test_malformed_count_means_no_paths() {
    let cfg = MemoryStore::with("PathCount=many\nPath0=1,2,3");
    let mut store = PathStore::new();
    let recovered = store.load(&cfg).unwrap();
    assert_eq!(recovered.len(), 1);
    assert!(store.is_empty());
}

#[test]
fn test_home_and_wipe() {
    let mut store = PathStore::new();
    let mut cfg = MemoryStore::default();
    store.save_home(Point::new(-3.5, 0.25, 100.0), &mut cfg).unwrap();
    record(&mut store, &mut cfg, &[Point::new(1.0, 0.0, 0.0)]);
    let before = cfg.blob.clone();

    store.wipe_all();
    assert!(store.is_empty());
    assert_eq!(store.home(), Point::zero());
    assert_eq!(cfg.blob, before);

    store.load(&cfg).unwrap();
    assert_eq!(store.home(), Point::new(-3.5, 0.25, 100.0));
    assert_eq!(store.len(), 1);
}
