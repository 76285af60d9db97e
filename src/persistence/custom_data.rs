use super::codec::{decode_line, encode_line};
use crate::error::PilotError;
use crate::hardware::ConfigStore;

/// The decoded content of a configuration store, one entry per text line.
///
/// Lines that are not `KEY=VALUE` records are carried along untouched so that a rewrite
/// never drops text it does not understand.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CustomData {
    lines: Vec<String>,
}

impl CustomData {
    pub fn parse(blob: &str) -> Self { Self { lines: blob.lines().map(String::from).collect() } }

    /// Reads and decodes the whole store.
    pub fn read(store: &dyn ConfigStore) -> Result<Self, PilotError> {
        Ok(Self::parse(&store.read_all()?))
    }

    /// Reads the store, applies `f` and writes the whole blob back.
    pub fn update<F>(store: &mut dyn ConfigStore, f: F) -> Result<(), PilotError>
    where F: FnOnce(&mut CustomData) {
        let mut data = Self::read(store)?;
        f(&mut data);
        store.write_all(&data.render())?;
        Ok(())
    }

    pub fn render(&self) -> String { self.lines.join("\n") }

    /// All records in file order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.lines.iter().filter_map(|l| decode_line(l))
    }

    /// All values stored under `key`, in file order.
    pub fn values<'a>(&'a self, key: &str) -> impl Iterator<Item = &'a str> {
        self.entries().filter(move |(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn first(&self, key: &str) -> Option<&str> { self.values(key).next() }

    fn is_key(line: &str, key: &str) -> bool { decode_line(line).is_some_and(|(k, _)| k == key) }

    /// Writes a single value.
    ///
    /// An empty value removes every line of `key`, an existing key has its first line
    /// replaced and a new key is appended.
    pub fn set(&mut self, key: &str, value: &str) {
        if value.is_empty() {
            self.remove(key);
        } else if let Some(line) = self.lines.iter_mut().find(|l| Self::is_key(l, key)) {
            *line = encode_line(key, value);
        } else {
            self.lines.push(encode_line(key, value));
        }
    }

    /// Replaces every line of `key` with one line per value, appended at the end.
    pub fn set_all<I, S>(&mut self, key: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.remove(key);
        self.lines.extend(values.into_iter().map(|v| encode_line(key, v.as_ref())));
    }

    pub fn remove(&mut self, key: &str) { self.lines.retain(|l| !Self::is_key(l, key)); }
}
