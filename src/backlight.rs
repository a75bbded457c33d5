use std::fs::File;
use std::fs::OpenOptions;
use std::io::prelude::*;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::Error;

pub const MAX_BRIGHTNESS: &str = "max_brightness";
pub const BRIGHTNESS: &str = "brightness";

/// Named integer values exposed by a backlight device.
pub trait BacklightDevice {
    /// Read a backing value such as `max_brightness` or `brightness`
    fn read_value(&self, name: &str) -> Result<i64, Error>;
    /// Persist a backing value
    fn write_value(&mut self, name: &str, value: i64) -> Result<(), Error>;
}

/// A device class directory under `/sys/class/backlight` (or any other root).
pub struct Sysfs {
    path: PathBuf,
}

impl Sysfs {
    pub fn new(root: &Path, class: &str) -> Self {
        Sysfs {
            path: root.join(class),
        }
    }

    fn file(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    fn get_contents(&self, path: &Path, target: &mut String) -> std::io::Result<()> {
        let mut file = File::open(path)?;
        file.read_to_string(target)?;
        Ok(())
    }
}

impl BacklightDevice for Sysfs {
    fn read_value(&self, name: &str) -> Result<i64, Error> {
        let path = self.file(name);
        let mut content = String::new();
        self.get_contents(&path, &mut content)
            .map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
        let value = content.trim().parse().map_err(|source| Error::Parse {
            path: path.clone(),
            content: content.clone(),
            source,
        })?;
        trace!(path = %path.display(), value, "read backing value");
        Ok(value)
    }

    fn write_value(&mut self, name: &str, value: i64) -> Result<(), Error> {
        let path = self.file(name);
        let io_err = |source| Error::Io {
            path: path.clone(),
            source,
        };
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(io_err)?;
        write!(file, "{}", value).map_err(io_err)?;
        trace!(path = %path.display(), value, "wrote backing value");
        Ok(())
    }
}
