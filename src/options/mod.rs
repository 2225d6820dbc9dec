use crate::{Calculator, Reader, E};
use log::debug;
use std::{io, ops::Range, path::Path, time::Instant};

/// The default size of the buffer used with `ReadingStrategy::Buffer`.
pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 32;

/// Defines the way a file is delivered to `Calculator`. Whatever strategy is used, the
/// calculator sees the same bytes in the same order, so digests don't depend on it.
#[derive(Debug, Clone, Default)]
pub enum ReadingStrategy {
    /// The file is read chunk by chunk into a buffer of `Options::buffer_size` bytes, and each
    /// chunk is absorbed before the next one is read.
    #[default]
    Buffer,
    /// The whole file is read into memory and absorbed at once.
    Complete,
    /// The file is mapped into memory with `Reader::mmap()` and the mapped data is absorbed at
    /// once. The reader should support mapping (see `reader::mapping::Mapping`).
    ///
    /// The file must not be truncated by another process while it's mapped: accessing the lost
    /// pages raises `SIGBUS` instead of returning an error.
    MemoryMapped,
    /// Picks one of the strategies above depending on the size of the file. The first range
    /// which contains the size of the file wins. The size is taken from the file already opened
    /// by the reader. Nested scenarios aren't allowed.
    ///
    /// For example, read small files completely and map big ones:
    /// ```
    /// use objsum::ReadingStrategy;
    ///
    /// let strategy = ReadingStrategy::Scenario(vec![
    ///     (0..1024 * 1024, Box::new(ReadingStrategy::Complete)),
    ///     (1024 * 1024..u64::MAX, Box::new(ReadingStrategy::MemoryMapped)),
    /// ]);
    /// ```
    Scenario(Vec<(Range<u64>, Box<ReadingStrategy>)>),
}

impl ReadingStrategy {
    fn resolve(&self, len: u64) -> Result<&ReadingStrategy, E> {
        match self {
            ReadingStrategy::Scenario(scenario) => scenario
                .iter()
                .find_map(|(range, strategy)| {
                    if range.contains(&len) {
                        Some(strategy.as_ref())
                    } else {
                        None
                    }
                })
                .ok_or(E::NoRangeForScenarioStrategy(len)),
            strategy => Ok(strategy),
        }
    }
}

/// Settings of a calculation.
///
/// # Example
///
/// ```no_run
/// use objsum::{reader::mapping::Mapping, Algorithm, Options, ReadingStrategy};
///
/// let calculator = Options::new()
///     .reading_strategy(ReadingStrategy::MemoryMapped)
///     .unwrap()
///     .calculate::<Mapping, _>("/tmp/file.bin")
///     .unwrap();
/// println!("{:?}", calculator.result(Algorithm::Sha256).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    pub(crate) reading_strategy: ReadingStrategy,
    pub(crate) buffer_size: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

impl Options {
    pub fn new() -> Self {
        Self {
            reading_strategy: ReadingStrategy::Buffer,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Sets the reading strategy.
    ///
    /// # Errors
    ///
    /// Returns `E::NestedScenarioStrategy` if a scenario includes another scenario.
    pub fn reading_strategy(&mut self, reading_strategy: ReadingStrategy) -> Result<&mut Self, E> {
        if let ReadingStrategy::Scenario(scenario) = &reading_strategy {
            if scenario
                .iter()
                .any(|(_, strategy)| matches!(strategy.as_ref(), ReadingStrategy::Scenario(..)))
            {
                return Err(E::NestedScenarioStrategy);
            }
        }
        self.reading_strategy = reading_strategy;
        Ok(self)
    }

    /// Sets the size of the buffer for `ReadingStrategy::Buffer`.
    pub fn buffer_size(&mut self, buffer_size: usize) -> Result<&mut Self, E> {
        if buffer_size == 0 {
            return Err(E::InvalidBufferSize);
        }
        self.buffer_size = buffer_size;
        Ok(self)
    }

    /// Opens the file with the reader `R` and passes its content through a new `Calculator` in
    /// one pass.
    ///
    /// # Returns
    ///
    /// - `Result<Calculator, E>`: the calculator fed with the whole content of the file; digests
    ///   can be requested from it.
    ///
    /// # Errors
    ///
    /// - `E::FileOpen` if the file cannot be opened.
    /// - `E::Read` if reading fails; no digests are available in this case.
    /// - `E::NoRangeForScenarioStrategy` if `ReadingStrategy::Scenario` doesn't cover the size
    ///   of the file.
    pub fn calculate<R: Reader, P: AsRef<Path>>(&self, path: P) -> Result<Calculator, E> {
        let now = Instant::now();
        let path = path.as_ref();
        let mut reader = R::bind(path).map_err(|err| E::FileOpen(path.to_path_buf(), err))?;
        let strategy = match &self.reading_strategy {
            ReadingStrategy::Scenario(..) => {
                self.reading_strategy.resolve(reader.size()?)?
            }
            strategy => strategy,
        };
        let mut calculator = Calculator::new();
        match strategy {
            ReadingStrategy::Buffer => {
                let mut buffer = vec![0u8; self.buffer_size];
                loop {
                    let bytes_read = match reader.read(&mut buffer) {
                        Ok(0) => break,
                        Ok(bytes_read) => bytes_read,
                        Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                        Err(err) => return Err(err.into()),
                    };
                    calculator.absorb(&buffer[..bytes_read])?;
                }
            }
            ReadingStrategy::Complete => {
                let mut buffer = Vec::new();
                reader.read_to_end(&mut buffer)?;
                calculator.absorb(&buffer)?;
            }
            ReadingStrategy::MemoryMapped => {
                calculator.absorb(reader.mmap().map_err(Into::<E>::into)?)?;
            }
            ReadingStrategy::Scenario(..) => {
                return Err(E::NestedScenarioStrategy);
            }
        }
        debug!(
            "{}: absorbed {} bytes ({strategy:?}) in {}µs / {}ms / {}s",
            path.display(),
            calculator.absorbed(),
            now.elapsed().as_micros(),
            now.elapsed().as_millis(),
            now.elapsed().as_secs()
        );
        Ok(calculator)
    }
}
